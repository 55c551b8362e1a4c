//! Benchmark runner: one timed insert-and-resort fill per strategy per size

use serde::Serialize;
use std::time::{Duration, Instant};
use tracing::{debug, info, trace};

use crate::bench::sequence::{ListSequence, SortedSequence, Strategy, VecSequence};
use crate::core::config::BenchConfig;
use crate::core::rng::IntSource;
use crate::error::{BenchError, BenchResult};

/// Timings for one problem size.
///
/// Milliseconds are truncated; microseconds are kept for summaries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SizeMeasurement {
    pub n: usize,
    pub vector_ms: u64,
    pub list_ms: u64,
    pub vector_us: u64,
    pub list_us: u64,
}

impl SizeMeasurement {
    pub fn new(n: usize, vector: Duration, list: Duration) -> Self {
        Self {
            n,
            vector_ms: vector.as_millis() as u64,
            list_ms: list.as_millis() as u64,
            vector_us: vector.as_micros() as u64,
            list_us: list.as_micros() as u64,
        }
    }

    pub fn millis(&self, strategy: Strategy) -> u64 {
        match strategy {
            Strategy::Vector => self.vector_ms,
            Strategy::List => self.list_ms,
        }
    }

    /// Strategy with the lower elapsed time; the vector wins ties.
    pub fn faster(&self) -> Strategy {
        if self.list_us < self.vector_us {
            Strategy::List
        } else {
            Strategy::Vector
        }
    }
}

/// Insert `n` random values into `seq`, re-sorting after each one, and
/// return the elapsed wall time.
pub fn fill_and_sort<S, R>(seq: &mut S, n: usize, source: &mut R, min: i32, max: i32) -> Duration
where
    S: SortedSequence,
    R: IntSource + ?Sized,
{
    let start = Instant::now();
    for _ in 0..n {
        seq.insert_and_resort(source.next_in(min, max));
    }
    start.elapsed()
}

/// Drives the size sweep described by a `BenchConfig`.
pub struct SweepRunner<R: IntSource> {
    config: BenchConfig,
    source: R,
}

impl<R: IntSource> SweepRunner<R> {
    pub fn new(config: BenchConfig, source: R) -> BenchResult<Self> {
        config.validate()?;
        Ok(Self { config, source })
    }

    pub fn config(&self) -> &BenchConfig {
        &self.config
    }

    /// Measure both strategies at size `n`: vector first, then list,
    /// drawing from the same source.
    pub fn measure_size(&mut self, n: usize) -> BenchResult<SizeMeasurement> {
        let vector = self.measure_strategy::<VecSequence>(n)?;
        let list = self.measure_strategy::<ListSequence>(n)?;
        let measurement = SizeMeasurement::new(n, vector, list);
        debug!(
            n,
            vector_ms = measurement.vector_ms,
            list_ms = measurement.list_ms,
            "measured size"
        );
        Ok(measurement)
    }

    fn measure_strategy<S: SortedSequence>(&mut self, n: usize) -> BenchResult<Duration> {
        let (min, max) = (self.config.min_value, self.config.max_value);
        let mut seq = S::default();
        let elapsed = fill_and_sort(&mut seq, n, &mut self.source, min, max);
        let strategy = S::STRATEGY;
        trace!(%strategy, n, elapsed_us = elapsed.as_micros() as u64, "fill complete");

        if self.config.verify {
            verify_sequence(&seq, n)?;
        }
        Ok(elapsed)
    }

    fn warmup(&mut self) {
        if self.config.warmup == 0 {
            return;
        }
        let n = self.config.initial;
        let (min, max) = (self.config.min_value, self.config.max_value);
        debug!(rounds = self.config.warmup, n, "warming up");
        for _ in 0..self.config.warmup {
            fill_and_sort(&mut VecSequence::default(), n, &mut self.source, min, max);
            fill_and_sort(&mut ListSequence::default(), n, &mut self.source, min, max);
        }
    }

    /// Run the whole sweep, calling `on_row` as soon as each size is measured.
    pub fn run_with<F>(&mut self, mut on_row: F) -> BenchResult<Vec<SizeMeasurement>>
    where
        F: FnMut(&SizeMeasurement),
    {
        let sizes: Vec<usize> = self.config.sizes().collect();
        info!(
            sizes = sizes.len(),
            initial = self.config.initial,
            nmax = self.config.nmax,
            interval = self.config.interval,
            "Starting sweep"
        );

        self.warmup();

        let mut results = Vec::with_capacity(sizes.len());
        for n in sizes {
            let measurement = self.measure_size(n)?;
            on_row(&measurement);
            results.push(measurement);
        }
        Ok(results)
    }

    pub fn run(&mut self) -> BenchResult<Vec<SizeMeasurement>> {
        self.run_with(|_| {})
    }
}

fn verify_sequence<S: SortedSequence>(seq: &S, n: usize) -> BenchResult<()> {
    if seq.len() != n {
        return Err(BenchError::Verification {
            strategy: S::STRATEGY,
            n,
            reason: format!("expected {} elements, found {}", n, seq.len()),
        });
    }
    if !seq.is_sorted() {
        return Err(BenchError::Verification {
            strategy: S::STRATEGY,
            n,
            reason: "sequence is not in non-decreasing order".into(),
        });
    }
    Ok(())
}
