//! Container Sort Benchmark
//!
//! Measures how long it takes to build a sorted sequence of random `i32`
//! values one insertion at a time, re-sorting the whole container after
//! every insertion, for two layouts:
//!
//! - **`Vec<i32>`**: contiguous storage, unstable in-place sort
//! - **`LinkedList<i32>`**: one allocation per node, stable merge sort that
//!   relinks nodes
//!
//! The sweep runs N from `initial` up to (but excluding) `nmax` in steps of
//! `interval` and reports whole elapsed milliseconds per strategy.
//!
//! ```no_run
//! use container_sortbench::{BenchConfig, SeededIntGenerator, SweepRunner};
//!
//! let config = BenchConfig::default();
//! let rng = SeededIntGenerator::new(config.seed);
//! let mut runner = SweepRunner::new(config, rng)?;
//! for row in runner.run()? {
//!     println!("N = {}: vector {} ms, list {} ms", row.n, row.vector_ms, row.list_ms);
//! }
//! # Ok::<(), container_sortbench::BenchError>(())
//! ```

pub mod bench;
pub mod core;
pub mod error;

// Re-exports
pub use bench::{
    fill_and_sort, ListSequence, SizeMeasurement, SortedSequence, Strategy, SweepReport,
    SweepRunner, SweepSummary, TableFormatter, VecSequence,
};
pub use crate::core::config::BenchConfig;
pub use crate::core::rng::{IntSource, SeededIntGenerator};
pub use error::{BenchError, BenchResult};
