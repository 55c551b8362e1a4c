//! Output formats: the fixed-width text table and a JSON document

use serde::Serialize;

use super::metrics::SweepSummary;
use super::runner::SizeMeasurement;
use super::sequence::Strategy;
use crate::core::config::BenchConfig;
use crate::error::BenchResult;

pub const TITLE: &str = "time (milliseconds) to store-sort a random int N times:";

/// Marker printed between the two timing columns.
pub const SEPARATOR: &str = "VS";

/// Right-aligns every cell in `width` columns.
#[derive(Debug, Clone, Copy)]
pub struct TableFormatter {
    width: usize,
}

impl TableFormatter {
    pub fn new(width: usize) -> Self {
        Self { width }
    }

    pub fn title(&self) -> &'static str {
        TITLE
    }

    /// Column header line. The labels read list then vector, as in the
    /// original table, although rows print the vector time first.
    pub fn header(&self) -> String {
        let w = self.width;
        format!(
            "{blank:w$}{list:>w$}{blank:w$}{vect:>w$}",
            blank = "",
            list = Strategy::List.label(),
            vect = Strategy::Vector.label(),
        )
    }

    pub fn row(&self, m: &SizeMeasurement) -> String {
        let w = self.width;
        format!(
            "{label:>w$}{vector:>w$}{sep:>w$}{list:>w$}",
            label = format!("N : {}", m.n),
            vector = m.vector_ms,
            sep = SEPARATOR,
            list = m.list_ms,
        )
    }

    /// Title, header and one line per measurement.
    pub fn render(&self, measurements: &[SizeMeasurement]) -> String {
        let mut out = String::new();
        out.push_str(self.title());
        out.push('\n');
        out.push_str(&self.header());
        out.push('\n');
        for m in measurements {
            out.push_str(&self.row(m));
            out.push('\n');
        }
        out
    }
}

/// Machine-readable result of a full sweep.
#[derive(Debug, Clone, Serialize)]
pub struct SweepReport {
    pub generated_at: String,
    pub config: BenchConfig,
    pub measurements: Vec<SizeMeasurement>,
    pub summary: SweepSummary,
}

impl SweepReport {
    pub fn new(config: BenchConfig, measurements: Vec<SizeMeasurement>) -> Self {
        let summary = SweepSummary::from_measurements(&measurements);
        Self {
            generated_at: chrono::Utc::now().to_rfc3339(),
            config,
            measurements,
            summary,
        }
    }

    pub fn to_json(&self) -> BenchResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
