//! Insert-and-resort benchmark
//!
//! - `sequence`: the vector and linked-list strategies
//! - `runner`: timed fills over the configured size sweep
//! - `metrics`: totals and the list/vector crossover
//! - `report`: text table and JSON output

pub mod metrics;
pub mod report;
pub mod runner;
pub mod sequence;

pub use metrics::SweepSummary;
pub use report::{SweepReport, TableFormatter};
pub use runner::{fill_and_sort, SizeMeasurement, SweepRunner};
pub use sequence::{ListSequence, SortedSequence, Strategy, VecSequence};
