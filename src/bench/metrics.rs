//! Sweep summary statistics

use serde::Serialize;

use super::runner::SizeMeasurement;
use super::sequence::Strategy;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SweepSummary {
    pub sizes_measured: usize,
    pub total_vector_ms: u64,
    pub total_list_ms: u64,
    /// Sizes at which the list finished first
    pub list_wins: usize,
    /// Smallest N from which the list is faster at every measured size
    pub crossover: Option<usize>,
    /// Mean of `list_us / vector_us` over sizes with a non-zero vector time
    pub mean_list_to_vector_ratio: f64,
}

impl SweepSummary {
    pub fn from_measurements(measurements: &[SizeMeasurement]) -> Self {
        let total_vector_ms = measurements.iter().map(|m| m.vector_ms).sum();
        let total_list_ms = measurements.iter().map(|m| m.list_ms).sum();
        let list_wins = measurements
            .iter()
            .filter(|m| m.faster() == Strategy::List)
            .count();

        let crossover = measurements
            .iter()
            .rev()
            .take_while(|m| m.faster() == Strategy::List)
            .last()
            .map(|m| m.n);

        let ratios: Vec<f64> = measurements
            .iter()
            .filter(|m| m.vector_us > 0)
            .map(|m| m.list_us as f64 / m.vector_us as f64)
            .collect();
        let mean_list_to_vector_ratio = if !ratios.is_empty() {
            ratios.iter().sum::<f64>() / ratios.len() as f64
        } else {
            0.0
        };

        Self {
            sizes_measured: measurements.len(),
            total_vector_ms,
            total_list_ms,
            list_wins,
            crossover,
            mean_list_to_vector_ratio,
        }
    }
}
