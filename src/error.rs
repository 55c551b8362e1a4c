//! Error types for the sort benchmark

use thiserror::Error;

use crate::bench::sequence::Strategy;

/// Every failure the benchmark can report.
#[derive(Debug, Error)]
pub enum BenchError {
    /// Configuration values that cannot drive a sweep
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Reading or writing a config file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file is not valid TOML for `BenchConfig`
    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Config serialize error: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A sequence broke its length or ordering invariant after a fill
    #[error("Verification failed for {strategy} at N = {n}: {reason}")]
    Verification {
        strategy: Strategy,
        n: usize,
        reason: String,
    },
}

/// Result type alias for benchmark operations.
pub type BenchResult<T> = Result<T, BenchError>;
