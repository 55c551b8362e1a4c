//! Configuration for the sort benchmark

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{BenchError, BenchResult};

/// Seed used when none is given; matches the default seed of a
/// default-constructed Mersenne Twister engine.
pub const DEFAULT_SEED: u64 = 5489;

/// Sweep configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchConfig {
    /// First problem size
    pub initial: usize,

    /// Exclusive upper bound on the problem size
    pub nmax: usize,

    /// Step between successive problem sizes
    pub interval: usize,

    /// Width of every cell in the text table
    pub column_width: usize,

    /// Inclusive lower bound of generated values
    pub min_value: i32,

    /// Inclusive upper bound of generated values
    pub max_value: i32,

    /// Seed for the value generator
    pub seed: u64,

    /// Discarded fill rounds of size `initial` per strategy before the sweep
    pub warmup: usize,

    /// Check length and order of both sequences after every size
    pub verify: bool,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            initial: 400,
            nmax: 2000,
            interval: 50,
            column_width: 10,
            min_value: i32::MIN,
            max_value: i32::MAX,
            seed: DEFAULT_SEED,
            warmup: 0,
            verify: false,
        }
    }
}

impl BenchConfig {
    /// Load config from TOML file
    pub fn load(path: &Path) -> BenchResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save config to TOML file
    pub fn save(&self, path: &Path) -> BenchResult<()> {
        let content = self.to_toml()?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn to_toml(&self) -> BenchResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Reject configurations that cannot drive a sweep.
    ///
    /// An empty sweep (`initial >= nmax`) is allowed.
    pub fn validate(&self) -> BenchResult<()> {
        if self.interval == 0 {
            return Err(BenchError::InvalidConfig(
                "interval must be greater than zero".into(),
            ));
        }
        if self.min_value > self.max_value {
            return Err(BenchError::InvalidConfig(format!(
                "min_value ({}) is greater than max_value ({})",
                self.min_value, self.max_value
            )));
        }
        Ok(())
    }

    /// Problem sizes of the sweep: `initial`, `initial + interval`, ... below `nmax`.
    ///
    /// Call `validate` first; a zero interval yields only `initial`.
    pub fn sizes(&self) -> impl Iterator<Item = usize> {
        (self.initial..self.nmax).step_by(self.interval.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!(
            "sortbench-{}-{}.toml",
            name,
            std::process::id()
        ))
    }

    #[test]
    fn test_defaults() {
        let config = BenchConfig::default();
        assert_eq!(config.initial, 400);
        assert_eq!(config.nmax, 2000);
        assert_eq!(config.interval, 50);
        assert_eq!(config.column_width, 10);
        assert_eq!(config.min_value, i32::MIN);
        assert_eq!(config.max_value, i32::MAX);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_sizes() {
        let config = BenchConfig {
            initial: 400,
            nmax: 500,
            interval: 50,
            ..Default::default()
        };
        assert_eq!(config.sizes().collect::<Vec<_>>(), vec![400, 450]);

        let default_sizes: Vec<_> = BenchConfig::default().sizes().collect();
        assert_eq!(default_sizes.len(), 32);
        assert_eq!(default_sizes.first(), Some(&400));
        assert_eq!(default_sizes.last(), Some(&1950));
    }

    #[test]
    fn test_empty_sweep_is_valid() {
        let config = BenchConfig {
            initial: 2000,
            nmax: 2000,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
        assert_eq!(config.sizes().count(), 0);
    }

    #[test]
    fn test_validate_rejects_zero_interval() {
        let config = BenchConfig {
            interval: 0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(BenchError::InvalidConfig(_))));
    }

    #[test]
    fn test_validate_rejects_inverted_range() {
        let config = BenchConfig {
            min_value: 5,
            max_value: -5,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(BenchError::InvalidConfig(_))));
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: BenchConfig = toml::from_str("initial = 0\nnmax = 100\n").unwrap();
        assert_eq!(config.initial, 0);
        assert_eq!(config.nmax, 100);
        assert_eq!(config.interval, 50);
        assert_eq!(config.seed, DEFAULT_SEED);
    }

    #[test]
    fn test_save_and_load() {
        let path = temp_path("roundtrip");
        let config = BenchConfig {
            initial: 10,
            nmax: 60,
            interval: 5,
            min_value: -5,
            max_value: 5,
            verify: true,
            ..Default::default()
        };
        config.save(&path).unwrap();
        let loaded = BenchConfig::load(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_missing_file() {
        let path = temp_path("does-not-exist");
        assert!(matches!(BenchConfig::load(&path), Err(BenchError::Io(_))));
    }

    #[test]
    fn test_load_bad_toml() {
        let path = temp_path("bad");
        std::fs::write(&path, "initial = \"many\"\n").unwrap();
        let result = BenchConfig::load(&path);
        std::fs::remove_file(&path).ok();
        assert!(matches!(result, Err(BenchError::ConfigParse(_))));
    }
}
