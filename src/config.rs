//! Experiment configuration
//!
//! Loaded from JSON or assembled with [`ExperimentConfigBuilder`]. Either
//! path validates before handing out a config, so a runner never sees an
//! out-of-bounds rate or count.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::trial::Arm;
use crate::{Error, Result};

/// Upper bound on trials per arm per iteration
pub const MAX_SAMPLE_SIZE: u32 = 1000;

/// Upper bound on iterations per run
pub const MAX_ITERATION_COUNT: u32 = 1000;

/// Default true conversion rate for design A
pub const DEFAULT_TRUE_RATE_A: f64 = 0.41;

/// Default true conversion rate for design B
pub const DEFAULT_TRUE_RATE_B: f64 = 0.48;

/// Default trials per arm per iteration
pub const DEFAULT_SAMPLE_SIZE: u32 = 100;

/// Default iterations per run
pub const DEFAULT_ITERATION_COUNT: u32 = 10;

/// Settings for one simulated experiment run.
///
/// Immutable once built; the runner holds it for the whole run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExperimentConfig {
    true_rate_a: f64,
    true_rate_b: f64,
    sample_size: u32,
    iteration_count: u32,
    auto_run: bool,
    seed: Option<u64>,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            true_rate_a: DEFAULT_TRUE_RATE_A,
            true_rate_b: DEFAULT_TRUE_RATE_B,
            sample_size: DEFAULT_SAMPLE_SIZE,
            iteration_count: DEFAULT_ITERATION_COUNT,
            auto_run: false,
            seed: None,
        }
    }
}

impl ExperimentConfig {
    /// Create a builder starting from the defaults.
    #[must_use]
    pub fn builder() -> ExperimentConfigBuilder {
        ExperimentConfigBuilder::default()
    }

    /// Parse and validate a JSON document. Missing fields take defaults;
    /// unknown keys are rejected.
    ///
    /// # Errors
    /// Returns `ConfigParse` for malformed JSON (including negative counts
    /// and unrecognised keys) and `InvalidRate` / `OutOfRange` for values
    /// outside their bounds.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file.
    ///
    /// # Errors
    /// Returns `Io` if the file cannot be read, otherwise as [`Self::from_json_str`].
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&contents)
    }

    /// Check every field against its bounds.
    ///
    /// # Errors
    /// Returns the first violated bound.
    pub fn validate(&self) -> Result<()> {
        for arm in Arm::ALL {
            let value = self.true_rate(arm);
            if !(0.0..=1.0).contains(&value) {
                return Err(Error::InvalidRate { arm, value });
            }
        }
        if self.sample_size > MAX_SAMPLE_SIZE {
            return Err(Error::OutOfRange {
                field: "sample_size",
                value: self.sample_size,
                max: MAX_SAMPLE_SIZE,
            });
        }
        if self.iteration_count > MAX_ITERATION_COUNT {
            return Err(Error::OutOfRange {
                field: "iteration_count",
                value: self.iteration_count,
                max: MAX_ITERATION_COUNT,
            });
        }
        Ok(())
    }

    /// True conversion rate for `arm`.
    #[must_use]
    pub const fn true_rate(&self, arm: Arm) -> f64 {
        match arm {
            Arm::A => self.true_rate_a,
            Arm::B => self.true_rate_b,
        }
    }

    /// True conversion rate for design A.
    #[must_use]
    pub const fn true_rate_a(&self) -> f64 {
        self.true_rate_a
    }

    /// True conversion rate for design B.
    #[must_use]
    pub const fn true_rate_b(&self) -> f64 {
        self.true_rate_b
    }

    /// Trials per arm per iteration.
    #[must_use]
    pub const fn sample_size(&self) -> u32 {
        self.sample_size
    }

    /// Number of iterations in a run.
    #[must_use]
    pub const fn iteration_count(&self) -> u32 {
        self.iteration_count
    }

    /// Whether the run loop executes at all.
    #[must_use]
    pub const fn auto_run(&self) -> bool {
        self.auto_run
    }

    /// Fixed RNG seed, if the run should be reproducible.
    #[must_use]
    pub const fn seed(&self) -> Option<u64> {
        self.seed
    }
}

/// Builder for `ExperimentConfig`.
#[derive(Debug, Default)]
pub struct ExperimentConfigBuilder {
    config: ExperimentConfig,
}

impl ExperimentConfigBuilder {
    /// Set the true conversion rate for design A.
    #[must_use]
    pub const fn true_rate_a(mut self, rate: f64) -> Self {
        self.config.true_rate_a = rate;
        self
    }

    /// Set the true conversion rate for design B.
    #[must_use]
    pub const fn true_rate_b(mut self, rate: f64) -> Self {
        self.config.true_rate_b = rate;
        self
    }

    /// Set trials per arm per iteration.
    #[must_use]
    pub const fn sample_size(mut self, sample_size: u32) -> Self {
        self.config.sample_size = sample_size;
        self
    }

    /// Set the number of iterations.
    #[must_use]
    pub const fn iteration_count(mut self, iteration_count: u32) -> Self {
        self.config.iteration_count = iteration_count;
        self
    }

    /// Enable or disable the run loop.
    #[must_use]
    pub const fn auto_run(mut self, auto_run: bool) -> Self {
        self.config.auto_run = auto_run;
        self
    }

    /// Fix the RNG seed.
    #[must_use]
    pub const fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// Validate and build the `ExperimentConfig`.
    ///
    /// # Errors
    /// Returns `InvalidRate` or `OutOfRange` for out-of-bounds settings.
    pub fn build(self) -> Result<ExperimentConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ExperimentConfig::default();
        assert!((config.true_rate_a() - 0.41).abs() < f64::EPSILON);
        assert!((config.true_rate_b() - 0.48).abs() < f64::EPSILON);
        assert_eq!(config.sample_size(), 100);
        assert_eq!(config.iteration_count(), 10);
        assert!(!config.auto_run());
        assert!(config.seed().is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_rejects_rate_above_one() {
        let err = ExperimentConfig::builder().true_rate_b(1.01).build().unwrap_err();
        assert!(matches!(err, Error::InvalidRate { arm: Arm::B, .. }));
    }

    #[test]
    fn test_builder_rejects_nan_rate() {
        let err = ExperimentConfig::builder().true_rate_a(f64::NAN).build().unwrap_err();
        assert!(matches!(err, Error::InvalidRate { arm: Arm::A, .. }));
    }

    #[test]
    fn test_boundary_values_accepted() {
        let config = ExperimentConfig::builder()
            .true_rate_a(0.0)
            .true_rate_b(1.0)
            .sample_size(MAX_SAMPLE_SIZE)
            .iteration_count(MAX_ITERATION_COUNT)
            .build();
        assert!(config.is_ok());
    }

    #[test]
    fn test_json_missing_fields_take_defaults() {
        let config = ExperimentConfig::from_json_str(r#"{"sample_size": 50}"#).unwrap();
        assert_eq!(config.sample_size(), 50);
        assert_eq!(config.iteration_count(), DEFAULT_ITERATION_COUNT);
    }

    #[test]
    fn test_json_unknown_key_rejected() {
        let err = ExperimentConfig::from_json_str(r#"{"sampel_size": 5}"#).unwrap_err();
        assert!(matches!(err, Error::ConfigParse(_)));
    }

    #[test]
    fn test_json_negative_count_rejected() {
        let err = ExperimentConfig::from_json_str(r#"{"iteration_count": -1}"#).unwrap_err();
        assert!(matches!(err, Error::ConfigParse(_)));
        assert!(err.is_invalid_configuration());
    }
}
