//! Error types for ab-convergence
//!
//! Configuration problems are caught before a run starts; a valid
//! configuration has no fatal error path.

use thiserror::Error;

use crate::trial::Arm;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// ab-convergence error types
#[derive(Error, Debug)]
pub enum Error {
    /// True conversion rate outside [0, 1] (or NaN)
    #[error("Invalid configuration: true rate for arm {arm} must be within [0, 1], got {value}")]
    InvalidRate {
        /// Arm whose rate was rejected
        arm: Arm,
        /// Offending value
        value: f64,
    },

    /// Integer setting above its configured bound
    #[error("Invalid configuration: {field} = {value} exceeds maximum of {max}")]
    OutOfRange {
        /// Name of the setting
        field: &'static str,
        /// Offending value
        value: u32,
        /// Inclusive upper bound
        max: u32,
    },

    /// Series append that would leave a gap or repeat an index
    #[error("Series append out of order: expected index {expected}, got {actual}")]
    OutOfOrder {
        /// Next index the series accepts
        expected: usize,
        /// Index that was offered
        actual: usize,
    },

    /// Configuration could not be parsed (includes negative counts and unknown keys)
    #[error("Config parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Whether this error means the configuration was rejected.
    #[must_use]
    pub const fn is_invalid_configuration(&self) -> bool {
        matches!(
            self,
            Self::InvalidRate { .. } | Self::OutOfRange { .. } | Self::ConfigParse(_)
        )
    }
}
