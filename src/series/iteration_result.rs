//! Iteration Result - one point of the convergence series

use serde::{Deserialize, Serialize};

use crate::trial::Arm;

/// Empirical rates for both arms after one iteration.
///
/// A rate is `None` when the iteration drew no trials for that arm.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IterationResult {
    index: usize,
    empirical_rate_a: Option<f64>,
    empirical_rate_b: Option<f64>,
}

impl IterationResult {
    /// Create a result for iteration `index` (0-based).
    #[must_use]
    pub const fn new(
        index: usize,
        empirical_rate_a: Option<f64>,
        empirical_rate_b: Option<f64>,
    ) -> Self {
        Self {
            index,
            empirical_rate_a,
            empirical_rate_b,
        }
    }

    /// 0-based iteration number.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Empirical rate for design A.
    #[must_use]
    pub const fn empirical_rate_a(&self) -> Option<f64> {
        self.empirical_rate_a
    }

    /// Empirical rate for design B.
    #[must_use]
    pub const fn empirical_rate_b(&self) -> Option<f64> {
        self.empirical_rate_b
    }

    /// Empirical rate for `arm`.
    #[must_use]
    pub const fn empirical_rate(&self, arm: Arm) -> Option<f64> {
        match arm {
            Arm::A => self.empirical_rate_a,
            Arm::B => self.empirical_rate_b,
        }
    }
}
