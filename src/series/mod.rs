//! Per-iteration rate history for both arms
//!
//! ## Layout
//!
//! ```text
//! Series
//!   rates_a: [r0, r1, r2, ...]   ─┐ position == iteration index
//!   rates_b: [r0, r1, r2, ...]   ─┘ (no stored index, so no gaps)
//! ```
//!
//! [`SeriesAccumulator`] is the single writer; sinks only ever see `&Series`.

mod accumulator;
mod iteration_result;

pub use accumulator::SeriesAccumulator;
pub use iteration_result::IterationResult;

use serde::{Deserialize, Serialize};

use crate::trial::Arm;
use crate::Error;

/// Ordered, append-only history of empirical rates.
///
/// Serializes as an array of [`IterationResult`] in index order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<IterationResult>", into = "Vec<IterationResult>")]
pub struct Series {
    rates_a: Vec<Option<f64>>,
    rates_b: Vec<Option<f64>>,
}

impl Series {
    /// Create an empty series.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty series with room for `capacity` iterations.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            rates_a: Vec::with_capacity(capacity),
            rates_b: Vec::with_capacity(capacity),
        }
    }

    /// Number of completed iterations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rates_a.len()
    }

    /// Whether no iteration has completed yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rates_a.is_empty()
    }

    /// Result for iteration `index`, if it has completed.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<IterationResult> {
        let rate_a = *self.rates_a.get(index)?;
        let rate_b = *self.rates_b.get(index)?;
        Some(IterationResult::new(index, rate_a, rate_b))
    }

    /// Most recent iteration.
    #[must_use]
    pub fn latest(&self) -> Option<IterationResult> {
        self.len().checked_sub(1).and_then(|index| self.get(index))
    }

    /// Iterate results in index order.
    pub fn iter(&self) -> impl Iterator<Item = IterationResult> + '_ {
        self.rates_a
            .iter()
            .zip(&self.rates_b)
            .enumerate()
            .map(|(index, (&rate_a, &rate_b))| IterationResult::new(index, rate_a, rate_b))
    }

    /// Rate history for one arm, indexed by iteration.
    #[must_use]
    pub fn rates(&self, arm: Arm) -> &[Option<f64>] {
        match arm {
            Arm::A => &self.rates_a,
            Arm::B => &self.rates_b,
        }
    }

    /// Average of the defined rates for `arm`.
    ///
    /// Undefined iterations (empty samples) are skipped. Returns `None` when
    /// no iteration has a defined rate.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn mean_rate(&self, arm: Arm) -> Option<f64> {
        let (sum, count) = self
            .rates(arm)
            .iter()
            .flatten()
            .fold((0.0, 0usize), |(sum, count), rate| (sum + rate, count + 1));
        (count > 0).then(|| sum / count as f64)
    }

    fn push(&mut self, result: IterationResult) {
        self.rates_a.push(result.empirical_rate_a());
        self.rates_b.push(result.empirical_rate_b());
    }
}

impl TryFrom<Vec<IterationResult>> for Series {
    type Error = Error;

    fn try_from(results: Vec<IterationResult>) -> Result<Self, Self::Error> {
        let mut series = Self::with_capacity(results.len());
        for result in results {
            if result.index() != series.len() {
                return Err(Error::OutOfOrder {
                    expected: series.len(),
                    actual: result.index(),
                });
            }
            series.push(result);
        }
        Ok(series)
    }
}

impl From<Series> for Vec<IterationResult> {
    fn from(series: Series) -> Self {
        series.iter().collect()
    }
}
