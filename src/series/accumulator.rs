//! Series Accumulator - incremental, single-writer series builder

use super::{IterationResult, Series};
use crate::{Error, Result};

/// Owns the growing [`Series`] during a run.
///
/// Appends are amortized O(1): each iteration pushes one value per arm
/// instead of rebuilding the history.
#[derive(Debug, Default)]
pub struct SeriesAccumulator {
    series: Series,
}

impl SeriesAccumulator {
    /// Create an empty accumulator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an accumulator with room for `iterations` results.
    #[must_use]
    pub fn with_capacity(iterations: usize) -> Self {
        Self {
            series: Series::with_capacity(iterations),
        }
    }

    /// Append the next iteration.
    ///
    /// # Errors
    /// Returns `OutOfOrder` unless `result.index()` equals the current length.
    pub fn append(&mut self, result: IterationResult) -> Result<()> {
        let expected = self.series.len();
        if result.index() != expected {
            return Err(Error::OutOfOrder {
                expected,
                actual: result.index(),
            });
        }
        self.series.push(result);
        Ok(())
    }

    /// Read-only view of everything appended so far.
    #[must_use]
    pub const fn snapshot(&self) -> &Series {
        &self.series
    }

    /// Number of appended iterations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.series.len()
    }

    /// Whether nothing has been appended.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Take ownership of the accumulated series.
    #[must_use]
    pub fn into_series(self) -> Series {
        self.series
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_in_order() {
        let mut acc = SeriesAccumulator::with_capacity(3);
        for i in 0..3 {
            acc.append(IterationResult::new(i, Some(0.5), Some(0.5))).unwrap();
        }
        assert_eq!(acc.len(), 3);
        assert_eq!(acc.snapshot().latest().map(|r| r.index()), Some(2));
    }

    #[test]
    fn test_append_rejects_repeat_index() {
        let mut acc = SeriesAccumulator::new();
        acc.append(IterationResult::new(0, Some(0.1), Some(0.2))).unwrap();
        let err = acc.append(IterationResult::new(0, Some(0.1), Some(0.2))).unwrap_err();
        assert!(matches!(err, Error::OutOfOrder { expected: 1, actual: 0 }));
        assert_eq!(acc.len(), 1);
    }

    #[test]
    fn test_undefined_rates_preserved() {
        let mut acc = SeriesAccumulator::new();
        acc.append(IterationResult::new(0, None, None)).unwrap();
        let series = acc.into_series();
        assert_eq!(series.get(0), Some(IterationResult::new(0, None, None)));
    }
}
