//! Reduces trial outcomes to an empirical conversion rate

/// Converts a batch of binary outcomes into an empirical conversion rate.
///
/// The mean of an empty batch is undefined and is reported as `None`
/// rather than 0 or NaN.
pub struct ConversionEstimator {
    _private: (),
}

impl ConversionEstimator {
    /// Arithmetic mean of `outcomes` (`true` counts as 1).
    ///
    /// # Returns
    /// `None` for an empty batch, otherwise a rate in [0, 1].
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn estimate(outcomes: &[bool]) -> Option<f64> {
        if outcomes.is_empty() {
            return None;
        }
        let conversions = outcomes.iter().filter(|&&converted| converted).count();
        Some(conversions as f64 / outcomes.len() as f64)
    }
}
