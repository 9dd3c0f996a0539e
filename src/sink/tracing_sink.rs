//! Tracing Sink - logs the newest point of each snapshot

use tracing::info;

use super::ResultSink;
use crate::series::Series;

/// Emits one `info` event per snapshot describing its latest iteration.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink {
    _private: (),
}

impl TracingSink {
    /// Create a tracing sink.
    #[must_use]
    pub const fn new() -> Self {
        Self { _private: () }
    }
}

impl ResultSink for TracingSink {
    fn emit(&mut self, series: &Series) {
        let Some(latest) = series.latest() else {
            return;
        };
        info!(
            iteration = latest.index(),
            rate_a = ?latest.empirical_rate_a(),
            rate_b = ?latest.empirical_rate_b(),
            "iteration complete"
        );
    }
}
