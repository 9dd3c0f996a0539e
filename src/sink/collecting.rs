//! Collecting Sink - keeps every snapshot in memory

use super::ResultSink;
use crate::series::Series;

/// Records each emitted snapshot in order.
#[derive(Debug, Default)]
pub struct CollectingSink {
    snapshots: Vec<Series>,
}

impl CollectingSink {
    /// Create an empty collector.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of times `emit` was called.
    #[must_use]
    pub fn emission_count(&self) -> usize {
        self.snapshots.len()
    }

    /// All snapshots, oldest first.
    #[must_use]
    pub fn snapshots(&self) -> &[Series] {
        &self.snapshots
    }

    /// The newest snapshot.
    #[must_use]
    pub fn last(&self) -> Option<&Series> {
        self.snapshots.last()
    }
}

impl ResultSink for CollectingSink {
    fn emit(&mut self, series: &Series) {
        self.snapshots.push(series.clone());
    }
}
