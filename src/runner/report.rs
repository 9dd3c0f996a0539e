//! Run Report - terminal state and output of one run

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::series::Series;

/// Lifecycle state of a paced run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunState {
    /// Configured, no trials drawn.
    Idle,
    /// Iterating.
    Running,
    /// Every configured iteration finished.
    Completed,
    /// Stopped early by a cancellation request; partial results kept.
    Cancelled,
}

impl RunState {
    /// Whether no further iterations will happen.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }
}

/// Outcome of [`PacedRunner::run`](super::PacedRunner::run).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RunReport {
    state: RunState,
    series: Series,
    started_at: Option<DateTime<Utc>>,
    ended_at: Option<DateTime<Utc>>,
}

impl RunReport {
    /// Report for a run that never started (auto-run disabled).
    #[must_use]
    pub fn idle() -> Self {
        Self {
            state: RunState::Idle,
            series: Series::new(),
            started_at: None,
            ended_at: None,
        }
    }

    pub(super) fn finished(
        state: RunState,
        series: Series,
        started_at: DateTime<Utc>,
        ended_at: DateTime<Utc>,
    ) -> Self {
        Self {
            state,
            series,
            started_at: Some(started_at),
            ended_at: Some(ended_at),
        }
    }

    /// Final state: `Idle`, `Completed` or `Cancelled`.
    #[must_use]
    pub const fn state(&self) -> RunState {
        self.state
    }

    /// Series accumulated before the run ended.
    #[must_use]
    pub const fn series(&self) -> &Series {
        &self.series
    }

    /// Take ownership of the series.
    #[must_use]
    pub fn into_series(self) -> Series {
        self.series
    }

    /// Number of iterations that finished.
    #[must_use]
    pub fn iterations_completed(&self) -> usize {
        self.series.len()
    }

    /// When the loop started, if it ran.
    #[must_use]
    pub const fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }

    /// When the loop stopped, if it ran.
    #[must_use]
    pub const fn ended_at(&self) -> Option<DateTime<Utc>> {
        self.ended_at
    }
}
