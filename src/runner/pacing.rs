//! Pacing between iterations

use std::time::Duration;

/// Iteration counts below this use the fixed short pause.
pub const ADAPTIVE_THRESHOLD: u32 = 20;

/// Pause used for short runs.
pub const SHORT_RUN_INTERVAL: Duration = Duration::from_millis(50);

/// How long the runner waits between iterations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pacing {
    /// 50 ms for fewer than 20 iterations, else `1 / iteration_count` seconds,
    /// keeping the visible run around one second or less.
    #[default]
    Adaptive,
    /// Same pause after every iteration.
    Fixed(Duration),
    /// No pause.
    Disabled,
}

impl Pacing {
    /// Pause to apply between iterations of a run with `iteration_count` iterations.
    #[must_use]
    pub fn interval(self, iteration_count: u32) -> Duration {
        match self {
            Self::Adaptive => adaptive_interval(iteration_count),
            Self::Fixed(interval) => interval,
            Self::Disabled => Duration::ZERO,
        }
    }
}

/// The adaptive pacing policy.
#[must_use]
pub fn adaptive_interval(iteration_count: u32) -> Duration {
    if iteration_count < ADAPTIVE_THRESHOLD {
        SHORT_RUN_INTERVAL
    } else {
        Duration::from_secs_f64(1.0 / f64::from(iteration_count))
    }
}
