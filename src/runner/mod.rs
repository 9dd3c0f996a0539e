//! Paced iteration loop
//!
//! ```text
//! Idle ──run()──> Running ──all iterations──> Completed
//!                    │
//!                    └──cancel requested──> Cancelled (partial series kept)
//! ```
//!
//! Each iteration draws arm A then arm B, estimates both rates, appends one
//! [`IterationResult`], emits the snapshot and sleeps before the next one.
//! Everything runs on the caller's thread; iteration `i` finishes before
//! iteration `i + 1` starts.
//!
//! # Example
//!
//! ```rust
//! use ab_convergence::config::ExperimentConfig;
//! use ab_convergence::runner::{PacedRunner, Pacing, RunState};
//! use ab_convergence::sink::CollectingSink;
//!
//! let config = ExperimentConfig::builder()
//!     .iteration_count(5)
//!     .auto_run(true)
//!     .seed(7)
//!     .build()?;
//!
//! let mut sink = CollectingSink::new();
//! let report = PacedRunner::from_config(config, &mut sink)?
//!     .with_pacing(Pacing::Disabled)
//!     .run()?;
//!
//! assert_eq!(report.state(), RunState::Completed);
//! assert_eq!(report.iterations_completed(), 5);
//! assert_eq!(sink.emission_count(), 5);
//! # Ok::<(), ab_convergence::Error>(())
//! ```

mod cancel;
mod pacing;
mod report;

pub use cancel::CancellationToken;
pub use pacing::{adaptive_interval, Pacing, ADAPTIVE_THRESHOLD, SHORT_RUN_INTERVAL};
pub use report::{RunReport, RunState};

use std::thread;

use chrono::Utc;
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use crate::config::ExperimentConfig;
use crate::estimator::ConversionEstimator;
use crate::series::{IterationResult, SeriesAccumulator};
use crate::sink::ResultSink;
use crate::trial::{Arm, TrialGenerator};
use crate::Result;

/// Drives a two-arm experiment iteration by iteration.
///
/// Single-shot: [`run`](Self::run) consumes the runner.
pub struct PacedRunner<R, S> {
    config: ExperimentConfig,
    generator: TrialGenerator<R>,
    sink: S,
    pacing: Pacing,
    cancel: CancellationToken,
}

impl<R: Rng, S: ResultSink> PacedRunner<R, S> {
    /// Build a runner around an injected random source.
    ///
    /// # Errors
    /// Returns `InvalidRate` or `OutOfRange` if `config` fails validation;
    /// nothing is drawn in that case.
    pub fn new(config: ExperimentConfig, rng: R, sink: S) -> Result<Self> {
        Self::with_generator(config, TrialGenerator::new(rng), sink)
    }

    fn with_generator(
        config: ExperimentConfig,
        generator: TrialGenerator<R>,
        sink: S,
    ) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            generator,
            sink,
            pacing: Pacing::default(),
            cancel: CancellationToken::new(),
        })
    }

    /// Override the pause between iterations.
    #[must_use]
    pub fn with_pacing(mut self, pacing: Pacing) -> Self {
        self.pacing = pacing;
        self
    }

    /// Share an existing cancellation token with this runner.
    #[must_use]
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = token;
        self
    }

    /// Handle that cancels this runner.
    #[must_use]
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// Configuration this runner executes.
    #[must_use]
    pub const fn config(&self) -> &ExperimentConfig {
        &self.config
    }

    /// Execute the loop.
    ///
    /// With auto-run disabled this returns an `Idle` report without drawing
    /// a trial or calling the sink. A zero iteration count completes
    /// immediately with an empty series.
    ///
    /// # Errors
    /// Returns `OutOfOrder` if the series rejects an append, which indicates
    /// a bug rather than a user error.
    pub fn run(mut self) -> Result<RunReport> {
        if !self.config.auto_run() {
            info!("auto-run disabled, not starting");
            return Ok(RunReport::idle());
        }

        let iterations = self.config.iteration_count() as usize;
        let sample_size = self.config.sample_size() as usize;
        let interval = self.pacing.interval(self.config.iteration_count());
        let mut accumulator = SeriesAccumulator::with_capacity(iterations);
        let started_at = Utc::now();

        info!(
            iterations,
            sample_size,
            true_rate_a = self.config.true_rate_a(),
            true_rate_b = self.config.true_rate_b(),
            ?interval,
            "run started"
        );

        let mut state = RunState::Running;
        for index in 0..iterations {
            if self.cancel.is_cancelled() {
                state = RunState::Cancelled;
                info!(completed = index, "run cancelled");
                break;
            }

            let result = self.iterate(index, sample_size);
            debug!(
                index,
                rate_a = ?result.empirical_rate_a(),
                rate_b = ?result.empirical_rate_b(),
                "iteration estimated"
            );
            accumulator.append(result)?;
            self.sink.emit(accumulator.snapshot());

            if index + 1 < iterations && !interval.is_zero() {
                thread::sleep(interval);
            }
        }
        if state == RunState::Running {
            state = RunState::Completed;
        }

        let series = accumulator.into_series();
        info!(
            ?state,
            iterations_completed = series.len(),
            mean_rate_a = ?series.mean_rate(Arm::A),
            mean_rate_b = ?series.mean_rate(Arm::B),
            "run finished"
        );
        Ok(RunReport::finished(state, series, started_at, Utc::now()))
    }

    fn iterate(&mut self, index: usize, sample_size: usize) -> IterationResult {
        let outcomes_a = self.generator.draw(sample_size, self.config.true_rate(Arm::A));
        let outcomes_b = self.generator.draw(sample_size, self.config.true_rate(Arm::B));
        IterationResult::new(
            index,
            ConversionEstimator::estimate(&outcomes_a),
            ConversionEstimator::estimate(&outcomes_b),
        )
    }
}

impl<S: ResultSink> PacedRunner<ChaCha8Rng, S> {
    /// Build a runner whose random source follows `config.seed()`:
    /// seeded when set, OS entropy otherwise.
    ///
    /// # Errors
    /// Returns `InvalidRate` or `OutOfRange` if `config` fails validation.
    pub fn from_config(config: ExperimentConfig, sink: S) -> Result<Self> {
        let generator = match config.seed() {
            Some(seed) => TrialGenerator::seeded(seed),
            None => TrialGenerator::from_entropy(),
        };
        Self::with_generator(config, generator, sink)
    }
}
