//! # ab-convergence: Paced A/B Conversion Simulator
//!
//! Simulates a two-arm experiment (design A vs. design B) where each arm has
//! a fixed true conversion probability, and produces the series of empirical
//! conversion rates as iterations accumulate. Watching the series shows how
//! sample estimates settle toward the true rates.
//!
//! ## Pipeline
//!
//! ```text
//! ExperimentConfig ─> PacedRunner ─┬─> TrialGenerator (arm A, arm B)
//!                                  ├─> ConversionEstimator
//!                                  ├─> SeriesAccumulator::append
//!                                  ├─> ResultSink::emit(&Series)
//!                                  └─> sleep (pacing), repeat
//! ```
//!
//! ## Example Usage
//!
//! ```rust
//! use ab_convergence::config::ExperimentConfig;
//! use ab_convergence::runner::{PacedRunner, Pacing};
//! use ab_convergence::sink::TracingSink;
//! use ab_convergence::trial::Arm;
//!
//! let config = ExperimentConfig::builder()
//!     .sample_size(1000)
//!     .iteration_count(10)
//!     .auto_run(true)
//!     .seed(2024)
//!     .build()?;
//!
//! let report = PacedRunner::from_config(config, TracingSink::new())?
//!     .with_pacing(Pacing::Disabled)
//!     .run()?;
//!
//! for point in report.series().iter() {
//!     println!(
//!         "{}: {:?} vs {:?}",
//!         point.index(),
//!         point.empirical_rate_a(),
//!         point.empirical_rate_b()
//!     );
//! }
//! assert!(report.series().mean_rate(Arm::A).is_some());
//! # Ok::<(), ab_convergence::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

pub mod config;
pub mod error;
pub mod estimator;
pub mod runner;
pub mod series;
pub mod sink;
pub mod trial;

pub use error::{Error, Result};
