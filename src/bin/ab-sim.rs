//! Operator CLI for watching empirical conversion rates converge.
//!
//! # Usage
//!
//! ```bash
//! # Defaults (A = 0.41, B = 0.48, 100 samples, 10 iterations), logged to stderr
//! cargo run --bin ab-sim -- --auto-run
//!
//! # Reproducible run, snapshots as JSON lines on stdout
//! cargo run --bin ab-sim -- --auto-run --seed 7 --samples 1000 --iterations 50 --format json
//!
//! # Start from a config file, override one value
//! cargo run --bin ab-sim -- --config experiment.json --rate-b 0.55
//! ```

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use ab_convergence::config::ExperimentConfig;
use ab_convergence::runner::{PacedRunner, Pacing, RunReport};
use ab_convergence::sink::{JsonLinesSink, ResultSink, TracingSink};
use ab_convergence::trial::Arm;

/// Where each series snapshot goes
#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Log the newest point of each snapshot
    Log,
    /// Print every snapshot as a JSON line on stdout
    Json,
}

/// Simulate a paced two-arm conversion experiment
#[derive(Parser, Debug)]
#[command(name = "ab-sim")]
#[command(about = "Watch empirical conversion rates converge toward the true rates")]
#[command(version)]
struct Args {
    /// JSON config file; flags below override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// True conversion rate for design A, in [0, 1]
    #[arg(long)]
    rate_a: Option<f64>,

    /// True conversion rate for design B, in [0, 1]
    #[arg(long)]
    rate_b: Option<f64>,

    /// Trials per arm per iteration (0-1000)
    #[arg(short, long)]
    samples: Option<u32>,

    /// Number of iterations (0-1000)
    #[arg(short, long)]
    iterations: Option<u32>,

    /// Fixed RNG seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Run the loop; without this the simulator stays idle
    #[arg(long)]
    auto_run: bool,

    /// Skip the pause between iterations
    #[arg(long)]
    no_pacing: bool,

    /// Snapshot output format
    #[arg(short, long, value_enum, default_value = "log")]
    format: OutputFormat,
}

impl Args {
    fn experiment_config(&self) -> anyhow::Result<ExperimentConfig> {
        let base = match &self.config {
            Some(path) => ExperimentConfig::from_path(path)
                .with_context(|| format!("loading config from {}", path.display()))?,
            None => ExperimentConfig::default(),
        };

        let mut builder = ExperimentConfig::builder()
            .true_rate_a(self.rate_a.unwrap_or(base.true_rate_a()))
            .true_rate_b(self.rate_b.unwrap_or(base.true_rate_b()))
            .sample_size(self.samples.unwrap_or(base.sample_size()))
            .iteration_count(self.iterations.unwrap_or(base.iteration_count()))
            .auto_run(self.auto_run || base.auto_run());
        if let Some(seed) = self.seed.or(base.seed()) {
            builder = builder.seed(seed);
        }
        builder.build().context("invalid experiment configuration")
    }
}

fn run_with<S: ResultSink>(
    config: ExperimentConfig,
    sink: S,
    pacing: Pacing,
) -> anyhow::Result<RunReport> {
    Ok(PacedRunner::from_config(config, sink)?.with_pacing(pacing).run()?)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = args.experiment_config()?;
    let pacing = if args.no_pacing { Pacing::Disabled } else { Pacing::Adaptive };

    let report = match args.format {
        OutputFormat::Log => run_with(config, TracingSink::new(), pacing)?,
        OutputFormat::Json => {
            run_with(config, JsonLinesSink::new(std::io::stdout().lock()), pacing)?
        }
    };

    info!(
        state = ?report.state(),
        iterations = report.iterations_completed(),
        mean_rate_a = ?report.series().mean_rate(Arm::A),
        mean_rate_b = ?report.series().mean_rate(Arm::B),
        "summary"
    );
    Ok(())
}
