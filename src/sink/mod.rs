//! Result sinks: where each updated series snapshot goes
//!
//! The runner calls [`ResultSink::emit`] once per completed iteration with
//! the full series so far (snapshot semantics, not a diff). Sinks receive a
//! shared borrow and cannot mutate the series.
//!
//! # Example
//!
//! ```rust
//! use ab_convergence::sink::{FnSink, ResultSink};
//! use ab_convergence::series::Series;
//!
//! let mut seen = 0;
//! let mut sink = FnSink::new(|series: &Series| seen = series.len());
//! sink.emit(&Series::new());
//! drop(sink);
//! assert_eq!(seen, 0);
//! ```

mod collecting;
mod json_lines;
mod tracing_sink;

pub use collecting::CollectingSink;
pub use json_lines::JsonLinesSink;
pub use tracing_sink::TracingSink;

use crate::series::Series;

/// Consumer of series snapshots.
///
/// `emit` is a synchronous, fire-and-forget call on the runner's thread; it
/// must return promptly and handle its own failures.
pub trait ResultSink {
    /// Receive the series after an iteration has been appended.
    fn emit(&mut self, series: &Series);
}

impl<S: ResultSink + ?Sized> ResultSink for &mut S {
    fn emit(&mut self, series: &Series) {
        (**self).emit(series);
    }
}

impl<S: ResultSink + ?Sized> ResultSink for Box<S> {
    fn emit(&mut self, series: &Series) {
        (**self).emit(series);
    }
}

/// Adapts a closure into a [`ResultSink`].
pub struct FnSink<F> {
    f: F,
}

impl<F: FnMut(&Series)> FnSink<F> {
    /// Wrap `f`.
    pub const fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F: FnMut(&Series)> ResultSink for FnSink<F> {
    fn emit(&mut self, series: &Series) {
        (self.f)(series);
    }
}
