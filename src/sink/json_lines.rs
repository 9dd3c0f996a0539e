//! JSON Lines Sink - one serialized snapshot per line

use std::io::Write;

use tracing::warn;

use super::ResultSink;
use crate::series::Series;

/// Writes each snapshot as a JSON array on its own line.
///
/// Write failures are logged and counted; they never reach the runner.
#[derive(Debug)]
pub struct JsonLinesSink<W> {
    writer: W,
    failures: usize,
}

impl<W: Write> JsonLinesSink<W> {
    /// Write snapshots to `writer`.
    pub const fn new(writer: W) -> Self {
        Self { writer, failures: 0 }
    }

    /// Number of snapshots that could not be written.
    #[must_use]
    pub const fn failures(&self) -> usize {
        self.failures
    }

    /// Consume the sink and return the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_snapshot(&mut self, series: &Series) -> std::io::Result<()> {
        serde_json::to_writer(&mut self.writer, series).map_err(std::io::Error::from)?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        Ok(())
    }
}

impl<W: Write> ResultSink for JsonLinesSink<W> {
    fn emit(&mut self, series: &Series) {
        if let Err(e) = self.write_snapshot(series) {
            self.failures += 1;
            warn!(%e, iterations = series.len(), "failed to write series snapshot");
        }
    }
}
