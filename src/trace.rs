//! Best-so-far trace sink shared by all solvers.

use crate::error::Result;
use log::debug;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::{Duration, Instant};

/// Append-only improvement log tied to the solve clock.
///
/// Construction starts the clock; every [`record`](Self::record) appends a
/// `<elapsed_seconds>,<best_size>` line. Solvers poll
/// [`elapsed`](Self::elapsed) for their wall-clock cutoff so trace lines
/// and cutoff checks share one time origin.
pub struct Trace<W: Write> {
    out: W,
    start: Instant,
}

impl Trace<BufWriter<File>> {
    /// Opens a trace file, truncating any previous run.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::create(path)?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> Trace<W> {
    /// Wraps a writer and starts the solve clock.
    pub fn new(out: W) -> Self {
        Trace {
            out,
            start: Instant::now(),
        }
    }

    /// Time since the clock started.
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Records a new best cover size.
    pub fn record(&mut self, best: usize) -> Result<()> {
        let secs = self.elapsed().as_secs_f64();
        debug!("best cover {} at {:.3}s", best, secs);
        writeln!(self.out, "{},{}", secs, best)?;
        Ok(())
    }

    /// Flushes buffered lines to the underlying writer.
    pub fn flush(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }

    /// Consumes the trace and hands back the writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
#[path = "unit_tests/trace.rs"]
mod tests;
