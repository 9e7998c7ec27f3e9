//! Plain text output for use without X (`--stdout`)

use dwmbar_core::{DisplayError, Point, PressSource, PublishError, Publisher, StatusString};
use std::io::{self, Stdout, Write};

/// Writes one status line per cycle and flushes immediately
pub struct StdoutPublisher<W: Write = Stdout> {
    out: W,
}

impl StdoutPublisher {
    pub fn new() -> Self {
        Self { out: io::stdout() }
    }
}

impl Default for StdoutPublisher {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> StdoutPublisher<W> {
    pub fn with_writer(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Publisher for StdoutPublisher<W> {
    fn publish(&mut self, status: &StatusString) -> Result<(), PublishError> {
        writeln!(self.out, "{}", status)?;
        self.out.flush()?;
        Ok(())
    }
}

/// There is no pointer outside X
impl<W: Write> PressSource for StdoutPublisher<W> {
    fn pending_presses(&mut self) -> Result<Vec<Point>, DisplayError> {
        Ok(Vec::new())
    }
}
