//! Observer that prints a notification line per candidate.

use crate::traits::Observer;
use anyhow::{Result, anyhow};
use roster::Candidate;
use std::io::{self, Stdout, Write};
use std::sync::Mutex;

/// Writes `Notification for <name>: <message>` for every notification.
///
/// Defaults to stdout; `with_writer` redirects it (tests, files).
pub struct ConsoleNotifier<W = Stdout> {
    out: Mutex<W>,
}

impl ConsoleNotifier<Stdout> {
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl Default for ConsoleNotifier<Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write + Send> ConsoleNotifier<W> {
    pub fn with_writer(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    /// Give back the writer, e.g. to inspect captured output
    pub fn into_inner(self) -> Result<W> {
        self.out
            .into_inner()
            .map_err(|_| anyhow!("console notifier writer was poisoned"))
    }
}

impl<W: Write + Send> Observer for ConsoleNotifier<W> {
    fn name(&self) -> &str {
        "ConsoleNotifier"
    }

    fn notify(&self, message: &str, candidate: &Candidate) -> Result<()> {
        let mut out = self
            .out
            .lock()
            .map_err(|_| anyhow!("console notifier writer was poisoned"))?;
        writeln!(out, "Notification for {}: {}", candidate.name, message)?;
        Ok(())
    }
}
