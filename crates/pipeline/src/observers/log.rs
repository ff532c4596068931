//! Observer that turns notifications into tracing events.

use crate::traits::Observer;
use anyhow::Result;
use roster::Candidate;

/// Emits every notification as an `info` event instead of printing it.
///
/// Used when the console should only show stage results.
pub struct TracingNotifier;

impl Observer for TracingNotifier {
    fn name(&self) -> &str {
        "TracingNotifier"
    }

    fn notify(&self, message: &str, candidate: &Candidate) -> Result<()> {
        tracing::info!(candidate = %candidate.name, "{}", message);
        Ok(())
    }
}
