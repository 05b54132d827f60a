//! Timing instrumentation helpers

use std::time::Instant;

use tracing::info;

/// Stopwatch for one named startup phase
///
/// `finish` logs the phase with its duration and hands the duration back,
/// so callers can add it to their own summary fields.
///
/// # Example
///
/// ```ignore
/// use vss_infrastructure::utils::TimedOperation;
///
/// let timer = TimedOperation::start("model warm-up");
/// context.model().await?;
/// timer.finish();
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TimedOperation {
    phase: &'static str,
    start: Instant,
}

impl TimedOperation {
    /// Start timing `phase`
    pub fn start(phase: &'static str) -> Self {
        Self {
            phase,
            start: Instant::now(),
        }
    }

    /// Name of the phase being timed
    pub fn phase(&self) -> &'static str {
        self.phase
    }

    /// Elapsed time in milliseconds, saturating
    pub fn elapsed_ms(&self) -> u64 {
        u64::try_from(self.start.elapsed().as_millis()).unwrap_or(u64::MAX)
    }

    /// Log the phase as complete and return its duration in milliseconds
    pub fn finish(self) -> u64 {
        let elapsed_ms = self.elapsed_ms();
        info!(phase = self.phase, elapsed_ms, "Startup phase complete");
        elapsed_ms
    }
}
