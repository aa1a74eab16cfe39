//! Progress sink - the UI display seam
//!
//! Every state emission the observer consumes is reduced to the two values a
//! progress indicator needs. Implementations are responsible for applying
//! updates on whatever thread owns the display.

use tracing::trace;

/// Consumer of derived progress values
pub trait ProgressSink: Send + Sync {
    /// Apply a new progress snapshot
    ///
    /// `duration_ms` is the progress maximum, `position_ms` the current
    /// value. Called once per state emission.
    fn set_progress(&self, duration_ms: u64, position_ms: u64);
}

/// Sink that traces progress updates instead of rendering them
///
/// Useful for headless runs and diagnostics.
pub struct TracingProgressSink;

impl ProgressSink for TracingProgressSink {
    fn set_progress(&self, duration_ms: u64, position_ms: u64) {
        trace!(position_ms, duration_ms, "progress update");
    }
}
