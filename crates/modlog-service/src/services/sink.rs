//! Tracing-backed operational error sink

use tracing::error;

use modlog_core::traits::ErrorSink;
use modlog_core::LogError;

/// Reports moderation log failures through `tracing`
///
/// The default sink for deployments; tests substitute a collecting fake.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingErrorSink;

impl ErrorSink for TracingErrorSink {
    fn report(&self, err: &LogError) {
        error!(code = err.code(), %err, "moderation log failure");
    }
}
