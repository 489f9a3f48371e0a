//! Per-app logger capability
//!
//! Apps never see the host's raw stdio. Each app is handed an [`AppLogger`]
//! at load time; the proxy uses the same logger to record dispatch lifecycle
//! events, so an app's activity is attributable in one place.

use std::sync::Arc;

/// Logging surface injected into every call scope.
///
/// Implementations must be safe for concurrent use: the same logger is
/// shared across all invocations on a proxy.
pub trait AppLogger: Send + Sync {
    fn debug(&self, message: &str);
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
}

/// Default [`AppLogger`] backed by `tracing`, tagging every event with the
/// app's name.
#[derive(Debug, Clone)]
pub struct TracingLogger {
    app: String,
}

impl TracingLogger {
    pub fn new(app: impl Into<String>) -> Self {
        Self { app: app.into() }
    }

    /// Convenience for the common `Arc<dyn AppLogger>` shape.
    pub fn shared(app: impl Into<String>) -> Arc<dyn AppLogger> {
        Arc::new(Self::new(app))
    }
}

impl AppLogger for TracingLogger {
    fn debug(&self, message: &str) {
        tracing::debug!(app = %self.app, "{message}");
    }

    fn info(&self, message: &str) {
        tracing::info!(app = %self.app, "{message}");
    }

    fn warn(&self, message: &str) {
        tracing::warn!(app = %self.app, "{message}");
    }

    fn error(&self, message: &str) {
        tracing::error!(app = %self.app, "{message}");
    }
}
