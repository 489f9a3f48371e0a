//! Dispatch error taxonomy

use thiserror::Error;

/// Errors an app's own method body may raise. These cross the proxy boundary
/// unchanged; the proxy never wraps, classifies, or suppresses them.
pub type AppError = Box<dyn std::error::Error + Send + Sync>;

/// Outcome classification for a failed dispatch.
///
/// The first three variants are structural: they are raised by the proxy
/// itself, before or around the call. [`DispatchError::App`] carries whatever
/// the app's method body raised, source intact.
#[derive(Error, Debug)]
pub enum DispatchError {
    /// The app does not expose the requested capability
    #[error("the app {app} ({id}) does not have the method \"{method}\"")]
    MethodNotFound {
        app: String,
        id: String,
        method: String,
    },

    /// Fewer arguments were supplied than the method's declared minimum.
    /// Extra trailing arguments are tolerated and never produce this.
    #[error("insufficient arguments for {method}: expected at least {expected}, got {actual}")]
    InsufficientArguments {
        method: String,
        expected: usize,
        actual: usize,
    },

    /// The call exceeded its wall-clock budget and was abandoned. Partial
    /// side effects that occurred before the deadline are not rolled back.
    #[error("method {method} exceeded its {budget_ms}ms execution budget")]
    Timeout { method: String, budget_ms: u64 },

    /// The app's method body failed; the underlying error passes through
    /// untouched
    #[error(transparent)]
    App(AppError),
}
