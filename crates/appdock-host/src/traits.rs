//! The app contract the proxy consumes

use crate::capability::CapabilitySet;
use crate::logger::AppLogger;
use crate::metadata::AppInfo;
use std::sync::Arc;

/// What the host requires of a loaded app.
///
/// How the app was compiled or loaded is outside this crate; the proxy only
/// needs identity metadata, a logger, and the capability registry resolved
/// at load time. The proxy never mutates an app through this trait.
pub trait App: Send + Sync {
    /// Fixed identity metadata declared at load time.
    fn info(&self) -> &AppInfo;

    /// The app's own logger, shared with the proxy for lifecycle events.
    fn logger(&self) -> Arc<dyn AppLogger>;

    /// The callable surface, with handlers already bound to this instance.
    fn capabilities(&self) -> &CapabilitySet;
}
