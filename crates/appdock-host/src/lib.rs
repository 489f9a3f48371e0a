//! Invocation proxy for appdock
//!
//! [`ProxiedApp`] sits between the host and an untrusted app. Every call goes
//! through it:
//!
//! - Capability discovery against an explicit, load-time method registry
//! - Arity validation before any execution setup
//! - Execution in a fresh call scope carrying only the injected bindings
//!   (arguments, module resolver, the app's logger)
//! - A fixed wall-clock budget raced against the call
//! - Dispatch lifecycle events through the app's logger
//!
//! Structural failures (method not found, insufficient arguments, timeout)
//! and app-raised errors are distinct [`DispatchError`] variants, so callers
//! can pattern-match on kind instead of catching broadly.

pub mod capability;
pub mod context;
pub mod error;
pub mod logger;
pub mod metadata;
pub mod proxy;
pub mod resolver;
pub mod traits;

pub use capability::{Capability, CapabilityHandler, CapabilitySet};
pub use context::CallScope;
pub use error::{AppError, DispatchError};
pub use logger::{AppLogger, TracingLogger};
pub use metadata::{AppAuthorInfo, AppInfo};
pub use proxy::ProxiedApp;
pub use resolver::{HostModule, ModuleResolver, StaticResolver};
pub use traits::App;
