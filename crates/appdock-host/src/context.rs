//! Call scope: the isolated evaluation environment for one dispatch

use crate::error::AppError;
use crate::logger::AppLogger;
use crate::resolver::{HostModule, ModuleResolver};
use serde_json::Value;
use std::sync::Arc;

/// Everything an app's method body can see during one invocation.
///
/// Built fresh per call by the proxy; the only bindings inside are the
/// supplied arguments, the host-mediated module resolver, and the app's own
/// logger. The app instance itself is bound into the capability handler at
/// registration time. Nothing else of the host is reachable from here, and
/// scopes of concurrent calls share no mutable state.
pub struct CallScope {
    args: Vec<Value>,
    resolver: Arc<dyn ModuleResolver>,
    logger: Arc<dyn AppLogger>,
}

impl CallScope {
    pub fn new(
        args: Vec<Value>,
        resolver: Arc<dyn ModuleResolver>,
        logger: Arc<dyn AppLogger>,
    ) -> Self {
        Self {
            args,
            resolver,
            logger,
        }
    }

    /// The arguments supplied to this invocation, in order.
    pub fn args(&self) -> &[Value] {
        &self.args
    }

    pub fn arg(&self, index: usize) -> Option<&Value> {
        self.args.get(index)
    }

    /// Resolve a host-mediated module by name.
    ///
    /// # Errors
    ///
    /// Fails when the resolver does not expose the module; the error
    /// propagates to the host as an app-raised error.
    pub fn require(&self, name: &str) -> Result<Arc<dyn HostModule>, AppError> {
        self.resolver
            .resolve(name)
            .ok_or_else(|| format!("module \"{name}\" is not available to this app").into())
    }

    pub fn logger(&self) -> &dyn AppLogger {
        self.logger.as_ref()
    }
}

impl std::fmt::Debug for CallScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CallScope")
            .field("args", &self.args)
            .field("resolver", &"<ModuleResolver>")
            .field("logger", &"<AppLogger>")
            .finish()
    }
}
