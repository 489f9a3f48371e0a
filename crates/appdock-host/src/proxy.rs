//! Mediated, time-bounded app invocation
//!
//! [`ProxiedApp`] is the only path from the host into an app. Each `invoke`
//! walks one state line: lookup → arity check → dispatch under a deadline →
//! success, structural failure, or app failure. Validation happens before
//! any execution setup, so a malformed call never consumes scope
//! construction or timeout budget.

use std::sync::Arc;

use serde_json::Value;
use tokio::time::{Duration, timeout};

use crate::capability::CapabilitySet;
use crate::context::CallScope;
use crate::error::DispatchError;
use crate::logger::AppLogger;
use crate::metadata::{AppAuthorInfo, AppInfo};
use crate::resolver::ModuleResolver;
use crate::traits::App;

/// Default wall-clock budget for a single dispatched call.
const DEFAULT_CALL_BUDGET: Duration = Duration::from_millis(100);

/// Wraps an untrusted app behind capability discovery, arity validation,
/// scope-isolated execution, and a fixed execution budget.
///
/// The proxy holds no mutable state between invocations; each call builds
/// its own [`CallScope`], so concurrent invocations on one proxy need no
/// locking here. If the app itself is not reentrant, serializing calls to it
/// is the host's concern.
pub struct ProxiedApp {
    app: Arc<dyn App>,
    resolver: Arc<dyn ModuleResolver>,
    call_budget: Duration,
}

impl ProxiedApp {
    pub fn new(app: Arc<dyn App>, resolver: Arc<dyn ModuleResolver>) -> Self {
        Self {
            app,
            resolver,
            call_budget: DEFAULT_CALL_BUDGET,
        }
    }

    /// Override the per-call execution budget (default 100 ms).
    pub fn with_call_budget(mut self, budget: Duration) -> Self {
        self.call_budget = budget;
        self
    }

    /// True iff the app registered a capability under exactly this name.
    /// No side effects.
    pub fn has_capability(&self, method: &str) -> bool {
        let found = self.capabilities().contains(method);
        tracing::trace!(app = %self.name(), method, found, "capability check");
        found
    }

    /// Dispatch `method` with `args` through the full mediation pipeline.
    ///
    /// The call runs on a detached blocking task with a fresh [`CallScope`],
    /// raced against the call budget. A call that outlives the budget is
    /// abandoned, not unwound: side effects it already performed stand.
    ///
    /// # Errors
    ///
    /// - [`DispatchError::MethodNotFound`]: no such capability; raised
    ///   before any isolation setup
    /// - [`DispatchError::InsufficientArguments`]: fewer arguments than the
    ///   declared minimum (extra trailing arguments are fine)
    /// - [`DispatchError::Timeout`]: the budget elapsed first
    /// - [`DispatchError::App`]: whatever the method body raised, unchanged
    pub async fn invoke(&self, method: &str, args: Vec<Value>) -> Result<Value, DispatchError> {
        let capability =
            self.capabilities()
                .get(method)
                .ok_or_else(|| DispatchError::MethodNotFound {
                    app: self.name().to_string(),
                    id: self.id().to_string(),
                    method: method.to_string(),
                })?;

        let expected = capability.min_args();
        if args.len() < expected {
            return Err(DispatchError::InsufficientArguments {
                method: method.to_string(),
                expected,
                actual: args.len(),
            });
        }

        let logger = self.app.logger();
        logger.debug(&format!("{method} is being dispatched..."));

        let scope = CallScope::new(args, Arc::clone(&self.resolver), Arc::clone(&logger));
        let handler = capability.handler();
        let call = tokio::task::spawn_blocking(move || handler(scope));

        match timeout(self.call_budget, call).await {
            Err(_) => {
                logger.warn(&format!(
                    "{method} exceeded its {}ms budget and was abandoned",
                    self.call_budget.as_millis()
                ));
                Err(DispatchError::Timeout {
                    method: method.to_string(),
                    budget_ms: self.call_budget.as_millis() as u64,
                })
            }
            // Panic inside the method body is an app failure like any other
            Ok(Err(join_err)) => Err(DispatchError::App(Box::new(join_err))),
            Ok(Ok(Err(app_err))) => Err(DispatchError::App(app_err)),
            Ok(Ok(Ok(value))) => {
                logger.debug(&format!("{method} was dispatched successfully"));
                Ok(value)
            }
        }
    }

    // Identity pass-through: read-only, side-effect-free, forwarded verbatim.

    pub fn name(&self) -> &str {
        &self.app.info().name
    }

    pub fn name_slug(&self) -> &str {
        &self.app.info().name_slug
    }

    pub fn id(&self) -> &str {
        &self.app.info().id
    }

    pub fn version(&self) -> &str {
        &self.app.info().version
    }

    pub fn description(&self) -> &str {
        &self.app.info().description
    }

    pub fn required_api_version(&self) -> &str {
        &self.app.info().required_api_version
    }

    pub fn author_info(&self) -> &AppAuthorInfo {
        &self.app.info().author
    }

    pub fn info(&self) -> &AppInfo {
        self.app.info()
    }

    pub fn logger(&self) -> Arc<dyn AppLogger> {
        self.app.logger()
    }

    fn capabilities(&self) -> &CapabilitySet {
        self.app.capabilities()
    }
}

impl std::fmt::Debug for ProxiedApp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProxiedApp")
            .field("app", &self.app.info().id)
            .field("call_budget", &self.call_budget)
            .finish()
    }
}
