//! Host-mediated module resolution
//!
//! Apps never resolve modules through the host's own loader. The proxy
//! injects a [`ModuleResolver`] into every call scope; whatever it refuses
//! to resolve simply does not exist from the app's point of view.

use crate::error::AppError;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

/// A module the host chooses to expose to apps: a named bag of callable
/// functions, mediated entirely by the host.
pub trait HostModule: Send + Sync {
    fn call(&self, func: &str, args: &[Value]) -> Result<Value, AppError>;
}

/// Resolves module names to host-mediated modules.
///
/// Deny-by-default: an unknown name resolves to `None`, and host-internal
/// modules are invisible unless the integrator registers them. Shared
/// read-only across all calls on a proxy, so implementations must be
/// `Send + Sync`.
pub trait ModuleResolver: Send + Sync {
    fn resolve(&self, name: &str) -> Option<Arc<dyn HostModule>>;
}

/// Map-backed [`ModuleResolver`]. An empty one denies everything.
#[derive(Default)]
pub struct StaticResolver {
    modules: HashMap<String, Arc<dyn HostModule>>,
}

impl StaticResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Expose `module` to apps under `name`.
    pub fn register(&mut self, name: impl Into<String>, module: Arc<dyn HostModule>) {
        self.modules.insert(name.into(), module);
    }
}

impl ModuleResolver for StaticResolver {
    fn resolve(&self, name: &str) -> Option<Arc<dyn HostModule>> {
        self.modules.get(name).map(Arc::clone)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct UpperModule;

    impl HostModule for UpperModule {
        fn call(&self, func: &str, args: &[Value]) -> Result<Value, AppError> {
            match func {
                "upper" => Ok(json!(
                    args.first().and_then(|v| v.as_str()).unwrap_or("").to_uppercase()
                )),
                other => Err(format!("no function {other}").into()),
            }
        }
    }

    #[test]
    fn test_static_resolver_denies_unregistered() {
        let resolver = StaticResolver::new();
        assert!(resolver.resolve("text").is_none());
    }

    #[test]
    fn test_static_resolver_resolves_registered() {
        let mut resolver = StaticResolver::new();
        resolver.register("text", Arc::new(UpperModule));

        let module = resolver.resolve("text").unwrap();
        let out = module.call("upper", &[json!("hi")]).unwrap();
        assert_eq!(out, json!("HI"));
    }
}
