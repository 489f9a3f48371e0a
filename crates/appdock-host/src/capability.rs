//! Explicit capability registry
//!
//! Instead of reflecting on arbitrary member names at call time, an app
//! declares its callable surface once at load time: each method name maps to
//! a [`Capability`] holding the declared minimum arity and a handler already
//! bound to the app instance. Lookup is an exact-name map probe with no side
//! effects.

use crate::context::CallScope;
use crate::error::AppError;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

/// A method body bound to its app instance, invoked with a fresh
/// [`CallScope`] per dispatch.
pub type CapabilityHandler = Arc<dyn Fn(CallScope) -> Result<Value, AppError> + Send + Sync>;

/// One named, callable behavior an app exposes.
pub struct Capability {
    min_args: usize,
    handler: CapabilityHandler,
}

impl Capability {
    /// Declare a capability requiring at least `min_args` arguments.
    /// Extra trailing arguments are tolerated at dispatch time.
    pub fn new<F>(min_args: usize, handler: F) -> Self
    where
        F: Fn(CallScope) -> Result<Value, AppError> + Send + Sync + 'static,
    {
        Self {
            min_args,
            handler: Arc::new(handler),
        }
    }

    pub fn min_args(&self) -> usize {
        self.min_args
    }

    /// Shared handle to the bound method body.
    pub fn handler(&self) -> CapabilityHandler {
        Arc::clone(&self.handler)
    }
}

impl std::fmt::Debug for Capability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Capability")
            .field("min_args", &self.min_args)
            .field("handler", &"<fn>")
            .finish()
    }
}

/// The full callable surface of one app, resolved once at load time.
#[derive(Debug, Default)]
pub struct CapabilitySet {
    methods: HashMap<String, Capability>,
}

impl CapabilitySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a capability under `name`, replacing any previous one.
    pub fn register(&mut self, name: impl Into<String>, capability: Capability) {
        self.methods.insert(name.into(), capability);
    }

    pub fn contains(&self, method: &str) -> bool {
        self.methods.contains_key(method)
    }

    pub fn get(&self, method: &str) -> Option<&Capability> {
        self.methods.get(method)
    }

    /// Names of every registered method, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.methods.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.methods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_register_and_lookup() {
        let mut set = CapabilitySet::new();
        assert!(set.is_empty());

        set.register("greet", Capability::new(1, |scope| Ok(scope.args()[0].clone())));
        assert!(set.contains("greet"));
        assert!(!set.contains("Greet"));
        assert_eq!(set.get("greet").unwrap().min_args(), 1);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_register_replaces_existing() {
        let mut set = CapabilitySet::new();
        set.register("greet", Capability::new(1, |_| Ok(json!("old"))));
        set.register("greet", Capability::new(2, |_| Ok(json!("new"))));

        assert_eq!(set.len(), 1);
        assert_eq!(set.get("greet").unwrap().min_args(), 2);
    }
}
