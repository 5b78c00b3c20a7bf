//! Named value providers injected into test cases.
//!
//! A fixture is a named unit producing a value. Test cases declare fixture
//! dependencies by name; the runner resolves each declared name through the
//! registry at invocation time and hands the produced values to the body.
//! Providers run once per invocation, so no value is shared across cases.

use crate::error::{FixtureError, FixtureResult};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// Provider producing a fixture value on demand.
pub type FixtureProvider = Arc<dyn Fn() -> Value + Send + Sync>;

static NULL: Value = Value::Null;

/// Values resolved for one test-case invocation, keyed by fixture name.
#[derive(Debug, Clone, Default)]
pub struct FixtureSet {
    values: HashMap<String, Value>,
}

impl FixtureSet {
    /// Create an empty set, for cases with no fixture dependencies.
    pub fn empty() -> Self {
        FixtureSet::default()
    }

    /// Get a fixture value by name.
    ///
    /// Returns `Value::Null` for names the case did not declare, mirroring
    /// JSON indexing semantics so bodies can index without panicking.
    pub fn get(&self, name: &str) -> &Value {
        self.values.get(name).unwrap_or(&NULL)
    }

    /// Whether a value was resolved under this name.
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }
}

/// Name-to-provider mapping resolved at invocation time.
#[derive(Clone, Default)]
pub struct FixtureRegistry {
    providers: HashMap<String, FixtureProvider>,
}

impl FixtureRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        FixtureRegistry::default()
    }

    /// Register a provider under a name.
    ///
    /// Returns an error if a provider is already registered under that name.
    pub fn register(
        &mut self,
        name: &str,
        provider: impl Fn() -> Value + Send + Sync + 'static,
    ) -> FixtureResult<()> {
        if self.providers.contains_key(name) {
            return Err(FixtureError::Duplicate(name.to_string()));
        }
        debug!("Registered fixture '{}'", name);
        self.providers.insert(name.to_string(), Arc::new(provider));
        Ok(())
    }

    /// Whether a provider exists under this name.
    pub fn contains(&self, name: &str) -> bool {
        self.providers.contains_key(name)
    }

    /// Resolve the declared names into a [`FixtureSet`].
    ///
    /// Each provider is invoked now; an unknown name is an error and the
    /// depending case must be reported as errored without running.
    pub fn resolve(&self, names: &[String]) -> FixtureResult<FixtureSet> {
        let mut values = HashMap::with_capacity(names.len());
        for name in names {
            let provider = self
                .providers
                .get(name)
                .ok_or_else(|| FixtureError::Unknown(name.clone()))?;
            values.insert(name.clone(), provider());
        }
        Ok(FixtureSet { values })
    }
}
