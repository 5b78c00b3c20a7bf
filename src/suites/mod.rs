//! Built-in sample suites.
//!
//! Two modules of illustrative test cases exercising every feature of the
//! harness: grouped and free cases, parametrization, fixtures, skip markers,
//! and intentional failures. A full run of the built-in registry yields
//! 12 instances: 8 passed, 2 failed, 1 errored, 1 skipped.

pub mod module1;
pub mod module2;

use crate::error::RegistryError;
use crate::registry::TestRegistry;
use serde_json::json;

/// Build a registry holding both sample modules and their fixtures.
pub fn builtin_registry() -> Result<TestRegistry, RegistryError> {
    let mut registry = TestRegistry::new();
    registry
        .fixtures_mut()
        .register("sample_fixture", || json!({"key": "value"}))
        .map_err(|e| RegistryError::Other(e.to_string()))?;
    registry.add_module(module1::module()?)?;
    registry.add_module(module2::module()?)?;
    Ok(registry)
}
