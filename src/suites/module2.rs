//! Sample module 2: fixture use, a skip marker, and a dictionary comparison.

use crate::error::RegistryResult;
use crate::model::{ensure, ensure_eq, TestCase};
use crate::registry::{TestGroup, TestModule};
use serde_json::json;

/// Build the `module2` sample suite.
///
/// Depends on the `sample_fixture` provider being registered alongside it.
pub fn module() -> RegistryResult<TestModule> {
    let mut module = TestModule::new("module2");

    module.add_case(
        TestCase::new("test_with_fixture", |fixtures| {
            let sample = fixtures.get("sample_fixture");
            ensure_eq(&sample["key"], &json!("value"), "fixture value mismatch")
        })
        .with_description("Test using a fixture")
        .with_fixture("sample_fixture"),
    )?;

    let mut advanced = TestGroup::new("TestAdvanced");
    advanced.add_case(
        TestCase::new("test_advanced_method_one", |_| {
            let result = vec![1, 2, 3];
            ensure_eq(&result.len(), &3, "length mismatch")
        })
        .with_description("Advanced test method"),
    )?;
    advanced.add_case(
        TestCase::new("test_skipped", |_| ensure(false, "skipped body must not run"))
            .with_description("This test will be skipped")
            .skipped("Example of skipped test"),
    )?;
    module.add_group(advanced)?;

    module.add_case(
        TestCase::new("test_failing_comparison", |_| {
            let expected = json!({"key1": "value1", "key2": "value2"});
            let actual = json!({"key1": "value1", "key2": "wrong_value"});
            ensure_eq(&actual, &expected, "Dictionary comparison failure")
        })
        .with_description("Test comparing dictionaries that differ"),
    )?;

    Ok(module)
}
