//! Sample module 1: basic cases, parametrization, and intentional failures.

use crate::error::RegistryResult;
use crate::model::{ensure, ensure_eq, CaseFailure, TestCase};
use crate::registry::{TestGroup, TestModule};
use serde_json::json;

/// Build the `module1` sample suite.
pub fn module() -> RegistryResult<TestModule> {
    let mut module = TestModule::new("module1");

    let mut class = TestGroup::new("TestClass");
    class.add_case(
        TestCase::new("test_method_one", |_| ensure(true, "expected true"))
            .with_description("Test method in a class"),
    )?;
    class.add_case(
        TestCase::new("test_method_two", |_| ensure(!false, "expected not false"))
            .with_description("Another test method in the same class"),
    )?;
    module.add_group(class)?;

    module.add_case(
        TestCase::new("test_outside_class", |_| {
            ensure_eq(&42, &42, "answer mismatch")
        })
        .with_description("Test function outside of class"),
    )?;

    module.add_case(
        TestCase::parametrized(
            "test_parametrized",
            vec![
                (json!(1), json!(1)),
                (json!(2), json!(4)),
                (json!(3), json!(9)),
            ],
            |input, expected| {
                let n = input.as_i64().unwrap_or(0);
                ensure_eq(&json!(n * n), expected, "square mismatch")
            },
        )
        .with_description("Parametrized test"),
    )?;

    module.add_case(
        TestCase::new("test_failing_with_exception", |_| {
            Err(CaseFailure::raised(
                "This is an intentional error for demonstration",
            ))
        })
        .with_description("Test that raises an error"),
    )?;

    let mut failing = TestGroup::new("TestFailingClass");
    failing.add_case(
        TestCase::new("test_failing_method", |_| {
            ensure(false, "This test is designed to fail")
        })
        .with_description("Test method that fails"),
    )?;
    module.add_group(failing)?;

    Ok(module)
}
