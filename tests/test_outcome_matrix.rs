//! End-to-end run of the built-in sample suites, checking every expected
//! outcome case by case.

use tinycheck::{builtin_registry, NullReporter, Outcome, RunOptions, Runner, RunSummary};

fn run_builtin() -> RunSummary {
    let registry = builtin_registry().unwrap();
    Runner::new(&registry, RunOptions::default()).run(&mut NullReporter)
}

fn outcome(summary: &RunSummary, path: &str) -> Outcome {
    summary
        .report_for(path)
        .unwrap_or_else(|| panic!("no report for {}", path))
        .outcome
        .clone()
}

#[test]
fn test_aggregate_counts() {
    let summary = run_builtin();
    assert_eq!(summary.counts.total(), 12);
    assert_eq!(summary.counts.passed, 8);
    assert_eq!(summary.counts.failed, 2);
    assert_eq!(summary.counts.errored, 1);
    assert_eq!(summary.counts.skipped, 1);
    assert!(summary.has_failures());
}

#[test]
fn test_module1_passing_cases() {
    let summary = run_builtin();
    assert_eq!(
        outcome(&summary, "module1::TestClass::test_method_one"),
        Outcome::Passed
    );
    assert_eq!(
        outcome(&summary, "module1::TestClass::test_method_two"),
        Outcome::Passed
    );
    assert_eq!(
        outcome(&summary, "module1::test_outside_class"),
        Outcome::Passed
    );
}

#[test]
fn test_parametrized_instances_all_pass() {
    let summary = run_builtin();
    for suffix in ["1", "2", "3"] {
        let path = format!("module1::test_parametrized[{}]", suffix);
        assert_eq!(outcome(&summary, &path), Outcome::Passed, "{}", path);
    }
}

#[test]
fn test_exception_case_is_errored() {
    let summary = run_builtin();
    match outcome(&summary, "module1::test_failing_with_exception") {
        Outcome::Errored { message } => {
            assert!(message.contains("intentional error"));
        }
        other => panic!("expected errored, got {:?}", other),
    }
}

#[test]
fn test_failing_method_diagnostic() {
    let summary = run_builtin();
    assert_eq!(
        outcome(&summary, "module1::TestFailingClass::test_failing_method"),
        Outcome::Failed {
            message: "This test is designed to fail".to_string()
        }
    );
}

#[test]
fn test_fixture_case_passes() {
    let summary = run_builtin();
    assert_eq!(
        outcome(&summary, "module2::test_with_fixture"),
        Outcome::Passed
    );
}

#[test]
fn test_advanced_group() {
    let summary = run_builtin();
    assert_eq!(
        outcome(&summary, "module2::TestAdvanced::test_advanced_method_one"),
        Outcome::Passed
    );
    // The skipped case is recorded with its reason and its body never runs,
    // so its false assertion cannot surface as a failure.
    assert_eq!(
        outcome(&summary, "module2::TestAdvanced::test_skipped"),
        Outcome::Skipped {
            reason: "Example of skipped test".to_string()
        }
    );
}

#[test]
fn test_dictionary_comparison_diagnostic() {
    let summary = run_builtin();
    match outcome(&summary, "module2::test_failing_comparison") {
        Outcome::Failed { message } => {
            assert!(message.starts_with("Dictionary comparison failure"));
            assert!(message.contains("value2"));
            assert!(message.contains("wrong_value"));
        }
        other => panic!("expected failed, got {:?}", other),
    }
}
