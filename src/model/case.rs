//! Test case model: identity, bodies, and in-band failure channels.

use crate::fixtures::FixtureSet;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// Path identifying a test case: `module::Class::name` or `module::name`.
///
/// Parametrized instances carry an `[input]` suffix on the final segment,
/// e.g. `module1::test_parametrized[2]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CaseId(String);

/// Separator between path segments of a case id.
pub const ID_SEPARATOR: &str = "::";

/// Prefix a case name must carry to be collected by discovery.
pub const CASE_PREFIX: &str = "test";

impl CaseId {
    /// Build a case id from its path segments.
    pub fn new(module: &str, group: Option<&str>, name: &str) -> Self {
        match group {
            Some(group) => CaseId(format!(
                "{}{}{}{}{}",
                module, ID_SEPARATOR, group, ID_SEPARATOR, name
            )),
            None => CaseId(format!("{}{}{}", module, ID_SEPARATOR, name)),
        }
    }

    /// The full path string.
    pub fn path(&self) -> &str {
        &self.0
    }

    /// Iterate over the path segments.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split(ID_SEPARATOR)
    }
}

impl fmt::Display for CaseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A failure produced by a test case body.
///
/// These are the two in-band failure channels: an assertion that evaluated
/// false (reported as a failed outcome) and a raised error (reported as an
/// errored outcome).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaseFailure {
    /// An assertion evaluated false, with a diagnostic message.
    Assertion {
        /// Diagnostic attached to the assertion
        message: String,
    },
    /// The body raised a descriptive error instead of asserting.
    Raised {
        /// Description of the raised error
        message: String,
    },
}

impl CaseFailure {
    /// Construct an assertion failure with the given diagnostic.
    pub fn assertion(message: impl Into<String>) -> Self {
        CaseFailure::Assertion {
            message: message.into(),
        }
    }

    /// Construct a raised error with the given description.
    pub fn raised(message: impl Into<String>) -> Self {
        CaseFailure::Raised {
            message: message.into(),
        }
    }
}

/// Result type returned by test case bodies.
pub type CaseResult = Result<(), CaseFailure>;

/// Assert that a condition holds, failing with `message` otherwise.
pub fn ensure(condition: bool, message: &str) -> CaseResult {
    if condition {
        Ok(())
    } else {
        Err(CaseFailure::assertion(message))
    }
}

/// Assert that two values compare equal, failing with `message` plus both
/// values otherwise.
pub fn ensure_eq<T: PartialEq + fmt::Debug>(left: &T, right: &T, message: &str) -> CaseResult {
    if left == right {
        Ok(())
    } else {
        Err(CaseFailure::assertion(format!(
            "{}: {:?} != {:?}",
            message, left, right
        )))
    }
}

/// Body of a plain test case, invoked with its resolved fixtures.
pub type CaseBody = Arc<dyn Fn(&FixtureSet) -> CaseResult + Send + Sync>;

/// Body of a parametrized test case, invoked once per (input, expected) tuple.
pub type ParamBody = Arc<dyn Fn(&Value, &Value) -> CaseResult + Send + Sync>;

/// Executable shape of a test case.
#[derive(Clone)]
pub enum CaseKind {
    /// A single invocation.
    Plain(CaseBody),
    /// One invocation per (input, expected) tuple, in table order.
    Parametrized {
        /// Ordered (input, expected) tuples
        params: Vec<(Value, Value)>,
        /// Body shared by all invocations
        body: ParamBody,
    },
}

/// A named unit of executable test logic.
///
/// Cases are defined statically at registration time: a name, an optional
/// human-readable description, the declared fixture dependencies, an optional
/// skip reason, and a body. A skip-marked case is still collected but its
/// body never executes.
#[derive(Clone)]
pub struct TestCase {
    /// Case name; discovery only collects names with a `test` prefix.
    pub name: String,
    /// Human-readable description (docstring equivalent).
    pub description: Option<String>,
    /// Names of fixtures the body depends on, resolved at invocation time.
    pub fixtures: Vec<String>,
    /// Skip reason; when present the body never runs.
    pub skip_reason: Option<String>,
    /// Plain or parametrized body.
    pub kind: CaseKind,
}

impl TestCase {
    /// Create a plain test case with the given body.
    pub fn new(
        name: &str,
        body: impl Fn(&FixtureSet) -> CaseResult + Send + Sync + 'static,
    ) -> Self {
        TestCase {
            name: name.to_string(),
            description: None,
            fixtures: Vec::new(),
            skip_reason: None,
            kind: CaseKind::Plain(Arc::new(body)),
        }
    }

    /// Create a parametrized test case over (input, expected) tuples.
    pub fn parametrized(
        name: &str,
        params: Vec<(Value, Value)>,
        body: impl Fn(&Value, &Value) -> CaseResult + Send + Sync + 'static,
    ) -> Self {
        TestCase {
            name: name.to_string(),
            description: None,
            fixtures: Vec::new(),
            skip_reason: None,
            kind: CaseKind::Parametrized {
                params,
                body: Arc::new(body),
            },
        }
    }

    /// Attach a human-readable description.
    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    /// Declare a fixture dependency by name.
    pub fn with_fixture(mut self, fixture: &str) -> Self {
        self.fixtures.push(fixture.to_string());
        self
    }

    /// Mark the case as skipped with a reason.
    pub fn skipped(mut self, reason: &str) -> Self {
        self.skip_reason = Some(reason.to_string());
        self
    }

    /// Whether discovery collects this case (name has the `test` prefix).
    pub fn is_discoverable(&self) -> bool {
        self.name.starts_with(CASE_PREFIX)
    }
}

impl fmt::Debug for TestCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TestCase")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("fixtures", &self.fixtures)
            .field("skip_reason", &self.skip_reason)
            .finish_non_exhaustive()
    }
}
