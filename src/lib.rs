//! Tinycheck - A miniature test-execution harness.
//!
//! This library provides the pieces of a small test-execution framework:
//! convention-based discovery, named-fixture injection, parametrization,
//! skip markers, sequential execution, and outcome reporting, plus two
//! built-in sample suites exercising all of it.
//!
//! # Architecture
//!
//! - **model**: Test cases, case ids, failure channels, and outcomes
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **fixtures**: Named value providers resolved at invocation time
//! - **registry**: Modules, groups, discovery, and parametrized expansion
//! - **runner**: Sequential execution with skip preemption and panic capture
//! - **report**: Reporter trait, console/JSON reporters, tree rendering
//! - **suites**: Built-in sample test modules

// Re-export commonly used types
pub mod config;
pub mod error;
pub mod fixtures;
pub mod model;
pub mod registry;
pub mod report;
pub mod runner;
pub mod suites;

pub use config::{Config, OutputFormat};
pub use error::{ConfigError, FixtureError, RegistryError};
pub use fixtures::{FixtureRegistry, FixtureSet};
pub use model::{
    ensure, ensure_eq, CaseFailure, CaseId, CaseReport, CaseResult, Outcome, OutcomeCounts,
    RunSummary, TestCase,
};
pub use registry::{CollectedCase, TestGroup, TestModule, TestRegistry};
pub use report::{render_tree, ConsoleReporter, JsonReporter, NullReporter, Reporter};
pub use runner::{Filter, RunOptions, Runner};
pub use suites::builtin_registry;
