//! Core data model: test cases, identifiers, and outcomes.

pub mod case;
pub mod outcome;

pub use case::{
    ensure, ensure_eq, CaseBody, CaseFailure, CaseId, CaseKind, CaseResult, ParamBody, TestCase,
};
pub use outcome::{CaseReport, Outcome, OutcomeCounts, RunSummary};
