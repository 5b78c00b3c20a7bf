//! Outcomes and run-level reporting structures.

use super::case::CaseId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of a single test-case invocation.
///
/// Every invocation yields exactly one of these. A skipped case never ran its
/// body; an errored case raised an error or panicked rather than failing an
/// assertion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    /// The body completed without failure.
    Passed,
    /// An assertion evaluated false.
    Failed {
        /// Diagnostic message from the assertion
        message: String,
    },
    /// The case was skip-marked; the body never executed.
    Skipped {
        /// Reason attached to the skip marker
        reason: String,
    },
    /// The body raised an error or panicked.
    Errored {
        /// Description of the error
        message: String,
    },
}

impl Outcome {
    /// Short uppercase label for console output.
    pub fn label(&self) -> &'static str {
        match self {
            Outcome::Passed => "PASSED",
            Outcome::Failed { .. } => "FAILED",
            Outcome::Skipped { .. } => "SKIPPED",
            Outcome::Errored { .. } => "ERRORED",
        }
    }

    /// Whether this outcome makes the overall run unsuccessful.
    pub fn is_failure(&self) -> bool {
        matches!(self, Outcome::Failed { .. } | Outcome::Errored { .. })
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Report for one test-case invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseReport {
    /// Full path of the invoked case instance
    pub id: CaseId,
    /// Outcome of the invocation
    #[serde(flatten)]
    pub outcome: Outcome,
    /// Wall-clock duration in milliseconds
    pub duration_ms: u64,
}

/// Counts of outcomes across a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutcomeCounts {
    /// Number of passed invocations
    pub passed: usize,
    /// Number of failed invocations
    pub failed: usize,
    /// Number of skipped cases
    pub skipped: usize,
    /// Number of errored invocations
    pub errored: usize,
}

impl OutcomeCounts {
    /// Total number of recorded invocations.
    pub fn total(&self) -> usize {
        self.passed + self.failed + self.skipped + self.errored
    }

    fn record(&mut self, outcome: &Outcome) {
        match outcome {
            Outcome::Passed => self.passed += 1,
            Outcome::Failed { .. } => self.failed += 1,
            Outcome::Skipped { .. } => self.skipped += 1,
            Outcome::Errored { .. } => self.errored += 1,
        }
    }
}

impl fmt::Display for OutcomeCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} passed, {} failed, {} errored, {} skipped",
            self.passed, self.failed, self.errored, self.skipped
        )
    }
}

/// Ordered per-case reports plus aggregate counts for one run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    /// When the run started
    pub started_at: DateTime<Utc>,
    /// When the run finished
    pub finished_at: DateTime<Utc>,
    /// Per-case reports in execution order
    pub reports: Vec<CaseReport>,
    /// Aggregate outcome counts
    pub counts: OutcomeCounts,
}

impl RunSummary {
    /// Build a summary from ordered reports and run timestamps.
    pub fn new(
        started_at: DateTime<Utc>,
        finished_at: DateTime<Utc>,
        reports: Vec<CaseReport>,
    ) -> Self {
        let mut counts = OutcomeCounts::default();
        for report in &reports {
            counts.record(&report.outcome);
        }
        RunSummary {
            started_at,
            finished_at,
            reports,
            counts,
        }
    }

    /// Whether any invocation failed or errored.
    pub fn has_failures(&self) -> bool {
        self.counts.failed > 0 || self.counts.errored > 0
    }

    /// Look up the report for a case by its full path.
    pub fn report_for(&self, path: &str) -> Option<&CaseReport> {
        self.reports.iter().find(|r| r.id.path() == path)
    }
}
