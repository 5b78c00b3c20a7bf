//! Sequential test execution.
//!
//! The runner walks the collected instances in registration order, one at a
//! time. Skip-marked cases are recorded without invoking the body. For the
//! rest, declared fixtures are resolved first (an unknown fixture errors the
//! case without running it), then the body runs under `catch_unwind` so a
//! panic is reported as an errored outcome rather than tearing the run down.

use crate::error::ConfigError;
use crate::model::{CaseFailure, CaseReport, Outcome, RunSummary};
use crate::registry::{CollectedCase, TestRegistry};
use crate::report::Reporter;
use chrono::Utc;
use regex::Regex;
use std::panic::{self, AssertUnwindSafe};
use std::time::Instant;
use tracing::{debug, info};

/// Case-path filter for selecting a subset of a run.
///
/// A path is selected when it contains the pattern literally, or when the
/// pattern compiles as a regular expression matching it. The literal check
/// comes first so ids containing regex metacharacters, such as parametrized
/// instances (`test_parametrized[1]`), select themselves verbatim.
#[derive(Debug, Clone)]
pub struct Filter {
    raw: String,
    regex: Option<Regex>,
}

impl Filter {
    /// Build a filter from a pattern string.
    pub fn new(pattern: &str) -> Self {
        Filter {
            raw: pattern.to_string(),
            regex: Regex::new(pattern).ok(),
        }
    }

    /// Whether a case path is selected by this filter.
    pub fn matches(&self, path: &str) -> bool {
        if path.contains(&self.raw) {
            return true;
        }
        self.regex.as_ref().is_some_and(|regex| regex.is_match(path))
    }
}

/// Options controlling a run.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Only run instances whose path matches the filter
    pub filter: Option<Filter>,
    /// Stop after the first failed or errored case
    pub fail_fast: bool,
}

impl RunOptions {
    /// Parse a run option boolean from an environment-style string.
    pub fn parse_bool(var: &str, value: &str) -> Result<bool, ConfigError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" => Ok(true),
            "0" | "false" | "no" | "" => Ok(false),
            other => Err(ConfigError::InvalidValue {
                var: var.to_string(),
                reason: format!("Must be a boolean, got: {}", other),
            }),
        }
    }
}

/// Sequential executor over a registry.
pub struct Runner<'a> {
    registry: &'a TestRegistry,
    options: RunOptions,
}

impl<'a> Runner<'a> {
    /// Create a runner over the given registry.
    pub fn new(registry: &'a TestRegistry, options: RunOptions) -> Self {
        Runner { registry, options }
    }

    /// Execute the selected instances and return the run summary.
    ///
    /// Each case report is forwarded to the reporter as it is produced, and
    /// the final summary is forwarded once at the end.
    pub fn run(&self, reporter: &mut dyn Reporter) -> RunSummary {
        let started_at = Utc::now();
        let mut reports = Vec::new();

        for case in self.registry.collect() {
            if let Some(filter) = &self.options.filter {
                if !filter.matches(case.id.path()) {
                    continue;
                }
            }

            let report = self.run_case(&case);
            debug!("{} {}", report.id, report.outcome);
            let stop = self.options.fail_fast && report.outcome.is_failure();
            reporter.case_finished(&report);
            reports.push(report);
            if stop {
                info!("Stopping after first failure (fail-fast)");
                break;
            }
        }

        let summary = RunSummary::new(started_at, Utc::now(), reports);
        info!("Run finished: {}", summary.counts);
        reporter.run_finished(&summary);
        summary
    }

    /// Execute one collected instance and map its result to an outcome.
    fn run_case(&self, case: &CollectedCase) -> CaseReport {
        let started = Instant::now();

        // Skip preempts everything, including fixture resolution.
        if let Some(reason) = &case.skip_reason {
            return CaseReport {
                id: case.id.clone(),
                outcome: Outcome::Skipped {
                    reason: reason.clone(),
                },
                duration_ms: 0,
            };
        }

        let outcome = match self.registry.fixtures().resolve(&case.fixtures) {
            Err(err) => Outcome::Errored {
                message: err.to_string(),
            },
            Ok(fixtures) => {
                let result = panic::catch_unwind(AssertUnwindSafe(|| case.invoke(&fixtures)));
                match result {
                    Ok(Ok(())) => Outcome::Passed,
                    Ok(Err(CaseFailure::Assertion { message })) => Outcome::Failed { message },
                    Ok(Err(CaseFailure::Raised { message })) => Outcome::Errored { message },
                    Err(payload) => Outcome::Errored {
                        message: panic_message(payload.as_ref()),
                    },
                }
            }
        };

        CaseReport {
            id: case.id.clone(),
            outcome,
            duration_ms: u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
        }
    }
}

/// Extract a readable message from a panic payload.
fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "test case panicked".to_string()
    }
}
