//! Outcome reporting.
//!
//! The harness produces [`CaseReport`]s and a [`RunSummary`]; how they are
//! displayed is the reporter's business. The console reporter prints one
//! status line per case and a closing summary, the JSON reporter serializes
//! the whole summary for machine consumption.

pub mod tree;

pub use tree::render_tree;

use crate::model::{CaseReport, Outcome, RunSummary};
use std::io::Write;

/// Sink for run output.
///
/// Reports arrive in execution order, one call per case instance, followed by
/// exactly one `run_finished` call.
pub trait Reporter {
    /// Called after each case instance finishes.
    fn case_finished(&mut self, report: &CaseReport);

    /// Called once after the run completes.
    fn run_finished(&mut self, summary: &RunSummary);
}

/// Reporter that discards everything, for library callers that only want the
/// returned [`RunSummary`].
pub struct NullReporter;

impl Reporter for NullReporter {
    fn case_finished(&mut self, _report: &CaseReport) {}
    fn run_finished(&mut self, _summary: &RunSummary) {}
}

/// Human-readable per-case status lines plus a closing summary.
pub struct ConsoleReporter<W: Write> {
    out: W,
}

impl<W: Write> ConsoleReporter<W> {
    /// Create a console reporter writing to `out`.
    pub fn new(out: W) -> Self {
        ConsoleReporter { out }
    }

    /// Consume the reporter and return the writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Reporter for ConsoleReporter<W> {
    fn case_finished(&mut self, report: &CaseReport) {
        let _ = writeln!(self.out, "{} {}", report.id, report.outcome.label());
        match &report.outcome {
            Outcome::Failed { message } | Outcome::Errored { message } => {
                let _ = writeln!(self.out, "    {}", message);
            }
            Outcome::Skipped { reason } => {
                let _ = writeln!(self.out, "    reason: {}", reason);
            }
            Outcome::Passed => {}
        }
    }

    fn run_finished(&mut self, summary: &RunSummary) {
        let elapsed = summary
            .finished_at
            .signed_duration_since(summary.started_at);
        let seconds = elapsed.num_milliseconds() as f64 / 1000.0;
        let _ = writeln!(self.out, "\n{} in {:.2}s", summary.counts, seconds);
    }
}

/// Machine-readable reporter: emits the full summary as pretty-printed JSON.
pub struct JsonReporter<W: Write> {
    out: W,
}

impl<W: Write> JsonReporter<W> {
    /// Create a JSON reporter writing to `out`.
    pub fn new(out: W) -> Self {
        JsonReporter { out }
    }

    /// Consume the reporter and return the writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Reporter for JsonReporter<W> {
    fn case_finished(&mut self, _report: &CaseReport) {
        // Only the final summary is emitted, to keep stdout a single document.
    }

    fn run_finished(&mut self, summary: &RunSummary) {
        if let Ok(json) = serde_json::to_string_pretty(summary) {
            let _ = writeln!(self.out, "{}", json);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CaseId;
    use chrono::Utc;

    fn sample_summary() -> RunSummary {
        let now = Utc::now();
        RunSummary::new(
            now,
            now,
            vec![
                CaseReport {
                    id: CaseId::new("module1", Some("TestClass"), "test_method_one"),
                    outcome: Outcome::Passed,
                    duration_ms: 1,
                },
                CaseReport {
                    id: CaseId::new("module1", Some("TestFailingClass"), "test_failing_method"),
                    outcome: Outcome::Failed {
                        message: "This test is designed to fail".to_string(),
                    },
                    duration_ms: 0,
                },
            ],
        )
    }

    #[test]
    fn test_console_output() {
        let summary = sample_summary();
        let mut reporter = ConsoleReporter::new(Vec::new());
        for report in &summary.reports {
            reporter.case_finished(report);
        }
        reporter.run_finished(&summary);

        let output = String::from_utf8(reporter.into_inner()).unwrap();
        assert!(output.contains("module1::TestClass::test_method_one PASSED"));
        assert!(output.contains("module1::TestFailingClass::test_failing_method FAILED"));
        assert!(output.contains("    This test is designed to fail"));
        assert!(output.contains("1 passed, 1 failed, 0 errored, 0 skipped"));
    }

    #[test]
    fn test_json_output_is_single_document() {
        let summary = sample_summary();
        let mut reporter = JsonReporter::new(Vec::new());
        for report in &summary.reports {
            reporter.case_finished(report);
        }
        reporter.run_finished(&summary);

        let output = String::from_utf8(reporter.into_inner()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["counts"]["passed"], 1);
        assert_eq!(parsed["counts"]["failed"], 1);
        assert_eq!(
            parsed["reports"][0]["id"],
            "module1::TestClass::test_method_one"
        );
        assert_eq!(parsed["reports"][1]["status"], "failed");
    }
}
