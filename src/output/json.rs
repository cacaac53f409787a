//! JSON output formatter.
//!
//! Produces a pretty-printed JSON document with the verdict, a severity
//! summary, and every diagnostic in evaluation order.

use crate::finding::{Diagnostic, ValidationReport, ValidationStatus};

#[derive(serde::Serialize)]
struct JsonOutput<'a> {
    skill: &'a str,
    status: ValidationStatus,
    passed: bool,
    exit_code: i32,
    summary: Summary,
    diagnostics: &'a [Diagnostic],
}

#[derive(serde::Serialize)]
struct Summary {
    errors: usize,
    warnings: usize,
}

/// Formats a [`ValidationReport`] as pretty-printed JSON.
///
/// # Panics
///
/// Panics if the report cannot be serialized (should not happen with valid data).
pub fn format(report: &ValidationReport) -> String {
    let (errors, warnings) = report.count_by_severity();
    let output = JsonOutput {
        skill: &report.skill,
        status: report.status,
        passed: report.passed,
        exit_code: report.exit_code(),
        summary: Summary { errors, warnings },
        diagnostics: &report.diagnostics,
    };

    serde_json::to_string_pretty(&output).expect("JSON serialization failed")
}
