//! Output formatting for validation reports.
//!
//! | Format | Module | Use case |
//! |--------|--------|----------|
//! | [`Pretty`](OutputFormat::Pretty) | [`pretty`] | Terminal / human review |
//! | [`Json`](OutputFormat::Json)     | [`json`]   | Automation / scripting  |
//! | [`Sarif`](OutputFormat::Sarif)   | [`sarif`]  | CI/CD integration       |
//!
//! None of the formats embed timestamps, so validating an unchanged package
//! twice produces byte-identical output.

pub mod json;
pub mod pretty;
pub mod sarif;

use crate::finding::ValidationReport;
use std::io::{self, Write};
use std::path::Path;

/// Supported output formats for validation reports.
#[derive(Debug, Clone, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text grouped by severity.
    Pretty,
    /// Machine-readable JSON.
    Json,
    /// [SARIF 2.1.0](https://sarifweb.azurewebsites.net/) for CI/CD tool integration.
    Sarif,
}

/// Formats a [`ValidationReport`] in the requested [`OutputFormat`].
///
/// # Examples
///
/// ```rust,no_run
/// use oxidized_skill_lint::output::{format_report, OutputFormat};
/// # use oxidized_skill_lint::finding::ValidationReport;
/// # fn example(report: &ValidationReport) {
/// let json = format_report(report, &OutputFormat::Json);
/// println!("{json}");
/// # }
/// ```
pub fn format_report(report: &ValidationReport, format: &OutputFormat) -> String {
    match format {
        OutputFormat::Pretty => pretty::format(report),
        OutputFormat::Json => json::format(report),
        OutputFormat::Sarif => sarif::format(report),
    }
}

/// Like [`format_report`], but always ends with a newline and goes to
/// `dest` when given, stdout otherwise. Output bound for a file is never
/// colored.
///
/// # Errors
///
/// Returns the I/O error when `dest` cannot be written.
pub fn emit(report: &ValidationReport, format: &OutputFormat, dest: Option<&Path>) -> io::Result<()> {
    if dest.is_some() {
        colored::control::set_override(false);
    }
    let mut text = format_report(report, format);
    if !text.ends_with('\n') {
        text.push('\n');
    }
    match dest {
        Some(path) => std::fs::write(path, text),
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(text.as_bytes())?;
            stdout.flush()
        }
    }
}
