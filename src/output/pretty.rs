//! Human-readable text formatter.
//!
//! Layout:
//!
//! ```text
//! ============================================================
//!   Skill Validation: pdf-tools
//! ============================================================
//!
//! ERRORS (1):
//!   [x] [name] invalid shape: ...
//!
//! WARNINGS (1):
//!   [!] [body] no top-level heading found ...
//!
//! ============================================================
//!   RESULT: FAIL (1 errors, 1 warnings)
//! ============================================================
//! ```
//!
//! A run without diagnostics prints `ALL CHECKS PASSED` in place of the
//! two sections.

use crate::finding::{Diagnostic, ValidationReport};
use colored::Colorize;

const RULE_WIDTH: usize = 60;

pub fn format(report: &ValidationReport) -> String {
    let mut out = String::new();
    let rule = "=".repeat(RULE_WIDTH);

    out.push_str(&format!("\n{rule}\n"));
    out.push_str(&format!(
        "  {}\n",
        format!("Skill Validation: {}", report.skill).bold()
    ));
    out.push_str(&format!("{rule}\n\n"));

    let (errors, warnings) = report.count_by_severity();

    if errors > 0 {
        out.push_str(&format!(
            "{}\n",
            format!("ERRORS ({errors}):").red().bold()
        ));
        push_section(&mut out, report.errors(), &"[x]".red().to_string());
    }

    if warnings > 0 {
        out.push_str(&format!(
            "{}\n",
            format!("WARNINGS ({warnings}):").yellow().bold()
        ));
        push_section(&mut out, report.warnings(), &"[!]".yellow().to_string());
    }

    if errors == 0 && warnings == 0 {
        out.push_str(&format!("  {}\n\n", "ALL CHECKS PASSED".green().bold()));
    }

    let result = if report.passed {
        format!("RESULT: PASS ({warnings} warnings)").green().bold()
    } else {
        format!("RESULT: FAIL ({errors} errors, {warnings} warnings)")
            .red()
            .bold()
    };
    out.push_str(&format!("{rule}\n"));
    out.push_str(&format!("  {result}\n"));
    out.push_str(&format!("{rule}\n\n"));

    out
}

fn push_section<'a>(out: &mut String, items: impl Iterator<Item = &'a Diagnostic>, marker: &str) {
    for d in items {
        out.push_str(&format!("  {marker} {d}\n"));
    }
    out.push('\n');
}
