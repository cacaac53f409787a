//! Body rules, evaluated on the `SKILL.md` text after the frontmatter.
//!
//! All four checks are independent and may fire together.

use crate::config::Config;
use crate::contract::{
    BODY_WARN_LINES, ENTRY_FILE, MAX_BODY_LINES, MIN_BODY_LINES, TOP_LEVEL_HEADING,
};
use crate::finding::{Category, Diagnostic, Severity};
use crate::rules::{evaluate_all, Hit, Rule, RuleMeta};
use std::path::PathBuf;

pub static RULES: &[Rule<str>] = &[
    Rule {
        meta: RuleMeta {
            id: "body/too-long",
            severity: Severity::Error,
            category: Category::Body,
            summary: "Body exceeds 500 lines",
            remediation: "Move detail into references/ and keep SKILL.md to 500 lines or fewer",
        },
        check: too_long,
    },
    Rule {
        meta: RuleMeta {
            id: "body/approaching-limit",
            severity: Severity::Warning,
            category: Category::Body,
            summary: "Body is over 80% of the 500-line limit",
            remediation: "Move detail into references/ before the body hits the limit",
        },
        check: approaching_limit,
    },
    Rule {
        meta: RuleMeta {
            id: "body/very-short",
            severity: Severity::Warning,
            category: Category::Body,
            summary: "Body is very short and may lack sufficient instructions",
            remediation: "Add step-by-step instructions for the agent",
        },
        check: very_short,
    },
    Rule {
        meta: RuleMeta {
            id: "body/no-heading",
            severity: Severity::Warning,
            category: Category::Body,
            summary: "No top-level heading",
            remediation: "Start the body with '# Skill Name'",
        },
        check: no_heading,
    },
];

/// Runs the body rules. Every diagnostic points at the entry file.
pub fn check(body: &str, config: &Config) -> Vec<Diagnostic> {
    let mut diagnostics = evaluate_all(RULES, body, config);
    for d in &mut diagnostics {
        d.file = Some(PathBuf::from(ENTRY_FILE));
    }
    diagnostics
}

/// Number of `\n`-separated lines; an empty body still counts as one.
pub fn line_count(body: &str) -> usize {
    body.split('\n').count()
}

fn too_long(body: &str, _: &Config) -> Vec<Hit> {
    let lines = line_count(body);
    if lines > MAX_BODY_LINES {
        vec![Hit::new(format!(
            "body too long: {lines} lines (max {MAX_BODY_LINES})"
        ))]
    } else {
        vec![]
    }
}

fn approaching_limit(body: &str, _: &Config) -> Vec<Hit> {
    let lines = line_count(body);
    if lines > BODY_WARN_LINES && lines <= MAX_BODY_LINES {
        vec![Hit::new(format!(
            "body approaching limit: {lines} lines (max {MAX_BODY_LINES})"
        ))]
    } else {
        vec![]
    }
}

fn very_short(body: &str, _: &Config) -> Vec<Hit> {
    let lines = line_count(body);
    if lines < MIN_BODY_LINES {
        vec![Hit::new(format!(
            "body very short: {lines} lines, may lack sufficient instructions"
        ))]
    } else {
        vec![]
    }
}

fn no_heading(body: &str, _: &Config) -> Vec<Hit> {
    if body.split('\n').any(|line| line.starts_with(TOP_LEVEL_HEADING)) {
        vec![]
    } else {
        vec![Hit::new(
            "no top-level heading found (start with '# Skill Name')",
        )]
    }
}
