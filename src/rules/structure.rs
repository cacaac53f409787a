//! Directory-structure rules.
//!
//! These look at the package tree only, never at the frontmatter. The
//! entry-file check is a hard stop handled by the orchestrator; the rest run
//! in this order: forbidden files, exclusion file, scripts (see
//! [`scripts`](crate::rules::scripts)), reference nesting.

use crate::config::Config;
use crate::contract::{
    ENTRY_FILE, EXCLUSION_FILE, FORBIDDEN_FILES, MAX_REFERENCE_DEPTH, REFERENCES_DIR,
    REQUIRED_EXCLUSIONS,
};
use crate::finding::{Category, Diagnostic, Severity};
use crate::package::Package;
use crate::rules::{evaluate_all, scripts, Hit, Rule, RuleMeta};
use std::path::PathBuf;

pub static ENTRY_MISSING: RuleMeta = RuleMeta {
    id: "structure/entry-missing",
    severity: Severity::Error,
    category: Category::Structure,
    summary: "Entry file SKILL.md not found",
    remediation: "Create SKILL.md at the skill root with name and description frontmatter",
};

/// Rules evaluated before the script syntax checks.
pub static TREE_RULES: &[Rule<Package>] = &[
    Rule {
        meta: RuleMeta {
            id: "structure/forbidden-file",
            severity: Severity::Error,
            category: Category::Structure,
            summary: "Auxiliary document in the skill root",
            remediation: "Remove the file; skills carry their documentation in SKILL.md",
        },
        check: forbidden_files,
    },
    Rule {
        meta: RuleMeta {
            id: "structure/missing-exclusion-file",
            severity: Severity::Warning,
            category: Category::Structure,
            summary: "No .gitignore in the skill root",
            remediation: "Add a .gitignore excluding .venv/, data/, and __pycache__/",
        },
        check: missing_exclusion_file,
    },
    Rule {
        meta: RuleMeta {
            id: "structure/missing-exclusion",
            severity: Severity::Warning,
            category: Category::Structure,
            summary: ".gitignore is missing a required exclusion",
            remediation: "Add the missing pattern to .gitignore",
        },
        check: missing_exclusions,
    },
];

/// Rules evaluated after the script syntax checks.
pub static REFERENCE_RULES: &[Rule<Package>] = &[Rule {
    meta: RuleMeta {
        id: "structure/deep-nesting",
        severity: Severity::Warning,
        category: Category::Structure,
        summary: "Reference file nested too deeply",
        remediation: "Keep references one level deep (references/<file> or references/<dir>/<file>)",
    },
    check: deep_nesting,
}];

/// The single diagnostic reported when the entry file is absent.
pub fn entry_missing() -> Diagnostic {
    ENTRY_MISSING.diagnostic(
        format!("entry file not found: {ENTRY_FILE}"),
        Some(PathBuf::from(ENTRY_FILE)),
    )
}

/// Runs the structure group, honouring the `structure` and `scripts` toggles.
pub fn check(package: &Package, config: &Config) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    if config.checks.structure {
        diagnostics.extend(evaluate_all(TREE_RULES, package, config));
    }
    if config.checks.scripts {
        diagnostics.extend(scripts::check(package, config));
    }
    if config.checks.structure {
        diagnostics.extend(evaluate_all(REFERENCE_RULES, package, config));
    }
    diagnostics
}

fn forbidden_files(package: &Package, _: &Config) -> Vec<Hit> {
    package
        .top_level
        .iter()
        .filter(|name| FORBIDDEN_FILES.contains(&name.as_str()))
        .map(|name| {
            Hit::new(format!(
                "forbidden file: {name} (skills should not include auxiliary docs)"
            ))
            .in_file(name)
        })
        .collect()
}

fn missing_exclusion_file(package: &Package, _: &Config) -> Vec<Hit> {
    if package.has_gitignore() {
        vec![]
    } else {
        vec![Hit::new(
            "missing exclusion file: no .gitignore found (recommend excluding .venv/, data/, __pycache__/)",
        )]
    }
}

fn missing_exclusions(package: &Package, _: &Config) -> Vec<Hit> {
    let Some(text) = package.gitignore.as_deref() else {
        return vec![];
    };
    REQUIRED_EXCLUSIONS
        .iter()
        .filter(|pattern| !text.contains(*pattern))
        .map(|pattern| {
            Hit::new(format!(".gitignore missing '{pattern}' exclusion")).in_file(EXCLUSION_FILE)
        })
        .collect()
}

fn deep_nesting(package: &Package, _: &Config) -> Vec<Hit> {
    package
        .files_under(REFERENCES_DIR)
        .filter(|rel| rel.components().count() > MAX_REFERENCE_DEPTH)
        .map(|rel| {
            // Forward slashes keep the message identical across platforms.
            let shown = rel
                .components()
                .map(|c| c.as_os_str().to_string_lossy())
                .collect::<Vec<_>>()
                .join("/");
            Hit::new(format!(
                "deep nesting: {shown} (keep references one level deep)"
            ))
            .in_file(rel)
        })
        .collect()
}
