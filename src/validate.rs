//! Validation orchestration.
//!
//! [`run_validation`] is the entry point for validating one skill package:
//!
//! 1. Rejects paths that do not exist or are not directories.
//! 2. Snapshots the package ([`Package::load`]).
//! 3. Stops with a single structure error when `SKILL.md` is absent.
//! 4. Evaluates the structure group and the frontmatter+body groups in
//!    parallel via [rayon], then concatenates them in the fixed order
//!    structure → frontmatter → body.
//! 5. Assembles the [`ValidationReport`].

use crate::config::Config;
use crate::error::{LintError, Result};
use crate::finding::{Diagnostic, ValidationReport};
use crate::package::Package;
use crate::rules::{body, frontmatter, structure};
use std::path::Path;
use tracing::debug;

/// Validates the skill package at `path`.
///
/// # Errors
///
/// Returns [`LintError::PathNotFound`] or [`LintError::NotADirectory`] for a
/// bad path, and [`LintError::Read`] when `SKILL.md` exists but cannot be read.
///
/// # Examples
///
/// ```rust,no_run
/// use std::path::Path;
/// use oxidized_skill_lint::{config::Config, validate};
///
/// let config = Config::load(None).unwrap();
/// let report = validate::run_validation(Path::new("./my-skill"), &config).unwrap();
///
/// std::process::exit(report.exit_code());
/// ```
pub fn run_validation(path: &Path, config: &Config) -> Result<ValidationReport> {
    if !path.exists() {
        return Err(LintError::PathNotFound(path.to_path_buf()));
    }
    if !path.is_dir() {
        return Err(LintError::NotADirectory(path.to_path_buf()));
    }

    // Resolve so that `.` still reports the directory's real name.
    let root = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
    let package = Package::load(&root)?;
    let diagnostics = evaluate(&package, config);

    Ok(ValidationReport::from_diagnostics(
        &package.name,
        diagnostics,
        config.strict.enabled,
    ))
}

/// Runs every enabled rule group against an already loaded package.
///
/// Returns diagnostics in evaluation order. A package without an entry file
/// yields exactly one diagnostic.
pub fn evaluate(package: &Package, config: &Config) -> Vec<Diagnostic> {
    let Some(document) = package.document.as_ref() else {
        debug!(package = %package.name, "entry file missing, skipping all other checks");
        return vec![structure::entry_missing()];
    };

    let (structural, content) = rayon::join(
        || structure::check(package, config),
        || {
            let mut diagnostics = Vec::new();
            if config.checks.frontmatter {
                diagnostics.extend(frontmatter::check(document.header.as_ref(), config));
            }
            if config.checks.body {
                diagnostics.extend(body::check(&document.body, config));
            }
            diagnostics
        },
    );

    debug!(
        package = %package.name,
        structure = structural.len(),
        content = content.len(),
        "rules evaluated"
    );
    structural.into_iter().chain(content).collect()
}
