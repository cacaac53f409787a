//! # oxidized-skill-lint
//!
//! Packaging-contract linter for AI agent skills.
//!
//! A skill package is a directory holding a `SKILL.md` entry file (a flat
//! frontmatter header plus a markdown body) and optional `scripts/` and
//! `references/` trees. `oxidized-skill-lint` parses it once, evaluates a
//! fixed rule set, and reports categorized diagnostics with a pass/fail
//! verdict whose exit code automation can branch on.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use std::path::Path;
//! use oxidized_skill_lint::{config::Config, output, validate};
//!
//! let config = Config::load(None).expect("failed to load config");
//! let report = validate::run_validation(Path::new("./my-skill"), &config)
//!     .expect("not a skill directory");
//!
//! print!("{}", output::format_report(&report, &output::OutputFormat::Pretty));
//! std::process::exit(report.exit_code());
//! ```
//!
//! ## Architecture
//!
//! 1. **[`document`]** — tolerant frontmatter/body splitter.
//! 2. **[`package`]** — one-pass snapshot of the package directory.
//! 3. **[`rules`]** — static rule tables (structure, scripts, frontmatter, body).
//! 4. **[`validate`]** — orchestrates the groups and builds the report.
//! 5. **[`finding`]** — [`finding::Diagnostic`] and [`finding::ValidationReport`].
//! 6. **[`output`]** — pretty text, JSON, or SARIF.
//!
//! The contract's constants live in [`contract`]; [`config`] holds the
//! optional TOML configuration.

pub mod config;
pub mod contract;
pub mod document;
pub mod error;
pub mod finding;
pub mod logging;
pub mod output;
pub mod package;
pub mod rules;
pub mod validate;
