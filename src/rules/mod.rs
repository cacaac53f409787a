//! Rule tables.
//!
//! Each rule group is an ordered, static table of [`Rule`] entries. A rule
//! pairs its metadata ([`RuleMeta`]) with a pure check function; the group's
//! entry point walks the table in order, so adding a rule never touches the
//! orchestration in [`validate`](crate::validate).
//!
//! | Group | Module | Context |
//! |-------|--------|---------|
//! | structure | [`structure`] | [`Package`](crate::package::Package) |
//! | scripts | [`scripts`] | files under `scripts/` |
//! | frontmatter | [`frontmatter`] | [`Header`](crate::document::Header) |
//! | body | [`body`] | body text |
//!
//! Use [`all_rules`] to list the whole catalogue.

pub mod body;
pub mod frontmatter;
pub mod scripts;
pub mod structure;

use crate::config::Config;
use crate::finding::{Category, Diagnostic, Severity};
use std::path::PathBuf;

/// Static description of a rule, shared by the checker and the
/// `list-rules` / `explain` commands.
#[derive(Debug)]
pub struct RuleMeta {
    /// Unique identifier (e.g. `"name/invalid-shape"`).
    pub id: &'static str,
    pub severity: Severity,
    pub category: Category,
    /// Short description of what the rule checks.
    pub summary: &'static str,
    /// Guidance on how to fix a violation.
    pub remediation: &'static str,
}

impl RuleMeta {
    pub fn diagnostic(&self, message: impl Into<String>, file: Option<PathBuf>) -> Diagnostic {
        Diagnostic {
            rule_id: self.id.to_string(),
            severity: self.severity,
            category: self.category,
            message: message.into(),
            file,
        }
    }
}

/// One violation reported by a check, before it is stamped with the rule's
/// severity and category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hit {
    pub message: String,
    pub file: Option<PathBuf>,
}

impl Hit {
    pub fn new(message: impl Into<String>) -> Self {
        Hit {
            message: message.into(),
            file: None,
        }
    }

    pub fn in_file(mut self, file: impl Into<PathBuf>) -> Self {
        self.file = Some(file.into());
        self
    }
}

/// A table entry: metadata plus a pure check over context `C`.
pub struct Rule<C: ?Sized> {
    pub meta: RuleMeta,
    pub check: fn(&C, &Config) -> Vec<Hit>,
}

impl<C: ?Sized> Rule<C> {
    pub fn evaluate(&self, ctx: &C, config: &Config) -> Vec<Diagnostic> {
        (self.check)(ctx, config)
            .into_iter()
            .map(|hit| self.meta.diagnostic(hit.message, hit.file))
            .collect()
    }
}

/// Evaluates `rules` in table order and concatenates their diagnostics.
pub fn evaluate_all<C: ?Sized>(rules: &[Rule<C>], ctx: &C, config: &Config) -> Vec<Diagnostic> {
    rules
        .iter()
        .flat_map(|rule| rule.evaluate(ctx, config))
        .collect()
}

/// Every rule in the catalogue, in evaluation order.
pub fn all_rules() -> Vec<&'static RuleMeta> {
    let mut rules = vec![&structure::ENTRY_MISSING];
    rules.extend(structure::TREE_RULES.iter().map(|r| &r.meta));
    rules.push(&scripts::SYNTAX_ERROR);
    rules.push(&scripts::UNCHECKED);
    rules.extend(structure::REFERENCE_RULES.iter().map(|r| &r.meta));
    rules.push(&frontmatter::NO_HEADER);
    rules.extend(frontmatter::RULES.iter().map(|r| &r.meta));
    rules.extend(body::RULES.iter().map(|r| &r.meta));
    rules
}

/// Looks up a rule by id.
pub fn find_rule(id: &str) -> Option<&'static RuleMeta> {
    all_rules().into_iter().find(|r| r.id == id)
}
