//! Frontmatter rules.
//!
//! # Rules
//!
//! | ID | Sev | What it checks |
//! |----|-----|----------------|
//! | `frontmatter/no-header` | Error | `SKILL.md` must open with a `---` block |
//! | `frontmatter/missing-name` | Error | `name` must be present and non-empty |
//! | `name/too-long` | Error | Name must be ≤ 64 characters |
//! | `name/invalid-shape` | Error | Name must be lowercase-kebab-case |
//! | `name/forbidden-word` | Error | Name must not contain "anthropic"/"claude" |
//! | `name/markup` | Error | No `<` or `>` in the name |
//! | `frontmatter/missing-description` | Error | `description` must be present and non-empty |
//! | `description/too-long` | Error | Description must be ≤ 1024 characters |
//! | `description/too-short` | Warning | Description should be ≥ 30 characters |
//! | `description/markup` | Error | No `<…>` in the description |
//! | `description/block-scalar` | Error | No `>-` / `|` block-scalar indicator |
//! | `description/first-person` | Warning | No "I can" / "I will" |
//! | `description/second-person` | Warning | No "you can" / "you should" |
//! | `description/no-trigger` | Warning | Should say when to use the skill |
//! | `frontmatter/unknown-field` | Warning | Keys must be in the allow-list |
//!
//! When the header is absent only `frontmatter/no-header` fires.

use crate::config::Config;
use crate::contract::{
    ALLOWED_FIELDS, BLOCK_SCALAR_INDICATORS, ENTRY_FILE, FIRST_PERSON_PHRASES,
    FIRST_PERSON_PREFIX, FORBIDDEN_NAME_WORDS, MAX_DESCRIPTION_LEN, MAX_NAME_LEN,
    MIN_DESCRIPTION_LEN, NAME_PATTERN, SECOND_PERSON_PHRASES, TRIGGER_PHRASES,
};
use crate::document::Header;
use crate::finding::{Category, Diagnostic, Severity};
use crate::rules::{evaluate_all, Hit, Rule, RuleMeta};
use regex::Regex;
use std::path::PathBuf;
use std::sync::LazyLock;

static RE_NAME: LazyLock<Regex> = LazyLock::new(|| Regex::new(NAME_PATTERN).unwrap());

pub static NO_HEADER: RuleMeta = RuleMeta {
    id: "frontmatter/no-header",
    severity: Severity::Error,
    category: Category::Frontmatter,
    summary: "No header block found (SKILL.md must start with ---)",
    remediation: "Open SKILL.md with a '---' line, the name and description fields, and a closing '---' line",
};

/// Header rules in evaluation order.
pub static RULES: &[Rule<Header>] = &[
    Rule {
        meta: RuleMeta {
            id: "frontmatter/missing-name",
            severity: Severity::Error,
            category: Category::Frontmatter,
            summary: "Missing name field",
            remediation: "Add 'name: my-skill' to the frontmatter",
        },
        check: missing_name,
    },
    Rule {
        meta: RuleMeta {
            id: "name/too-long",
            severity: Severity::Error,
            category: Category::Name,
            summary: "Name exceeds 64 characters",
            remediation: "Shorten the skill name to 64 characters or fewer",
        },
        check: name_too_long,
    },
    Rule {
        meta: RuleMeta {
            id: "name/invalid-shape",
            severity: Severity::Error,
            category: Category::Name,
            summary: "Name must be lowercase letters, digits, and interior hyphens",
            remediation: "Rename to lowercase-kebab-case (e.g. 'pdf-tools' not 'PDF Tools')",
        },
        check: name_invalid_shape,
    },
    Rule {
        meta: RuleMeta {
            id: "name/forbidden-word",
            severity: Severity::Error,
            category: Category::Name,
            summary: "Name contains a reserved word",
            remediation: "Choose a name that does not contain 'anthropic' or 'claude'",
        },
        check: name_forbidden_word,
    },
    Rule {
        meta: RuleMeta {
            id: "name/markup",
            severity: Severity::Error,
            category: Category::Name,
            summary: "Markup characters disallowed in name",
            remediation: "Remove '<' and '>' from the name field",
        },
        check: name_markup,
    },
    Rule {
        meta: RuleMeta {
            id: "frontmatter/missing-description",
            severity: Severity::Error,
            category: Category::Frontmatter,
            summary: "Missing description field",
            remediation: "Add a description saying what the skill does and when to use it",
        },
        check: missing_description,
    },
    Rule {
        meta: RuleMeta {
            id: "description/too-long",
            severity: Severity::Error,
            category: Category::Description,
            summary: "Description exceeds 1024 characters",
            remediation: "Shorten the description to 1024 characters or fewer",
        },
        check: description_too_long,
    },
    Rule {
        meta: RuleMeta {
            id: "description/too-short",
            severity: Severity::Warning,
            category: Category::Description,
            summary: "Description shorter than 30 characters",
            remediation: "Describe what the skill does and when it should be used",
        },
        check: description_too_short,
    },
    Rule {
        meta: RuleMeta {
            id: "description/markup",
            severity: Severity::Error,
            category: Category::Description,
            summary: "Markup characters disallowed in description",
            remediation: "Remove XML/HTML tags from the description field",
        },
        check: description_markup,
    },
    Rule {
        meta: RuleMeta {
            id: "description/block-scalar",
            severity: Severity::Error,
            category: Category::Description,
            summary: "Block-scalar indicators (>- or |) break downstream indexing",
            remediation: "Write the description on one line as a single-quoted string",
        },
        check: description_block_scalar,
    },
    Rule {
        meta: RuleMeta {
            id: "description/first-person",
            severity: Severity::Warning,
            category: Category::Description,
            summary: "Description should be third person (not 'I can/will')",
            remediation: "Rewrite in third person (e.g. 'Extracts tables from PDFs...')",
        },
        check: description_first_person,
    },
    Rule {
        meta: RuleMeta {
            id: "description/second-person",
            severity: Severity::Warning,
            category: Category::Description,
            summary: "Description should be third person (not 'you can/should')",
            remediation: "Rewrite in third person (e.g. 'Extracts tables from PDFs...')",
        },
        check: description_second_person,
    },
    Rule {
        meta: RuleMeta {
            id: "description/no-trigger",
            severity: Severity::Warning,
            category: Category::Description,
            summary: "Description is missing usage-trigger language",
            remediation: "Append 'Use when <specific trigger condition>.' to the description",
        },
        check: description_no_trigger,
    },
    Rule {
        meta: RuleMeta {
            id: "frontmatter/unknown-field",
            severity: Severity::Warning,
            category: Category::Frontmatter,
            summary: "Unknown frontmatter field",
            remediation: "Remove the field or move it under 'metadata'",
        },
        check: unknown_fields,
    },
];

/// Runs the header rules. A missing header yields exactly one diagnostic.
///
/// Every diagnostic points at the entry file.
pub fn check(header: Option<&Header>, config: &Config) -> Vec<Diagnostic> {
    let entry = Some(PathBuf::from(ENTRY_FILE));
    let Some(header) = header else {
        return vec![NO_HEADER.diagnostic(
            "no header block found (SKILL.md must start with ---)",
            entry,
        )];
    };

    let mut diagnostics = evaluate_all(RULES, header, config);
    for d in &mut diagnostics {
        if d.file.is_none() {
            d.file = entry.clone();
        }
    }
    diagnostics
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

// ---------------------------------------------------------------------------
// name
// ---------------------------------------------------------------------------

fn missing_name(header: &Header, _: &Config) -> Vec<Hit> {
    match header.non_empty("name") {
        Some(_) => vec![],
        None => vec![Hit::new("missing name field")],
    }
}

fn name_too_long(header: &Header, _: &Config) -> Vec<Hit> {
    let Some(name) = header.non_empty("name") else {
        return vec![];
    };
    let len = char_len(name);
    if len > MAX_NAME_LEN {
        vec![Hit::new(format!(
            "name too long: {len} chars (max {MAX_NAME_LEN})"
        ))]
    } else {
        vec![]
    }
}

fn name_invalid_shape(header: &Header, _: &Config) -> Vec<Hit> {
    match header.non_empty("name") {
        Some(name) if !RE_NAME.is_match(name) => vec![Hit::new(format!(
            "invalid shape: '{name}' must be lowercase letters, digits, and interior hyphens"
        ))],
        _ => vec![],
    }
}

fn name_forbidden_word(header: &Header, _: &Config) -> Vec<Hit> {
    let Some(name) = header.non_empty("name") else {
        return vec![];
    };
    let lower = name.to_lowercase();
    FORBIDDEN_NAME_WORDS
        .iter()
        .filter(|word| lower.contains(*word))
        .map(|word| Hit::new(format!("forbidden word '{word}' in name")))
        .collect()
}

fn name_markup(header: &Header, _: &Config) -> Vec<Hit> {
    match header.non_empty("name") {
        Some(name) if name.contains('<') || name.contains('>') => {
            vec![Hit::new("markup characters disallowed in name")]
        }
        _ => vec![],
    }
}

// ---------------------------------------------------------------------------
// description
// ---------------------------------------------------------------------------

fn missing_description(header: &Header, _: &Config) -> Vec<Hit> {
    match header.non_empty("description") {
        Some(_) => vec![],
        None => vec![Hit::new("missing description field")],
    }
}

/// Applies `test` to a present, non-empty description.
fn with_description(header: &Header, test: impl FnOnce(&str) -> Option<Hit>) -> Vec<Hit> {
    header
        .non_empty("description")
        .and_then(test)
        .into_iter()
        .collect()
}

fn description_too_long(header: &Header, _: &Config) -> Vec<Hit> {
    with_description(header, |desc| {
        let len = char_len(desc);
        (len > MAX_DESCRIPTION_LEN).then(|| {
            Hit::new(format!(
                "description too long: {len} chars (max {MAX_DESCRIPTION_LEN})"
            ))
        })
    })
}

fn description_too_short(header: &Header, _: &Config) -> Vec<Hit> {
    with_description(header, |desc| {
        let len = char_len(desc);
        (len < MIN_DESCRIPTION_LEN).then(|| {
            Hit::new(format!(
                "description too short: {len} chars (recommend at least {MIN_DESCRIPTION_LEN})"
            ))
        })
    })
}

fn description_markup(header: &Header, _: &Config) -> Vec<Hit> {
    with_description(header, |desc| {
        (desc.contains('<') && desc.contains('>'))
            .then(|| Hit::new("markup characters disallowed in description"))
    })
}

fn description_block_scalar(header: &Header, _: &Config) -> Vec<Hit> {
    // The parser cannot follow a block scalar onto the next lines, so the
    // indicator is all that survives. Look at the value before unquoting.
    let Some(field) = header.field("description").filter(|f| !f.value.is_empty()) else {
        return vec![];
    };
    if BLOCK_SCALAR_INDICATORS
        .iter()
        .any(|indicator| field.raw.starts_with(indicator))
    {
        vec![Hit::new(
            "block-scalar indicators (>- or |) break downstream indexing; use a single-quoted string",
        )]
    } else {
        vec![]
    }
}

fn description_first_person(header: &Header, _: &Config) -> Vec<Hit> {
    with_description(header, |desc| {
        let lower = desc.to_lowercase();
        (lower.starts_with(FIRST_PERSON_PREFIX)
            || FIRST_PERSON_PHRASES.iter().any(|p| lower.contains(p)))
        .then(|| Hit::new("description should be third person (not 'I can/will')"))
    })
}

fn description_second_person(header: &Header, _: &Config) -> Vec<Hit> {
    with_description(header, |desc| {
        let lower = desc.to_lowercase();
        SECOND_PERSON_PHRASES
            .iter()
            .any(|p| lower.contains(p))
            .then(|| Hit::new("description should be third person (not 'you can/should')"))
    })
}

fn description_no_trigger(header: &Header, _: &Config) -> Vec<Hit> {
    with_description(header, |desc| {
        let lower = desc.to_lowercase();
        (!TRIGGER_PHRASES.iter().any(|p| lower.contains(p))).then(|| {
            Hit::new("missing usage-trigger language (add 'Use when...' for better triggering)")
        })
    })
}

// ---------------------------------------------------------------------------
// unknown fields
// ---------------------------------------------------------------------------

fn unknown_fields(header: &Header, _: &Config) -> Vec<Hit> {
    header
        .keys()
        .filter(|key| !ALLOWED_FIELDS.contains(key))
        .map(|key| Hit::new(format!("unknown field '{key}'")))
        .collect()
}
