//! The packaging contract as static data.
//!
//! Every file name, threshold, and word list the rule tables consult lives
//! here so the contract can be audited (and tested) without reading any
//! control flow.

/// File every skill package must contain at its root.
pub const ENTRY_FILE: &str = "SKILL.md";

/// Line that opens and closes the frontmatter block.
pub const HEADER_DELIMITER: &str = "---";

/// Auxiliary documents that must not ship inside a skill package.
pub const FORBIDDEN_FILES: &[&str] = &[
    "README.md",
    "INSTALLATION_GUIDE.md",
    "QUICK_REFERENCE.md",
    "CHANGELOG.md",
    "SETUP.md",
    "CONTRIBUTING.md",
];

/// Substrings a skill name must not contain (matched case-insensitively).
pub const FORBIDDEN_NAME_WORDS: &[&str] = &["anthropic", "claude"];

/// Frontmatter keys recognised by the skill runtime.
pub const ALLOWED_FIELDS: &[&str] = &[
    "name",
    "description",
    "argument-hint",
    "disable-model-invocation",
    "user-invocable",
    "allowed-tools",
    "model",
    "context",
    "agent",
    "hooks",
    "license",
    "compatibility",
    "metadata",
];

pub const MAX_NAME_LEN: usize = 64;
pub const MAX_DESCRIPTION_LEN: usize = 1024;
pub const MIN_DESCRIPTION_LEN: usize = 30;

/// Hard cap on body lines; crossing 80% of it earns a warning.
pub const MAX_BODY_LINES: usize = 500;
pub const BODY_WARN_LINES: usize = MAX_BODY_LINES * 4 / 5;
pub const MIN_BODY_LINES: usize = 5;

/// Prefix of a top-level markdown heading.
pub const TOP_LEVEL_HEADING: &str = "# ";

/// Lowercase shape of a valid skill name.
pub const NAME_PATTERN: &str = r"^[a-z0-9][a-z0-9-]*[a-z0-9]$|^[a-z0-9]$";

/// Description prefixes that give away a block scalar (`>-` folded, `|` literal).
pub const BLOCK_SCALAR_INDICATORS: &[&str] = &[">-", "|"];

/// First-person phrasing, checked against the lowercased description.
pub const FIRST_PERSON_PREFIX: &str = "i ";
pub const FIRST_PERSON_PHRASES: &[&str] = &["i can", "i will"];

/// Second-person phrasing, checked against the lowercased description.
pub const SECOND_PERSON_PHRASES: &[&str] = &["you can", "you should"];

/// At least one of these must appear so the runtime knows when to trigger the skill.
pub const TRIGGER_PHRASES: &[&str] = &["use when", "use this"];

/// Exclusion file expected at the package root.
pub const EXCLUSION_FILE: &str = ".gitignore";

/// Patterns the exclusion file must mention.
pub const REQUIRED_EXCLUSIONS: &[&str] = &[".venv", "__pycache__"];

pub const SCRIPTS_DIR: &str = "scripts";
pub const REFERENCES_DIR: &str = "references";

/// `skill/references/subdir/file` is as deep as a reference may go.
pub const MAX_REFERENCE_DEPTH: usize = 3;

/// Top-level directories never walked when snapshotting a package. They
/// hold environments and VCS metadata, not skill content.
pub const SKIPPED_DIRS: &[&str] = &[".git", ".venv", "node_modules", "__pycache__"];
