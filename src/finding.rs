use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Which part of the packaging contract a diagnostic is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Structure,
    Scripts,
    Frontmatter,
    Name,
    Description,
    Body,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Category::Structure => "structure",
            Category::Scripts => "scripts",
            Category::Frontmatter => "frontmatter",
            Category::Name => "name",
            Category::Description => "description",
            Category::Body => "body",
        };
        f.write_str(s)
    }
}

/// A single rule violation. Severity is fixed when the diagnostic is built.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Diagnostic {
    pub rule_id: String,
    pub severity: Severity,
    pub category: Category,
    pub message: String,
    /// Path relative to the package root, when the violation has one.
    pub file: Option<PathBuf>,
}

impl Diagnostic {
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.category, self.message)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationStatus {
    Passed,
    Warning,
    Failed,
}

/// Aggregated outcome of one validation run.
///
/// Diagnostics keep evaluation order (structure, frontmatter, body); the
/// report never sorts them.
#[derive(Debug, serde::Serialize)]
pub struct ValidationReport {
    pub skill: String,
    pub status: ValidationStatus,
    pub diagnostics: Vec<Diagnostic>,
    pub passed: bool,
}

impl ValidationReport {
    pub fn from_diagnostics(skill: &str, diagnostics: Vec<Diagnostic>, strict: bool) -> Self {
        let status = compute_status(&diagnostics, strict);
        ValidationReport {
            skill: skill.to_string(),
            status,
            passed: status != ValidationStatus::Failed,
            diagnostics,
        }
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.severity == Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
    }

    /// Count errors and warnings in a single pass. Returns `(errors, warnings)`.
    pub fn count_by_severity(&self) -> (usize, usize) {
        self.diagnostics
            .iter()
            .fold((0, 0), |(e, w), d| match d.severity {
                Severity::Error => (e + 1, w),
                Severity::Warning => (e, w + 1),
            })
    }

    /// Process exit code: `1` when the run failed, `0` otherwise.
    pub fn exit_code(&self) -> i32 {
        if self.passed {
            0
        } else {
            1
        }
    }
}

fn compute_status(diagnostics: &[Diagnostic], strict: bool) -> ValidationStatus {
    let (has_errors, has_warnings) =
        diagnostics
            .iter()
            .fold((false, false), |(e, w), d| match d.severity {
                Severity::Error => (true, w),
                Severity::Warning => (e, true),
            });

    if has_errors {
        ValidationStatus::Failed
    } else if has_warnings {
        if strict {
            ValidationStatus::Failed
        } else {
            ValidationStatus::Warning
        }
    } else {
        ValidationStatus::Passed
    }
}
