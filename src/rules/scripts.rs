//! Syntax-only checks for scripts shipped under `scripts/`.
//!
//! Each [`SyntaxChecker`] hands a file to an external interpreter in
//! parse-only mode:
//!
//! | Checker | Extensions | Invocation |
//! |---------|------------|------------|
//! | [`PythonChecker`] | `py` | `python3 -I -B -c <snippet> <file>` (`ast.parse`) |
//! | [`ShellChecker`] | `sh`, `bash` | `bash -n <file>` |
//!
//! Only genuine syntax errors become errors. A non-UTF-8 source or a failed
//! spawn leaves the file unchecked without a diagnostic. When the
//! interpreter itself is missing, every file it would have parsed gets a
//! `scripts/unchecked` warning so the verdict still shows the gap (and
//! `--strict` fails).

use crate::config::Config;
use crate::contract::SCRIPTS_DIR;
use crate::finding::{Category, Diagnostic, Severity};
use crate::package::Package;
use crate::rules::RuleMeta;
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::{debug, warn};

pub static SYNTAX_ERROR: RuleMeta = RuleMeta {
    id: "scripts/syntax-error",
    severity: Severity::Error,
    category: Category::Scripts,
    summary: "Script under scripts/ does not parse",
    remediation: "Fix the syntax error; the agent runs these scripts verbatim",
};

pub static UNCHECKED: RuleMeta = RuleMeta {
    id: "scripts/unchecked",
    severity: Severity::Warning,
    category: Category::Scripts,
    summary: "Script left unchecked because its interpreter is not installed",
    remediation: "Install the interpreter or point [interpreters] in the config at one",
};

/// Exit status the Python parse snippet uses to signal a `SyntaxError`.
const PY_SYNTAX_EXIT: i32 = 3;

/// Reads the file as UTF-8 and parses it. Anything other than a
/// `SyntaxError` exits 0 so the caller treats the file as unchecked.
const PY_PARSE: &str = r#"import ast, sys
try:
    with open(sys.argv[1], encoding="utf-8") as f:
        source = f.read()
except Exception:
    sys.exit(0)
try:
    ast.parse(source, filename=sys.argv[2])
except SyntaxError as e:
    print(e)
    sys.exit(3)
except Exception:
    sys.exit(0)
"#;

/// Result of a syntax-only parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyntaxOutcome {
    Valid,
    /// The file does not parse; carries the interpreter's one-line detail.
    Invalid(String),
    /// The file could not be judged (tool missing, bad encoding, spawn failure).
    Unchecked,
}

/// A parse-only checker backed by an external interpreter.
///
/// Implementers must be [`Send`] + [`Sync`]; files are checked in parallel
/// via [rayon].
pub trait SyntaxChecker: Send + Sync {
    /// Short identifier (e.g. `"python"`).
    fn name(&self) -> &'static str;

    /// Program invoked for the check.
    fn program(&self) -> &str;

    /// Lowercase file extensions this checker understands.
    fn extensions(&self) -> &'static [&'static str];

    /// Returns `true` if [`program`](SyntaxChecker::program) is on `PATH`.
    fn is_available(&self) -> bool {
        which_exists(self.program())
    }

    /// Parses `file` without executing it. `display_name` is used in details.
    fn check(&self, file: &Path, display_name: &str) -> SyntaxOutcome;

    fn handles(&self, file: &Path) -> bool {
        file.extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .is_some_and(|e| self.extensions().contains(&e.as_str()))
    }
}

pub struct PythonChecker {
    pub interpreter: String,
}

impl SyntaxChecker for PythonChecker {
    fn name(&self) -> &'static str {
        "python"
    }

    fn program(&self) -> &str {
        &self.interpreter
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["py"]
    }

    fn check(&self, file: &Path, display_name: &str) -> SyntaxOutcome {
        let output = match Command::new(&self.interpreter)
            .args(["-I", "-B", "-c", PY_PARSE])
            .arg(file)
            .arg(display_name)
            .output()
        {
            Ok(o) => o,
            Err(e) => {
                debug!(file = %file.display(), error = %e, "failed to run python");
                return SyntaxOutcome::Unchecked;
            }
        };

        match output.status.code() {
            Some(0) => SyntaxOutcome::Valid,
            Some(PY_SYNTAX_EXIT) => {
                let detail = first_line(&String::from_utf8_lossy(&output.stdout));
                SyntaxOutcome::Invalid(detail)
            }
            _ => SyntaxOutcome::Unchecked,
        }
    }
}

pub struct ShellChecker {
    pub interpreter: String,
}

impl SyntaxChecker for ShellChecker {
    fn name(&self) -> &'static str {
        "shell"
    }

    fn program(&self) -> &str {
        &self.interpreter
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["sh", "bash"]
    }

    fn check(&self, file: &Path, _display_name: &str) -> SyntaxOutcome {
        let output = match Command::new(&self.interpreter).arg("-n").arg(file).output() {
            Ok(o) => o,
            Err(e) => {
                debug!(file = %file.display(), error = %e, "failed to run shell");
                return SyntaxOutcome::Unchecked;
            }
        };

        if output.status.success() {
            return SyntaxOutcome::Valid;
        }

        // bash prefixes each message with the path it was given.
        let stderr = String::from_utf8_lossy(&output.stderr);
        let prefix = format!("{}: ", file.display());
        let detail = first_line(&stderr);
        if !detail.contains("syntax error") {
            return SyntaxOutcome::Unchecked;
        }
        match detail.strip_prefix(&prefix) {
            Some(rest) => SyntaxOutcome::Invalid(rest.to_string()),
            None => SyntaxOutcome::Invalid(detail),
        }
    }
}

/// Checkers configured by `[interpreters]`, in a fixed order.
pub fn checkers(config: &Config) -> Vec<Box<dyn SyntaxChecker>> {
    vec![
        Box::new(PythonChecker {
            interpreter: config.interpreters.python.clone(),
        }),
        Box::new(ShellChecker {
            interpreter: config.interpreters.shell.clone(),
        }),
    ]
}

/// Checks every script directly under `scripts/`, in sorted path order.
pub fn check(package: &Package, config: &Config) -> Vec<Diagnostic> {
    let checkers = checkers(config);

    let jobs: Vec<(&PathBuf, &dyn SyntaxChecker)> = package
        .files_directly_in(SCRIPTS_DIR)
        .filter_map(|rel| {
            checkers
                .iter()
                .find(|c| c.handles(rel))
                .map(|c| (rel, c.as_ref()))
        })
        .collect();

    let mut missing: Vec<&str> = jobs
        .iter()
        .map(|(_, c)| *c)
        .filter(|c| !c.is_available())
        .map(|c| c.program())
        .collect();
    missing.sort_unstable();
    missing.dedup();
    for program in &missing {
        warn!(program, "interpreter not found on PATH, scripts left unchecked");
    }

    jobs.par_iter()
        .filter_map(|(rel, checker)| {
            let display_name = rel
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            if missing.contains(&checker.program()) {
                return Some(UNCHECKED.diagnostic(
                    format!(
                        "script not checked: {display_name} ({} not found on PATH)",
                        checker.program()
                    ),
                    Some((*rel).clone()),
                ));
            }
            match checker.check(&package.root.join(rel), &display_name) {
                SyntaxOutcome::Invalid(detail) => Some(SYNTAX_ERROR.diagnostic(
                    format!("syntax error in {display_name}: {detail}"),
                    Some((*rel).clone()),
                )),
                SyntaxOutcome::Valid => None,
                SyntaxOutcome::Unchecked => {
                    debug!(file = %rel.display(), checker = checker.name(), "script left unchecked");
                    None
                }
            }
        })
        .collect()
}

fn first_line(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .find(|l| !l.is_empty())
        .unwrap_or("")
        .to_string()
}

/// Returns `true` if an executable named `cmd` exists on `PATH`.
///
/// A `cmd` containing a path separator is checked directly. On Unix the
/// file must also have an executable permission bit set.
pub fn which_exists(cmd: &str) -> bool {
    let direct = Path::new(cmd);
    if direct.components().count() > 1 {
        return is_executable(direct);
    }
    std::env::var_os("PATH")
        .map(|path| std::env::split_paths(&path).any(|dir| is_executable(&dir.join(cmd))))
        .unwrap_or(false)
}

fn is_executable(candidate: &Path) -> bool {
    if !candidate.is_file() {
        return false;
    }
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::metadata(candidate)
            .map(|m| m.permissions().mode() & 0o111 != 0)
            .unwrap_or(false)
    }
    #[cfg(not(unix))]
    {
        true
    }
}
