//! Fatal errors.
//!
//! Rule violations are never errors; they are [`Diagnostic`](crate::finding::Diagnostic)
//! values. A [`LintError`] means the run could not produce a report at all.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum LintError {
    #[error("Path not found: {}", .0.display())]
    PathNotFound(PathBuf),

    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Config file not found: {}", .0.display())]
    ConfigNotFound(PathBuf),

    #[error("Failed to read config {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config {}: {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl LintError {
    /// Exit code for the CLI: `1` for validation failures, `2` for usage errors.
    pub fn exit_code(&self) -> i32 {
        match self {
            LintError::PathNotFound(_) | LintError::NotADirectory(_) | LintError::Read { .. } => 1,
            LintError::ConfigNotFound(_)
            | LintError::ConfigRead { .. }
            | LintError::ConfigParse { .. } => 2,
        }
    }
}

pub type Result<T> = std::result::Result<T, LintError>;
