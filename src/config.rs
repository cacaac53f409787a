//! Configuration loading.
//!
//! The default configuration file is `oxidized-skill-lint.toml` in the
//! current working directory. Every field has a default, so the file can be
//! omitted entirely.
//!
//! ```toml
//! [strict]
//! enabled = true
//!
//! [checks]
//! scripts = false          # skip script syntax checks
//!
//! [interpreters]
//! python = "python3.12"
//! ```

use crate::error::{LintError, Result};
use std::path::Path;
use tracing::debug;

/// Name of the configuration file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "oxidized-skill-lint.toml";

/// Main configuration for a validation run.
///
/// # Examples
///
/// ```rust,no_run
/// use oxidized_skill_lint::config::Config;
///
/// // Load from the default location or fall back to built-in defaults.
/// let config = Config::load(None).unwrap();
/// ```
#[derive(Debug, Clone, Default, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct Config {
    /// When strict mode is enabled, warnings fail the run.
    pub strict: StrictConfig,
    /// Per-group on/off toggles.
    pub checks: ChecksConfig,
    /// Interpreters used for script syntax checks.
    pub interpreters: InterpretersConfig,
}

/// Strict-mode configuration.
///
/// Strict mode changes the verdict only. A warning stays a
/// [`Severity::Warning`](crate::finding::Severity::Warning) in the report.
#[derive(Debug, Clone, Default, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct StrictConfig {
    pub enabled: bool,
}

/// Rule-group toggles. All groups default to **enabled**.
///
/// The entry-file check is not a group and always runs.
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct ChecksConfig {
    /// Forbidden files, exclusion file, and reference nesting.
    pub structure: bool,
    /// Syntax-only parse of scripts under `scripts/`.
    pub scripts: bool,
    /// Header presence, `name`, `description`, and unknown fields.
    pub frontmatter: bool,
    /// Body length and heading checks.
    pub body: bool,
}

/// Programs invoked for syntax-only parsing.
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct InterpretersConfig {
    pub python: String,
    pub shell: String,
}

impl Default for ChecksConfig {
    fn default() -> Self {
        ChecksConfig {
            structure: true,
            scripts: true,
            frontmatter: true,
            body: true,
        }
    }
}

impl Default for InterpretersConfig {
    fn default() -> Self {
        InterpretersConfig {
            python: "python3".to_string(),
            shell: "bash".to_string(),
        }
    }
}

impl Config {
    /// Loads configuration from a TOML file.
    ///
    /// Resolution order:
    /// 1. If `path` is `Some`, load from that file (error if missing).
    /// 2. If `path` is `None`, try [`DEFAULT_CONFIG_FILE`] in the current directory.
    /// 3. If that file does not exist either, return [`Config::default()`].
    ///
    /// # Errors
    ///
    /// Returns [`LintError::ConfigNotFound`] for a missing explicit path,
    /// [`LintError::ConfigRead`] when the file cannot be read, and
    /// [`LintError::ConfigParse`] when the TOML is invalid.
    pub fn load(path: Option<&Path>) -> Result<Config> {
        let config_path = match path {
            Some(p) if p.exists() => Some(p.to_path_buf()),
            Some(p) => return Err(LintError::ConfigNotFound(p.to_path_buf())),
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                default_path.exists().then(|| default_path.to_path_buf())
            }
        };

        let Some(path) = config_path else {
            debug!("no config file, using defaults");
            return Ok(Config::default());
        };

        debug!(path = %path.display(), "loading config");
        let content = std::fs::read_to_string(&path).map_err(|source| LintError::ConfigRead {
            path: path.clone(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| LintError::ConfigParse { path, source })
    }
}
