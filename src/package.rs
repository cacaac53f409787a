//! On-disk snapshot of a skill package.
//!
//! [`Package::load`] reads everything the rules need in one pass, so rule
//! evaluation never touches the file system again (script syntax checks
//! excepted, since they hand files to an interpreter).

use crate::contract::{ENTRY_FILE, EXCLUSION_FILE, SKIPPED_DIRS};
use crate::document::Document;
use crate::error::{LintError, Result};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

#[derive(Debug, Clone)]
pub struct Package {
    pub root: PathBuf,
    /// Directory name, shown in the report banner.
    pub name: String,
    /// Parsed entry file; `None` when the entry file is absent.
    pub document: Option<Document>,
    /// Every regular file, relative to `root`, sorted.
    pub files: BTreeSet<PathBuf>,
    /// Names of the entries directly under `root`, sorted.
    pub top_level: Vec<String>,
    /// Contents of the exclusion file, when there is one.
    pub gitignore: Option<String>,
}

impl Package {
    /// Snapshots the package rooted at `root`.
    ///
    /// # Errors
    ///
    /// Returns [`LintError::Read`] when the entry file exists but cannot be
    /// read. Unreadable tree entries are skipped.
    pub fn load(root: &Path) -> Result<Package> {
        let entry_path = root.join(ENTRY_FILE);
        let document = if entry_path.is_file() {
            let bytes = std::fs::read(&entry_path).map_err(|source| LintError::Read {
                path: entry_path.clone(),
                source,
            })?;
            Some(Document::parse(&String::from_utf8_lossy(&bytes)))
        } else {
            None
        };

        let gitignore_path = root.join(EXCLUSION_FILE);
        let gitignore = gitignore_path.is_file().then(|| {
            std::fs::read(&gitignore_path)
                .map(|b| String::from_utf8_lossy(&b).into_owned())
                .unwrap_or_default()
        });

        let (files, top_level) = walk(root);
        debug!(
            root = %root.display(),
            files = files.len(),
            has_entry = document.is_some(),
            "package loaded"
        );

        Ok(Package {
            root: root.to_path_buf(),
            name: package_name(root),
            document,
            files,
            top_level,
            gitignore,
        })
    }

    pub fn has_gitignore(&self) -> bool {
        self.gitignore.is_some()
    }

    /// Files whose first component is `dir`.
    pub fn files_under<'a>(&'a self, dir: &'a str) -> impl Iterator<Item = &'a PathBuf> + 'a {
        self.files.iter().filter(move |p| p.starts_with(dir))
    }

    /// Files directly inside `dir` (no subdirectories).
    pub fn files_directly_in<'a>(&'a self, dir: &'a str) -> impl Iterator<Item = &'a PathBuf> + 'a {
        self.files
            .iter()
            .filter(move |p| p.parent() == Some(Path::new(dir)))
    }
}

fn walk(root: &Path) -> (BTreeSet<PathBuf>, Vec<String>) {
    let mut files = BTreeSet::new();
    let mut top_level = Vec::new();

    let walker = WalkDir::new(root)
        .min_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| {
            !(e.depth() == 1
                && e.file_type().is_dir()
                && SKIPPED_DIRS.contains(&e.file_name().to_string_lossy().as_ref()))
        });

    for entry in walker.filter_map(|e| e.ok()) {
        if entry.depth() == 1 {
            top_level.push(entry.file_name().to_string_lossy().into_owned());
        }
        if entry.file_type().is_file() {
            if let Ok(rel) = entry.path().strip_prefix(root) {
                files.insert(rel.to_path_buf());
            }
        }
    }

    (files, top_level)
}

/// Returns the last path component or `"unknown"` when the path has none.
fn package_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}
