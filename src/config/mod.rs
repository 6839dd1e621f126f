//! Ignore-list preferences
//!
//! The ignore list is the set of file extensions that directory scans skip.
//! It lives in a per-user preference file, one extension per line, and is
//! created with built-in defaults the first time the tool runs. Every
//! mutation rewrites the file in full; the rewrite goes through a temp file
//! in the same directory followed by a rename so a failure mid-write cannot
//! lose the list.

use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::PathBuf;

/// Extensions ignored until the user edits the list.
pub const DEFAULT_IGNORED: &[&str] = &["pxm", "py", "txt", "text", "html", "md", "markdown"];

const PREFS_DIR: &str = ".config/hexstr";
const PREFS_FILE: &str = "ignored";

/// The set of file extensions excluded from directory scans.
///
/// Extensions are stored without their leading dot, kept in insertion order
/// and duplicate-free. Matching is exact and case-sensitive.
#[derive(Debug, Clone)]
pub struct IgnoreList {
    extensions: Vec<String>,
    path: PathBuf,
}

impl IgnoreList {
    /// Load the per-user ignore list, creating the preference file with the
    /// default set if it does not exist yet.
    pub fn load() -> Result<Self> {
        Self::load_from(Self::default_path()?)
    }

    /// Read the per-user ignore list without touching the disk.
    ///
    /// Used by help output: a missing preference file yields the default set
    /// in memory and nothing is written.
    pub fn peek() -> Result<Self> {
        let path = Self::default_path()?;
        if path.exists() {
            Self::load_from(path)
        } else {
            Ok(Self::with_defaults(path))
        }
    }

    /// Load an ignore list from an explicit preference path.
    ///
    /// An existing file replaces the built-in defaults entirely; there is no
    /// merging. A missing file is created with the defaults.
    pub fn load_from(path: PathBuf) -> Result<Self> {
        if path.exists() {
            let raw = fs::read_to_string(&path)
                .with_context(|| format!("failed to read preference file {}", path.display()))?;
            let extensions = raw
                .lines()
                .map(|line| line.trim_end().to_string())
                .filter(|line| !line.is_empty())
                .collect();
            tracing::debug!("loaded preference file {}", path.display());
            Ok(Self { extensions, path })
        } else {
            let list = Self::with_defaults(path);
            list.save()?;
            tracing::debug!("created preference file {}", list.path.display());
            Ok(list)
        }
    }

    fn with_defaults(path: PathBuf) -> Self {
        Self {
            extensions: DEFAULT_IGNORED.iter().map(|ext| ext.to_string()).collect(),
            path,
        }
    }

    fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().context("could not determine the home directory")?;
        Ok(home.join(PREFS_DIR).join(PREFS_FILE))
    }

    /// Whether an extension is on the ignore list.
    pub fn contains(&self, extension: &str) -> bool {
        self.extensions.iter().any(|ext| ext == extension)
    }

    /// The ignored extensions, in stored order.
    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    /// Add or remove extensions, then persist the updated list.
    ///
    /// Each token may itself be a comma-joined sub-list (eg. `"rtf,pdf"`);
    /// tokens are flattened before membership changes are applied. Adding a
    /// present extension or removing an absent one is a no-op, not an error.
    /// Empty fragments left over from flattening are discarded. Returns the
    /// extensions actually changed.
    pub fn update(&mut self, tokens: &[String], add: bool) -> Result<Vec<String>> {
        let mut changed = Vec::new();

        for ext in tokens.iter().flat_map(|token| token.split(',')) {
            if ext.is_empty() {
                continue;
            }
            let present = self.contains(ext);
            if add && !present {
                self.extensions.push(ext.to_string());
                changed.push(ext.to_string());
            } else if !add && present {
                self.extensions.retain(|e| e != ext);
                changed.push(ext.to_string());
            }
        }

        // Full rewrite on every mutation, changed or not
        self.save()?;
        Ok(changed)
    }

    /// Rewrite the preference file from the in-memory list.
    fn save(&self) -> Result<()> {
        let dir = self
            .path
            .parent()
            .context("preference path has no parent directory")?;
        fs::create_dir_all(dir)
            .with_context(|| format!("failed to create {}", dir.display()))?;

        // Temp file in the target directory so the rename stays on one filesystem
        let mut tmp = tempfile::NamedTempFile::new_in(dir)
            .with_context(|| format!("failed to create a temp file in {}", dir.display()))?;
        for ext in &self.extensions {
            writeln!(tmp, "{ext}")?;
        }
        tmp.persist(&self.path)
            .map_err(|err| err.error)
            .with_context(|| format!("failed to write preference file {}", self.path.display()))?;

        tracing::debug!("wrote preference file {}", self.path.display());
        Ok(())
    }
}
