//! Directory scanning and extension filtering
//!
//! Finds the regular files in a directory that are worth encoding: hidden
//! files and files without an extension are always passed over, and the
//! ignore list excludes the rest by extension.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::IgnoreList;

/// Whether a file name survives the ignore rules.
///
/// The check works on the file NAME, not the full path:
/// - hidden names (leading `.`) are never eligible
/// - names without an extension are never eligible
/// - otherwise the text after the final `.` must not be on the ignore list
pub fn is_eligible(name: &str, ignored: &IgnoreList) -> bool {
    if name.starts_with('.') {
        return false;
    }
    match name.rsplit_once('.') {
        Some((_, extension)) => !ignored.contains(extension),
        None => false,
    }
}

/// List the files in `dir` that are eligible for encoding.
///
/// Only regular files count; directories and symlinks to directories are
/// skipped. The result follows the order of the underlying directory
/// listing, which is platform-dependent.
pub fn eligible_files(dir: &Path, ignored: &IgnoreList) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("failed to read directory {}", dir.display()))?;

    let mut eligible = Vec::new();
    for entry in entries {
        let entry = entry
            .with_context(|| format!("failed to read an entry of {}", dir.display()))?;
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            tracing::debug!("skipping non-UTF-8 file name {:?}", name);
            continue;
        };

        // Metadata after following symlinks, so a link to a file still counts
        let is_file = entry.path().metadata().map_or(false, |meta| meta.is_file());
        if is_file && is_eligible(name, ignored) {
            eligible.push(entry.path());
        }
    }

    Ok(eligible)
}
