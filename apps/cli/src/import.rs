//! Resolving input paths and importing files.

use crate::output::SourceReport;
use anyhow::{Context, Result};
use simpletester_core::{ImporterDescriptor, SimpleTesterImporter};
use std::fs;
use std::path::{Path, PathBuf};

/// Expand `paths` into the list of files to import.
///
/// Files are kept as given. Directories contribute their direct children
/// that the descriptor accepts, sorted by path.
pub fn collect_files(paths: &[PathBuf], descriptor: &ImporterDescriptor) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for path in paths {
        if !path.is_dir() {
            files.push(path.clone());
            continue;
        }

        let mut found = Vec::new();
        for entry in fs::read_dir(path)
            .with_context(|| format!("failed to read directory {}", path.display()))?
        {
            let entry_path = entry?.path();
            if entry_path.is_file() && descriptor.matches(&entry_path) {
                found.push(entry_path);
            }
        }

        if found.is_empty() {
            tracing::warn!("No {} files in {}", descriptor.name, path.display());
        }
        found.sort();
        files.extend(found);
    }

    Ok(files)
}

/// Import a single database file.
pub fn import_file(path: &Path, importer: &SimpleTesterImporter) -> Result<SourceReport> {
    let bytes = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    let notes = importer
        .import_bytes(&bytes)
        .with_context(|| format!("failed to import {}", path.display()))?;

    tracing::debug!(path = %path.display(), notes = notes.len(), "Imported file");

    Ok(SourceReport {
        path: path.to_string_lossy().to_string(),
        notes,
    })
}
