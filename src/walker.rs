use std::{
    path::{Path, PathBuf},
    time::SystemTime,
};

use chrono::{DateTime, Utc};

use crate::{error::Result, reference::EXTENSION};

/// A document file found at the top level of the corpus root.
#[derive(Debug, Clone)]
pub struct DiscoveredFile {
    /// File name, which doubles as the document identifier.
    pub identifier: String,
    /// Full path to the file.
    pub absolute_path: PathBuf,
}

/// List the eligible documents directly under `root`.
///
/// Only top-level entries are considered; subdirectories are not entered.
/// Symlinks are followed and kept when they resolve to a regular file.
/// Results are sorted by identifier so scan order is stable.
pub fn discover_files(root: &Path) -> Result<Vec<DiscoveredFile>> {
    let mut results = Vec::new();

    for entry in std::fs::read_dir(root)? {
        let entry = entry?;
        let Ok(name) = entry.file_name().into_string() else {
            tracing::debug!(path = %entry.path().display(), "skipping non UTF-8 name");
            continue;
        };

        if !name.ends_with(EXTENSION) {
            continue;
        }

        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        results.push(DiscoveredFile {
            identifier: name,
            absolute_path: path,
        });
    }

    results.sort_by(|a, b| a.identifier.cmp(&b.identifier));
    Ok(results)
}

/// Modification time of `path` as a UTC timestamp.
pub fn modified_at(path: &Path) -> Result<DateTime<Utc>> {
    let modified = std::fs::metadata(path)?
        .modified()
        .unwrap_or(SystemTime::UNIX_EPOCH);
    Ok(DateTime::<Utc>::from(modified))
}
