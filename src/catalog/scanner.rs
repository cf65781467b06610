//! Catalog scanner - derives one video record per directory under the root
//!
//! Every directory below the root (at any depth) is an entry. Each entry
//! may carry plain-text sidecar files named after the field they supply.
//! A missing or unreadable sidecar never fails the scan; only a root that
//! cannot be listed does.

use std::io;
use std::path::Path;

use walkdir::WalkDir;

use crate::config::SidecarNames;
use crate::error::{CatalogError, CatalogResult};

use super::record::VideoRecord;

/// Outcome of reading one sidecar file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sidecar {
    /// File was read; holds the whitespace-trimmed text
    Present(String),
    /// File does not exist
    Absent,
    /// File exists but could not be read
    Unreadable(io::ErrorKind),
}

impl Sidecar {
    /// Read `dir/name`. Invalid UTF-8 is replaced rather than rejected.
    pub fn read(dir: &Path, name: &str) -> Self {
        let path = dir.join(name);
        match std::fs::read(&path) {
            Ok(bytes) => Sidecar::Present(String::from_utf8_lossy(&bytes).trim().to_string()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!("No '{}' sidecar in {:?}", name, dir);
                Sidecar::Absent
            }
            Err(e) => {
                tracing::warn!("Could not read sidecar {:?}: {}", path, e);
                Sidecar::Unreadable(e.kind())
            }
        }
    }

    /// Field value; empty unless the file was read
    pub fn into_text(self) -> String {
        match self {
            Sidecar::Present(text) => text,
            Sidecar::Absent | Sidecar::Unreadable(_) => String::new(),
        }
    }
}

/// All sidecars of one entry directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntrySidecars {
    pub title: Sidecar,
    pub author: Sidecar,
    pub description: Sidecar,
    pub classification: Sidecar,
}

impl EntrySidecars {
    pub fn read(dir: &Path, names: &SidecarNames) -> Self {
        Self {
            title: Sidecar::read(dir, &names.title),
            author: Sidecar::read(dir, &names.author),
            description: Sidecar::read(dir, &names.description),
            classification: Sidecar::read(dir, &names.classification),
        }
    }

    pub fn into_record(self, filename: String) -> VideoRecord {
        VideoRecord::new(
            filename,
            self.title.into_text(),
            self.author.into_text(),
            self.description.into_text(),
            self.classification.into_text(),
        )
    }
}

/// Build the record for a single entry directory
pub fn read_entry(dir: &Path, names: &SidecarNames) -> VideoRecord {
    let filename = dir
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    EntrySidecars::read(dir, names).into_record(filename)
}

/// Scan `root` and return one record per directory below it.
///
/// Entries are visited in file-name order within each directory, parents
/// before their children.
pub fn scan_dir(root: &Path, names: &SidecarNames) -> CatalogResult<Vec<VideoRecord>> {
    std::fs::read_dir(root).map_err(|source| CatalogError::RootUnreadable {
        path: root.to_path_buf(),
        source,
    })?;

    let mut records = Vec::new();
    for entry in WalkDir::new(root).min_depth(1).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if e.depth() == 0 => return Err(e.into()),
            Err(e) => {
                tracing::warn!("Skipping unreadable path in catalog: {}", e);
                continue;
            }
        };

        if !entry.file_type().is_dir() {
            continue;
        }

        records.push(read_entry(entry.path(), names));
    }

    tracing::debug!("Scanned {} catalog entries under {:?}", records.len(), root);
    Ok(records)
}
