//! Video catalog module
//!
//! This module turns the on-disk video library into structured records:
//! - Directory walk, one record per entry directory
//! - Sidecar metadata files (title, author, description, classification)
//! - Classification parsing into a fixed five-rank taxonomy
//! - Rank/value filtering
//! - Payload path resolution for streaming

pub mod record;
pub mod scanner;
pub mod taxonomy;

use std::path::{Component, Path, PathBuf};

use crate::config::CatalogConfig;
use crate::error::{CatalogError, CatalogResult};

pub use record::VideoRecord;
use scanner::scan_dir;
pub use taxonomy::filter_by_taxonomy;

/// Filesystem-backed video catalog.
///
/// Holds no state besides its configuration; every scan walks the disk again.
#[derive(Debug, Clone)]
pub struct Catalog {
    config: CatalogConfig,
}

impl Catalog {
    pub fn new(config: CatalogConfig) -> Self {
        Self { config }
    }

    /// Scan the catalog root
    pub fn scan(&self) -> CatalogResult<Vec<VideoRecord>> {
        scan_dir(&self.config.root, &self.config.sidecars)
    }

    /// Resolve `<root>/<name>/<name>.<ext>` for a request-supplied name.
    ///
    /// The name must be a single plain path component; the catalog is not
    /// consulted, only the filesystem. Blocking: call it off the async
    /// executor.
    pub fn video_path(&self, name: &str) -> CatalogResult<PathBuf> {
        validate_name(name)?;

        let path = self
            .config
            .root
            .join(name)
            .join(format!("{}.{}", name, self.config.payload_extension));

        if !path.is_file() {
            return Err(CatalogError::VideoNotFound(name.to_string()));
        }
        Ok(path)
    }
}

fn validate_name(name: &str) -> CatalogResult<()> {
    if name.is_empty() || name.contains(['/', '\\', '\0']) {
        return Err(CatalogError::InvalidName(name.to_string()));
    }

    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(c)), None) if c == name => Ok(()),
        _ => Err(CatalogError::InvalidName(name.to_string())),
    }
}
