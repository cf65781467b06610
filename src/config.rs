//! Server configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// File names of the plain-text metadata files stored next to each video
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidecarNames {
    pub title: String,
    pub author: String,
    pub description: String,
    pub classification: String,
}

impl Default for SidecarNames {
    fn default() -> Self {
        Self {
            title: "title".to_string(),
            author: "author".to_string(),
            description: "description".to_string(),
            classification: "classification".to_string(),
        }
    }
}

/// Video library configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Directory holding one subdirectory per video
    pub root: PathBuf,

    /// Sidecar file names
    pub sidecars: SidecarNames,

    /// Extension of the payload file, `<name>/<name>.<ext>`
    pub payload_extension: String,

    /// Create the root directory at startup if it does not exist
    pub create_root: bool,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("/var/daaya/videos"),
            sidecars: SidecarNames::default(),
            payload_extension: "mp4".to_string(),
            create_root: true,
        }
    }
}

impl CatalogConfig {
    /// Configuration with default sidecar names rooted at `root`
    #[cfg(test)]
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Default::default()
        }
    }
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host address to bind to
    pub host: String,

    /// Port to listen on
    pub port: u16,

    /// Video library configuration
    pub catalog: CatalogConfig,

    /// Enable CORS
    pub cors_enabled: bool,

    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,

    /// Log output format (pretty, json)
    pub log_format: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            catalog: CatalogConfig::default(),
            cors_enabled: true,
            log_level: "info".to_string(),
            log_format: "pretty".to_string(),
        }
    }
}

impl ServerConfig {
    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Whether log lines should be emitted as JSON
    pub fn json_logs(&self) -> bool {
        self.log_format.eq_ignore_ascii_case("json")
    }
}
