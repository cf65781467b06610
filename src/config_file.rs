//! Configuration file support
//!
//! Loads server configuration from TOML files.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::config::{CatalogConfig, ServerConfig, SidecarNames};

/// Configuration file format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Server settings
    pub server: ServerSettings,
    /// Video library settings
    pub catalog: CatalogSettings,
    /// Logging settings
    pub logging: Option<LoggingSettings>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    /// Host address to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Enable CORS
    pub cors_enabled: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogSettings {
    /// Directory holding one subdirectory per video
    pub root: PathBuf,
    /// Payload file extension
    pub payload_extension: Option<String>,
    /// Create the root directory at startup
    pub create_root: Option<bool>,
    /// Sidecar file name overrides
    pub sidecars: Option<SidecarSettings>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SidecarSettings {
    pub title: Option<String>,
    pub author: Option<String>,
    pub description: Option<String>,
    pub classification: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Output format (json, pretty)
    pub format: Option<String>,
}

impl SidecarSettings {
    fn into_names(self) -> SidecarNames {
        let defaults = SidecarNames::default();
        SidecarNames {
            title: self.title.unwrap_or(defaults.title),
            author: self.author.unwrap_or(defaults.author),
            description: self.description.unwrap_or(defaults.description),
            classification: self.classification.unwrap_or(defaults.classification),
        }
    }
}

impl ConfigFile {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: ConfigFile = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), Box<dyn std::error::Error>> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path.as_ref(), content)?;
        Ok(())
    }

    /// Generate default configuration file
    pub fn default_config() -> Self {
        let defaults = CatalogConfig::default();
        Self {
            server: ServerSettings {
                host: "0.0.0.0".to_string(),
                port: 8080,
                cors_enabled: Some(true),
            },
            catalog: CatalogSettings {
                root: defaults.root,
                payload_extension: Some(defaults.payload_extension),
                create_root: Some(defaults.create_root),
                sidecars: None,
            },
            logging: Some(LoggingSettings {
                level: "info".to_string(),
                format: Some("pretty".to_string()),
            }),
        }
    }

    /// Convert to ServerConfig
    pub fn into_server_config(self) -> ServerConfig {
        let defaults = ServerConfig::default();
        let (log_level, log_format) = match self.logging {
            Some(l) => (l.level, l.format.unwrap_or(defaults.log_format)),
            None => (defaults.log_level, defaults.log_format),
        };

        ServerConfig {
            host: self.server.host,
            port: self.server.port,
            catalog: CatalogConfig {
                root: self.catalog.root,
                sidecars: self.catalog.sidecars.unwrap_or_default().into_names(),
                payload_extension: self
                    .catalog
                    .payload_extension
                    .unwrap_or(defaults.catalog.payload_extension),
                create_root: self
                    .catalog
                    .create_root
                    .unwrap_or(defaults.catalog.create_root),
            },
            cors_enabled: self.server.cors_enabled.unwrap_or(true),
            log_level,
            log_format,
        }
    }
}

/// Generate default configuration file at the specified path
pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<(), Box<dyn std::error::Error>> {
    let config = ConfigFile::default_config();
    config.to_file(path)?;
    Ok(())
}

/// Load the server configuration from `path`.
///
/// A missing file yields the defaults. A file that exists but cannot be
/// parsed also yields the defaults, together with the reason so the caller
/// can report it once logging is up.
pub fn load_server_config<P: AsRef<Path>>(path: P) -> (ServerConfig, Option<String>) {
    let path = path.as_ref();
    if !path.exists() {
        return (ServerConfig::default(), None);
    }
    match ConfigFile::from_file(path) {
        Ok(cf) => (cf.into_server_config(), None),
        Err(e) => (
            ServerConfig::default(),
            Some(format!("Failed to load config file {}: {}", path.display(), e)),
        ),
    }
}
