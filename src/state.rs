//! Application state management
//!
//! The state only carries configuration and the catalog handle; nothing
//! is cached between requests.

use crate::catalog::Catalog;
use crate::config::ServerConfig;

/// Application state shared across all handlers
#[derive(Debug)]
pub struct AppState {
    /// Filesystem-backed video catalog
    pub catalog: Catalog,

    /// Server configuration
    pub config: ServerConfig,
}

impl AppState {
    /// Create a new AppState with the given configuration
    pub fn new(config: ServerConfig) -> Self {
        Self {
            catalog: Catalog::new(config.catalog.clone()),
            config,
        }
    }

}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ServerConfig::default())
    }
}
