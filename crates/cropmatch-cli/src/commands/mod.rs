//! CLI command implementations.

pub mod inspect;
pub mod rank;

use std::path::Path;

use cropmatch::{CatalogConfig, CropCatalog};
use tracing::debug;

pub type CommandResult<T = ()> = Result<T, Box<dyn std::error::Error>>;

/// Read the configuration file if one was given, else use the defaults.
pub fn load_config(path: Option<&Path>) -> CommandResult<CatalogConfig> {
    match path {
        Some(path) => {
            debug!(path = %path.display(), "loading configuration");
            Ok(CatalogConfig::load(path)?)
        }
        None => Ok(CatalogConfig::default()),
    }
}

/// Load a catalog from an existing file path, or else by logical name.
pub fn open_catalog(source: &str, config: &CatalogConfig) -> cropmatch::Result<CropCatalog> {
    let path = Path::new(source);
    if path.is_file() {
        CropCatalog::load_path(path, config)
    } else {
        CropCatalog::load(source, config)
    }
}
