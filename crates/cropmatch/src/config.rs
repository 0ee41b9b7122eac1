//! Catalog configuration.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{CropMatchError, Result};
use crate::input::SourceLocations;
use crate::model::DEFAULT_LIMIT;
use crate::scoring::ScoringWeights;

/// Configuration for loading and querying a crop catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Bundled resource directory, searched first.
    pub resource_dir: PathBuf,
    /// Writable directory searched when the resource is missing.
    pub fallback_dir: PathBuf,
    /// Result limit used when a caller does not pick one.
    pub default_limit: usize,
    /// Composite score weights.
    pub weights: ScoringWeights,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        let locations = SourceLocations::default();
        Self {
            resource_dir: locations.resource_dir,
            fallback_dir: locations.fallback_dir,
            default_limit: DEFAULT_LIMIT,
            weights: ScoringWeights::default(),
        }
    }
}

impl CatalogConfig {
    /// Load configuration from a JSON file. Missing keys take their defaults.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use cropmatch::CatalogConfig;
    /// let config = CatalogConfig::load("cropmatch.json").unwrap();
    /// println!("Limit: {}", config.default_limit);
    /// ```
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let file = File::open(path).map_err(|e| CropMatchError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: CatalogConfig = serde_json::from_reader(BufReader::new(file))?;
        config.validate()?;
        Ok(config)
    }

    /// Where logical catalog names are looked up.
    pub fn locations(&self) -> SourceLocations {
        SourceLocations::new(&self.resource_dir, &self.fallback_dir)
    }

    pub fn validate(&self) -> Result<()> {
        if self.default_limit == 0 {
            return Err(CropMatchError::Config(
                "default_limit must be at least 1".to_string(),
            ));
        }
        self.weights.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_is_valid() {
        let config = CatalogConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.default_limit, 20);
        assert_eq!(config.locations(), SourceLocations::new("resources", "data"));
    }

    #[test]
    fn test_load_partial_json() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"fallback_dir": "/var/lib/crops", "default_limit": 5}}"#).unwrap();

        let config = CatalogConfig::load(file.path()).unwrap();
        assert_eq!(config.fallback_dir, PathBuf::from("/var/lib/crops"));
        assert_eq!(config.resource_dir, PathBuf::from("resources"));
        assert_eq!(config.default_limit, 5);
        assert_eq!(config.weights, ScoringWeights::default());
    }

    #[test]
    fn test_load_rejects_zero_limit() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"default_limit": 0}}"#).unwrap();

        let err = CatalogConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, CropMatchError::Config(_)));
    }

    #[test]
    fn test_load_rejects_bad_json() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = CatalogConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, CropMatchError::Json(_)));
    }
}
