//! Error types for the cropmatch library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for cropmatch operations.
///
/// Only loading, configuration and report output can fail. Scoring a crop never
/// does: unparseable catalog fields lower the score on their dimension instead.
#[derive(Debug, Error)]
pub enum CropMatchError {
    /// The dataset was not found in any of the searched locations.
    #[error("Crop source '{name}' not found (searched: {})", display_paths(.searched))]
    SourceNotFound { name: String, searched: Vec<PathBuf> },

    /// The dataset exists but holds no usable content.
    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    /// Error reading or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error from the CSV writer.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

fn display_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Result type alias for cropmatch operations.
pub type Result<T> = std::result::Result<T, CropMatchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_not_found_lists_every_location() {
        let err = CropMatchError::SourceNotFound {
            name: "crops".to_string(),
            searched: vec![
                PathBuf::from("resources/crops.csv"),
                PathBuf::from("data/crops.csv"),
            ],
        };

        assert_eq!(
            err.to_string(),
            "Crop source 'crops' not found (searched: resources/crops.csv, data/crops.csv)"
        );
    }
}
