//! Catalog source resolution and metadata.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::debug;

use crate::error::{CropMatchError, Result};

const EXTENSION: &str = "csv";

/// Where a logical catalog name is looked up, in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceLocations {
    /// Bundled, read-only resources.
    pub resource_dir: PathBuf,
    /// Writable fallback directory.
    pub fallback_dir: PathBuf,
}

impl Default for SourceLocations {
    fn default() -> Self {
        Self {
            resource_dir: PathBuf::from("resources"),
            fallback_dir: PathBuf::from("data"),
        }
    }
}

impl SourceLocations {
    /// Create locations from a resource and a fallback directory.
    pub fn new(resource_dir: impl Into<PathBuf>, fallback_dir: impl Into<PathBuf>) -> Self {
        Self {
            resource_dir: resource_dir.into(),
            fallback_dir: fallback_dir.into(),
        }
    }

    /// Candidate paths for `name`, resource location first.
    pub fn candidates(&self, name: &str) -> Vec<PathBuf> {
        let file_name = file_name_for(name);
        vec![
            self.resource_dir.join(&file_name),
            self.fallback_dir.join(&file_name),
        ]
    }

    /// Return the first candidate that exists as a file.
    pub fn resolve(&self, name: &str) -> Result<PathBuf> {
        let candidates = self.candidates(name);
        for path in &candidates {
            debug!(path = %path.display(), "looking for crop source");
            if path.is_file() {
                return Ok(path.clone());
            }
        }

        Err(CropMatchError::SourceNotFound {
            name: name.to_string(),
            searched: candidates,
        })
    }
}

fn file_name_for(name: &str) -> String {
    let has_extension = Path::new(name)
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case(EXTENSION))
        .unwrap_or(false);

    if has_extension {
        name.to_string()
    } else {
        format!("{name}.{EXTENSION}")
    }
}

/// Read a source file as UTF-8 text, returning its contents and SHA-256 hash.
pub(crate) fn read_source(path: &Path) -> Result<(String, String, u64)> {
    let bytes = fs::read(path).map_err(|e| CropMatchError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    let hash = hash_bytes(&bytes);
    let size_bytes = bytes.len() as u64;
    let text = String::from_utf8(bytes).map_err(|e| {
        CropMatchError::InvalidFormat(format!(
            "'{}' is not valid UTF-8: {}",
            path.display(),
            e
        ))
    })?;

    Ok((text, hash, size_bytes))
}

pub(crate) fn hash_bytes(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    format!("sha256:{:x}", hasher.finalize())
}

/// Metadata about a loaded catalog source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceMetadata {
    /// Logical name the catalog was requested under.
    pub name: String,
    /// File the catalog was read from (None for in-memory text).
    pub path: Option<PathBuf>,
    /// SHA-256 hash of the source bytes.
    pub hash: String,
    pub size_bytes: u64,
    /// Number of records kept.
    pub record_count: usize,
    /// Number of data rows dropped for having too few fields.
    pub skipped_count: usize,
    pub loaded_at: DateTime<Utc>,
}

impl SourceMetadata {
    /// Create metadata for a source that has just been parsed.
    pub fn new(
        name: impl Into<String>,
        path: Option<PathBuf>,
        hash: String,
        size_bytes: u64,
        record_count: usize,
        skipped_count: usize,
    ) -> Self {
        Self {
            name: name.into(),
            path,
            hash,
            size_bytes,
            record_count,
            skipped_count,
            loaded_at: Utc::now(),
        }
    }
}
