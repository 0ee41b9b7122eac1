//! The in-memory crop catalog and its query entry point.

use std::path::Path;
use std::sync::{Arc, PoisonError, RwLock};

use tracing::{debug, info};

use crate::config::CatalogConfig;
use crate::error::Result;
use crate::input::{hash_bytes, read_source, CropParser, ParsedCatalog, SkippedRow, SourceMetadata};
use crate::model::{CropRecord, QueryProfile, ScoredCrop};
use crate::scoring::{rank, ScoringEngine};

/// A loaded set of crop records.
///
/// Immutable once built. Loading again produces a new catalog; see
/// [`SharedCatalog`] for swapping catalogs under concurrent readers.
#[derive(Debug, Clone, Default)]
pub struct CropCatalog {
    records: Vec<CropRecord>,
    skipped: Vec<SkippedRow>,
    metadata: Option<SourceMetadata>,
    engine: ScoringEngine,
}

impl CropCatalog {
    /// Create an empty catalog. Queries against it return nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from records already in memory.
    pub fn from_records(records: Vec<CropRecord>) -> Self {
        Self {
            records,
            ..Self::default()
        }
    }

    /// Use a scoring engine with non-default weights. The engine's weights
    /// were checked when it was built.
    pub fn with_engine(mut self, engine: ScoringEngine) -> Self {
        self.engine = engine;
        self
    }

    /// Load a catalog by logical name.
    ///
    /// `<resource_dir>/<name>.csv` is tried first, then
    /// `<fallback_dir>/<name>.csv`.
    pub fn load(name: &str, config: &CatalogConfig) -> Result<Self> {
        config.validate()?;
        let path = config.locations().resolve(name)?;
        Self::load_named(name, &path, config)
    }

    /// Load a catalog from an explicit file path.
    pub fn load_path(path: impl AsRef<Path>, config: &CatalogConfig) -> Result<Self> {
        config.validate()?;
        let path = path.as_ref();
        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self::load_named(&name, path, config)
    }

    /// Parse a catalog from text held in memory.
    pub fn from_text(name: &str, text: &str, config: &CatalogConfig) -> Result<Self> {
        config.validate()?;
        let parsed = CropParser::new().parse_str(text)?;
        let metadata = SourceMetadata::new(
            name,
            None,
            hash_bytes(text.as_bytes()),
            text.len() as u64,
            parsed.records.len(),
            parsed.skipped.len(),
        );
        Self::assemble(parsed, metadata, config)
    }

    fn load_named(name: &str, path: &Path, config: &CatalogConfig) -> Result<Self> {
        let (text, hash, size_bytes) = read_source(path)?;
        let parsed = CropParser::new().parse_str(&text)?;
        let metadata = SourceMetadata::new(
            name,
            Some(path.to_path_buf()),
            hash,
            size_bytes,
            parsed.records.len(),
            parsed.skipped.len(),
        );

        info!(
            source = name,
            path = %path.display(),
            records = metadata.record_count,
            skipped = metadata.skipped_count,
            "loaded crop catalog"
        );

        Self::assemble(parsed, metadata, config)
    }

    fn assemble(
        parsed: ParsedCatalog,
        metadata: SourceMetadata,
        config: &CatalogConfig,
    ) -> Result<Self> {
        Ok(Self {
            records: parsed.records,
            skipped: parsed.skipped,
            metadata: Some(metadata),
            engine: ScoringEngine::with_weights(config.weights)?,
        })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[CropRecord] {
        &self.records
    }

    /// Rows dropped while loading.
    pub fn skipped(&self) -> &[SkippedRow] {
        &self.skipped
    }

    /// Source details, if the catalog was loaded rather than built in memory.
    pub fn metadata(&self) -> Option<&SourceMetadata> {
        self.metadata.as_ref()
    }

    pub fn engine(&self) -> &ScoringEngine {
        &self.engine
    }

    /// Rank the catalog against `profile` and keep the best `profile.limit`.
    pub fn query(&self, profile: &QueryProfile) -> Vec<ScoredCrop> {
        let mut ranked = self.rank_all(profile);
        ranked.truncate(profile.limit);

        debug!(
            catalog = self.records.len(),
            limit = profile.limit,
            returned = ranked.len(),
            "ranked crops"
        );

        ranked
    }

    /// Rank the whole catalog, ignoring the profile's limit.
    pub fn rank_all(&self, profile: &QueryProfile) -> Vec<ScoredCrop> {
        rank(&self.engine, &self.records, profile)
    }

    /// Score a single crop against `profile` with this catalog's engine.
    pub fn score(&self, crop: &CropRecord, profile: &QueryProfile) -> ScoredCrop {
        self.engine.score(crop, profile)
    }
}

/// A catalog shared between readers and a reloader.
///
/// Readers take a snapshot and query it without holding the lock. A reload
/// builds a complete new catalog first and swaps it in only if loading
/// succeeded, so no reader ever sees a partially loaded catalog.
#[derive(Debug, Clone, Default)]
pub struct SharedCatalog {
    current: Arc<RwLock<Arc<CropCatalog>>>,
}

impl SharedCatalog {
    pub fn new(catalog: CropCatalog) -> Self {
        Self {
            current: Arc::new(RwLock::new(Arc::new(catalog))),
        }
    }

    /// The catalog as of now.
    pub fn snapshot(&self) -> Arc<CropCatalog> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Swap in a new catalog, returning the previous one.
    pub fn replace(&self, catalog: CropCatalog) -> Arc<CropCatalog> {
        self.swap(Arc::new(catalog))
    }

    fn swap(&self, catalog: Arc<CropCatalog>) -> Arc<CropCatalog> {
        let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
        std::mem::replace(&mut *current, catalog)
    }

    /// Load `name` and swap it in. On error the current catalog is kept.
    pub fn reload(&self, name: &str, config: &CatalogConfig) -> Result<Arc<CropCatalog>> {
        let catalog = Arc::new(CropCatalog::load(name, config)?);
        self.swap(Arc::clone(&catalog));
        Ok(catalog)
    }

    /// Query the current snapshot.
    pub fn query(&self, profile: &QueryProfile) -> Vec<ScoredCrop> {
        self.snapshot().query(profile)
    }
}
