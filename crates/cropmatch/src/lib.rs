//! cropmatch: crop recommendation from a soil and climate profile.
//!
//! A reference catalog of crops (pH range, USDA hardiness zones, soil type,
//! drainage preference and revenue per acre, all as free text) is loaded from a
//! delimited file and ranked against a query profile with a weighted fuzzy
//! match score.
//!
//! # Core Principles
//!
//! - **Lazy normalization**: catalog fields are kept exactly as read and only
//!   interpreted at query time
//! - **Graceful degradation**: a field that cannot be parsed scores zero (or a
//!   neutral value) on its dimension instead of failing the query
//! - **Full ranking**: every crop is scored on every query; the limit is only a
//!   presentation slice
//!
//! # Example
//!
//! ```no_run
//! use cropmatch::{CatalogConfig, CropCatalog, QueryProfile};
//!
//! let catalog = CropCatalog::load("crops", &CatalogConfig::default()).unwrap();
//! let profile = QueryProfile::new("Loam", 6.5, "Well-drained", "7").with_limit(5);
//!
//! for scored in catalog.query(&profile) {
//!     println!("{:24} {:.3}", scored.crop.commodity_type, scored.match_score);
//! }
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod input;
pub mod model;
pub mod normalize;
pub mod report;
pub mod scoring;

pub use catalog::{CropCatalog, SharedCatalog};
pub use config::CatalogConfig;
pub use error::{CropMatchError, Result};
pub use input::{CropParser, ParsedCatalog, SkippedRow, SourceLocations, SourceMetadata};
pub use model::{CropRecord, QueryProfile, ScoreBreakdown, ScoredCrop, DEFAULT_LIMIT};
pub use scoring::{ScoringEngine, ScoringWeights};
