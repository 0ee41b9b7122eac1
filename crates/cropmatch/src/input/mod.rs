//! Catalog parsing and data source handling.

mod parser;
mod source;

pub use parser::{split_fields, CropParser, ParsedCatalog, SkippedRow};
pub use source::{SourceLocations, SourceMetadata};
pub(crate) use source::{hash_bytes, read_source};
