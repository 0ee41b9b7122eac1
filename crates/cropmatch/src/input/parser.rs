//! Comma-delimited crop catalog parser.
//!
//! Column order is part of the input contract: fields are mapped to
//! [`CropRecord`] by position, never by header name. The header line is kept
//! only for diagnostics.

use serde::Serialize;
use tracing::warn;

use crate::error::{CropMatchError, Result};
use crate::model::{CropRecord, FIELD_COUNT};

const DELIMITER: char = ',';
const QUOTE: char = '"';

/// A data row that was dropped because it had too few fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedRow {
    /// 1-based line number in the source text.
    pub line: usize,
    /// Number of fields the row split into.
    pub field_count: usize,
    pub content: String,
}

/// Result of parsing a catalog blob.
#[derive(Debug, Clone, Default)]
pub struct ParsedCatalog {
    pub header: String,
    pub records: Vec<CropRecord>,
    pub skipped: Vec<SkippedRow>,
}

impl ParsedCatalog {
    /// Number of data lines seen (kept plus skipped).
    pub fn data_line_count(&self) -> usize {
        self.records.len() + self.skipped.len()
    }
}

/// Parses crop catalog text into records.
#[derive(Debug, Clone, Default)]
pub struct CropParser;

impl CropParser {
    /// Create a new parser.
    pub fn new() -> Self {
        Self
    }

    /// Parse a complete catalog blob.
    ///
    /// Blank lines, including lines holding only whitespace, are ignored and
    /// never counted as skipped rows. The first remaining line is the header. Fails
    /// with [`CropMatchError::InvalidFormat`] when the text is blank or holds
    /// only a header; rows with fewer than seven fields are skipped, not errors.
    pub fn parse_str(&self, text: &str) -> Result<ParsedCatalog> {
        let mut lines = text
            .split('\n')
            .enumerate()
            .map(|(idx, line)| (idx + 1, line.strip_suffix('\r').unwrap_or(line)))
            .filter(|(_, line)| !line.trim().is_empty());

        let header = match lines.next() {
            Some((_, header)) => header.to_string(),
            None => return Err(CropMatchError::InvalidFormat("file is empty".to_string())),
        };

        let mut parsed = ParsedCatalog {
            header,
            ..ParsedCatalog::default()
        };

        for (line_no, line) in lines {
            let fields = split_fields(line);
            match CropRecord::from_fields(&fields) {
                Some(record) => parsed.records.push(record),
                None => {
                    warn!(
                        line = line_no,
                        fields = fields.len(),
                        expected = FIELD_COUNT,
                        "skipping crop row with too few fields"
                    );
                    parsed.skipped.push(SkippedRow {
                        line: line_no,
                        field_count: fields.len(),
                        content: line.to_string(),
                    });
                }
            }
        }

        if parsed.data_line_count() == 0 {
            return Err(CropMatchError::InvalidFormat(format!(
                "no data rows after header '{}'",
                parsed.header
            )));
        }

        Ok(parsed)
    }
}

/// Split one line on commas, respecting double-quoted spans.
///
/// A `"` toggles quoted mode and is not copied into the field; a comma inside a
/// quoted span is literal content. Each field is trimmed of surrounding
/// whitespace.
pub fn split_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            QUOTE => in_quotes = !in_quotes,
            DELIMITER if !in_quotes => {
                fields.push(current.trim().to_string());
                current.clear();
            }
            c => current.push(c),
        }
    }
    fields.push(current.trim().to_string());

    fields
}
