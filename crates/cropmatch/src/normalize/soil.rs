//! Soil type canonicalization.

/// Canonical soil tokens, checked in this order.
pub const CANONICAL_SOILS: [&str; 4] = ["sand", "clay", "silt", "loam"];

/// Map a soil component to its canonical token.
///
/// The first canonical token contained in the component (case-insensitive)
/// wins, so `"Sandy Loam"` maps to `"sand"`. Components with no canonical
/// token are returned trimmed but otherwise unchanged.
pub fn normalize_soil_name(component: &str) -> String {
    let lower = component.to_lowercase();
    CANONICAL_SOILS
        .iter()
        .find(|soil| lower.contains(*soil))
        .map(|soil| soil.to_string())
        .unwrap_or_else(|| component.trim().to_string())
}

/// Split a compound soil description into lowercase components.
///
/// `&` is read as `and`, and the text is split on every occurrence of the
/// substring `and`. This also splits inside words: `"sand"` becomes `["s"]`
/// and `"sandy loam"` becomes `["s", "y loam"]`.
pub fn extract_soil_components(text: &str) -> Vec<String> {
    text.to_lowercase()
        .replace('&', "and")
        .split("and")
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}

/// Components of a soil description, each mapped through [`normalize_soil_name`].
pub fn soil_tokens(text: &str) -> Vec<String> {
    extract_soil_components(text)
        .iter()
        .map(|component| normalize_soil_name(component))
        .collect()
}
