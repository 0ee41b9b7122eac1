//! Drainage classes.

use serde::{Deserialize, Serialize};

/// Coarse drainage class with its suitability value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DrainageClass {
    WellDrained,
    Moderate,
    Poor,
}

impl DrainageClass {
    /// Classes in lookup order. The first key contained in a text wins.
    pub const ALL: [DrainageClass; 3] = [
        DrainageClass::WellDrained,
        DrainageClass::Moderate,
        DrainageClass::Poor,
    ];

    /// Lowercase key looked for in drainage text.
    pub fn key(&self) -> &'static str {
        match self {
            DrainageClass::WellDrained => "well-drained",
            DrainageClass::Moderate => "moderate",
            DrainageClass::Poor => "poor",
        }
    }

    pub fn value(&self) -> f64 {
        match self {
            DrainageClass::WellDrained => 1.0,
            DrainageClass::Moderate => 0.7,
            DrainageClass::Poor => 0.3,
        }
    }

    /// Classify free drainage text by case-insensitive containment.
    pub fn classify(text: &str) -> Option<Self> {
        let lower = text.to_lowercase();
        Self::ALL.into_iter().find(|class| lower.contains(class.key()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        assert_eq!(DrainageClass::classify("Well-drained"), Some(DrainageClass::WellDrained));
        assert_eq!(DrainageClass::classify("MODERATE"), Some(DrainageClass::Moderate));
        assert_eq!(DrainageClass::classify("Poorly drained"), Some(DrainageClass::Poor));
        assert_eq!(DrainageClass::classify("Excessive"), None);
    }

    #[test]
    fn test_classify_is_first_match() {
        assert_eq!(
            DrainageClass::classify("Moderate to poor"),
            Some(DrainageClass::Moderate)
        );
        assert_eq!(
            DrainageClass::classify("Poor to well-drained"),
            Some(DrainageClass::WellDrained)
        );
    }
}
