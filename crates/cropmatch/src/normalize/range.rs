//! pH and hardiness-zone range parsing.

use once_cell::sync::Lazy;
use regex::Regex;

/// Hyphen or en-dash.
static RANGE_SEPARATOR: Lazy<Regex> = Lazy::new(|| Regex::new("[-\u{2013}]").unwrap());

/// Parse a pH range such as `"6.0-7.5"` or `"6.0–7.5"`.
///
/// Whitespace is ignored. Exactly two numeric bounds are required.
pub fn parse_ph_range(text: &str) -> Option<(f64, f64)> {
    let compact = strip_whitespace(text);
    let parts: Vec<&str> = RANGE_SEPARATOR.split(&compact).collect();
    let [low, high] = parts.as_slice() else {
        return None;
    };

    let low = low.parse::<f64>().ok().filter(|v| v.is_finite())?;
    let high = high.parse::<f64>().ok().filter(|v| v.is_finite())?;
    Some((low, high))
}

/// Parse a zone range such as `"Zones 5-9"` or `"5-9"`.
///
/// The words `Zones`/`zones` and all whitespace are removed, the remainder is
/// split on a hyphen or en-dash, and each side keeps only its digits.
pub fn parse_zone_range(text: &str) -> Option<(i64, i64)> {
    let compact = strip_whitespace(&text.replace("Zones", "").replace("zones", ""));
    let parts: Vec<&str> = RANGE_SEPARATOR.split(&compact).collect();
    let [low, high] = parts.as_slice() else {
        return None;
    };

    Some((extract_zone_number(low)?, extract_zone_number(high)?))
}

/// Extract a zone number by dropping every non-digit character.
///
/// `"Zone 7"` gives `7`, `"7b"` gives `7`. Note that `"5-9"` gives `59`.
pub fn extract_zone_number(text: &str) -> Option<i64> {
    let digits: String = text.chars().filter(char::is_ascii_digit).collect();
    digits.parse().ok()
}

fn strip_whitespace(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ph_range_hyphen() {
        assert_eq!(parse_ph_range("6.0-7.5"), Some((6.0, 7.5)));
    }

    #[test]
    fn test_ph_range_en_dash() {
        assert_eq!(parse_ph_range("6.0\u{2013}7.5"), Some((6.0, 7.5)));
    }

    #[test]
    fn test_ph_range_with_spaces() {
        assert_eq!(parse_ph_range(" 5.5 - 6.5 "), Some((5.5, 6.5)));
    }

    #[test]
    fn test_ph_range_rejects_bad_input() {
        assert_eq!(parse_ph_range("bad"), None);
        assert_eq!(parse_ph_range("6.5"), None);
        assert_eq!(parse_ph_range("6.0-"), None);
        assert_eq!(parse_ph_range("5-6-7"), None);
        assert_eq!(parse_ph_range(""), None);
    }

    #[test]
    fn test_zone_range() {
        assert_eq!(parse_zone_range("Zones 5-9"), Some((5, 9)));
        assert_eq!(parse_zone_range("zones 3\u{2013}8"), Some((3, 8)));
        assert_eq!(parse_zone_range("5-9"), Some((5, 9)));
    }

    #[test]
    fn test_zone_range_tolerates_letters() {
        assert_eq!(parse_zone_range("Zone 5a-9b"), Some((5, 9)));
    }

    #[test]
    fn test_zone_range_rejects_descriptors() {
        assert_eq!(parse_zone_range("Tropical"), None);
        assert_eq!(parse_zone_range("7"), None);
        assert_eq!(parse_zone_range("Warm-Hot"), None);
    }

    #[test]
    fn test_extract_zone_number() {
        assert_eq!(extract_zone_number("Zone 7"), Some(7));
        assert_eq!(extract_zone_number("10b"), Some(10));
        assert_eq!(extract_zone_number("none"), None);
    }
}
