//! Revenue desirability.

use once_cell::sync::Lazy;
use regex::Regex;

/// Midpoint revenue (per acre) that maps to a score of 1.0.
pub const REVENUE_NORMALIZER: f64 = 50_000.0;

/// Score used when a revenue field does not carry a range.
pub const NEUTRAL_REVENUE_SCORE: f64 = 0.5;

static DIGIT_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").unwrap());

/// Score a revenue-per-acre string in `[0, 1]`.
///
/// `$`, `,` and spaces are removed, then every run of digits is read as a
/// number. With fewer than two numbers the neutral score is returned;
/// otherwise the midpoint of the smallest and largest number is divided by
/// [`REVENUE_NORMALIZER`] and clamped.
pub fn calculate_revenue_score(text: &str) -> f64 {
    let cleaned: String = text
        .chars()
        .filter(|c| !matches!(*c, '$' | ',' | ' '))
        .collect();

    let numbers: Vec<f64> = DIGIT_RUN
        .find_iter(&cleaned)
        .filter_map(|m| m.as_str().parse::<f64>().ok())
        .collect();

    if numbers.len() < 2 {
        return NEUTRAL_REVENUE_SCORE;
    }

    let max = numbers.iter().copied().fold(f64::MIN, f64::max);
    let min = numbers.iter().copied().fold(f64::MAX, f64::min);

    ((max + min) / 2.0 / REVENUE_NORMALIZER).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_range_midpoint() {
        assert_relative_eq!(calculate_revenue_score("$30,000 - $50,000"), 0.8);
        assert_relative_eq!(calculate_revenue_score("$20,000-$30,000"), 0.5);
    }

    #[test]
    fn test_clamped_to_one() {
        assert_relative_eq!(calculate_revenue_score("$80,000 - $120,000"), 1.0);
    }

    #[test]
    fn test_fewer_than_two_numbers_is_neutral() {
        assert_relative_eq!(calculate_revenue_score("no data"), NEUTRAL_REVENUE_SCORE);
        assert_relative_eq!(calculate_revenue_score("$45,000"), NEUTRAL_REVENUE_SCORE);
        assert_relative_eq!(calculate_revenue_score(""), NEUTRAL_REVENUE_SCORE);
    }

    #[test]
    fn test_uses_extremes_of_many_numbers() {
        // min 1000, max 9000
        assert_relative_eq!(calculate_revenue_score("$5,000 / $1,000 / $9,000"), 0.1);
    }

    #[test]
    fn test_decimal_point_splits_digit_runs() {
        // "1.5k-2k" reads as 1, 5, 2: midpoint of 1 and 5
        assert_relative_eq!(calculate_revenue_score("1.5k-2k"), 3.0 / REVENUE_NORMALIZER);
    }
}
