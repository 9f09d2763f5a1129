//! Assertion utilities for testing.
//!
//! Readings are random, so tests check bands and membership rather than
//! exact values.

use skycast::CityProfile;
use skycast::WeatherReport;

/// Assert that a value is within expected bounds (inclusive).
pub fn assert_in_range(actual: i64, min: i64, max: i64) {
    assert!(
        actual >= min && actual <= max,
        "Value not in range: actual = {}, min = {}, max = {}",
        actual,
        min,
        max
    );
}

/// Parse the number in front of a unit suffix, e.g. `"45%"` or `"12 mph"`.
///
/// # Panics
///
/// Panics if `text` does not end with `suffix` or the rest is not an integer.
pub fn parse_with_suffix(text: &str, suffix: &str) -> i64 {
    text.strip_suffix(suffix)
        .unwrap_or_else(|| panic!("{:?} does not end with {:?}", text, suffix))
        .parse()
        .unwrap_or_else(|e| panic!("{:?} has no integer part: {}", text, e))
}

/// Assert that a report is consistent with the city's profile and the
/// shared humidity/wind bands.
pub fn assert_report_matches(report: &WeatherReport, city: &str, profile: &CityProfile) {
    assert_eq!(report.city, city);
    assert_eq!(report.temperature_unit, "Fahrenheit");
    assert_in_range(report.temperature, profile.min_temp_f, profile.max_temp_f);
    assert!(
        profile.allows_condition(&report.condition),
        "{:?} is not a condition of {}",
        report.condition,
        city
    );
    assert_in_range(parse_with_suffix(&report.humidity, "%"), 30, 90);
    assert_in_range(parse_with_suffix(&report.wind_speed, " mph"), 0, 25);
    assert!(
        chrono::NaiveDateTime::parse_from_str(&report.timestamp, "%Y-%m-%dT%H:%M:%S%.f").is_ok(),
        "timestamp {:?} is not ISO-8601",
        report.timestamp
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_suffix() {
        assert_eq!(parse_with_suffix("45%", "%"), 45);
        assert_eq!(parse_with_suffix("0 mph", " mph"), 0);
    }

    #[test]
    fn test_assert_in_range() {
        assert_in_range(5, 0, 10);
        assert_in_range(0, 0, 10);
        assert_in_range(10, 0, 10);
    }
}
