//! Simulated weather readings.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::catalog::CityProfile;
use crate::error::{Result, SkycastError};
use crate::random::RandomSource;

/// Humidity band shared by every city, in percent.
pub const HUMIDITY_RANGE: (i64, i64) = (30, 90);

/// Wind speed band shared by every city, in mph.
pub const WIND_SPEED_RANGE: (i64, i64) = (0, 25);

pub const TEMPERATURE_UNIT: &str = "Fahrenheit";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// One generated reading. Built per request and never reused.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(into = "WeatherReport")]
pub struct WeatherReading {
    pub city: String,
    pub temperature_f: i64,
    pub condition: String,
    pub humidity_percent: i64,
    pub wind_speed_mph: i64,
    pub generated_at: NaiveDateTime,
}

/// Wire shape of a reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    pub city: String,
    pub temperature: i64,
    pub temperature_unit: String,
    pub condition: String,
    pub humidity: String,
    pub wind_speed: String,
    pub timestamp: String,
}

impl From<WeatherReading> for WeatherReport {
    fn from(reading: WeatherReading) -> Self {
        Self {
            city: reading.city,
            temperature: reading.temperature_f,
            temperature_unit: TEMPERATURE_UNIT.to_string(),
            condition: reading.condition,
            humidity: format!("{}%", reading.humidity_percent),
            wind_speed: format!("{} mph", reading.wind_speed_mph),
            timestamp: reading.generated_at.format(TIMESTAMP_FORMAT).to_string(),
        }
    }
}

impl WeatherReading {
    /// Draw a reading for `city` from its profile.
    ///
    /// Temperature and condition come from the profile; humidity and wind
    /// speed are drawn from the shared bands.
    pub fn generate(
        city: &str,
        profile: &CityProfile,
        rng: &dyn RandomSource,
        generated_at: NaiveDateTime,
    ) -> Result<Self> {
        let temperature_f = rng.int_inclusive(profile.min_temp_f, profile.max_temp_f);

        let condition = profile
            .conditions
            .get(rng.index_below(profile.conditions.len()))
            .ok_or_else(|| SkycastError::InvalidCatalog {
                message: format!("{}: no conditions defined", city),
            })?;

        let humidity_percent = rng.int_inclusive(HUMIDITY_RANGE.0, HUMIDITY_RANGE.1);
        let wind_speed_mph = rng.int_inclusive(WIND_SPEED_RANGE.0, WIND_SPEED_RANGE.1);

        Ok(Self {
            city: city.to_string(),
            temperature_f,
            condition: condition.to_string(),
            humidity_percent,
            wind_speed_mph,
            generated_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CityCatalog;
    use crate::random::{SeededRandom, ThreadRandom};
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn fixed_time() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, 1)
            .unwrap()
            .and_hms_micro_opt(13, 45, 12, 123_456)
            .unwrap()
    }

    /// Always returns the lower bound / first index.
    struct Floor;

    impl RandomSource for Floor {
        fn int_inclusive(&self, min: i64, _max: i64) -> i64 {
            min
        }

        fn index_below(&self, _len: usize) -> usize {
            0
        }
    }

    #[test]
    fn test_readings_respect_profiles() {
        let catalog = CityCatalog::builtin();
        let rng = ThreadRandom;

        for (city, profile) in catalog.iter() {
            for _ in 0..200 {
                let reading = WeatherReading::generate(city, profile, &rng, fixed_time()).unwrap();
                assert_eq!(reading.city, city);
                assert!(profile.contains_temperature(reading.temperature_f));
                assert!(profile.allows_condition(&reading.condition));
                assert!((30..=90).contains(&reading.humidity_percent));
                assert!((0..=25).contains(&reading.wind_speed_mph));
            }
        }
    }

    #[test]
    fn test_report_shape() {
        let profile = CityCatalog::builtin().get("Tokyo").unwrap();
        let reading = WeatherReading::generate("Tokyo", profile, &Floor, fixed_time()).unwrap();

        let json = serde_json::to_value(&reading).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "city": "Tokyo",
                "temperature": 35,
                "temperature_unit": "Fahrenheit",
                "condition": "Sunny",
                "humidity": "30%",
                "wind_speed": "0 mph",
                "timestamp": "2024-05-01T13:45:12.123456",
            })
        );
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let profile = CityCatalog::builtin().get("Paris").unwrap();
        let a = SeededRandom::new(7);
        let b = SeededRandom::new(7);

        for _ in 0..10 {
            let left = WeatherReading::generate("Paris", profile, &a, fixed_time()).unwrap();
            let right = WeatherReading::generate("Paris", profile, &b, fixed_time()).unwrap();
            assert_eq!(left, right);
        }
    }

    #[test]
    fn test_empty_conditions_is_an_error() {
        let profile = CityProfile {
            min_temp_f: 0,
            max_temp_f: 10,
            conditions: &[],
        };
        let result = WeatherReading::generate("Nowhere", &profile, &Floor, fixed_time());
        assert!(matches!(result, Err(SkycastError::InvalidCatalog { .. })));
    }
}
