//! The static city catalog.
//!
//! Every city the service knows about is listed here together with the
//! temperature band and the conditions a reading for it may report. The table
//! is built once on first use and never changes afterwards.

use once_cell::sync::Lazy;

use crate::error::{Result, SkycastError};

/// Fixed weather profile of a single city.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CityProfile {
    /// Lowest temperature a reading may report, in °F
    pub min_temp_f: i64,
    /// Highest temperature a reading may report, in °F
    pub max_temp_f: i64,
    /// Conditions a reading may report
    pub conditions: &'static [&'static str],
}

impl CityProfile {
    /// Whether `temp_f` lies inside the profile's band (inclusive).
    pub fn contains_temperature(&self, temp_f: i64) -> bool {
        (self.min_temp_f..=self.max_temp_f).contains(&temp_f)
    }

    /// Whether `condition` is one this profile may report.
    pub fn allows_condition(&self, condition: &str) -> bool {
        self.conditions.contains(&condition)
    }
}

/// Ordered mapping from city name to profile.
///
/// Lookups are exact and case-sensitive. Insertion order is kept so that the
/// city listing is stable across requests.
#[derive(Debug, Clone)]
pub struct CityCatalog {
    entries: Vec<(&'static str, CityProfile)>,
}

impl CityCatalog {
    /// Build a catalog from `(name, profile)` pairs.
    pub fn new(entries: Vec<(&'static str, CityProfile)>) -> Self {
        Self { entries }
    }

    /// The process-wide built-in catalog.
    pub fn builtin() -> &'static CityCatalog {
        &BUILTIN
    }

    /// Look up a city by its exact name.
    pub fn get(&self, city: &str) -> Option<&CityProfile> {
        self.entries
            .iter()
            .find(|(name, _)| *name == city)
            .map(|(_, profile)| profile)
    }

    /// All city names, in catalog order.
    pub fn names(&self) -> Vec<&'static str> {
        self.entries.iter().map(|(name, _)| *name).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(name, profile)` pairs in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &CityProfile)> {
        self.entries.iter().map(|(name, profile)| (*name, profile))
    }

    /// Check that every profile has an ordered range and at least one condition.
    pub fn validate(&self) -> Result<()> {
        for (name, profile) in self.iter() {
            if profile.min_temp_f > profile.max_temp_f {
                return Err(SkycastError::InvalidCatalog {
                    message: format!(
                        "{}: minimum temperature {} exceeds maximum {}",
                        name, profile.min_temp_f, profile.max_temp_f
                    ),
                });
            }

            if profile.conditions.is_empty() {
                return Err(SkycastError::InvalidCatalog {
                    message: format!("{}: no conditions defined", name),
                });
            }
        }

        Ok(())
    }
}

static BUILTIN: Lazy<CityCatalog> = Lazy::new(|| {
    CityCatalog::new(vec![
        (
            "New York",
            CityProfile {
                min_temp_f: 20,
                max_temp_f: 85,
                conditions: &["Sunny", "Cloudy", "Rainy", "Partly Cloudy"],
            },
        ),
        (
            "London",
            CityProfile {
                min_temp_f: 40,
                max_temp_f: 70,
                conditions: &["Cloudy", "Rainy", "Foggy", "Partly Cloudy"],
            },
        ),
        (
            "Tokyo",
            CityProfile {
                min_temp_f: 35,
                max_temp_f: 90,
                conditions: &["Sunny", "Cloudy", "Rainy", "Humid"],
            },
        ),
        (
            "Paris",
            CityProfile {
                min_temp_f: 35,
                max_temp_f: 80,
                conditions: &["Sunny", "Cloudy", "Rainy", "Windy"],
            },
        ),
        (
            "Sydney",
            CityProfile {
                min_temp_f: 50,
                max_temp_f: 95,
                conditions: &["Sunny", "Partly Cloudy", "Clear", "Warm"],
            },
        ),
    ])
});
