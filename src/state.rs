//! Application state management for skycast.
//!
//! This module defines the shared state that is passed to all handlers: the
//! resolved configuration, the read-only catalog and the random source.

use std::fmt;
use std::sync::Arc;

use crate::catalog::CityCatalog;
use crate::config::Config;
use crate::error::Result;
use crate::random::{source_for_seed, RandomSource};

/// The main application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Configuration
    pub config: Config,
    /// City catalog, never mutated after startup
    pub catalog: &'static CityCatalog,
    /// Source of every random draw made by the handlers
    pub random: Arc<dyn RandomSource>,
}

impl AppState {
    /// Create a new AppState over the built-in catalog, seeded per `config.seed`
    pub fn new(config: Config) -> Self {
        let random = source_for_seed(config.seed);
        Self::with_random(config, random)
    }

    /// Create a new AppState with an explicit random source
    pub fn with_random(config: Config, random: Arc<dyn RandomSource>) -> Self {
        Self {
            config,
            catalog: CityCatalog::builtin(),
            random,
        }
    }

    /// Create a new AppState wrapped in an Arc for shared ownership
    pub fn new_shared(config: Config) -> Arc<Self> {
        Arc::new(Self::new(config))
    }

    /// Validate that the state is usable for serving
    pub fn validate(&self) -> Result<()> {
        self.catalog.validate()
    }
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config)
            .field("cities", &self.catalog.names())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::SeededRandom;

    #[test]
    fn test_new_state_is_valid() {
        let state = AppState::new(Config::default());
        assert!(state.validate().is_ok());
        assert_eq!(state.catalog.len(), 5);
    }

    #[test]
    fn test_with_random_uses_given_source() {
        let state = AppState::with_random(Config::default(), Arc::new(SeededRandom::new(5)));
        let expected = SeededRandom::new(5).int_inclusive(0, 1_000_000);
        assert_eq!(state.random.int_inclusive(0, 1_000_000), expected);
    }
}
