//! Configuration management for skycast.
//!
//! This module handles the layered configuration system with the following precedence:
//! 1. Command-line arguments (highest priority)
//! 2. Environment variables
//! 3. JSON config file
//! 4. Default values (lowest priority)
//!
//! Nothing is required: with no flags, no environment and no file the service
//! listens on `0.0.0.0:5055`.

use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Result, SkycastError};

/// Command-line arguments for skycast
#[derive(Parser, Debug, Default)]
#[command(name = "skycast")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Host address to bind to [default: 0.0.0.0]
    #[arg(short = 'H', long, env = "SKYCAST_HOST")]
    pub host: Option<String>,

    /// Port to listen on [default: 5055]
    #[arg(short, long, env = "SKYCAST_PORT")]
    pub port: Option<u16>,

    /// Path to JSON configuration file
    #[arg(short, long, env = "SKYCAST_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error) [default: info]
    #[arg(long, env = "SKYCAST_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Seed for reproducible readings
    #[arg(long, env = "SKYCAST_SEED")]
    pub seed: Option<u64>,
}

/// Server configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host address to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Complete configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Seed for the random source; `None` draws from the thread-local generator
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Config {
    /// Load configuration from all sources with proper precedence
    pub fn load() -> Result<Self> {
        Self::from_args(Args::parse())
    }

    /// Resolve a configuration from already-parsed arguments
    pub fn from_args(args: Args) -> Result<Self> {
        // Start with defaults
        let mut config = Config::default();

        // Load from JSON file if provided
        if let Some(config_path) = &args.config {
            config = Self::load_from_file(config_path)?;
        }

        // Override with command-line arguments and environment
        config.apply_args(args);

        Ok(config)
    }

    /// Load configuration from a JSON file
    fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Overlay whatever the arguments set explicitly
    fn apply_args(&mut self, args: Args) {
        if let Some(host) = args.host {
            self.server.host = host;
        }
        if let Some(port) = args.port {
            self.server.port = port;
        }
        if let Some(log_level) = args.log_level {
            self.log_level = log_level;
        }
        if args.seed.is_some() {
            self.seed = args.seed;
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.host.is_empty() {
            return Err(SkycastError::Config {
                message: "Server host cannot be empty".to_string(),
            });
        }

        // 0 would ask the OS for an ephemeral port
        if self.server.port == 0 {
            return Err(SkycastError::Config {
                message: "Server port cannot be 0".to_string(),
            });
        }

        match self.log_level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(SkycastError::Config {
                    message: format!(
                        "Invalid log level: {}. Must be one of: trace, debug, info, warn, error",
                        self.log_level
                    ),
                });
            }
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            log_level: default_log_level(),
            seed: None,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

// Default value functions for serde
fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5055
}

fn default_log_level() -> String {
    "info".to_string()
}
