//! Configuration for the pose capture daemon.
//!
//! Loads configuration from a TOML file with the few parameters the
//! capture needs; compiled-in defaults cover development use.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Top-level application configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    pub network: NetworkConfig,
    pub capture: CaptureConfig,
    pub logging: LoggingConfig,
}

/// Listen socket configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NetworkConfig {
    /// UDP listen address for incoming pose records
    ///
    /// Examples:
    /// - `0.0.0.0:5005` - all interfaces on port 5005
    /// - `127.0.0.1:5005` - localhost only
    pub listen_address: String,
    /// Receive timeout in seconds; only enforced once the first record
    /// has arrived. Zero disables the timeout.
    pub timeout_secs: u64,
}

/// Capture output configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CaptureConfig {
    /// CSV output path
    pub output_path: String,
    /// Stop after this many records
    pub max_records: u32,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Save configuration to a TOML file.
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// Default capture configuration, suitable for development. Production
    /// deployments should use a TOML configuration file.
    pub fn capture_defaults() -> Self {
        Self {
            network: NetworkConfig {
                listen_address: "0.0.0.0:5005".to_string(),
                timeout_secs: 5,
            },
            capture: CaptureConfig {
                output_path: "poses.csv".to_string(),
                max_records: 165,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::capture_defaults()
    }
}
