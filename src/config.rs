//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;

/// Shared secret used when `API_KEY` is not set.
pub const DEFAULT_API_KEY: &str = "123456";

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Value the `x-api-key` header must carry
    pub api_key: String,
    /// Whether the store starts with the sample catalogue
    pub seed_samples: bool,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `PORT` - HTTP server port (default: 3000)
    /// - `API_KEY` - Shared secret for the `x-api-key` header (default: 123456)
    /// - `SEED_SAMPLES` - Seed the sample products, `true`/`false` (default: true)
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds a Config from any variable source, falling back to defaults for
    /// missing or unparseable values.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            server_port: lookup("PORT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.server_port),
            api_key: lookup("API_KEY")
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.api_key),
            seed_samples: lookup("SEED_SAMPLES")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.seed_samples),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 3000,
            api_key: DEFAULT_API_KEY.to_string(),
            seed_samples: true,
        }
    }
}
