//! Configuration loading and constants.
//!
//! The listening address is fixed. The only configurable setting is the log
//! format, read from an optional TOML file. `AppConfig` is the root
//! configuration struct.

use serde::Deserialize;
use std::path::Path;

// =============================================================================
// HTTP Server
// =============================================================================

/// Listen on all interfaces
pub const LISTEN_HOST: &str = "0.0.0.0";

/// Listening port
pub const LISTEN_PORT: u16 = 8083;

/// The fixed listening address in `host:port` form.
pub fn listen_address() -> String {
    format!("{}:{}", LISTEN_HOST, LISTEN_PORT)
}

// =============================================================================
// Logging Defaults
// =============================================================================

/// Default log filter when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "orders_api=debug,tower_http=debug";

/// Default log format (text or json)
pub const DEFAULT_LOG_FORMAT: &str = "text";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Log format: "text" (human-readable, default) or "json" (structured)
    #[serde(default = "LoggingConfig::default_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: DEFAULT_LOG_FORMAT.to_string(),
        }
    }
}

impl LoggingConfig {
    fn default_format() -> String {
        DEFAULT_LOG_FORMAT.to_string()
    }

    pub fn is_json(&self) -> bool {
        self.format.eq_ignore_ascii_case("json")
    }
}

impl AppConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Loads from `path` when given, otherwise returns the built-in defaults.
    pub fn load_or_default<P: AsRef<Path>>(path: Option<P>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}
