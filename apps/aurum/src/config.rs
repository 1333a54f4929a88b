//! # Configuration
//!
//! Settings for the Aurum binary, layered as:
//!
//! 1. Built-in defaults
//! 2. A TOML file passed with `--config`
//! 3. Environment variables
//! 4. CLI flags (applied by the command that needs them)
//!
//! ## Environment Variables
//!
//! - `AURUM_API_KEY`: If set and non-empty, requires Bearer token authentication
//! - `AURUM_CORS_ORIGINS`: Comma-separated list of allowed origins, or "*" for all
//! - `AURUM_RATE_LIMIT`: Requests per second (0 to disable)
//! - `AURUM_LOG_FORMAT`: `json` for machine-parseable logs, anything else for text
//!
//! ## Example
//!
//! ```toml
//! [server]
//! host = "0.0.0.0"
//! port = 8080
//!
//! [security]
//! api_key = "change-me"
//! cors_origins = ["https://backoffice.example.com"]
//! rate_limit = 50
//!
//! [logging]
//! format = "json"
//! ```

use aurum_core::AurumError;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const ENV_API_KEY: &str = "AURUM_API_KEY";
pub const ENV_CORS_ORIGINS: &str = "AURUM_CORS_ORIGINS";
pub const ENV_RATE_LIMIT: &str = "AURUM_RATE_LIMIT";
pub const ENV_LOG_FORMAT: &str = "AURUM_LOG_FORMAT";

/// Filter used when neither `RUST_LOG` nor the config file sets one.
pub const DEFAULT_LOG_FILTER: &str = "aurum=info,tower_http=debug";

/// Default rate limit: 100 requests per second.
pub const DEFAULT_RATE_LIMIT: u32 = 100;

/// Maximum configuration file size (1 MB).
const MAX_CONFIG_FILE_SIZE: u64 = 1024 * 1024;

// =============================================================================
// CONFIG SECTIONS
// =============================================================================

/// Complete application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub security: SecurityConfig,
    pub logging: LoggingConfig,
}

/// HTTP listener settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub body_limit_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            body_limit_bytes: 64 * 1024,
        }
    }
}

/// Access control for the HTTP API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SecurityConfig {
    /// Bearer token required on every endpoint but `/health`.
    pub api_key: Option<String>,
    /// Allowed CORS origins. `None` means localhost only, `["*"]` means any.
    pub cors_origins: Option<Vec<String>>,
    /// Requests per second across all clients, 0 disables limiting.
    pub rate_limit: u32,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            cors_origins: None,
            rate_limit: DEFAULT_RATE_LIMIT,
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl LogFormat {
    /// `json` (any case) selects JSON, everything else falls back to text.
    pub fn parse(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("json") {
            Self::Json
        } else {
            Self::Text
        }
    }
}

/// Tracing subscriber settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub format: LogFormat,
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::Text,
            filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

// =============================================================================
// LOADING
// =============================================================================

impl AppConfig {
    /// Load defaults, then the optional file, then the process environment.
    pub fn load(path: Option<&Path>) -> Result<Self, AurumError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Read a TOML configuration file.
    pub fn from_file(path: &Path) -> Result<Self, AurumError> {
        let metadata = std::fs::metadata(path).map_err(|e| {
            AurumError::IoError(format!("Cannot read config '{}': {}", path.display(), e))
        })?;
        if metadata.len() > MAX_CONFIG_FILE_SIZE {
            return Err(AurumError::ConfigError(format!(
                "Config file size {} bytes exceeds maximum allowed {} bytes",
                metadata.len(),
                MAX_CONFIG_FILE_SIZE
            )));
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            AurumError::IoError(format!("Cannot read config '{}': {}", path.display(), e))
        })?;
        Self::from_toml_str(&contents)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml_str(contents: &str) -> Result<Self, AurumError> {
        toml::from_str(contents).map_err(|e| AurumError::ConfigError(e.to_string()))
    }

    /// Override settings from environment-style lookups.
    ///
    /// Unparseable values leave the current setting untouched.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = lookup(ENV_API_KEY) {
            self.security.api_key = Some(key).filter(|k| !k.is_empty());
        }

        if let Some(origins) = lookup(ENV_CORS_ORIGINS) {
            let parsed: Vec<String> = origins
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
            self.security.cors_origins = Some(parsed);
        }

        if let Some(rate) = lookup(ENV_RATE_LIMIT).and_then(|s| s.trim().parse().ok()) {
            self.security.rate_limit = rate;
        }

        if let Some(format) = lookup(ENV_LOG_FORMAT) {
            self.logging.format = LogFormat::parse(&format);
        }
    }

    /// The configured API key, treating an empty string as unset.
    pub fn api_key(&self) -> Option<&str> {
        self.security.api_key.as_deref().filter(|k| !k.is_empty())
    }

    /// `host:port` for the listener.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

// =============================================================================
// TESTS
// =============================================================================
