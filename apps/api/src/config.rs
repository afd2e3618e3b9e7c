//! # API Configuration
//!
//! Configuration management for the HTTP server.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     TAREFAS_PORT=9090                                                  │
//! │     TAREFAS_DATABASE_PATH=/var/lib/tarefas/tarefas.db                  │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     --config <path>, or $TAREFAS_CONFIG, or                            │
//! │     ~/.config/tarefas/api.toml (Linux)                                 │
//! │     ~/Library/Application Support/com.tarefas.api/api.toml (macOS)     │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     0.0.0.0:8080, ./tarefas.db                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # api.toml
//! [server]
//! bind_addr = "127.0.0.1"
//! port = 8080
//!
//! [database]
//! path = "./tarefas.db"
//! max_connections = 5
//!
//! [log]
//! filter = "info,tarefas=debug,sqlx=warn"
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Log filter used until (and unless) configuration says otherwise.
pub const DEFAULT_LOG_FILTER: &str = "info,tarefas=debug,sqlx=warn,tower_http=debug";

// =============================================================================
// Server Settings
// =============================================================================

/// HTTP listener settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    /// Bind address (default: 0.0.0.0 for all interfaces).
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// Listening port.
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_bind_addr() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for ServerSettings {
    fn default() -> Self {
        ServerSettings {
            bind_addr: default_bind_addr(),
            port: default_port(),
        }
    }
}

impl ServerSettings {
    /// Returns the full bind address.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }
}

// =============================================================================
// Database Settings
// =============================================================================

/// SQLite settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseSettings {
    /// Path to the database file. Created on first start.
    #[serde(default = "default_database_path")]
    pub path: PathBuf,

    /// Maximum number of pooled connections.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

fn default_database_path() -> PathBuf {
    PathBuf::from("./tarefas.db")
}

fn default_max_connections() -> u32 {
    5
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        DatabaseSettings {
            path: default_database_path(),
            max_connections: default_max_connections(),
        }
    }
}

// =============================================================================
// Log Settings
// =============================================================================

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogSettings {
    /// `tracing_subscriber::EnvFilter` directive.
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

fn default_log_filter() -> String {
    DEFAULT_LOG_FILTER.to_string()
}

impl Default for LogSettings {
    fn default() -> Self {
        LogSettings {
            filter: default_log_filter(),
        }
    }
}

// =============================================================================
// API Configuration
// =============================================================================

/// Complete server configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default)]
    pub server: ServerSettings,

    #[serde(default)]
    pub database: DatabaseSettings,

    #[serde(default)]
    pub log: LogSettings,
}

impl ApiConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (`api.toml`)
    /// 3. Environment variables
    ///
    /// An explicitly named file (argument or `TAREFAS_CONFIG`) must exist;
    /// the platform default is optional.
    pub fn load(config_path: Option<PathBuf>) -> Result<Self, ConfigError> {
        let explicit = config_path.or_else(|| std::env::var("TAREFAS_CONFIG").ok().map(PathBuf::from));

        let mut config = match explicit {
            Some(path) => Self::from_file(&path)?,
            None => match Self::default_config_path() {
                Some(path) if path.exists() => Self::from_file(&path)?,
                Some(path) => {
                    debug!(?path, "Config file not found, using defaults");
                    Self::default()
                }
                None => Self::default(),
            },
        };

        // Override with environment variables
        config.apply_env_overrides()?;

        config.validate()?;

        Ok(config)
    }

    /// Reads and parses a TOML config file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        info!(?path, "Loading API config from file");

        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(toml::from_str(&contents)?)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.bind_addr.trim().is_empty() {
            return Err(ConfigError::InvalidValue("server.bind_addr".into()));
        }

        if self.database.path.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue("database.path".into()));
        }

        if self.database.max_connections == 0 {
            return Err(ConfigError::InvalidValue("database.max_connections".into()));
        }

        self.env_filter()?;

        Ok(())
    }

    /// Parses `log.filter` into a `tracing_subscriber` filter.
    pub fn env_filter(&self) -> Result<EnvFilter, ConfigError> {
        EnvFilter::try_new(&self.log.filter)
            .map_err(|_| ConfigError::InvalidValue("log.filter".into()))
    }

    /// Applies environment variable overrides.
    ///
    /// Unlike a file value, a malformed number in the environment is an
    /// error rather than silently ignored.
    fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        if let Ok(addr) = std::env::var("TAREFAS_BIND_ADDR") {
            debug!(bind_addr = %addr, "Overriding bind address from environment");
            self.server.bind_addr = addr;
        }

        if let Ok(port) = std::env::var("TAREFAS_PORT") {
            self.server.port = port
                .parse()
                .map_err(|_| ConfigError::InvalidValue("TAREFAS_PORT".into()))?;
            debug!(port = self.server.port, "Overriding port from environment");
        }

        if let Ok(path) = std::env::var("TAREFAS_DATABASE_PATH") {
            debug!(path = %path, "Overriding database path from environment");
            self.database.path = PathBuf::from(path);
        }

        if let Ok(max) = std::env::var("TAREFAS_MAX_CONNECTIONS") {
            self.database.max_connections = max
                .parse()
                .map_err(|_| ConfigError::InvalidValue("TAREFAS_MAX_CONNECTIONS".into()))?;
        }

        if let Ok(filter) = std::env::var("RUST_LOG") {
            self.log.filter = filter;
        }

        Ok(())
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "tarefas", "api")
            .map(|dirs| dirs.config_dir().join("api.toml"))
    }
}

// =============================================================================
// Errors
// =============================================================================

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

// =============================================================================
// Unit Tests
// =============================================================================
