use serde::{Deserialize, Serialize};
use std::path::Path;

use super::cache::CacheConfig;
use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::upstream::UpstreamConfig;

const LOCAL_CONFIG_PATH: &str = "ferrous-stub.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/ferrous-stub/config.toml";

/// Smallest receive buffer that can still hold a DNS header.
const MIN_RECV_BUFFER_SIZE: usize = 12;

/// Main configuration structure for Ferrous Stub
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Upstream server, port and timeout
    #[serde(default)]
    pub upstream: UpstreamConfig,

    /// Resolution cache configuration
    #[serde(default)]
    pub cache: CacheConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. ferrous-stub.toml in current directory
    /// 3. /etc/ferrous-stub/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if Path::new(LOCAL_CONFIG_PATH).exists() {
            Self::from_file(LOCAL_CONFIG_PATH)?
        } else if Path::new(SYSTEM_CONFIG_PATH).exists() {
            Self::from_file(SYSTEM_CONFIG_PATH)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Apply command-line overrides to configuration
    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(server) = overrides.server {
            self.upstream.server = server;
        }
        if let Some(port) = overrides.port {
            self.upstream.port = port;
        }
        if let Some(timeout) = overrides.query_timeout_ms {
            self.upstream.query_timeout_ms = timeout;
        }
        if overrides.disable_cache {
            self.cache.enabled = false;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.upstream.port == 0 {
            return Err(ConfigError::Validation(
                "Upstream port cannot be 0".to_string(),
            ));
        }

        if self.upstream.query_timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "Query timeout must be greater than 0".to_string(),
            ));
        }

        if self.upstream.recv_buffer_size < MIN_RECV_BUFFER_SIZE {
            return Err(ConfigError::Validation(format!(
                "Receive buffer must be at least {} bytes, got {}",
                MIN_RECV_BUFFER_SIZE, self.upstream.recv_buffer_size
            )));
        }

        self.upstream.socket_addr()?;

        Ok(())
    }

    /// Get the path to the configuration file being used
    pub fn get_config_path() -> Option<String> {
        if Path::new(LOCAL_CONFIG_PATH).exists() {
            Some(LOCAL_CONFIG_PATH.to_string())
        } else if Path::new(SYSTEM_CONFIG_PATH).exists() {
            Some(SYSTEM_CONFIG_PATH.to_string())
        } else {
            None
        }
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub server: Option<String>,
    pub port: Option<u16>,
    pub query_timeout_ms: Option<u64>,
    pub disable_cache: bool,
    pub log_level: Option<String>,
}
