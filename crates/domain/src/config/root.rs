use serde::{Deserialize, Serialize};
use std::path::Path;

use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::upstream::UpstreamConfig;

const LOCAL_CONFIG_PATH: &str = "dotlookup.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/dotlookup/config.toml";

/// Main configuration structure for dotlookup
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
pub struct Config {
    /// Upstream resolver and transport settings
    #[serde(default)]
    pub upstream: UpstreamConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. dotlookup.toml in current directory
    /// 3. /etc/dotlookup/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path.or_else(|| Self::get_config_path()) {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml_str(&contents)
    }

    /// Apply command-line overrides to configuration
    pub fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(server) = overrides.server {
            self.upstream.server = server;
            // a new server invalidates a server name configured for the old one
            self.upstream.tls_hostname = None;
        }
        if let Some(hostname) = overrides.tls_hostname {
            self.upstream.tls_hostname = Some(hostname);
        }
        if let Some(timeout_ms) = overrides.query_timeout_ms {
            self.upstream.query_timeout_ms = timeout_ms;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.upstream
            .protocol()
            .map_err(|e| ConfigError::Validation(e.to_string()))?;

        if self.upstream.query_timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "query_timeout_ms cannot be 0".to_string(),
            ));
        }

        if let Some(ca_file) = &self.upstream.tls_ca_file {
            if !Path::new(ca_file).exists() {
                return Err(ConfigError::Validation(format!(
                    "tls_ca_file '{}' does not exist",
                    ca_file
                )));
            }
        }

        Ok(())
    }

    /// Get the path to the configuration file being used
    pub fn get_config_path() -> Option<&'static str> {
        [LOCAL_CONFIG_PATH, SYSTEM_CONFIG_PATH]
            .into_iter()
            .find(|candidate| Path::new(candidate).exists())
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub server: Option<String>,
    pub tls_hostname: Option<String>,
    pub query_timeout_ms: Option<u64>,
    pub log_level: Option<String>,
}
