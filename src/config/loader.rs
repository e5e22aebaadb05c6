use std::fs;
use std::net::IpAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

use crate::config::types::BeaconConfig;

const MIN_PORT: u16 = 1024;
const MAX_HELLO_LENGTH: u32 = 65536;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    JsonError {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    TomlError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl BeaconConfig {
    /// Returns the path to the default configuration file.
    ///
    /// Uses `~/.config/beacon-server/config.json` on Unix,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn default_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("beacon-server").join("config.json")
    }

    /// Loads configuration from an optional config file.
    ///
    /// - If `path` doesn't exist, returns `BeaconConfig::default()`.
    /// - Otherwise behaves like [`BeaconConfig::load`].
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(BeaconConfig::default());
        }

        Self::load(path)
    }

    /// Reads, parses and validates the config file at `path`.
    ///
    /// Files ending in `.toml` are parsed as TOML, anything else as JSON.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config = Self::parse(path, &content)?;
        config.validate()?;

        tracing::debug!(path = %path.display(), "Loaded beacon config");
        Ok(config)
    }

    fn parse(path: &Path, content: &str) -> Result<Self, ConfigError> {
        let is_toml = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

        if is_toml {
            toml::from_str(content).map_err(|e| ConfigError::TomlError {
                path: path.to_path_buf(),
                source: e,
            })
        } else {
            serde_json::from_str(content).map_err(|e| ConfigError::JsonError {
                path: path.to_path_buf(),
                source: e,
            })
        }
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The broadcast interval is positive and fits a `Duration`
    /// - Both bind addresses are IP addresses
    /// - All ports are unprivileged (>= 1024)
    /// - The API path is absolute
    /// - The "Hello" length fits a UDP datagram
    pub fn validate(&self) -> Result<(), ConfigError> {
        let period = Duration::try_from_secs_f64(self.broadcast_interval);
        if !(self.broadcast_interval > 0.0 && period.is_ok()) {
            return Err(invalid(format!(
                "invalid broadcast interval {}",
                self.broadcast_interval
            )));
        }

        for (name, addr) in [
            ("server_addr", &self.server_addr),
            ("client_addr", &self.client_addr),
        ] {
            if addr.parse::<IpAddr>().is_err() {
                return Err(invalid(format!("{} '{}' is not an IP address", name, addr)));
            }
        }

        for (name, port) in [
            ("server_port", self.server_port),
            ("client_port", self.client_port),
            ("apiPort", self.api_port),
        ] {
            if port < MIN_PORT {
                return Err(invalid(format!(
                    "invalid {} {} (must be at least {})",
                    name, port, MIN_PORT
                )));
            }
        }

        if !self.api_url.starts_with('/') {
            return Err(invalid(format!(
                "apiUrl '{}' must start with '/'",
                self.api_url
            )));
        }

        if self.hello_max_length == 0 || self.hello_max_length > MAX_HELLO_LENGTH {
            return Err(invalid(format!(
                "invalid 'Hello' message length {} (must be 1..={})",
                self.hello_max_length, MAX_HELLO_LENGTH
            )));
        }

        Ok(())
    }
}

fn invalid(message: String) -> ConfigError {
    ConfigError::ValidationError { message }
}
