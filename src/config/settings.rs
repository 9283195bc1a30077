//! Application settings configuration
//!
//! Defines TLS timeouts and expiry thresholds.

use crate::models::ExpiryThresholds;
use crate::utils::ConfigError;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// SSL/TLS settings
#[derive(Debug, Clone, Deserialize)]
pub struct SslSettings {
    #[serde(default = "default_timeout")]
    pub connect_timeout_secs: u64,
    #[serde(default = "default_timeout")]
    pub handshake_timeout_secs: u64,
}

fn default_timeout() -> u64 {
    10
}

impl Default for SslSettings {
    fn default() -> Self {
        Self {
            connect_timeout_secs: default_timeout(),
            handshake_timeout_secs: default_timeout(),
        }
    }
}

impl SslSettings {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn handshake_timeout(&self) -> Duration {
        Duration::from_secs(self.handshake_timeout_secs)
    }
}

/// Application settings
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Settings {
    #[serde(default)]
    pub ssl: SslSettings,
    #[serde(default)]
    pub expiry: ExpiryThresholds,
}

impl Settings {
    /// Load settings from the default config file
    pub fn load_default() -> Result<Self, ConfigError> {
        Self::load_or_default("config/default.toml")
    }

    /// Load settings from `path` if it exists, otherwise use defaults
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            Self::load_from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load settings from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        let settings = Self::from_toml(&content).map_err(|e| match e {
            ConfigError::ParseError { message, .. } => ConfigError::ParseError {
                path: path.display().to_string(),
                message,
            },
            other => other,
        })?;
        tracing::debug!(path = %path.display(), "Loaded settings");
        Ok(settings)
    }

    /// Parse and validate settings from TOML text
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let settings: Self = toml::from_str(content).map_err(|e| ConfigError::ParseError {
            path: "<inline>".to_string(),
            message: e.to_string(),
        })?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.expiry.critical_days > self.expiry.warning_days {
            return Err(ConfigError::InvalidValue {
                key: "expiry.critical_days".to_string(),
                message: format!(
                    "must not exceed expiry.warning_days ({})",
                    self.expiry.warning_days
                ),
            });
        }
        if self.ssl.connect_timeout_secs == 0 || self.ssl.handshake_timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                key: "ssl".to_string(),
                message: "timeouts must be at least one second".to_string(),
            });
        }
        Ok(())
    }
}
