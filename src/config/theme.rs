//! Theme configuration for CLI display
//!
//! Maps each severity tier to a `console` style.

use crate::models::Severity;
use crate::utils::ConfigError;
use console::Style;
use serde::Deserialize;
use std::path::Path;

/// Severity colours as `console` dotted style strings (`"red"`, `"yellow.bold"`, ...).
/// An empty string means unstyled.
#[derive(Debug, Clone, Deserialize)]
pub struct Colors {
    #[serde(default = "Colors::default_critical")]
    pub critical: String,
    #[serde(default = "Colors::default_warning")]
    pub warning: String,
    #[serde(default = "Colors::default_info")]
    pub info: String,
    #[serde(default)]
    pub expired: String,
}

impl Colors {
    fn default_critical() -> String {
        "red".to_string()
    }
    fn default_warning() -> String {
        "yellow".to_string()
    }
    fn default_info() -> String {
        "green".to_string()
    }
}

impl Default for Colors {
    fn default() -> Self {
        Self {
            critical: Self::default_critical(),
            warning: Self::default_warning(),
            info: Self::default_info(),
            expired: String::new(),
        }
    }
}

/// Complete theme configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Theme {
    #[serde(default)]
    pub colors: Colors,
}

impl Theme {
    /// Style used to render a severity tier
    pub fn severity_style(&self, severity: Severity) -> Style {
        let dotted = match severity {
            Severity::Critical => &self.colors.critical,
            Severity::Warning => &self.colors.warning,
            Severity::Info => &self.colors.info,
            Severity::Expired => &self.colors.expired,
        };
        Style::from_dotted_str(dotted)
    }

    /// Load theme from the default config file
    pub fn load_default() -> Result<Self, ConfigError> {
        Self::load_or_default("config/theme.toml")
    }

    /// Load theme from `path` if it exists, otherwise use defaults
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            Self::load_from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load theme from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }
}
