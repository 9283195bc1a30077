//! Configuration module for ssl-expiry
//!
//! Handles loading and managing configuration from TOML files.

pub mod settings;
pub mod theme;

pub use settings::{Settings, SslSettings};
pub use theme::Theme;

use crate::utils::ConfigError;
use std::path::Path;

/// Load all configuration from default paths
pub fn load_default_config() -> Result<(Settings, Theme), ConfigError> {
    let settings = Settings::load_default()?;
    let theme = Theme::load_default()?;
    Ok((settings, theme))
}

/// Load configuration from a custom directory.
///
/// Files missing from the directory fall back to defaults.
pub fn load_config_from_dir<P: AsRef<Path>>(dir: P) -> Result<(Settings, Theme), ConfigError> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        return Err(ConfigError::ReadError {
            path: dir.display().to_string(),
            message: "not a directory".to_string(),
        });
    }
    let settings = Settings::load_or_default(dir.join("default.toml"))?;
    let theme = Theme::load_or_default(dir.join("theme.toml"))?;
    Ok((settings, theme))
}
