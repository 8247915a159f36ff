//! Application configuration
//!
//! Loaded from a JSON file with camelCase keys. Every field is optional and
//! falls back to the built-in defaults.

use app_ui::tab_bar::{ConfigError as TabBarConfigError, TabBarConfig};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;
use tokio::fs;

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Tab bar settings out of range
    #[error("Invalid tab bar configuration: {0}")]
    Invalid(#[from] TabBarConfigError),

    /// Screen width not positive and finite
    #[error("Invalid screen width: {0}")]
    InvalidScreenWidth(f32),
}

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Default design-time screen width
pub const DEFAULT_SCREEN_WIDTH: f32 = 390.0;

/// Default splash duration
pub const DEFAULT_SPLASH_DELAY_MS: u64 = 2_000;

/// Top-level application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppConfig {
    /// Window width used for the fallback bar width
    pub screen_width: f32,
    /// `tracing` filter directives, overridden by `RUST_LOG`
    pub log_filter: String,
    /// How long the splash screen stays up
    pub splash_delay_ms: u64,
    /// Tab bar settings
    pub tab_bar: TabBarConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            screen_width: DEFAULT_SCREEN_WIDTH,
            log_filter: "info".to_string(),
            splash_delay_ms: DEFAULT_SPLASH_DELAY_MS,
            tab_bar: TabBarConfig::default(),
        }
    }
}

impl AppConfig {
    /// Parse and validate a JSON document
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a configuration file
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).await?;
        let config = Self::from_json(&contents)?;
        tracing::info!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Load a configuration file, or use defaults when it does not exist
    pub async fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        match Self::load(path.as_ref()).await {
            Err(ConfigError::Io(err)) if err.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!(
                    path = %path.as_ref().display(),
                    "No configuration file, using defaults"
                );
                Ok(Self::default())
            }
            other => other,
        }
    }

    /// Check every field
    pub fn validate(&self) -> Result<()> {
        if !self.screen_width.is_finite() || self.screen_width <= 0.0 {
            return Err(ConfigError::InvalidScreenWidth(self.screen_width));
        }
        self.tab_bar.validate()?;
        Ok(())
    }

    /// Splash duration
    pub fn splash_delay(&self) -> Duration {
        Duration::from_millis(self.splash_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = AppConfig::from_json("{}").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.splash_delay(), Duration::from_secs(2));
    }

    #[test]
    fn test_partial_tab_bar_section() {
        let config = AppConfig::from_json(
            r##"{ "screenWidth": 768, "tabBar": { "minCircle": 40, "activeTint": "#112233" } }"##,
        )
        .unwrap();
        assert_eq!(config.screen_width, 768.0);
        assert_eq!(config.tab_bar.min_circle, 40.0);
        assert_eq!(config.tab_bar.circle_margin, 8.0);
        assert_eq!(config.tab_bar.active_tint.as_deref(), Some("#112233"));
    }

    #[test]
    fn test_invalid_screen_width() {
        let err = AppConfig::from_json(r#"{ "screenWidth": -1 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidScreenWidth(w) if w == -1.0));
    }

    #[test]
    fn test_invalid_tab_bar_settings() {
        let err = AppConfig::from_json(r#"{ "tabBar": { "spring": { "mass": 0 } } }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_malformed_json() {
        let err = AppConfig::from_json("{ screenWidth").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
