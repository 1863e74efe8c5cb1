//! Analytics configuration.

use serde::{Deserialize, Serialize};

/// Settings for the analytics dispatcher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsConfig {
    /// Whether events are sent at all.
    pub enabled: bool,
    /// Site domain events are reported under.
    pub domain: String,
    /// Host of the analytics service.
    pub api_host: String,
    /// Whether events from a localhost origin are sent.
    pub track_localhost: bool,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            domain: "openverse.org".to_string(),
            api_host: "https://plausible.io".to_string(),
            track_localhost: false,
        }
    }
}

/// Parses the `[analytics]` table of a TOML document.
pub fn parse_config(content: &str) -> Result<AnalyticsConfig, ConfigError> {
    let config: toml::Value =
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;

    config
        .get("analytics")
        .map(|v| toml::Value::try_into(v.clone()))
        .transpose()
        .map_err(|e| ConfigError::ParseError(e.to_string()))
        .map(Option::unwrap_or_default)
}

/// Loads configuration from a TOML file.
pub fn load_config(path: &str) -> Result<AnalyticsConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError(e.to_string()))?;
    parse_config(&content)
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),
    #[error("Parse error: {0}")]
    ParseError(String),
}
