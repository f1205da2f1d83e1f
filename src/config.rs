use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use utoipa::ToSchema;

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 9999 }
fn default_currency_label() -> String { "kUAH".to_string() }
fn default_static_dir() -> String { "static".to_string() }
fn default_presets() -> Vec<Preset> { vec![Preset::variant_6()] }

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
    #[serde(default = "default_presets")]
    pub presets: Vec<Preset>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DisplayConfig {
    #[serde(default = "default_currency_label")]
    pub currency_label: String,
}

/// A named set of raw calculator inputs the UI can load in one click.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, ToSchema)]
pub struct Preset {
    pub id: String,
    pub label: String,
    pub power: String,
    pub sigma1: String,
    pub sigma2: String,
    pub cost: String,
}

impl Preset {
    pub fn variant_6() -> Self {
        Self {
            id: "variant-6".to_string(),
            label: "Variant 6".to_string(),
            power: "5.0".to_string(),
            sigma1: "1.0".to_string(),
            sigma2: "0.25".to_string(),
            cost: "7.0".to_string(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: default_host(), port: default_port() }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { currency_label: default_currency_label() }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            display: DisplayConfig::default(),
            static_dir: default_static_dir(),
            presets: default_presets(),
        }
    }
}

impl Config {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Load from `path`, or fall back to defaults when the file does not exist.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        match Self::load(path) {
            Err(ConfigError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::warn!(path = %path.display(), "config file not found, using defaults");
                Ok(Self::default())
            }
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_uses_defaults() {
        let config = Config::from_json("{}").unwrap();
        assert_eq!(config.server.port, 9999);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.display.currency_label, "kUAH");
        assert_eq!(config.static_dir, "static");
        assert_eq!(config.presets, vec![Preset::variant_6()]);
    }

    #[test]
    fn test_partial_sections() {
        let config = Config::from_json(
            r#"{
                "server": { "port": 8080 },
                "display": { "currency_label": "EUR" },
                "presets": []
            }"#,
        )
        .unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.display.currency_label, "EUR");
        assert!(config.presets.is_empty());
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        let err = Config::from_json("{ \"server\": ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file_falls_back() {
        let config = Config::load_or_default("does/not/exist/config.json").unwrap();
        assert_eq!(config.server.port, 9999);
    }
}
