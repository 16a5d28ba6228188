//! TOML-based application configuration.
//!
//! Stores the model cascade and generation preferences:
//! - Ordered extraction models (first is the cheap tier)
//! - Recommendation model
//! - API base URL
//! - Optional temperature / output-token cap
//!
//! Configuration is stored at `~/.config/negotiator/config.toml`.
//! Set NEGOTIATOR_ENV=dev to use `~/.config/negotiator-dev/` instead.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::ConfigError;
use crate::model::gemini::DEFAULT_API_BASE;

fn default_extract_models() -> Vec<String> {
    vec!["gemma-3-1b-it".to_string(), "gemini-2.0-flash".to_string()]
}

fn default_recommend_model() -> String {
    "gemini-2.0-flash".to_string()
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE.to_string()
}

/// Model selection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelsConfig {
    /// Extraction cascade, tried in order
    #[serde(default = "default_extract_models")]
    pub extract: Vec<String>,
    /// Single recommendation model
    #[serde(default = "default_recommend_model")]
    pub recommend: String,
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
}

impl Default for ModelsConfig {
    fn default() -> Self {
        Self {
            extract: default_extract_models(),
            recommend: default_recommend_model(),
            api_base_url: default_api_base_url(),
        }
    }
}

/// Generation preferences applied to every call.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerationSettings {
    #[serde(default)]
    pub temperature: Option<f32>,
    #[serde(default)]
    pub max_output_tokens: Option<u32>,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/negotiator/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub models: ModelsConfig,
    #[serde(default)]
    pub generation: GenerationSettings,
}

/// Returns `~/.config/negotiator[-dev]/` based on NEGOTIATOR_ENV.
pub fn config_dir() -> Result<PathBuf, ConfigError> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("NEGOTIATOR_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("negotiator-dev")
    } else {
        base_dir.join("negotiator")
    };

    std::fs::create_dir_all(&dir).map_err(|e| ConfigError::NoConfigDir(e.to_string()))?;
    Ok(dir)
}

impl Config {
    /// Load from the default location; any problem falls back to defaults.
    pub fn load() -> Self {
        Self::try_load().unwrap_or_default()
    }

    /// Load from the default location, surfacing errors.
    pub fn try_load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::path()?)
    }

    /// Save to the default location.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::path()?)
    }

    /// Default config file path.
    pub fn path() -> Result<PathBuf, ConfigError> {
        Ok(config_dir()?.join("config.toml"))
    }

    pub(crate) fn load_from(path: &PathBuf) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::LoadFailed {
            path: path.clone(),
            message: e.to_string(),
        })?;
        toml::from_str(&raw).map_err(|e| ConfigError::LoadFailed {
            path: path.clone(),
            message: e.to_string(),
        })
    }

    pub(crate) fn save_to(&self, path: &PathBuf) -> Result<(), ConfigError> {
        let raw = toml::to_string_pretty(self).map_err(|e| ConfigError::SaveFailed {
            path: path.clone(),
            message: e.to_string(),
        })?;
        std::fs::write(path, raw).map_err(|e| ConfigError::SaveFailed {
            path: path.clone(),
            message: e.to_string(),
        })
    }

    /// Get a config value by dotted key, for the CLI.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "models.extract" => Some(self.models.extract.join(",")),
            "models.recommend" => Some(self.models.recommend.clone()),
            "models.api_base_url" => Some(self.models.api_base_url.clone()),
            "generation.temperature" => Some(
                self.generation
                    .temperature
                    .map(|t| t.to_string())
                    .unwrap_or_default(),
            ),
            "generation.max_output_tokens" => Some(
                self.generation
                    .max_output_tokens
                    .map(|t| t.to_string())
                    .unwrap_or_default(),
            ),
            _ => None,
        }
    }

    /// Set a config value by dotted key and persist it.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        match key {
            "models.extract" => {
                let models: Vec<String> = value
                    .split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
                    .collect();
                if models.is_empty() {
                    return Err(ConfigError::InvalidValue {
                        key: key.to_string(),
                        message: "at least one model is required".to_string(),
                    });
                }
                self.models.extract = models;
            }
            "models.recommend" => {
                if value.trim().is_empty() {
                    return Err(ConfigError::InvalidValue {
                        key: key.to_string(),
                        message: "model name cannot be empty".to_string(),
                    });
                }
                self.models.recommend = value.trim().to_string();
            }
            "models.api_base_url" => {
                self.models.api_base_url = value.trim().trim_end_matches('/').to_string();
            }
            "generation.temperature" => {
                let t: f32 = value.parse().map_err(|_| ConfigError::InvalidValue {
                    key: key.to_string(),
                    message: format!("'{value}' is not a number"),
                })?;
                if !(0.0..=2.0).contains(&t) {
                    return Err(ConfigError::InvalidValue {
                        key: key.to_string(),
                        message: "temperature must be in 0.0..=2.0".to_string(),
                    });
                }
                self.generation.temperature = Some(t);
            }
            "generation.max_output_tokens" => {
                let n: u32 = value.parse().map_err(|_| ConfigError::InvalidValue {
                    key: key.to_string(),
                    message: format!("'{value}' is not a positive integer"),
                })?;
                self.generation.max_output_tokens = Some(n);
            }
            _ => return Err(ConfigError::UnknownKey(key.to_string())),
        }
        self.save()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_the_shipped_cascade() {
        let config = Config::default();
        assert_eq!(
            config.models.extract,
            vec!["gemma-3-1b-it", "gemini-2.0-flash"]
        );
        assert_eq!(config.models.recommend, "gemini-2.0-flash");
        assert_eq!(config.models.api_base_url, DEFAULT_API_BASE);
        assert!(config.generation.temperature.is_none());
    }

    #[test]
    fn test_toml_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = Config::default();
        config.models.recommend = "gemini-2.5-pro".to_string();
        config.generation.temperature = Some(0.4);
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.models.recommend, "gemini-2.5-pro");
        assert_eq!(loaded.generation.temperature, Some(0.4));
    }

    #[test]
    fn test_missing_file_loads_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.toml");
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.models.recommend, "gemini-2.0-flash");
    }

    #[test]
    fn test_partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[models]\nrecommend = \"gemini-2.5-flash\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.models.recommend, "gemini-2.5-flash");
        // Unset sections and fields come back as defaults
        assert_eq!(config.models.extract.len(), 2);
        assert!(config.generation.max_output_tokens.is_none());
    }

    #[test]
    fn test_get_known_and_unknown_keys() {
        let config = Config::default();
        assert_eq!(
            config.get("models.extract"),
            Some("gemma-3-1b-it,gemini-2.0-flash".to_string())
        );
        assert_eq!(config.get("models.nope"), None);
    }

    #[test]
    fn test_set_rejects_bad_values() {
        let mut config = Config::default();
        assert!(matches!(
            config.set("generation.temperature", "hot"),
            Err(ConfigError::InvalidValue { .. })
        ));
        assert!(matches!(
            config.set("models.extract", " , "),
            Err(ConfigError::InvalidValue { .. })
        ));
        assert!(matches!(
            config.set("totally.unknown", "x"),
            Err(ConfigError::UnknownKey(_))
        ));
    }
}
