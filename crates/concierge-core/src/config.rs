use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{ConciergeError, Result};

/// Which built-in assistant this process runs.
///
/// Both variants share the same engine; they differ only in their rule table
/// and in what happens when no rule matches (hosted model vs. a fixed
/// clarification line).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssistantVariant {
    /// Property-leasing assistant with an LLM fallback.
    #[default]
    Property,
    /// E-commerce storefront assistant with a static fallback.
    Storefront,
}

impl std::str::FromStr for AssistantVariant {
    type Err = ConciergeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "property" => Ok(AssistantVariant::Property),
            "storefront" => Ok(AssistantVariant::Storefront),
            other => Err(ConciergeError::Config(format!(
                "unknown assistant variant: {}",
                other
            ))),
        }
    }
}

impl std::fmt::Display for AssistantVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssistantVariant::Property => write!(f, "property"),
            AssistantVariant::Storefront => write!(f, "storefront"),
        }
    }
}

/// Top-level configuration for the Concierge application.
///
/// Loaded from `~/.concierge/config.toml` by default. Each section
/// corresponds to one concern: server basics, assistant selection, and the
/// hosted completion model.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConciergeConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub assistant: AssistantConfig,
    #[serde(default)]
    pub model: ModelConfig,
}

impl ConciergeConfig {
    /// Load configuration from a TOML file.
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: ConciergeConfig = toml::from_str(&content)?;
        info!("Configuration loaded from {}", path.display());
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist or cannot be parsed.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                warn!(
                    "Failed to load config from {}: {}. Using defaults.",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Save the current configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| ConciergeError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        info!("Configuration saved to {}", path.display());
        Ok(())
    }
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// API server port.
    pub port: u16,
    /// Log level: trace, debug, info, warn, error.
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            port: 3030,
            log_level: "info".to_string(),
        }
    }
}

/// Assistant selection and session behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssistantConfig {
    /// Which built-in assistant to run.
    pub variant: AssistantVariant,
    /// Idle minutes after which a session is replaced on next contact.
    pub session_timeout_minutes: u32,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            variant: AssistantVariant::Property,
            session_timeout_minutes: 30,
        }
    }
}

/// Hosted completion model settings (property variant fallback).
///
/// The API key itself never appears in the config file; `api_key_env` names
/// the environment variable that holds it. A missing or invalid key only
/// surfaces as a caught completion failure at runtime.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Base URL of the OpenAI-compatible endpoint.
    pub base_url: String,
    /// Model identifier sent with each request.
    pub model: String,
    /// Environment variable holding the API key.
    pub api_key_env: String,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.openai.com".to_string(),
            model: "gpt-3.5-turbo".to_string(),
            api_key_env: "OPENAI_API_KEY".to_string(),
        }
    }
}
