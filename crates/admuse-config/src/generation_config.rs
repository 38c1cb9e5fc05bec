use crate::{ConfigError, ConfigErrorResult, DEFAULT_GENERATION_BASE_URL, DEFAULT_GENERATION_MODEL};

use serde::Deserialize;

/// Remote text-generation settings.
///
/// Disabled by default: without a key the service runs template-only,
/// which is the demo configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Whether the remote generation path is attempted at all
    pub enabled: bool,
    /// Base URL of the OpenAI-compatible completion endpoint
    pub base_url: String,
    /// Model identifier sent with each completion request
    pub model: String,
    /// API key. Prefer the ADMUSE_GENERATION_API_KEY env var over the
    /// config file; the value is never logged.
    pub api_key: Option<String>,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            base_url: String::from(DEFAULT_GENERATION_BASE_URL),
            model: String::from(DEFAULT_GENERATION_MODEL),
            api_key: None,
        }
    }
}

impl GenerationConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !self.enabled {
            return Ok(());
        }

        if self.api_key.as_deref().is_none_or(str::is_empty) {
            return Err(ConfigError::generation(
                "generation.enabled requires generation.api_key (or ADMUSE_GENERATION_API_KEY)",
            ));
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ConfigError::generation(format!(
                "generation.base_url must start with http:// or https://, got {}",
                self.base_url
            )));
        }

        if self.model.is_empty() {
            return Err(ConfigError::generation("generation.model must not be empty"));
        }

        Ok(())
    }
}
