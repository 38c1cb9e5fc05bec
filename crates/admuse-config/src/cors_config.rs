use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

/// Allowed CORS origins.
///
/// An empty list keeps the permissive development behavior; production
/// deployments list their frontend origins explicitly.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl CorsConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        for origin in &self.allowed_origins {
            if origin.is_empty() || origin.contains(char::is_whitespace) {
                return Err(ConfigError::cors(format!(
                    "cors.allowed_origins entries must be origin URLs, got {:?}",
                    origin
                )));
            }
        }

        Ok(())
    }
}
