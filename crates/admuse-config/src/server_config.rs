use crate::{ConfigError, ConfigErrorResult, DEFAULT_HOST, DEFAULT_PORT, DEFAULT_STATIC_DIR, MIN_PORT};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Directory of single-page client assets, relative to the working
    /// directory. Empty string disables static serving.
    pub static_dir: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from(DEFAULT_HOST),
            port: DEFAULT_PORT,
            static_dir: String::from(DEFAULT_STATIC_DIR),
        }
    }
}

impl ServerConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        // Port 0 means "auto-assign" - OS picks an available port.
        // Any other port must be >= MIN_PORT (1024).
        if self.port != 0 && self.port < MIN_PORT {
            return Err(ConfigError::server(format!(
                "server.port must be 0 (auto) or >= {}, got {}",
                MIN_PORT, self.port
            )));
        }

        if self.host.is_empty() {
            return Err(ConfigError::server("server.host must not be empty"));
        }

        Ok(())
    }
}
