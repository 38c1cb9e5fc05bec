use crate::{ConfigError, ConfigErrorResult, CorsConfig, GenerationConfig, LoggingConfig, ServerConfig};

use std::path::PathBuf;

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub generation: GenerationConfig,
    pub cors: CorsConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config with full production error handling.
    ///
    /// Loading order:
    /// 1. Load .env if present (development)
    /// 2. Check for ADMUSE_CONFIG_DIR env var, else use ./.admuse/
    /// 3. Auto-create config directory if it doesn't exist
    /// 4. Load config.toml if it exists, else use defaults
    /// 5. Apply ADMUSE_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let _ = dotenvy::dotenv();

        let config_dir = Self::config_dir()?;

        // Auto-create config directory
        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join("config.toml");

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &PathBuf) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.clone(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.clone(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: ADMUSE_CONFIG_DIR env var > ./.admuse/ (relative to cwd)
    pub fn config_dir() -> Result<PathBuf, ConfigError> {
        if let Ok(dir) = std::env::var("ADMUSE_CONFIG_DIR") {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(".admuse"))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.generation.validate()?;
        self.cors.validate()?;

        Ok(())
    }

    /// Get bind address as string.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}:{}", self.server.host, self.server.port);

        if self.server.static_dir.is_empty() {
            info!("  static assets: disabled");
        } else {
            info!("  static assets: {}", self.server.static_dir);
        }

        info!(
            "  generation: {} (model: {}, key: {})",
            if self.generation.enabled {
                "enabled"
            } else {
                "disabled"
            },
            self.generation.model,
            if self.generation.api_key.is_some() {
                "configured"
            } else {
                "none"
            }
        );

        if self.cors.allowed_origins.is_empty() {
            info!("  cors: any origin");
        } else {
            info!("  cors: {} allowed origins", self.cors.allowed_origins.len());
        }

        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("ADMUSE_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("ADMUSE_SERVER_PORT", &mut self.server.port);
        Self::apply_env_string("ADMUSE_SERVER_STATIC_DIR", &mut self.server.static_dir);

        // Generation
        Self::apply_env_bool("ADMUSE_GENERATION_ENABLED", &mut self.generation.enabled);
        Self::apply_env_string("ADMUSE_GENERATION_BASE_URL", &mut self.generation.base_url);
        Self::apply_env_string("ADMUSE_GENERATION_MODEL", &mut self.generation.model);
        Self::apply_env_option_string(
            "ADMUSE_GENERATION_API_KEY",
            &mut self.generation.api_key,
        );

        // CORS (comma-separated origin list)
        if let Ok(val) = std::env::var("ADMUSE_CORS_ALLOWED_ORIGINS") {
            self.cors.allowed_origins = val
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
        }

        // Logging
        Self::apply_env_parse("ADMUSE_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("ADMUSE_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("ADMUSE_LOG_FILE", &mut self.logging.file);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
