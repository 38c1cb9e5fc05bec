mod config;
mod cors_config;
mod error;
mod generation_config;
mod log_level;
mod logging_config;
mod server_config;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use cors_config::CorsConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use generation_config::GenerationConfig;
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_STATIC_DIR: &str = "public";
const DEFAULT_GENERATION_BASE_URL: &str = "https://api.openai.com";
const DEFAULT_GENERATION_MODEL: &str = "gpt-4o-mini";
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const MIN_PORT: u16 = 1024;
