use crate::metrics::Metrics;

use admuse_config::Config;
use admuse_gen::CopyGenerator;

use std::sync::Arc;

/// Shared application state for all request handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub generator: Arc<CopyGenerator>,
    pub metrics: Metrics,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let generator = Arc::new(CopyGenerator::new(&config.generation));
        Self {
            config,
            generator,
            metrics: Metrics::new(),
        }
    }
}
