use crate::config::Config;
use crate::registry::Registry;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<Registry>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config, registry: Registry) -> Self {
        Self {
            registry: Arc::new(registry),
            config: Arc::new(config),
        }
    }
}
