//! Application state for the HTTP server.

use std::sync::Arc;

use crate::config::AppConfig;
use crate::models::Cosmology;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Configuration loaded at startup; never mutated afterwards
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// Create a new application state from the loaded configuration.
    pub fn new(config: AppConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Cosmology used for every distance computation of this deployment.
    pub fn cosmology(&self) -> &Cosmology {
        &self.config.cosmology
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}
