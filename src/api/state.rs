//! Shared state for the vacation calculator API.
//!
//! The API keeps no vacations or per-user data between requests. The only
//! shared value is the loaded configuration, which supplies the rate table
//! used when a request carries none.

use std::path::Path;
use std::sync::Arc;

use crate::config::ConfigLoader;
use crate::error::EngineResult;
use crate::models::RateTable;

/// Read-only state handed to every handler.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    config: Arc<ConfigLoader>,
}

impl AppState {
    /// Wraps an already loaded configuration.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Loads the configuration directory (`calculator.yaml` + `rates.yaml`).
    pub fn load<P: AsRef<Path>>(config_dir: P) -> EngineResult<Self> {
        ConfigLoader::load(config_dir).map(Self::new)
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Rates applied to requests that omit `rates`.
    pub fn default_rates(&self) -> &RateTable {
        self.config.default_rates()
    }
}
