//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading calculator
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::RateTable;

use super::types::{CalculatorConfig, CalculatorMetadata, RatesConfig};

/// Loads and provides access to calculator configuration.
///
/// # Directory Structure
///
/// ```text
/// config/gtb/
/// ├── calculator.yaml   # Name, version and storage key
/// └── rates.yaml        # Default day/night rate per shift type
/// ```
///
/// # Example
///
/// ```no_run
/// use gtb_vacations::config::ConfigLoader;
/// use gtb_vacations::models::ShiftType;
///
/// let loader = ConfigLoader::load("./config/gtb")?;
/// let rate = loader.default_rates().get(ShiftType::Ssiap)?;
/// println!("SSIAP night rate: {} €", rate.nuit);
/// # Ok::<(), gtb_vacations::error::EngineError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: CalculatorConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Rates listed in `rates.yaml` overwrite the zero defaults, so every
    /// shift type has an entry even when the file lists only some.
    ///
    /// Returns an error if either file is missing, is not valid YAML, or
    /// holds an invalid rate.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let metadata_path = path.join("calculator.yaml");
        let metadata = Self::load_yaml::<CalculatorMetadata>(&metadata_path)?;

        let rates_path = path.join("rates.yaml");
        let rates_config = Self::load_yaml::<RatesConfig>(&rates_path)?;
        let mut rates = RateTable::default();
        for (shift_type, rate) in rates_config.rates.iter() {
            rates
                .set(shift_type, *rate)
                .map_err(|e| EngineError::ConfigParseError {
                    path: rates_path.display().to_string(),
                    message: e.to_string(),
                })?;
        }

        Ok(Self {
            config: CalculatorConfig::new(metadata, rates),
        })
    }

    /// Builds a loader from an already assembled configuration.
    pub fn from_config(config: CalculatorConfig) -> Self {
        Self { config }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying calculator configuration.
    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Returns the calculator metadata.
    pub fn metadata(&self) -> &CalculatorMetadata {
        self.config.metadata()
    }

    /// Returns the rates a new session starts with.
    pub fn default_rates(&self) -> &RateTable {
        self.config.default_rates()
    }

    /// Returns the key under which session state is saved.
    pub fn storage_key(&self) -> &str {
        self.config.storage_key()
    }
}
