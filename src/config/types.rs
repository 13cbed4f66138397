//! Configuration types for the vacation calculator.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use serde::Deserialize;

use crate::models::RateTable;

/// Storage key used when the configuration does not name one.
pub const DEFAULT_STORAGE_KEY: &str = "gtb_calculator_data";

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

/// Metadata about the calculator installation, from `calculator.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct CalculatorMetadata {
    /// The human-readable name of the calculator.
    pub name: String,
    /// The version of the rule set.
    pub version: String,
    /// Key under which the session state is saved.
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
}

impl Default for CalculatorMetadata {
    fn default() -> Self {
        Self {
            name: "Calculateur de Vacations GTB".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            storage_key: default_storage_key(),
        }
    }
}

/// Rates configuration file structure (`rates.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub struct RatesConfig {
    /// Default rate per shift type.
    pub rates: RateTable,
}

/// The complete calculator configuration.
///
/// The default rates seed a new session; once the user edits rates the
/// saved table takes over.
#[derive(Debug, Clone, Default)]
pub struct CalculatorConfig {
    metadata: CalculatorMetadata,
    default_rates: RateTable,
}

impl CalculatorConfig {
    /// Creates a new CalculatorConfig from its component parts.
    pub fn new(metadata: CalculatorMetadata, default_rates: RateTable) -> Self {
        Self {
            metadata,
            default_rates,
        }
    }

    /// Returns the calculator metadata.
    pub fn metadata(&self) -> &CalculatorMetadata {
        &self.metadata
    }

    /// Returns the rates a new session starts with.
    pub fn default_rates(&self) -> &RateTable {
        &self.default_rates
    }

    /// Returns the key under which session state is saved.
    pub fn storage_key(&self) -> &str {
        &self.metadata.storage_key
    }
}
