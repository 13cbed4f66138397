//! Configuration loading and management for the vacation calculator.
//!
//! This module loads the calculator metadata and default rate table from
//! YAML files.
//!
//! # Example
//!
//! ```no_run
//! use gtb_vacations::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/gtb").unwrap();
//! println!("Loaded: {}", config.metadata().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{CalculatorConfig, CalculatorMetadata, DEFAULT_STORAGE_KEY, RatesConfig};
