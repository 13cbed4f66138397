//! Exchange document for import, export and saved state.
//!
//! The same JSON shape is written to the key-value store and to exported
//! files:
//!
//! ```json
//! { "rates": { "simple": { "jour": 12.02, "nuit": 14.42 } },
//!   "vacations": [ { "type": "simple", "startTime": "18:45", "endTime": "23:00" } ] }
//! ```

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{RateTable, ShiftRate, VacationList, VacationRecord};

/// A full snapshot of the rate table and vacation list, as exported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VacationDocument {
    /// Rates for every shift type.
    pub rates: RateTable,
    /// Vacations in display order.
    pub vacations: Vec<VacationRecord>,
}

impl VacationDocument {
    /// Snapshots the given state.
    pub fn new(rates: &RateTable, vacations: &VacationList) -> Self {
        Self {
            rates: rates.clone(),
            vacations: vacations.as_slice().to_vec(),
        }
    }

    /// Serializes the document as indented JSON.
    pub fn to_json_pretty(&self) -> EngineResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| EngineError::InvalidDocument {
            message: format!("failed to serialize document: {}", e),
        })
    }

    /// Serializes the document as compact JSON.
    pub fn to_json(&self) -> EngineResult<String> {
        serde_json::to_string(self).map_err(|e| EngineError::InvalidDocument {
            message: format!("failed to serialize document: {}", e),
        })
    }
}

/// A document read from a file or the store.
///
/// Both sections are optional. Rate entries are keyed loosely so that a
/// file carrying an unknown shift type can still be imported.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IncomingDocument {
    /// Rates to overwrite, by shift type key.
    #[serde(default)]
    pub rates: Option<BTreeMap<String, ShiftRate>>,
    /// Replacement vacation list.
    #[serde(default)]
    pub vacations: Option<Vec<VacationRecord>>,
}

/// What an import changed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportSummary {
    /// Number of shift types whose rates were overwritten.
    pub rates_updated: usize,
    /// Rate keys skipped because they are not known shift types.
    pub ignored_rate_keys: Vec<String>,
    /// Number of vacations loaded, if the document carried a list.
    pub vacations_imported: Option<usize>,
}

impl IncomingDocument {
    /// Parses a JSON document.
    ///
    /// Fails with [`EngineError::InvalidDocument`] on malformed JSON, an
    /// unknown vacation type, a bad time or a non-numeric rate.
    pub fn parse(json: &str) -> EngineResult<Self> {
        serde_json::from_str(json).map_err(|e| EngineError::InvalidDocument {
            message: e.to_string(),
        })
    }

    /// Applies the document to the given state.
    ///
    /// Nothing is modified unless every rate in the document is valid.
    pub fn apply(
        self,
        rates: &mut RateTable,
        vacations: &mut VacationList,
    ) -> EngineResult<ImportSummary> {
        let mut summary = ImportSummary::default();

        if let Some(incoming) = &self.rates {
            let mut merged = rates.clone();
            summary.ignored_rate_keys = merged.merge_known(incoming)?;
            summary.rates_updated = incoming.len() - summary.ignored_rate_keys.len();
            *rates = merged;
        }

        if let Some(records) = self.vacations {
            summary.vacations_imported = Some(records.len());
            vacations.replace(records);
        }

        Ok(summary)
    }
}

/// File name used when exporting on a given day, e.g. `vacations_2025-10-04.json`.
pub fn export_file_name(date: NaiveDate) -> String {
    format!("vacations_{}.json", date.format("%Y-%m-%d"))
}
