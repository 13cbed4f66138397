//! Host-side session state.
//!
//! A [`Session`] owns the rate table, the vacation list and a key-value
//! store. Every user action validates its input and saves the resulting
//! state under the configured storage key. Only once the save succeeds is
//! the state adopted and are registered listeners handed a fresh report.

use std::fmt;
use std::fs;
use std::path::Path;

use chrono::{Local, NaiveDate};
use tracing::{debug, info, warn};

use crate::calculation::calculate_vacation;
use crate::config::CalculatorConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{RateTable, ShiftRate, ShiftType, TimeOfDay, VacationList, VacationRecord};
use crate::report::{Report, ReportRenderer, build_report};
use crate::storage::{ImportSummary, IncomingDocument, KeyValueStore, VacationDocument};

/// The action that triggered a listener call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// A vacation was appended at `index`.
    VacationAdded {
        /// Position of the new vacation.
        index: usize,
    },
    /// The vacation at `index` was removed.
    VacationDeleted {
        /// Position the vacation had.
        index: usize,
    },
    /// Every vacation was removed.
    Cleared,
    /// The rates of one shift type were edited.
    RatesChanged {
        /// The shift type edited.
        shift_type: ShiftType,
    },
    /// A document was imported.
    Imported,
}

type Listener = Box<dyn FnMut(&SessionEvent, &Report)>;

/// The state of one user's calculator.
///
/// # Example
///
/// ```
/// use gtb_vacations::config::CalculatorConfig;
/// use gtb_vacations::session::Session;
/// use gtb_vacations::storage::MemoryStore;
///
/// let mut session = Session::open(MemoryStore::new(), &CalculatorConfig::default());
/// session.add_vacation("ssiap", "18:45", "01:00", Some("finale"))?;
/// session.add_accueil_location()?;
///
/// assert_eq!(session.vacations().len(), 2);
/// # Ok::<(), gtb_vacations::error::EngineError>(())
/// ```
pub struct Session<S: KeyValueStore> {
    store: S,
    storage_key: String,
    rates: RateTable,
    vacations: VacationList,
    listeners: Vec<Listener>,
}

impl<S: KeyValueStore> fmt::Debug for Session<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("storage_key", &self.storage_key)
            .field("rates", &self.rates)
            .field("vacations", &self.vacations)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl<S: KeyValueStore> Session<S> {
    /// Opens a session, restoring any state saved in the store.
    ///
    /// Unreadable or invalid saved state is logged and ignored; the session
    /// then starts from the configured default rates with no vacations.
    pub fn open(store: S, config: &CalculatorConfig) -> Self {
        let mut session = Self {
            store,
            storage_key: config.storage_key().to_string(),
            rates: config.default_rates().clone(),
            vacations: VacationList::new(),
            listeners: Vec::new(),
        };
        session.restore();
        session
    }

    fn restore(&mut self) {
        let saved = match self.store.get(&self.storage_key) {
            Ok(Some(saved)) => saved,
            Ok(None) => {
                debug!(key = %self.storage_key, "No saved state");
                return;
            }
            Err(err) => {
                warn!(key = %self.storage_key, error = %err, "Failed to read saved state");
                return;
            }
        };

        let mut rates = self.rates.clone();
        let mut vacations = VacationList::new();
        let restored =
            IncomingDocument::parse(&saved).and_then(|doc| doc.apply(&mut rates, &mut vacations));

        match restored {
            Ok(_) => {
                self.rates = rates;
                self.vacations = vacations;
                info!(
                    key = %self.storage_key,
                    vacations = self.vacations.len(),
                    "Restored saved state"
                );
            }
            Err(err) => {
                warn!(key = %self.storage_key, error = %err, "Ignoring invalid saved state");
            }
        }
    }

    /// Registers a callback run after every change.
    pub fn on_change<F>(&mut self, listener: F)
    where
        F: FnMut(&SessionEvent, &Report) + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    /// Returns the current rate table.
    pub fn rates(&self) -> &RateTable {
        &self.rates
    }

    /// Returns the vacations in display order.
    pub fn vacations(&self) -> &VacationList {
        &self.vacations
    }

    /// Returns the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Consumes the session and returns its store.
    pub fn into_store(self) -> S {
        self.store
    }

    /// Returns the start time to prefill for a shift type.
    ///
    /// Only the first vacation gets a suggestion; afterwards the previous
    /// entry is kept.
    pub fn suggested_start_time(&self, shift_type: ShiftType) -> Option<TimeOfDay> {
        self.vacations
            .is_empty()
            .then(|| shift_type.default_start_time())
    }

    /// Adds a vacation from form input and returns its index.
    ///
    /// Fails with an input error on an unknown type, a malformed time, or a
    /// type with no rate.
    pub fn add_vacation(
        &mut self,
        shift_type: &str,
        start_time: &str,
        end_time: &str,
        note: Option<&str>,
    ) -> EngineResult<usize> {
        let shift_type: ShiftType = shift_type.parse()?;
        let record = VacationRecord::new(shift_type, start_time.parse()?, end_time.parse()?, note);
        self.add_record(record)
    }

    /// Adds the "Accueil Location" preset.
    pub fn add_accueil_location(&mut self) -> EngineResult<usize> {
        self.add_record(VacationRecord::accueil_location())
    }

    /// Appends a record and returns its index.
    pub fn add_record(&mut self, record: VacationRecord) -> EngineResult<usize> {
        calculate_vacation(&record, &self.rates)?;

        let rates = self.rates.clone();
        let mut vacations = self.vacations.clone();
        vacations.push(record);
        let index = vacations.len() - 1;

        self.commit(rates, vacations, SessionEvent::VacationAdded { index })?;
        info!(index, "Vacation added");
        Ok(index)
    }

    /// Removes the vacation at `index`.
    pub fn delete_vacation(&mut self, index: usize) -> EngineResult<VacationRecord> {
        let rates = self.rates.clone();
        let mut vacations = self.vacations.clone();
        let removed = vacations.remove(index)?;

        self.commit(rates, vacations, SessionEvent::VacationDeleted { index })?;
        info!(index, "Vacation deleted");
        Ok(removed)
    }

    /// Removes every vacation. Confirmation is up to the host.
    pub fn clear_all(&mut self) -> EngineResult<()> {
        let removed = self.vacations.len();
        let rates = self.rates.clone();

        self.commit(rates, VacationList::new(), SessionEvent::Cleared)?;
        info!(removed, "Vacations cleared");
        Ok(())
    }

    /// Replaces the rates of one shift type.
    pub fn set_rate(&mut self, shift_type: ShiftType, rate: ShiftRate) -> EngineResult<()> {
        let rates = self.rates.clone().with(shift_type, rate)?;
        let vacations = self.vacations.clone();

        self.commit(rates, vacations, SessionEvent::RatesChanged { shift_type })?;
        info!(shift_type = %shift_type, jour = %rate.jour, nuit = %rate.nuit, "Rates changed");
        Ok(())
    }

    /// Imports a JSON document.
    ///
    /// The document is fully checked first; on any error the session is
    /// left unchanged.
    pub fn import_json(&mut self, json: &str) -> EngineResult<ImportSummary> {
        let document = IncomingDocument::parse(json)?;

        let mut rates = self.rates.clone();
        let mut vacations = self.vacations.clone();
        let summary = document.apply(&mut rates, &mut vacations)?;
        for record in &vacations {
            calculate_vacation(record, &rates)?;
        }

        self.commit(rates, vacations, SessionEvent::Imported)?;
        for key in &summary.ignored_rate_keys {
            warn!(shift_type = %key, "Ignoring rates for unknown shift type");
        }
        info!(
            rates_updated = summary.rates_updated,
            vacations = ?summary.vacations_imported,
            "Import succeeded"
        );
        Ok(summary)
    }

    /// Imports a JSON document from a file.
    pub fn import_file<P: AsRef<Path>>(&mut self, path: P) -> EngineResult<ImportSummary> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|e| EngineError::InvalidDocument {
            message: format!("failed to read {}: {}", path.display(), e),
        })?;
        self.import_json(&json)
    }

    /// Exports the rates and vacations as indented JSON.
    pub fn export_json(&self) -> EngineResult<String> {
        VacationDocument::new(&self.rates, &self.vacations).to_json_pretty()
    }

    /// Builds a report of the current vacations.
    pub fn report(&self, generated_on: NaiveDate) -> EngineResult<Report> {
        build_report(self.vacations.as_slice(), &self.rates, generated_on)
    }

    /// Renders a printable report.
    ///
    /// Fails with [`EngineError::EmptyReport`] when there are no vacations.
    pub fn print_report<R: ReportRenderer>(
        &self,
        renderer: &R,
        generated_on: NaiveDate,
    ) -> EngineResult<String> {
        if self.vacations.is_empty() {
            return Err(EngineError::EmptyReport);
        }
        let report = self.report(generated_on)?;
        Ok(renderer.render(&report))
    }

    /// Saves the proposed state, then adopts it and notifies listeners.
    ///
    /// Nothing changes if the report cannot be built or the store refuses
    /// the write.
    fn commit(
        &mut self,
        rates: RateTable,
        vacations: VacationList,
        event: SessionEvent,
    ) -> EngineResult<()> {
        let report = if self.listeners.is_empty() {
            None
        } else {
            Some(build_report(
                vacations.as_slice(),
                &rates,
                Local::now().date_naive(),
            )?)
        };

        let json = VacationDocument::new(&rates, &vacations).to_json()?;
        self.store.set(&self.storage_key, &json).inspect_err(|err| {
            warn!(key = %self.storage_key, error = %err, "Failed to save state, change discarded");
        })?;

        self.rates = rates;
        self.vacations = vacations;

        if let Some(report) = report {
            for listener in &mut self.listeners {
                listener(&event, &report);
            }
        }
        Ok(())
    }
}
