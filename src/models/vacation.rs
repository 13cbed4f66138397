//! Vacation record model and the ordered list that owns the records.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::{ShiftType, TimeOfDay};

/// Note attached to the "Accueil Location" preset.
pub const ACCUEIL_LOCATION_NOTE: &str = "Accueil Location";

/// A single worked shift.
///
/// Field names follow the exchange document (`type`, `startTime`,
/// `endTime`, `note`).
///
/// # Example
///
/// ```
/// use gtb_vacations::models::{ShiftType, VacationRecord};
///
/// let record: VacationRecord = serde_json::from_str(
///     r#"{"type": "ssiap", "startTime": "18:45", "endTime": "01:00"}"#,
/// ).unwrap();
/// assert_eq!(record.shift_type, ShiftType::Ssiap);
/// assert!(record.note.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VacationRecord {
    /// The post worked.
    #[serde(rename = "type")]
    pub shift_type: ShiftType,
    /// Clock time the shift started.
    #[serde(rename = "startTime")]
    pub start_time: TimeOfDay,
    /// Clock time the shift ended. At or before the start means the next day.
    #[serde(rename = "endTime")]
    pub end_time: TimeOfDay,
    /// Optional free text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl VacationRecord {
    /// Creates a record, trimming the note and dropping it when blank.
    pub fn new(
        shift_type: ShiftType,
        start_time: TimeOfDay,
        end_time: TimeOfDay,
        note: Option<&str>,
    ) -> Self {
        let note = note
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .map(str::to_string);
        Self {
            shift_type,
            start_time,
            end_time,
            note,
        }
    }

    /// The "Accueil Location" preset: a simple post from 12:30 to 18:45.
    pub fn accueil_location() -> Self {
        Self {
            shift_type: ShiftType::Simple,
            start_time: TimeOfDay::at(12, 30),
            end_time: TimeOfDay::at(18, 45),
            note: Some(ACCUEIL_LOCATION_NOTE.to_string()),
        }
    }

    /// Returns true if the shift ends on the following day.
    pub fn crosses_midnight(&self) -> bool {
        self.end_time <= self.start_time
    }

    /// Returns the note if it has visible content.
    pub fn visible_note(&self) -> Option<&str> {
        self.note.as_deref().filter(|n| !n.trim().is_empty())
    }
}

/// The vacations entered by the user, in insertion order.
///
/// Insertion order is also display and export order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VacationList {
    records: Vec<VacationRecord>,
}

impl VacationList {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record at the end.
    pub fn push(&mut self, record: VacationRecord) {
        self.records.push(record);
    }

    /// Removes and returns the record at `index`.
    pub fn remove(&mut self, index: usize) -> EngineResult<VacationRecord> {
        if index >= self.records.len() {
            return Err(EngineError::VacationNotFound {
                index,
                len: self.records.len(),
            });
        }
        Ok(self.records.remove(index))
    }

    /// Removes every record.
    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Replaces the whole list, keeping the given order.
    pub fn replace(&mut self, records: Vec<VacationRecord>) {
        self.records = records;
    }

    /// Returns the record at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&VacationRecord> {
        self.records.get(index)
    }

    /// Iterates over the records in order.
    pub fn iter(&self) -> std::slice::Iter<'_, VacationRecord> {
        self.records.iter()
    }

    /// Returns the records as a slice.
    pub fn as_slice(&self) -> &[VacationRecord] {
        &self.records
    }

    /// Returns the number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if there are no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl From<Vec<VacationRecord>> for VacationList {
    fn from(records: Vec<VacationRecord>) -> Self {
        Self { records }
    }
}

impl<'a> IntoIterator for &'a VacationList {
    type Item = &'a VacationRecord;
    type IntoIter = std::slice::Iter<'a, VacationRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
