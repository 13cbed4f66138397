//! Shift type model.
//!
//! A vacation is worked under one of four posts, each with its own day and
//! night hourly rate.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

use super::TimeOfDay;

/// The kind of post worked during a vacation.
///
/// # Example
///
/// ```
/// use gtb_vacations::models::ShiftType;
///
/// let shift_type: ShiftType = "ssiap".parse().unwrap();
/// assert_eq!(shift_type, ShiftType::Ssiap);
/// assert_eq!(shift_type.label(), "SSIAP");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShiftType {
    /// Standard post.
    Simple,
    /// Ticket office.
    Billetterie,
    /// Fire safety officer (SSIAP).
    Ssiap,
    /// Team leader (chef de service).
    Cds,
}

impl ShiftType {
    /// All shift types, in display order.
    pub const ALL: [ShiftType; 4] = [
        ShiftType::Simple,
        ShiftType::Billetterie,
        ShiftType::Ssiap,
        ShiftType::Cds,
    ];

    /// Returns the key used in rate tables and exchange documents.
    pub fn key(self) -> &'static str {
        match self {
            ShiftType::Simple => "simple",
            ShiftType::Billetterie => "billetterie",
            ShiftType::Ssiap => "ssiap",
            ShiftType::Cds => "cds",
        }
    }

    /// Returns the human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            ShiftType::Simple => "Simple",
            ShiftType::Billetterie => "Billetterie",
            ShiftType::Ssiap => "SSIAP",
            ShiftType::Cds => "CDS",
        }
    }

    /// Returns the usual start time for this post.
    ///
    /// Team leaders start half an hour before the other posts.
    pub fn default_start_time(self) -> TimeOfDay {
        match self {
            ShiftType::Cds => TimeOfDay::at(18, 15),
            _ => TimeOfDay::at(18, 45),
        }
    }
}

impl FromStr for ShiftType {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ShiftType::ALL
            .into_iter()
            .find(|t| t.key() == s)
            .ok_or_else(|| EngineError::UnknownShiftType {
                code: s.to_string(),
            })
    }
}

impl fmt::Display for ShiftType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
