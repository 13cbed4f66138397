//! Core data models for the vacation calculator.
//!
//! This module contains all the domain models used throughout the crate.

mod breakdown;
mod rates;
mod shift_type;
mod time_of_day;
mod vacation;

pub use breakdown::{HourBreakdown, VacationCalculation};
pub use rates::{MAX_HOURLY_RATE, MAX_RATE_DECIMALS, RateTable, ShiftRate};
pub use shift_type::ShiftType;
pub use time_of_day::{MINUTES_PER_DAY, TimeOfDay};
pub use vacation::{ACCUEIL_LOCATION_NOTE, VacationList, VacationRecord};
