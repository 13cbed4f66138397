//! Calculation logic for the vacation calculator.
//!
//! This module turns a vacation's shift type and clock times into paid day
//! and night hours, then into an amount using the caller's rate table. All
//! functions are pure: nothing is cached between calls.

mod shift_amount;
mod shift_hours;

pub use shift_amount::{calculate_amount, calculate_vacation, compute_amount};
pub use shift_hours::{
    BONUS_THRESHOLD_HOURS, MINIMUM_PAID_HOURS, NIGHT_END_HOUR, NIGHT_START_HOUR, calculate_hours,
    compute_hours, compute_hours_in_range, is_night_hour,
};
