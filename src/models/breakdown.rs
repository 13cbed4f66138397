//! Calculation output models.
//!
//! These types are derived from a vacation and the live rate table on every
//! calculation and are never persisted.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Paid hours for one vacation, split between day and night.
///
/// `day_hours + night_hours == total_paid_hours` always holds.
///
/// # Example
///
/// ```
/// use gtb_vacations::models::HourBreakdown;
///
/// let breakdown = HourBreakdown {
///     day_hours: 3,
///     night_hours: 4,
///     total_paid_hours: 7,
///     raw_hours: 6,
/// };
/// assert!(breakdown.is_consistent());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct HourBreakdown {
    /// Paid hours classified as day hours.
    pub day_hours: u32,
    /// Paid hours classified as night hours.
    pub night_hours: u32,
    /// Hours paid after the minimum and bonus rules.
    pub total_paid_hours: u32,
    /// Hours commenced during the shift, before any adjustment.
    pub raw_hours: u32,
}

impl HourBreakdown {
    /// Returns true if the day/night split adds up to the paid total.
    pub fn is_consistent(&self) -> bool {
        self.day_hours + self.night_hours == self.total_paid_hours
    }

    /// Returns the paid hours that were not actually worked.
    pub fn extra_hours(&self) -> u32 {
        self.total_paid_hours.saturating_sub(self.raw_hours)
    }
}

/// The pay owed for one vacation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VacationCalculation {
    /// The hours the amount was computed from.
    pub breakdown: HourBreakdown,
    /// Day hours multiplied by the day rate.
    pub day_amount: Decimal,
    /// Night hours multiplied by the night rate.
    pub night_amount: Decimal,
    /// Total amount owed.
    pub amount: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_consistency_check() {
        let good = HourBreakdown {
            day_hours: 2,
            night_hours: 1,
            total_paid_hours: 3,
            raw_hours: 2,
        };
        let bad = HourBreakdown {
            total_paid_hours: 4,
            ..good
        };
        assert!(good.is_consistent());
        assert!(!bad.is_consistent());
    }

    #[test]
    fn test_extra_hours_counts_minimum_and_bonus() {
        let floored = HourBreakdown {
            day_hours: 3,
            night_hours: 0,
            total_paid_hours: 3,
            raw_hours: 1,
        };
        assert_eq!(floored.extra_hours(), 2);

        let bonus = HourBreakdown {
            day_hours: 4,
            night_hours: 3,
            total_paid_hours: 7,
            raw_hours: 6,
        };
        assert_eq!(bonus.extra_hours(), 1);
    }
}
