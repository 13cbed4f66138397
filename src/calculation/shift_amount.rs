//! Amount calculation for a single vacation.
//!
//! The amount is the day hours at the shift type's day rate plus the night
//! hours at its night rate. Rates come from the caller on every call.

use rust_decimal::Decimal;

use crate::error::EngineResult;
use crate::models::{RateTable, ShiftType, TimeOfDay, VacationCalculation, VacationRecord};

use super::shift_hours::compute_hours;

/// Calculates the pay for a vacation from typed inputs.
///
/// # Arguments
///
/// * `shift_type` - The post worked
/// * `start` - Clock time the vacation started
/// * `end` - Clock time the vacation ended (at or before `start` means the next day)
/// * `rates` - The current rate table
///
/// # Returns
///
/// The hour breakdown and the amounts, or
/// [`crate::error::EngineError::RateNotFound`] if the table has no entry for
/// the shift type.
///
/// # Examples
///
/// ```
/// use gtb_vacations::calculation::compute_amount;
/// use gtb_vacations::models::{RateTable, ShiftRate, ShiftType};
/// use rust_decimal::Decimal;
///
/// let rates = RateTable::default()
///     .with(ShiftType::Simple, ShiftRate::new(Decimal::from(12), Decimal::from(15)))
///     .unwrap();
///
/// // 21:00-23:00 is paid as three night hours
/// let result = compute_amount(
///     ShiftType::Simple,
///     "21:00".parse().unwrap(),
///     "23:00".parse().unwrap(),
///     &rates,
/// )
/// .unwrap();
/// assert_eq!(result.amount, Decimal::from(45));
/// ```
pub fn compute_amount(
    shift_type: ShiftType,
    start: TimeOfDay,
    end: TimeOfDay,
    rates: &RateTable,
) -> EngineResult<VacationCalculation> {
    let rate = rates.get(shift_type)?;
    let breakdown = compute_hours(start, end);

    let day_amount = Decimal::from(breakdown.day_hours) * rate.jour;
    let night_amount = Decimal::from(breakdown.night_hours) * rate.nuit;

    Ok(VacationCalculation {
        breakdown,
        day_amount,
        night_amount,
        amount: day_amount + night_amount,
    })
}

/// Calculates the pay for a vacation given as raw strings.
///
/// Fails with an input error if the shift type key is unknown, if either
/// time is not a valid `"HH:MM"` value, or if the table has no entry for the
/// type.
pub fn calculate_amount(
    shift_type: &str,
    start: &str,
    end: &str,
    rates: &RateTable,
) -> EngineResult<VacationCalculation> {
    let shift_type: ShiftType = shift_type.parse()?;
    let start: TimeOfDay = start.parse()?;
    let end: TimeOfDay = end.parse()?;
    compute_amount(shift_type, start, end, rates)
}

/// Calculates the pay for a stored vacation record.
pub fn calculate_vacation(
    record: &VacationRecord,
    rates: &RateTable,
) -> EngineResult<VacationCalculation> {
    compute_amount(record.shift_type, record.start_time, record.end_time, rates)
}
