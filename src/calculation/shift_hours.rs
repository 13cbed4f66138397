//! Paid hours calculation for a single vacation.
//!
//! A vacation is cut into one-hour buckets anchored at its start time. Every
//! bucket commenced is paid in full and classed as a day or night hour from
//! the clock hour at which it starts. Short vacations are topped up to a
//! minimum, and long ones earn one bonus hour.

use crate::error::EngineResult;
use crate::models::{HourBreakdown, MINUTES_PER_DAY, TimeOfDay};

/// Clock hour at which night hours begin (inclusive).
pub const NIGHT_START_HOUR: u32 = 21;

/// Clock hour at which night hours end (exclusive).
pub const NIGHT_END_HOUR: u32 = 6;

/// Fewest hours paid for any vacation.
pub const MINIMUM_PAID_HOURS: u32 = 3;

/// Paid hours from which one bonus hour is added.
pub const BONUS_THRESHOLD_HOURS: u32 = 6;

const MINUTES_PER_HOUR: u32 = 60;

/// Returns true if the clock hour (0-23) falls in the night window
/// `[21:00, 06:00)`.
///
/// # Example
///
/// ```
/// use gtb_vacations::calculation::is_night_hour;
///
/// assert!(is_night_hour(21));
/// assert!(is_night_hour(5));
/// assert!(!is_night_hour(6));
/// assert!(!is_night_hour(20));
/// ```
pub fn is_night_hour(hour: u32) -> bool {
    hour >= NIGHT_START_HOUR || hour < NIGHT_END_HOUR
}

/// Clock hour of a minute offset that may run past midnight.
fn clock_hour(minute: u32) -> u32 {
    (minute / MINUTES_PER_HOUR) % 24
}

#[derive(Debug, Default)]
struct HourTally {
    day: u32,
    night: u32,
}

impl HourTally {
    fn count_hour_starting_at(&mut self, minute: u32) {
        if is_night_hour(clock_hour(minute)) {
            self.night += 1;
        } else {
            self.day += 1;
        }
    }

    fn total(&self) -> u32 {
        self.day + self.night
    }
}

/// Calculates the paid hours for a vacation from its clock times.
///
/// An end time at or before the start time means the vacation finishes the
/// next day; equal times mean a full 24 hours.
///
/// # Rules
///
/// 1. Every hour commenced from the start time is paid in full.
/// 2. Each hour is a night hour if its starting clock hour is in
///    `[21:00, 06:00)`, otherwise a day hour.
/// 3. Fewer than [`MINIMUM_PAID_HOURS`] hours are topped up with hours
///    following the end time, classed the same way.
/// 4. From [`BONUS_THRESHOLD_HOURS`] paid hours, one bonus hour is added.
///    It is classed at `start + total_paid_hours * 60 - 60` using the total
///    after the increment.
///
/// # Examples
///
/// ```
/// use gtb_vacations::calculation::compute_hours;
/// use gtb_vacations::models::TimeOfDay;
///
/// let start: TimeOfDay = "21:00".parse().unwrap();
/// let end: TimeOfDay = "23:00".parse().unwrap();
///
/// let hours = compute_hours(start, end);
/// assert_eq!(hours.raw_hours, 2);
/// assert_eq!(hours.total_paid_hours, 3);
/// assert_eq!(hours.night_hours, 3);
/// assert_eq!(hours.day_hours, 0);
/// ```
pub fn compute_hours(start: TimeOfDay, end: TimeOfDay) -> HourBreakdown {
    compute_hours_in_range(start.minutes(), end.minutes())
}

/// Calculates paid hours over a range of minute offsets.
///
/// `start_minute` is measured from midnight of the start day. `end_minute`
/// may be past 1440; if it is at or before `start_minute` a day is added to
/// it. Apart from that the rules are those of [`compute_hours`].
///
/// Offsets are expected below `2 * MINUTES_PER_DAY`. Larger values do not
/// panic: offsets saturate at `u32::MAX`, and the result then has no
/// meaning as a vacation.
pub fn compute_hours_in_range(start_minute: u32, end_minute: u32) -> HourBreakdown {
    let end_minute = if end_minute <= start_minute {
        end_minute.saturating_add(MINUTES_PER_DAY)
    } else {
        end_minute
    };

    let mut tally = HourTally::default();
    for bucket_start in (start_minute..end_minute).step_by(MINUTES_PER_HOUR as usize) {
        tally.count_hour_starting_at(bucket_start);
    }
    let raw_hours = tally.total();

    // Top-up hours follow the end time, not the last worked bucket.
    if raw_hours < MINIMUM_PAID_HOURS {
        for extra in 0..(MINIMUM_PAID_HOURS - raw_hours) {
            tally.count_hour_starting_at(end_minute.saturating_add(extra * MINUTES_PER_HOUR));
        }
    }
    let mut total_paid_hours = raw_hours.max(MINIMUM_PAID_HOURS);

    if total_paid_hours >= BONUS_THRESHOLD_HOURS {
        total_paid_hours += 1;
        tally.count_hour_starting_at(
            start_minute.saturating_add((total_paid_hours - 1) * MINUTES_PER_HOUR),
        );
    }

    HourBreakdown {
        day_hours: tally.day,
        night_hours: tally.night,
        total_paid_hours,
        raw_hours,
    }
}

/// Parses two `"HH:MM"` strings and calculates the paid hours between them.
///
/// Fails with [`crate::error::EngineError::InvalidTime`] if either time is
/// malformed.
pub fn calculate_hours(start: &str, end: &str) -> EngineResult<HourBreakdown> {
    let start: TimeOfDay = start.parse()?;
    let end: TimeOfDay = end.parse()?;
    Ok(compute_hours(start, end))
}
