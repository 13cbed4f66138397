//! Wall-clock time model.
//!
//! Vacation start and end times are plain clock values with no date or
//! timezone attached. They are stored as minutes since midnight and
//! exchanged as `"HH:MM"` strings.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{EngineError, EngineResult};

/// Number of minutes in one day.
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// A wall-clock time, stored as minutes since midnight in `[0, 1440)`.
///
/// # Example
///
/// ```
/// use gtb_vacations::models::TimeOfDay;
///
/// let time: TimeOfDay = "18:45".parse().unwrap();
/// assert_eq!(time.minutes(), 18 * 60 + 45);
/// assert_eq!(time.to_string(), "18:45");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    /// Midnight, `00:00`.
    pub const MIDNIGHT: TimeOfDay = TimeOfDay(0);

    /// Builds a constant time. Callers guarantee the values are in range.
    pub(crate) const fn at(hour: u16, minute: u16) -> Self {
        Self(hour * 60 + minute)
    }

    /// Builds a time from an hour (0-23) and a minute (0-59).
    pub fn from_hm(hour: u32, minute: u32) -> EngineResult<Self> {
        if hour >= 24 || minute >= 60 {
            return Err(EngineError::InvalidTime {
                value: format!("{:02}:{:02}", hour, minute),
                message: "hour must be below 24 and minute below 60".to_string(),
            });
        }
        Ok(Self((hour * 60 + minute) as u16))
    }

    /// Builds a time from minutes since midnight.
    pub fn from_minutes(minutes: u32) -> EngineResult<Self> {
        if minutes >= MINUTES_PER_DAY {
            return Err(EngineError::InvalidTime {
                value: minutes.to_string(),
                message: format!("minute offset must be below {}", MINUTES_PER_DAY),
            });
        }
        Ok(Self(minutes as u16))
    }

    /// Returns the number of minutes since midnight.
    pub fn minutes(self) -> u32 {
        u32::from(self.0)
    }

    /// Returns the clock hour (0-23).
    pub fn hour(self) -> u32 {
        self.minutes() / 60
    }

    /// Returns the minute within the hour (0-59).
    pub fn minute(self) -> u32 {
        self.minutes() % 60
    }
}

impl FromStr for TimeOfDay {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let time =
            NaiveTime::parse_from_str(s, "%H:%M").map_err(|e| EngineError::InvalidTime {
                value: s.to_string(),
                message: e.to_string(),
            })?;
        Self::from_hm(time.hour(), time.minute())
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
