//! Hourly rate models.
//!
//! Each shift type is paid at one rate for day hours and another for night
//! hours. The table is user-editable and is read fresh on every calculation.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::ShiftType;

/// Most decimal places a rate may carry.
pub const MAX_RATE_DECIMALS: u32 = 4;

/// Exclusive upper bound for an hourly rate.
pub const MAX_HOURLY_RATE: u32 = 1_000_000;

/// Rates travel as JSON numbers. Incoming values are rounded to
/// [`MAX_RATE_DECIMALS`] places.
mod rate_number {
    use rust_decimal::{Decimal, RoundingStrategy};
    use serde::{Deserializer, Serializer};

    use super::MAX_RATE_DECIMALS;

    pub fn serialize<S: Serializer>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error> {
        rust_decimal::serde::float::serialize(value, serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Decimal, D::Error> {
        let value = rust_decimal::serde::float::deserialize(deserializer)?;
        Ok(value.round_dp_with_strategy(MAX_RATE_DECIMALS, RoundingStrategy::MidpointAwayFromZero))
    }
}

/// Day and night hourly rates for one shift type.
///
/// Rates are exchanged as plain JSON numbers under the `jour` and `nuit`
/// keys.
///
/// # Example
///
/// ```
/// use gtb_vacations::models::ShiftRate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let rate: ShiftRate = serde_json::from_str(r#"{"jour": 12.5, "nuit": 15}"#).unwrap();
/// assert_eq!(rate.jour, Decimal::from_str("12.5").unwrap());
/// assert_eq!(rate.nuit, Decimal::from(15));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftRate {
    /// Hourly rate for day hours (06:00-21:00).
    #[serde(with = "rate_number")]
    pub jour: Decimal,
    /// Hourly rate for night hours (21:00-06:00).
    #[serde(with = "rate_number")]
    pub nuit: Decimal,
}

impl ShiftRate {
    /// Creates a new rate pair.
    pub fn new(jour: Decimal, nuit: Decimal) -> Self {
        Self { jour, nuit }
    }

    /// Checks that both rates are non-negative, below [`MAX_HOURLY_RATE`]
    /// and carry at most [`MAX_RATE_DECIMALS`] decimal places.
    pub fn validate(&self, shift_type: &str) -> EngineResult<()> {
        check_rate(shift_type, "day", self.jour)?;
        check_rate(shift_type, "night", self.nuit)
    }
}

fn check_rate(shift_type: &str, which: &str, value: Decimal) -> EngineResult<()> {
    let problem = if value < Decimal::ZERO {
        format!("{} rate {} is negative", which, value)
    } else if value >= Decimal::from(MAX_HOURLY_RATE) {
        format!("{} rate {} is not below {}", which, value, MAX_HOURLY_RATE)
    } else if value.normalize().scale() > MAX_RATE_DECIMALS {
        format!(
            "{} rate {} has more than {} decimal places",
            which, value, MAX_RATE_DECIMALS
        )
    } else {
        return Ok(());
    };

    Err(EngineError::InvalidRate {
        shift_type: shift_type.to_string(),
        message: problem,
    })
}

/// Rates for every shift type.
///
/// The default table holds all four shift types at zero, so every type is
/// calculable until the user enters real rates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RateTable {
    rates: BTreeMap<ShiftType, ShiftRate>,
}

impl Default for RateTable {
    fn default() -> Self {
        let zero = ShiftRate::new(Decimal::ZERO, Decimal::ZERO);
        Self {
            rates: ShiftType::ALL.into_iter().map(|t| (t, zero)).collect(),
        }
    }
}

impl RateTable {
    /// Creates a table with no entries.
    pub fn empty() -> Self {
        Self {
            rates: BTreeMap::new(),
        }
    }

    /// Returns the rates for a shift type.
    ///
    /// Fails with [`EngineError::RateNotFound`] when the table has no entry
    /// for the type.
    pub fn get(&self, shift_type: ShiftType) -> EngineResult<&ShiftRate> {
        self.rates
            .get(&shift_type)
            .ok_or_else(|| EngineError::RateNotFound {
                shift_type: shift_type.key().to_string(),
            })
    }

    /// Sets the rates for a shift type after validating them.
    pub fn set(&mut self, shift_type: ShiftType, rate: ShiftRate) -> EngineResult<()> {
        rate.validate(shift_type.key())?;
        self.rates.insert(shift_type, rate);
        Ok(())
    }

    /// Returns a copy of this table with one entry replaced.
    pub fn with(mut self, shift_type: ShiftType, rate: ShiftRate) -> EngineResult<Self> {
        self.set(shift_type, rate)?;
        Ok(self)
    }

    /// Checks every entry with [`ShiftRate::validate`].
    pub fn validate(&self) -> EngineResult<()> {
        self.rates
            .iter()
            .try_for_each(|(shift_type, rate)| rate.validate(shift_type.key()))
    }

    /// Iterates over the entries in shift type order.
    pub fn iter(&self) -> impl Iterator<Item = (ShiftType, &ShiftRate)> {
        self.rates.iter().map(|(t, r)| (*t, r))
    }

    /// Returns the number of shift types with rates.
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    /// Returns true if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    /// Overwrites entries from a loosely-keyed map, as found in imported files.
    ///
    /// Keys that are not known shift types are skipped and returned. Every
    /// known entry is validated before anything is written, so a rejected
    /// map leaves the table untouched.
    pub fn merge_known(
        &mut self,
        incoming: &BTreeMap<String, ShiftRate>,
    ) -> EngineResult<Vec<String>> {
        let mut accepted = Vec::new();
        let mut ignored = Vec::new();

        for (key, rate) in incoming {
            match key.parse::<ShiftType>() {
                Ok(shift_type) => {
                    rate.validate(key)?;
                    accepted.push((shift_type, *rate));
                }
                Err(_) => ignored.push(key.clone()),
            }
        }

        self.rates.extend(accepted);
        Ok(ignored)
    }
}
