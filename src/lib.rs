//! Pay calculator for GTB vacation shifts.
//!
//! A vacation is one shift worked at a given post (simple, billetterie,
//! SSIAP or CDS) between two clock times. This crate turns it into paid day
//! and night hours, applying the three-hour minimum and the bonus hour from
//! six hours, then prices those hours with a user-editable rate table.
//!
//! The pure core lives in [`calculation`]. [`session::Session`] wires it to
//! a vacation list, a [`storage::KeyValueStore`] and change listeners, and
//! [`report`] renders the list as text or as a printable HTML recap. The
//! [`api`] module exposes the same core over HTTP.
//!
//! # Example
//!
//! ```
//! use gtb_vacations::calculation::calculate_amount;
//! use gtb_vacations::models::{RateTable, ShiftRate, ShiftType};
//! use rust_decimal::Decimal;
//!
//! let rates = RateTable::default()
//!     .with(ShiftType::Simple, ShiftRate::new(Decimal::from(10), Decimal::from(15)))
//!     .unwrap();
//!
//! let result = calculate_amount("simple", "20:00", "23:00", &rates).unwrap();
//! assert_eq!(result.breakdown.day_hours, 1);
//! assert_eq!(result.breakdown.night_hours, 2);
//! assert_eq!(result.amount, Decimal::from(40));
//! ```

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod report;
pub mod session;
pub mod storage;
