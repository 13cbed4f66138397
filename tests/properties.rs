//! Property tests for the hour and amount calculations.

use proptest::prelude::*;
use rust_decimal::{Decimal, RoundingStrategy};

use gtb_vacations::calculation::{
    BONUS_THRESHOLD_HOURS, MINIMUM_PAID_HOURS, calculate_amount, compute_amount, compute_hours,
    compute_hours_in_range,
};
use gtb_vacations::error::EngineError;
use gtb_vacations::models::{
    MAX_HOURLY_RATE, MAX_RATE_DECIMALS, MINUTES_PER_DAY, RateTable, ShiftRate, ShiftType,
    TimeOfDay, VacationList, VacationRecord,
};
use gtb_vacations::storage::{IncomingDocument, VacationDocument};

fn time_of_day() -> impl Strategy<Value = TimeOfDay> {
    (0..MINUTES_PER_DAY).prop_map(|m| TimeOfDay::from_minutes(m).unwrap())
}

fn shift_type() -> impl Strategy<Value = ShiftType> {
    prop::sample::select(ShiftType::ALL.to_vec())
}

/// Rates in cents, 0.00 to 99.99.
fn rate() -> impl Strategy<Value = Decimal> {
    (0i64..10_000).prop_map(|cents| Decimal::new(cents, 2))
}

/// Any accepted rate: up to four decimal places, below the upper bound.
fn stored_rate() -> impl Strategy<Value = Decimal> {
    let bound = i64::from(MAX_HOURLY_RATE) * 10i64.pow(MAX_RATE_DECIMALS);
    (0i64..bound, 0..=MAX_RATE_DECIMALS).prop_map(|(units, scale)| {
        Decimal::new(units, MAX_RATE_DECIMALS).round_dp_with_strategy(scale, RoundingStrategy::ToZero)
    })
}

fn record() -> impl Strategy<Value = VacationRecord> {
    (
        shift_type(),
        time_of_day(),
        time_of_day(),
        prop::option::of("[a-z ]{0,12}"),
    )
        .prop_map(|(t, start, end, note)| VacationRecord::new(t, start, end, note.as_deref()))
}

proptest! {
    #[test]
    fn day_and_night_sum_to_total(start in time_of_day(), end in time_of_day()) {
        let hours = compute_hours(start, end);
        prop_assert_eq!(hours.day_hours + hours.night_hours, hours.total_paid_hours);
        prop_assert!(hours.is_consistent());
    }

    #[test]
    fn paid_hours_respect_minimum(start in time_of_day(), end in time_of_day()) {
        let hours = compute_hours(start, end);
        prop_assert!(hours.total_paid_hours >= MINIMUM_PAID_HOURS);
        prop_assert!(hours.raw_hours >= 1);
        prop_assert!(hours.raw_hours <= 24);
    }

    #[test]
    fn bonus_hour_only_from_threshold(start in time_of_day(), end in time_of_day()) {
        let hours = compute_hours(start, end);
        let floored = hours.raw_hours.max(MINIMUM_PAID_HOURS);
        if floored >= BONUS_THRESHOLD_HOURS {
            prop_assert_eq!(hours.total_paid_hours, floored + 1);
        } else {
            prop_assert_eq!(hours.total_paid_hours, floored);
        }
    }

    #[test]
    fn end_before_start_means_next_day(start in time_of_day(), end in time_of_day()) {
        prop_assume!(end <= start);
        let wrapped = compute_hours(start, end);
        let explicit = compute_hours_in_range(start.minutes(), end.minutes() + MINUTES_PER_DAY);
        prop_assert_eq!(wrapped, explicit);
    }

    #[test]
    fn amount_is_linear_in_each_rate(
        shift_type in shift_type(),
        start in time_of_day(),
        end in time_of_day(),
        jour in rate(),
        nuit in rate(),
    ) {
        let rates = RateTable::default()
            .with(shift_type, ShiftRate::new(jour, nuit))
            .unwrap();
        let result = compute_amount(shift_type, start, end, &rates).unwrap();

        let expected = Decimal::from(result.breakdown.day_hours) * jour
            + Decimal::from(result.breakdown.night_hours) * nuit;
        prop_assert_eq!(result.amount, expected);

        let doubled_day = RateTable::default()
            .with(shift_type, ShiftRate::new(jour * Decimal::TWO, nuit))
            .unwrap();
        let doubled = compute_amount(shift_type, start, end, &doubled_day).unwrap();
        prop_assert_eq!(doubled.amount - result.amount, result.day_amount);
        prop_assert_eq!(doubled.night_amount, result.night_amount);
    }

    #[test]
    fn unknown_shift_type_is_rejected(code in "[a-z]{1,10}") {
        prop_assume!(code.parse::<ShiftType>().is_err());
        let result = calculate_amount(&code, "18:00", "23:00", &RateTable::default());
        let rejected = matches!(result, Err(EngineError::UnknownShiftType { .. }));
        prop_assert!(rejected);
    }

    #[test]
    fn export_import_round_trip(
        rates in prop::collection::vec((stored_rate(), stored_rate()), 4),
        records in prop::collection::vec(record(), 0..8),
    ) {
        let mut table = RateTable::default();
        for (shift_type, (jour, nuit)) in ShiftType::ALL.into_iter().zip(rates) {
            table.set(shift_type, ShiftRate::new(jour, nuit)).unwrap();
        }
        let list = VacationList::from(records);

        let json = VacationDocument::new(&table, &list).to_json_pretty().unwrap();

        let mut restored_rates = RateTable::default();
        let mut restored_list = VacationList::new();
        IncomingDocument::parse(&json)
            .unwrap()
            .apply(&mut restored_rates, &mut restored_list)
            .unwrap();

        prop_assert_eq!(restored_rates, table);
        prop_assert_eq!(restored_list.as_slice(), list.as_slice());
    }
}
