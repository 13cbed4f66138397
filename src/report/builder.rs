//! Report model and construction.
//!
//! A report is a pure projection of the vacation list through the
//! calculator: one row per vacation plus totals.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::calculate_vacation;
use crate::error::EngineResult;
use crate::models::{HourBreakdown, RateTable, ShiftType, TimeOfDay, VacationRecord};

/// One vacation as shown in the list or the printed recap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRow {
    /// Position of the vacation in the list.
    pub index: usize,
    /// The post worked.
    pub shift_type: ShiftType,
    /// Display label of the post.
    pub label: String,
    /// Optional free text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// Start clock time.
    pub start_time: TimeOfDay,
    /// End clock time.
    pub end_time: TimeOfDay,
    /// Paid hours.
    pub hours: HourBreakdown,
    /// Amount owed.
    pub amount: Decimal,
}

/// Aggregates across every row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportTotals {
    /// Number of vacations.
    pub vacation_count: usize,
    /// Sum of paid hours.
    pub total_paid_hours: u32,
    /// Sum of amounts.
    pub total_amount: Decimal,
}

/// A structured recap any output adapter can render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    /// Day the report was produced.
    pub generated_on: NaiveDate,
    /// One row per vacation, in list order.
    pub rows: Vec<ReportRow>,
    /// Totals across all rows.
    pub totals: ReportTotals,
}

impl Report {
    /// Returns true if the report has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Builds a report for the given vacations with the current rates.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use gtb_vacations::models::{RateTable, VacationRecord};
/// use gtb_vacations::report::build_report;
///
/// let records = vec![VacationRecord::accueil_location()];
/// let date = NaiveDate::from_ymd_opt(2025, 10, 4).unwrap();
///
/// let report = build_report(&records, &RateTable::default(), date).unwrap();
/// assert_eq!(report.totals.vacation_count, 1);
/// assert_eq!(report.totals.total_paid_hours, 8);
/// ```
pub fn build_report(
    records: &[VacationRecord],
    rates: &RateTable,
    generated_on: NaiveDate,
) -> EngineResult<Report> {
    let mut rows = Vec::with_capacity(records.len());
    let mut totals = ReportTotals::default();

    for (index, record) in records.iter().enumerate() {
        let calculation = calculate_vacation(record, rates)?;

        totals.vacation_count += 1;
        totals.total_paid_hours += calculation.breakdown.total_paid_hours;
        totals.total_amount += calculation.amount;

        rows.push(ReportRow {
            index,
            shift_type: record.shift_type,
            label: record.shift_type.label().to_string(),
            note: record.visible_note().map(str::to_string),
            start_time: record.start_time,
            end_time: record.end_time,
            hours: calculation.breakdown,
            amount: calculation.amount,
        });
    }

    Ok(Report {
        generated_on,
        rows,
        totals,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use crate::models::ShiftRate;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 10, 4).unwrap()
    }

    fn record(shift_type: ShiftType, start: &str, end: &str, note: Option<&str>) -> VacationRecord {
        VacationRecord::new(shift_type, start.parse().unwrap(), end.parse().unwrap(), note)
    }

    fn rates() -> RateTable {
        RateTable::default()
            .with(ShiftType::Simple, ShiftRate::new(dec("12"), dec("15")))
            .unwrap()
            .with(ShiftType::Ssiap, ShiftRate::new(dec("13.40"), dec("16.08")))
            .unwrap()
    }

    #[test]
    fn test_empty_report() {
        let report = build_report(&[], &rates(), date()).unwrap();
        assert!(report.is_empty());
        assert_eq!(report.totals, ReportTotals::default());
    }

    #[test]
    fn test_rows_follow_list_order_and_sum_up() {
        let records = vec![
            // 3 night hours × 15 = 45
            record(ShiftType::Simple, "21:00", "23:00", Some("parking")),
            // 18:45-00:00: 3 day × 13.40 + 4 night × 16.08 = 40.20 + 64.32
            record(ShiftType::Ssiap, "18:45", "00:00", None),
        ];

        let report = build_report(&records, &rates(), date()).unwrap();

        assert_eq!(report.rows.len(), 2);
        assert_eq!(report.rows[0].index, 0);
        assert_eq!(report.rows[0].label, "Simple");
        assert_eq!(report.rows[0].note.as_deref(), Some("parking"));
        assert_eq!(report.rows[0].amount, dec("45"));
        assert_eq!(report.rows[1].label, "SSIAP");
        assert_eq!(report.rows[1].hours.total_paid_hours, 7);
        assert_eq!(report.rows[1].amount, dec("104.52"));

        assert_eq!(report.totals.vacation_count, 2);
        assert_eq!(report.totals.total_paid_hours, 10);
        assert_eq!(report.totals.total_amount, dec("149.52"));
    }

    #[test]
    fn test_blank_note_is_hidden() {
        let mut r = record(ShiftType::Simple, "21:00", "23:00", None);
        r.note = Some("   ".to_string());

        let report = build_report(&[r], &rates(), date()).unwrap();
        assert!(report.rows[0].note.is_none());
    }

    #[test]
    fn test_missing_rate_fails_whole_report() {
        let records = vec![record(ShiftType::Cds, "18:15", "23:00", None)];
        let result = build_report(&records, &RateTable::empty(), date());
        assert!(matches!(result, Err(EngineError::RateNotFound { .. })));
    }
}
