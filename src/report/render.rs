//! Output adapters for reports.
//!
//! [`TextRenderer`] produces the on-screen vacation list with totals and
//! [`HtmlRenderer`] produces a printable recap page.

use rust_decimal::{Decimal, RoundingStrategy};

use super::builder::{Report, ReportRow};

/// Message shown when there are no vacations.
pub const EMPTY_LIST_MESSAGE: &str = "Aucune vacation ajoutée";

/// Turns a report into a document.
pub trait ReportRenderer {
    /// Renders the report.
    fn render(&self, report: &Report) -> String;
}

/// Formats an amount with two decimals and the euro sign, rounding half
/// away from zero.
///
/// # Example
///
/// ```
/// use gtb_vacations::report::format_amount;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(format_amount(Decimal::from_str("36.065").unwrap()), "36.07 €");
/// assert_eq!(format_amount(Decimal::from(45)), "45.00 €");
/// ```
pub fn format_amount(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.2} €", rounded)
}

/// Describes a row's hours, e.g. `2h brut → 3h eff. (0h jour / 3h nuit)`.
pub fn hours_detail(row: &ReportRow) -> String {
    format!(
        "{}h brut → {}h eff. ({}h jour / {}h nuit)",
        row.hours.raw_hours, row.hours.total_paid_hours, row.hours.day_hours, row.hours.night_hours
    )
}

/// Plain-text rendering of the vacation list.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextRenderer;

impl ReportRenderer for TextRenderer {
    fn render(&self, report: &Report) -> String {
        let mut out = String::new();

        if report.is_empty() {
            out.push_str(EMPTY_LIST_MESSAGE);
            out.push('\n');
        }

        for row in &report.rows {
            out.push_str(&format!("{}. {}", row.index + 1, row.label));
            if let Some(note) = &row.note {
                out.push_str(&format!(" ({})", note));
            }
            out.push_str(&format!(
                " | {} → {} | {} | {}\n",
                row.start_time,
                row.end_time,
                hours_detail(row),
                format_amount(row.amount)
            ));
        }

        out.push_str(&format!(
            "Vacations : {} | Heures : {} h | Total : {}\n",
            report.totals.vacation_count,
            report.totals.total_paid_hours,
            format_amount(report.totals.total_amount)
        ));
        out
    }
}

/// Printable HTML recap with a Type / Horaires / Heures / Montant table.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlRenderer;

const HTML_STYLE: &str = "\
body { font-family: Arial, sans-serif; padding: 40px; color: #222; }
h1 { font-size: 18px; margin-bottom: 5px; }
.date { font-size: 12px; color: #666; margin-bottom: 30px; }
table { width: 100%; border-collapse: collapse; font-size: 13px; }
th, td { padding: 8px 10px; text-align: left; border-bottom: 1px solid #ddd; }
th { background: #f5f5f5; font-weight: 600; }
.totals { margin-top: 20px; font-size: 14px; }
.totals strong { font-size: 16px; }";

impl ReportRenderer for HtmlRenderer {
    fn render(&self, report: &Report) -> String {
        let rows: String = report
            .rows
            .iter()
            .map(|row| {
                let note = row
                    .note
                    .as_deref()
                    .map(|n| format!(" ({})", escape_html(n)))
                    .unwrap_or_default();
                format!(
                    "<tr><td>{}{}</td><td>{} → {}</td><td>{}h</td><td>{}</td></tr>\n",
                    escape_html(&row.label),
                    note,
                    row.start_time,
                    row.end_time,
                    row.hours.total_paid_hours,
                    format_amount(row.amount)
                )
            })
            .collect();

        format!(
            "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"UTF-8\">\n\
             <title>Récapitulatif Vacations</title>\n<style>\n{style}\n</style>\n</head>\n\
             <body>\n<h1>Récapitulatif des Vacations</h1>\n\
             <p class=\"date\">Généré le {date}</p>\n<table>\n<thead>\n\
             <tr><th>Type</th><th>Horaires</th><th>Heures</th><th>Montant</th></tr>\n\
             </thead>\n<tbody>\n{rows}</tbody>\n</table>\n\
             <div class=\"totals\"><p><strong>Total : {hours}h — {amount}</strong></p></div>\n\
             </body>\n</html>\n",
            style = HTML_STYLE,
            date = report.generated_on.format("%d/%m/%Y"),
            rows = rows,
            hours = report.totals.total_paid_hours,
            amount = format_amount(report.totals.total_amount),
        )
    }
}

/// Escapes text for use inside HTML element content.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{RateTable, ShiftRate, ShiftType, VacationRecord};
    use crate::report::build_report;
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn sample_report(records: &[VacationRecord]) -> Report {
        let rates = RateTable::default()
            .with(ShiftType::Simple, ShiftRate::new(dec("12.02"), dec("14.42")))
            .unwrap();
        build_report(records, &rates, NaiveDate::from_ymd_opt(2025, 10, 4).unwrap()).unwrap()
    }

    fn evening(note: Option<&str>) -> VacationRecord {
        VacationRecord::new(
            ShiftType::Simple,
            "18:45".parse().unwrap(),
            "20:45".parse().unwrap(),
            note,
        )
    }

    #[test]
    fn test_format_amount_pads_and_rounds() {
        assert_eq!(format_amount(dec("36.06")), "36.06 €");
        assert_eq!(format_amount(dec("7.5")), "7.50 €");
        assert_eq!(format_amount(dec("0.125")), "0.13 €");
        assert_eq!(format_amount(Decimal::ZERO), "0.00 €");
    }

    #[test]
    fn test_text_renderer_empty_list() {
        let text = TextRenderer.render(&sample_report(&[]));
        assert_eq!(
            text,
            "Aucune vacation ajoutée\nVacations : 0 | Heures : 0 h | Total : 0.00 €\n"
        );
    }

    #[test]
    fn test_text_renderer_row() {
        let text = TextRenderer.render(&sample_report(&[evening(Some("match"))]));
        let first_line = text.lines().next().unwrap();
        assert_eq!(
            first_line,
            "1. Simple (match) | 18:45 → 20:45 | 2h brut → 3h eff. (3h jour / 0h nuit) | 36.06 €"
        );
        assert!(text.ends_with("Vacations : 1 | Heures : 3 h | Total : 36.06 €\n"));
    }

    #[test]
    fn test_html_renderer_contains_table_and_totals() {
        let html = HtmlRenderer.render(&sample_report(&[evening(None), evening(None)]));
        assert!(html.contains("<h1>Récapitulatif des Vacations</h1>"));
        assert!(html.contains("Généré le 04/10/2025"));
        assert!(html.contains("<td>Simple</td><td>18:45 → 20:45</td><td>3h</td><td>36.06 €</td>"));
        assert!(html.contains("Total : 6h — 72.12 €"));
    }

    #[test]
    fn test_html_renderer_escapes_notes() {
        let html = HtmlRenderer.render(&sample_report(&[evening(Some("<b>VIP</b> & co"))]));
        assert!(html.contains("Simple (&lt;b&gt;VIP&lt;/b&gt; &amp; co)"));
        assert!(!html.contains("<b>VIP</b>"));
    }
}
