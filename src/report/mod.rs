//! Vacation reports.
//!
//! A [`Report`] projects the vacation list through the calculator into rows
//! and totals. Renderers turn it into a text list or a printable HTML recap.

mod builder;
mod render;

pub use builder::{Report, ReportRow, ReportTotals, build_report};
pub use render::{
    EMPTY_LIST_MESSAGE, HtmlRenderer, ReportRenderer, TextRenderer, escape_html, format_amount,
    hours_detail,
};
