//! Constants used throughout the library
//!
//! This module centralizes the canonical storage format, the fixed UI display
//! formats, and the unit-conversion constants.

use once_cell::sync::Lazy;

use crate::format::{FormatItem, FormatSpec};

/// Canonical storage format pattern: `2023-06-23 02:25:37`.
pub const DEFAULT_DATETIME_PATTERN: &str = "%Y-%m-%d %H:%M:%S";

/// UI date+time pattern: `23-Jun-2023 2:25 AM`.
pub const UI_DATETIME_PATTERN: &str = "%d-%b-%Y %-I:%M %p";

/// UI date-only pattern: `23-Jun-2023`.
pub const UI_DATE_PATTERN: &str = "%d-%b-%Y";

/// UI time-only pattern: `2:25 AM`.
pub const UI_TIME_PATTERN: &str = "%-I:%M %p";

pub const SECONDS_PER_HOUR: f64 = 3_600.0;
pub const SECONDS_PER_DAY: f64 = 86_400.0;

fn literal(text: &str) -> FormatItem {
    FormatItem::Literal(text.to_string())
}

/// Default storage format as a typed spec.
pub static DEFAULT_DATETIME_FORMAT: Lazy<FormatSpec> = Lazy::new(|| {
    FormatSpec::new(vec![
        FormatItem::Year,
        literal("-"),
        FormatItem::Month,
        literal("-"),
        FormatItem::Day,
        literal(" "),
        FormatItem::Hour24,
        literal(":"),
        FormatItem::Minute,
        literal(":"),
        FormatItem::Second,
    ])
});

/// UI date+time display format as a typed spec.
pub static UI_DATETIME_FORMAT: Lazy<FormatSpec> = Lazy::new(|| {
    FormatSpec::new(vec![
        FormatItem::Day,
        literal("-"),
        FormatItem::MonthAbbrev,
        literal("-"),
        FormatItem::Year,
        literal(" "),
        FormatItem::Hour12,
        literal(":"),
        FormatItem::Minute,
        literal(" "),
        FormatItem::AmPm,
    ])
});

/// UI date-only display format as a typed spec.
pub static UI_DATE_FORMAT: Lazy<FormatSpec> = Lazy::new(|| {
    FormatSpec::new(vec![
        FormatItem::Day,
        literal("-"),
        FormatItem::MonthAbbrev,
        literal("-"),
        FormatItem::Year,
    ])
});

/// UI time-only display format as a typed spec.
pub static UI_TIME_FORMAT: Lazy<FormatSpec> = Lazy::new(|| {
    FormatSpec::new(vec![
        FormatItem::Hour12,
        literal(":"),
        FormatItem::Minute,
        literal(" "),
        FormatItem::AmPm,
    ])
});
