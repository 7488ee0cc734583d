//! Typed datetime format descriptors.
//!
//! Formats are described as a list of [`FormatItem`] tokens instead of
//! free-form strftime strings, so an invalid format is caught when the spec
//! is built rather than when a value is first parsed or rendered. Each spec
//! pre-renders its chrono pattern once and reuses it for both directions.

use chrono::NaiveDateTime;

use crate::error::DateTimeError;

/// A single placeholder or literal in a datetime format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatItem {
    /// Four-digit year, e.g. `2023`.
    Year,
    /// Zero-padded month number, `01`-`12`.
    Month,
    /// Abbreviated month name, `Jan`-`Dec`.
    MonthAbbrev,
    /// Zero-padded day of month, `01`-`31`.
    Day,
    /// Zero-padded 24-hour clock hour, `00`-`23`.
    Hour24,
    /// 12-hour clock hour without a leading zero, `1`-`12`.
    Hour12,
    /// Zero-padded minute.
    Minute,
    /// Zero-padded second.
    Second,
    /// Uppercase `AM`/`PM` marker.
    AmPm,
    /// Literal text copied through verbatim.
    Literal(String),
}

impl FormatItem {
    fn to_pattern(&self) -> String {
        match self {
            FormatItem::Year => "%Y".to_string(),
            FormatItem::Month => "%m".to_string(),
            FormatItem::MonthAbbrev => "%b".to_string(),
            FormatItem::Day => "%d".to_string(),
            FormatItem::Hour24 => "%H".to_string(),
            FormatItem::Hour12 => "%-I".to_string(),
            FormatItem::Minute => "%M".to_string(),
            FormatItem::Second => "%S".to_string(),
            FormatItem::AmPm => "%p".to_string(),
            // '%' in literal text must not be mistaken for a specifier
            FormatItem::Literal(text) => text.replace('%', "%%"),
        }
    }
}

/// A validated datetime format: an ordered token list plus the chrono
/// strftime pattern rendered from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatSpec {
    items: Vec<FormatItem>,
    pattern: String,
}

impl FormatSpec {
    /// Build a spec from a token list. Infallible: every token maps to a
    /// valid chrono specifier.
    pub fn new(items: Vec<FormatItem>) -> Self {
        let pattern = items.iter().map(FormatItem::to_pattern).collect();
        Self { items, pattern }
    }

    /// Build a spec from a chrono-style pattern string, accepting only the
    /// supported token vocabulary. Unknown specifiers fail here, at
    /// construction, instead of at first use.
    pub fn from_pattern(pattern: &str) -> Result<Self, DateTimeError> {
        let mut items = Vec::new();
        let mut literal = String::new();
        let mut chars = pattern.chars().peekable();

        while let Some(c) = chars.next() {
            if c != '%' {
                literal.push(c);
                continue;
            }
            let unpadded = chars.peek() == Some(&'-');
            if unpadded {
                chars.next();
            }
            let spec = match chars.next() {
                Some(s) => s,
                None => return Err(DateTimeError::UnsupportedToken("%".to_string())),
            };
            if spec == '%' && !unpadded {
                literal.push('%');
                continue;
            }
            if !literal.is_empty() {
                items.push(FormatItem::Literal(std::mem::take(&mut literal)));
            }
            let item = match (spec, unpadded) {
                ('Y', false) => FormatItem::Year,
                ('m', false) => FormatItem::Month,
                ('b', false) => FormatItem::MonthAbbrev,
                ('d', false) => FormatItem::Day,
                ('H', false) => FormatItem::Hour24,
                ('I', true) => FormatItem::Hour12,
                ('M', false) => FormatItem::Minute,
                ('S', false) => FormatItem::Second,
                ('p', false) => FormatItem::AmPm,
                _ => {
                    let shown = if unpadded {
                        format!("%-{}", spec)
                    } else {
                        format!("%{}", spec)
                    };
                    return Err(DateTimeError::UnsupportedToken(shown));
                }
            };
            items.push(item);
        }
        if !literal.is_empty() {
            items.push(FormatItem::Literal(literal));
        }
        Ok(Self::new(items))
    }

    /// The chrono strftime pattern this spec renders to.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// The token list this spec was built from.
    pub fn items(&self) -> &[FormatItem] {
        &self.items
    }

    /// Parse a datetime string against this spec.
    ///
    /// The spec must describe a complete date and time; a date-only or
    /// time-only spec cannot produce a `NaiveDateTime` and fails as a parse
    /// error. Invalid calendar values (day 32, hour 25) also fail here.
    pub fn parse(&self, value: &str) -> Result<NaiveDateTime, DateTimeError> {
        NaiveDateTime::parse_from_str(value, &self.pattern)
            .map_err(|e| DateTimeError::parse(value, &self.pattern, e))
    }

    /// Render a datetime using this spec.
    pub fn render(&self, dt: NaiveDateTime) -> String {
        dt.format(&self.pattern).to_string()
    }
}

/// The full set of formats a helper works with: the canonical storage format
/// plus the three fixed UI display formats.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatSet {
    /// Canonical storage format, `YYYY-MM-DD HH:MM:SS`.
    pub storage: FormatSpec,
    /// UI date+time display format.
    pub ui_datetime: FormatSpec,
    /// UI date-only display format.
    pub ui_date: FormatSpec,
    /// UI time-only display format.
    pub ui_time: FormatSpec,
}

impl Default for FormatSet {
    fn default() -> Self {
        Self {
            storage: crate::constants::DEFAULT_DATETIME_FORMAT.clone(),
            ui_datetime: crate::constants::UI_DATETIME_FORMAT.clone(),
            ui_date: crate::constants::UI_DATE_FORMAT.clone(),
            ui_time: crate::constants::UI_TIME_FORMAT.clone(),
        }
    }
}
