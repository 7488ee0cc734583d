//! Date/time helper operations.
//!
//! All datetime strings are interpreted as naive UTC wall-clock values; the
//! timezone they represent is always passed alongside as a fractional-hour
//! offset. Nothing here touches process-wide timezone state.

use chrono::{DateTime, Utc};

use crate::clock::{Clock, SystemClock};
use crate::constants::{SECONDS_PER_DAY, SECONDS_PER_HOUR};
use crate::error::DateTimeError;
use crate::format::{FormatSet, FormatSpec};

/// Stateless helper exposing the datetime parsing, formatting, and
/// arithmetic operations.
#[derive(Debug, Clone)]
pub struct DateTimeHelper<C: Clock = SystemClock> {
    clock: C,
    formats: FormatSet,
}

impl DateTimeHelper<SystemClock> {
    /// Helper with the system clock and the default formats.
    pub fn new() -> Self {
        Self {
            clock: SystemClock,
            formats: FormatSet::default(),
        }
    }
}

impl Default for DateTimeHelper<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> DateTimeHelper<C> {
    /// Helper with an injected clock and the default formats.
    pub fn with_clock(clock: C) -> Self {
        Self {
            clock,
            formats: FormatSet::default(),
        }
    }

    /// Replace the format set (e.g. one loaded from configuration).
    pub fn with_formats(mut self, formats: FormatSet) -> Self {
        self.formats = formats;
        self
    }

    /// The format set in use.
    pub fn formats(&self) -> &FormatSet {
        &self.formats
    }

    /// Convert a fractional-hour timezone offset (e.g. +6.5, -5.0) to
    /// seconds. Offsets are not range-checked, but NaN and infinite values
    /// are rejected.
    pub fn convert_timezone_offset_to_seconds(&self, offset: f64) -> Result<f64, DateTimeError> {
        ensure_finite("timezone offset", offset)?;
        Ok(offset * SECONDS_PER_HOUR)
    }

    /// Convert a canonical-format datetime string with a known timezone
    /// offset to a UTC Unix timestamp in seconds.
    ///
    /// The string is parsed as naive wall-clock time and the offset is then
    /// subtracted, so `"2023-01-01 06:30:00"` at offset +6.5 yields the same
    /// timestamp as `"2023-01-01 00:00:00"` at offset 0.
    pub fn convert_datetime_to_unix_timestamp(
        &self,
        value: &str,
        offset: f64,
    ) -> Result<f64, DateTimeError> {
        let offset_seconds = self.convert_timezone_offset_to_seconds(offset)?;
        let naive = self.formats.storage.parse(value)?;
        let timestamp = naive.and_utc().timestamp() as f64;
        Ok(timestamp - offset_seconds)
    }

    /// Current wall-clock time in UTC, rendered in the canonical format,
    /// e.g. `"2023-06-23 02:25:37"`.
    pub fn current_datetime_in_utc(&self) -> String {
        let now: DateTime<Utc> = self.clock.now_utc();
        self.formats.storage.render(now.naive_utc())
    }

    /// Difference in seconds between two datetime values, each with its own
    /// timezone offset. Positive when `value2` is chronologically after
    /// `value1`.
    pub fn datetime_diff_in_sec(
        &self,
        value1: &str,
        offset1: f64,
        value2: &str,
        offset2: f64,
    ) -> Result<f64, DateTimeError> {
        let first = self.convert_datetime_to_unix_timestamp(value1, offset1)?;
        let second = self.convert_datetime_to_unix_timestamp(value2, offset2)?;
        Ok(second - first)
    }

    /// Convert seconds to fractional days. NaN and infinite input is
    /// rejected.
    pub fn convert_seconds_to_days(&self, seconds: f64) -> Result<f64, DateTimeError> {
        ensure_finite("seconds", seconds)?;
        Ok(seconds / SECONDS_PER_DAY)
    }

    /// Re-render a canonical-format value as a UI date, e.g. `"23-Jun-2023"`.
    pub fn formatted_date_for_ui(&self, value: &str) -> Result<String, DateTimeError> {
        self.datetime_formatter(value, &self.formats.storage, &self.formats.ui_date)
    }

    /// Re-render a canonical-format value as a UI time, e.g. `"2:05 PM"`.
    pub fn formatted_time_for_ui(&self, value: &str) -> Result<String, DateTimeError> {
        self.datetime_formatter(value, &self.formats.storage, &self.formats.ui_time)
    }

    /// Re-render a canonical-format value as a UI date+time, e.g.
    /// `"23-Jun-2023 2:05 PM"`.
    pub fn formatted_datetime_for_ui(&self, value: &str) -> Result<String, DateTimeError> {
        self.datetime_formatter(value, &self.formats.storage, &self.formats.ui_datetime)
    }

    /// Reformat `value` from `source` to `destination`.
    ///
    /// `source` must describe a complete date and time; parse failures and
    /// invalid calendar values are surfaced, never coerced.
    pub fn datetime_formatter(
        &self,
        value: &str,
        source: &FormatSpec,
        destination: &FormatSpec,
    ) -> Result<String, DateTimeError> {
        let parsed = source.parse(value)?;
        Ok(destination.render(parsed))
    }

    /// Split a timezone name on every occurrence of `split_key`, preserving
    /// empty segments. Empty delimiters are rejected.
    // TODO: confirm the expected input shape (MySQL timezone-table names?)
    // against real call sites before relying on these semantics.
    pub fn explode_mysql_timezone_name(
        &self,
        timezone_name: &str,
        split_key: &str,
    ) -> Result<Vec<String>, DateTimeError> {
        if split_key.is_empty() {
            return Err(DateTimeError::EmptyDelimiter);
        }
        Ok(timezone_name.split(split_key).map(str::to_string).collect())
    }
}

fn ensure_finite(what: &'static str, value: f64) -> Result<(), DateTimeError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(DateTimeError::NonFinite { what, value })
    }
}
