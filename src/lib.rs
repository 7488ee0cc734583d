//! Timekit - a small date/time helper library
//!
//! This library wraps chrono with the handful of operations a typical
//! application needs around stored datetime strings: timezone-offset
//! arithmetic, Unix-timestamp conversion, date difference computation, and
//! UI-oriented display formatting.
//!
//! Datetime values travel as strings in a canonical `YYYY-MM-DD HH:MM:SS`
//! format and are always interpreted as naive UTC wall-clock time; the
//! timezone they represent is passed alongside as a signed fractional-hour
//! offset. No process-wide timezone state is read or written anywhere.
//!
//! # Modules
//!
//! * [`helper`] - The [`DateTimeHelper`] with all conversion and formatting operations
//! * [`format`] - Typed format descriptors ([`FormatSpec`] / [`FormatItem`])
//! * [`clock`] - Injectable clock for current-time reads
//! * [`config`] - Optional TOML configuration of format patterns
//! * [`constants`] - Canonical and UI format constants
//! * [`logger`] - Log output setup for embedding applications

/// Clock abstraction for current-time reads
pub mod clock;

/// Configuration module for format patterns and logging settings
pub mod config;

/// Format pattern constants and default format specs
pub mod constants;

/// Error types shared across the library
pub mod error;

/// Typed datetime format descriptors
pub mod format;

/// The datetime helper operations
pub mod helper;

/// Logging setup utilities
pub mod logger;

// Re-export the main surface for convenient access
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::DateTimeError;
pub use format::{FormatItem, FormatSet, FormatSpec};
pub use helper::DateTimeHelper;
