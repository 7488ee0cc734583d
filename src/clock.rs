//! Clock abstraction for current-time reads.
//!
//! "Now" is the only non-deterministic input in this library, so it sits
//! behind a trait: production code uses [`SystemClock`], tests pin the clock
//! with [`FixedClock`].

use chrono::{DateTime, Utc};

/// Source of the current UTC time.
pub trait Clock {
    fn now_utc(&self) -> DateTime<Utc>;
}

/// Reads the system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_utc(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Always returns the same instant. Intended for tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now_utc(&self) -> DateTime<Utc> {
        self.0
    }
}
