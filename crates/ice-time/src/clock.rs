//! Injectable clock.
//!
//! Age and next-birthday calculations need "today"; everything else in the
//! workspace is pure.  Those functions take a [`Clock`] so that tests can pin
//! the reference date.

use crate::date::Date;
use chrono::Datelike;

/// A source of "today".
pub trait Clock: std::fmt::Debug + Send + Sync {
    /// Return today's date in the host's local civil calendar.
    fn today(&self) -> Date;
}

/// The system clock, read through `chrono` in the local time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> Date {
        let now = chrono::Local::now().date_naive();
        Date::from_ymd(now.year() as u16, now.month() as u8, now.day() as u8)
            .expect("system date within supported range")
    }
}

/// A clock pinned to a fixed date, for tests and historical computations.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub Date);

impl Clock for FixedClock {
    fn today(&self) -> Date {
        self.0
    }
}
