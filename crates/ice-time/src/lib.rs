//! # ice-time
//!
//! Civil dates at midnight, weekdays, an injectable clock, and the Icelandic
//! holiday calendar.
//!
//! Weekday numbering follows the ISO convention throughout: Monday = 1,
//! Sunday = 7.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Injectable clock: `SystemClock` and `FixedClock`.
pub mod clock;

/// `Date` type.
pub mod date;

/// Icelandic holidays for a given year.
pub mod holidays;

/// `Weekday` — day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use clock::{Clock, FixedClock, SystemClock};
pub use date::Date;
pub use holidays::Holidays;
pub use weekday::Weekday;
