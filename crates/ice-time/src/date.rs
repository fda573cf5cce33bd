//! `Date` type.
//!
//! A civil date at midnight, represented as a serial number of days since an
//! epoch.  The epoch is **December 31, 1582** (serial = 0), so serial 1 is
//! January 1, 1583 — the first full Gregorian year.  The range covers every
//! holiday year the calendar rules are defined for, and comfortably contains
//! the 1800s births encoded by national-ID century marker `8`.
//!
//! # Serial number convention
//! * Serial 1 = January 1, 1583.
//! * The valid date range is 1583-01-01 to 2199-12-31.
//!
//! A `Date` carries no time-of-day at all; "midnight" is structural.

use crate::weekday::Weekday;
use ice_core::errors::{Error, Result};

/// A calendar date at midnight, represented as a serial number.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(i32);

// ── Constants ─────────────────────────────────────────────────────────────────

impl Date {
    /// Minimum valid date: January 1, 1583.
    pub const MIN: Date = Date(1);

    /// Maximum valid date: December 31, 2199.
    pub const MAX: Date = Date(225_355);

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from a serial number.
    ///
    /// Returns an error if `serial` is non-positive or past [`Date::MAX`].
    pub fn from_serial(serial: i32) -> Result<Self> {
        if serial <= 0 {
            return Err(Error::Date("serial number must be positive".into()));
        }
        let d = Date(serial);
        if d > Self::MAX {
            return Err(Error::Date(format!("serial {serial} exceeds maximum date")));
        }
        Ok(d)
    }

    /// Create a date from year, month (1–12), and day-of-month (1–31).
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self> {
        if !(1583..=2199).contains(&year) {
            return Err(Error::Date(format!(
                "year {year} out of range [1583, 2199]"
            )));
        }
        if !(1..=12).contains(&month) {
            return Err(Error::Date(format!("month {month} out of range [1, 12]")));
        }
        let days_in = days_in_month(year, month);
        if day == 0 || day > days_in {
            return Err(Error::Date(format!(
                "day {day} out of range [1, {days_in}] for {year}-{month:02}"
            )));
        }
        Ok(Date(serial_from_ymd(year, month, day)))
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the serial number.
    pub fn serial(&self) -> i32 {
        self.0
    }

    /// Return the year (1583–2199).
    pub fn year(&self) -> u16 {
        ymd_from_serial(self.0).0
    }

    /// Return the month (1–12).
    pub fn month(&self) -> u8 {
        ymd_from_serial(self.0).1
    }

    /// Return the day of the month (1–31).
    pub fn day_of_month(&self) -> u8 {
        ymd_from_serial(self.0).2
    }

    /// Return the weekday (ISO numbering, Monday = 1).
    pub fn weekday(&self) -> Weekday {
        // January 1, 1583 (serial 1) was a Saturday (ordinal 6).
        let w = ((self.0 + 4).rem_euclid(7) + 1) as u8;
        Weekday::from_ordinal(w).expect("rem_euclid always in 1..=7")
    }

    /// Return `true` if this date falls on a Saturday or Sunday.
    pub fn is_weekend(&self) -> bool {
        self.weekday().is_weekend()
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Advance by `n` days.  Returns an error if the result is out of range.
    pub fn add_days(self, n: i32) -> Result<Self> {
        let serial = self.0 + n;
        if serial <= 0 || Date(serial) > Self::MAX {
            return Err(Error::Date(format!(
                "date arithmetic: result {serial} out of range"
            )));
        }
        Ok(Date(serial))
    }

    /// Return the absolute number of calendar days between `self` and `other`.
    pub fn days_between(self, other: Date) -> i32 {
        (other.0 - self.0).abs()
    }

    /// Return the smallest date `>= self` whose weekday equals `weekday`.
    ///
    /// Returns `self` when `self` already falls on the requested weekday.
    pub fn next_weekday(self, weekday: Weekday) -> Result<Self> {
        let skip =
            (weekday.ordinal() as i32 - self.weekday().ordinal() as i32).rem_euclid(7);
        self.add_days(skip)
    }
}

// ── Arithmetic operators ──────────────────────────────────────────────────────

impl std::ops::Add<i32> for Date {
    type Output = Self;
    fn add(self, rhs: i32) -> Self {
        self.add_days(rhs).expect("date addition overflow")
    }
}

impl std::ops::Sub<i32> for Date {
    type Output = Self;
    fn sub(self, rhs: i32) -> Self {
        self.add_days(-rhs).expect("date subtraction underflow")
    }
}

impl std::ops::Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> i32 {
        self.0 - rhs.0
    }
}

// ── Display ───────────────────────────────────────────────────────────────────

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = ymd_from_serial(self.0);
        write!(f, "{y:04}-{m:02}-{d:02}")
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = ymd_from_serial(self.0);
        write!(f, "Date({y:04}-{m:02}-{d:02})")
    }
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Whether a given year is a leap year.
pub fn is_leap_year(year: u16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given month/year.
pub fn days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!((1..=12).contains(&month));
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => unreachable!(),
    }
}

/// Convert (year, month, day) to a serial number (serial 1 = 1583-01-01).
fn serial_from_ymd(year: u16, month: u8, day: u8) -> i32 {
    let y = year as i32;
    let m = month as i32;
    let d = day as i32;

    // Days in whole years 1583..year
    let mut serial = (y - 1583) * 365;
    // Gregorian leap years in [1583, year); 383 = leap count through 1582
    serial += (y - 1) / 4 - (y - 1) / 100 + (y - 1) / 400 - 383;
    // Days in months 1..m of the current year
    serial += MONTH_OFFSET[m as usize - 1] as i32;
    if m > 2 && is_leap_year(year) {
        serial += 1;
    }
    serial + d
}

/// Decompose a serial number into (year, month, day).
fn ymd_from_serial(serial: i32) -> (u16, u8, u8) {
    // Estimate year, then adjust until the serial falls within it
    let mut y = (serial / 365 + 1583) as u16;
    loop {
        if serial < serial_from_ymd(y, 1, 1) {
            y -= 1;
        } else if y < 2199 && serial >= serial_from_ymd(y + 1, 1, 1) {
            y += 1;
        } else {
            break;
        }
    }
    let doy = serial - serial_from_ymd(y, 1, 1) + 1; // 1-based
    let mut m = 1u8;
    let mut remaining = doy;
    loop {
        let days = days_in_month(y, m) as i32;
        if remaining <= days {
            break;
        }
        remaining -= days;
        m += 1;
    }
    (y, m, remaining as u8)
}

/// Cumulative day-of-year offset at the start of each month (non-leap).
const MONTH_OFFSET: [u16; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_epoch() {
        let d = Date::from_ymd(1583, 1, 1).unwrap();
        assert_eq!(d.serial(), 1);
    }

    #[test]
    fn test_roundtrip() {
        let dates = [
            (1583, 1, 1),
            (1583, 12, 31),
            (1600, 2, 29), // leap century
            (1700, 2, 28), // non-leap century
            (1800, 1, 1),
            (1900, 2, 28), // non-leap century
            (1979, 11, 9),
            (2000, 2, 29), // leap century
            (2009, 4, 12),
            (2100, 2, 28),
            (2199, 12, 31),
        ];
        for (y, m, d) in dates {
            let date = Date::from_ymd(y, m, d).unwrap();
            assert_eq!(date.year(), y, "year mismatch for {y}-{m:02}-{d:02}");
            assert_eq!(date.month(), m, "month mismatch for {y}-{m:02}-{d:02}");
            assert_eq!(date.day_of_month(), d, "day mismatch for {y}-{m:02}-{d:02}");
        }
    }

    #[test]
    fn test_invalid_triples() {
        assert!(Date::from_ymd(2023, 2, 29).is_err());
        assert!(Date::from_ymd(2023, 13, 1).is_err());
        assert!(Date::from_ymd(2023, 4, 31).is_err());
        assert!(Date::from_ymd(1582, 12, 31).is_err());
        assert!(Date::from_ymd(2200, 1, 1).is_err());
    }

    #[test]
    fn test_weekday() {
        // 1583-01-01 was a Saturday, 1800-01-01 a Wednesday
        assert_eq!(Date::from_ymd(1583, 1, 1).unwrap().weekday(), Weekday::Saturday);
        assert_eq!(Date::from_ymd(1800, 1, 1).unwrap().weekday(), Weekday::Wednesday);
        // 2024-01-01 is a Monday
        assert_eq!(Date::from_ymd(2024, 1, 1).unwrap().weekday(), Weekday::Monday);
        // 2024-01-06 is a Saturday
        let sat = Date::from_ymd(2024, 1, 6).unwrap();
        assert_eq!(sat.weekday(), Weekday::Saturday);
        assert!(sat.is_weekend());
    }

    #[test]
    fn test_arithmetic() {
        let d = Date::from_ymd(2023, 1, 1).unwrap();
        let d2 = d + 31;
        assert_eq!(d2.month(), 2);
        assert_eq!(d2.day_of_month(), 1);
        assert_eq!(Date::from_ymd(2023, 2, 1).unwrap() - d, 31);
        assert_eq!(d.days_between(d2), 31);
        assert_eq!(d2.days_between(d), 31);
    }

    #[test]
    fn test_year_boundary() {
        let d = Date::from_ymd(2023, 12, 31).unwrap() + 1;
        assert_eq!(d, Date::from_ymd(2024, 1, 1).unwrap());
    }

    #[test]
    fn test_next_weekday() {
        // 2009-04-19 is a Sunday; next Thursday is the 23rd
        let d = Date::from_ymd(2009, 4, 19).unwrap();
        let thu = d.next_weekday(Weekday::Thursday).unwrap();
        assert_eq!(thu, Date::from_ymd(2009, 4, 23).unwrap());
        // A date already on the requested weekday maps to itself
        assert_eq!(thu.next_weekday(Weekday::Thursday).unwrap(), thu);
    }

    #[test]
    fn test_display() {
        let d = Date::from_ymd(1979, 11, 9).unwrap();
        assert_eq!(d.to_string(), "1979-11-09");
        assert_eq!(format!("{d:?}"), "Date(1979-11-09)");
    }

    #[test]
    fn test_serial_range() {
        assert_eq!(Date::MAX, Date::from_ymd(2199, 12, 31).unwrap());
        assert!(Date::from_serial(0).is_err());
        assert!(Date::from_serial(Date::MAX.serial() + 1).is_err());
    }

    proptest! {
        #[test]
        fn serial_ymd_round_trip(serial in 1i32..=225_355) {
            let d = Date::from_serial(serial).unwrap();
            let rebuilt =
                Date::from_ymd(d.year(), d.month(), d.day_of_month()).unwrap();
            prop_assert_eq!(rebuilt.serial(), serial);
        }

        #[test]
        fn next_weekday_is_nearest(serial in 1i32..=225_000, w in 1u8..=7) {
            let d = Date::from_serial(serial).unwrap();
            let target = Weekday::from_ordinal(w).unwrap();
            let n = d.next_weekday(target).unwrap();
            prop_assert!(n >= d);
            prop_assert!(n - d < 7);
            prop_assert_eq!(n.weekday(), target);
        }
    }
}
