//! Persidno structure, checksum, and derived dates.
//!
//! A persidno is a ten-digit string:
//!
//! | positions | meaning                                   |
//! |-----------|-------------------------------------------|
//! | 0–1       | day of month (organizations: day + 40)    |
//! | 2–3       | month                                     |
//! | 4–5       | year modulo 100                           |
//! | 6–7       | disambiguator                             |
//! | 8         | checksum digit                            |
//! | 9         | century marker (`0` ⇒ 2000s, `9` ⇒ 1900s, `8` ⇒ 1800s) |

use ice_core::Integer;
use ice_time::{Clock, Date};

/// Default delimiter inserted by [`format`].
const DEFAULT_DELIMITER: &str = "-";

/// Checksum weights applied to the first eight digits.
const CHECKSUM_WEIGHTS: [u32; 8] = [3, 2, 7, 6, 5, 4, 3, 2];

/// The kind of entity a persidno identifies, read off its first digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PersidnoKind {
    /// First digit 0–3: a person.
    Individual,
    /// First digit 4–7: a registered organization.
    Organization,
}

/// Strip dashes and spaces from a persidno string.
///
/// Never fails; the empty string comes back empty.
pub fn clean(persidno: &str) -> String {
    persidno.chars().filter(|c| *c != '-' && *c != ' ').collect()
}

/// Return the ten digits of a cleaned persidno, or `None` when the input is
/// not exactly ten decimal digits after cleanup.
fn digits(persidno: &str) -> Option<[u8; 10]> {
    let cleaned = clean(persidno);
    let mut out = [0u8; 10];
    let mut count = 0usize;
    for c in cleaned.chars() {
        let d = c.to_digit(10)?;
        if count == 10 {
            return None;
        }
        out[count] = d as u8;
        count += 1;
    }
    (count == 10).then_some(out)
}

/// Validate a persidno's structure against the checksum algorithm.
///
/// The checksum is a weighted sum over the first eight digits with weights
/// `3, 2, 7, 6, 5, 4, 3, 2`; the ninth digit must equal
/// `11 - (sum mod 11)`, with `11` mapping to `0`.
pub fn is_valid(persidno: &str) -> bool {
    let Some(d) = digits(persidno) else {
        return false;
    };
    let sum: u32 = CHECKSUM_WEIGHTS
        .iter()
        .zip(&d[..8])
        .map(|(w, digit)| w * *digit as u32)
        .sum();
    let mut check = 11 - sum % 11;
    if check == 11 {
        check = 0;
    }
    check == d[8] as u32
}

/// Classify a persidno by its first digit.
///
/// Returns `None` for input that is not ten digits after cleanup, and for
/// first digits 8–9, which identify neither kind.
pub fn kind(persidno: &str) -> Option<PersidnoKind> {
    match digits(persidno)?[0] {
        0..=3 => Some(PersidnoKind::Individual),
        4..=7 => Some(PersidnoKind::Organization),
        _ => None,
    }
}

/// The birth year encoded in an individual's persidno.
pub fn birth_year(persidno: &str) -> Option<u16> {
    let d = digits(persidno)?;
    if kind(persidno)? != PersidnoKind::Individual {
        return None;
    }
    let suffix = d[4] as u16 * 10 + d[5] as u16;
    let century = match d[9] {
        0 => 20,
        marker => 10 + marker as u16,
    };
    Some(century * 100 + suffix)
}

/// The birth month (1–12) encoded in an individual's persidno.
pub fn birth_month(persidno: &str) -> Option<u8> {
    let d = digits(persidno)?;
    if kind(persidno)? != PersidnoKind::Individual {
        return None;
    }
    Some(d[2] * 10 + d[3])
}

/// The birth day-of-month encoded in an individual's persidno.
pub fn birth_day(persidno: &str) -> Option<u8> {
    let d = digits(persidno)?;
    if kind(persidno)? != PersidnoKind::Individual {
        return None;
    }
    Some(d[0] * 10 + d[1])
}

/// The birth date of the individual, at midnight.
///
/// `None` for organizations, for malformed input, and when the encoded
/// day/month/year triple is not a real date.
pub fn birth_date(persidno: &str) -> Option<Date> {
    let year = birth_year(persidno)?;
    let month = birth_month(persidno)?;
    let day = birth_day(persidno)?;
    Date::from_ymd(year, month, day).ok()
}

/// The foundation date encoded in an organization's persidno.
///
/// Organizations store the real day of month plus 40 in the day field.
/// `None` for individuals and malformed input.
pub fn foundation_date(persidno: &str) -> Option<Date> {
    let d = digits(persidno)?;
    if kind(persidno)? != PersidnoKind::Organization {
        return None;
    }
    let raw_day = d[0] * 10 + d[1];
    let day = raw_day.checked_sub(40)?;
    let month = d[2] * 10 + d[3];
    let suffix = d[4] as u16 * 10 + d[5] as u16;
    let century = match d[9] {
        0 => 20,
        marker => 10 + marker as u16,
    };
    Date::from_ymd(century * 100 + suffix, month, day).ok()
}

/// The age in whole years at `when` of someone born on `birth`.
///
/// The year difference is decremented by one when `when` falls before the
/// birthday within its year.
pub fn age_at(birth: Date, when: Date) -> Integer {
    let mut years = when.year() as Integer - birth.year() as Integer;
    if (when.month(), when.day_of_month()) < (birth.month(), birth.day_of_month()) {
        years -= 1;
    }
    years
}

/// The individual's age today, per the injected clock.
///
/// `None` when no birth date can be derived from the persidno.
pub fn age(persidno: &str, clock: &dyn Clock) -> Option<Integer> {
    Some(age_at(birth_date(persidno)?, clock.today()))
}

/// Format a persidno with the standard `-` delimiter: `"091179-4829"`.
///
/// Returns the empty string unless the cleaned input is ten characters.
pub fn format(persidno: &str) -> String {
    format_with(persidno, DEFAULT_DELIMITER)
}

/// Format a persidno with an arbitrary delimiter between the sixth and
/// seventh characters.
///
/// Returns the empty string unless the cleaned input is ten characters.
pub fn format_with(persidno: &str, delimiter: &str) -> String {
    let cleaned = clean(persidno);
    let chars: Vec<char> = cleaned.chars().collect();
    if chars.len() != 10 {
        return String::new();
    }
    let head: String = chars[..6].iter().collect();
    let tail: String = chars[6..].iter().collect();
    format!("{head}{delimiter}{tail}")
}

/// The individual's next birthday on or after today, per the injected clock.
///
/// Invoked on the birthday itself, it returns today.  A February 29 birthday
/// resolves to the next calendar year in which February 29 exists.
pub fn next_birthday(persidno: &str, clock: &dyn Clock) -> Option<Date> {
    let month = birth_month(persidno)?;
    let day = birth_day(persidno)?;
    let today = clock.today();
    let mut year = today.year();
    if (month, day) < (today.month(), today.day_of_month()) {
        year += 1;
    }
    // Skip years where the date does not exist (February 29)
    loop {
        match Date::from_ymd(year, month, day) {
            Ok(d) => return Some(d),
            Err(_) if year < 2199 => year += 1,
            Err(_) => return None,
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
