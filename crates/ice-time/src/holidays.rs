//! Icelandic holidays for a given year.
//!
//! [`Holidays`] computes the fifteen statutory Icelandic holidays of a year
//! once, at construction, and is immutable afterwards.  Thirteen are full
//! holidays; Christmas Eve and New Year's Eve are observed from noon only and
//! are listed as partial holidays.
//!
//! Movable feasts hang off Easter Sunday, computed with the Anonymous
//! Gregorian computus.

use crate::date::Date;
use crate::weekday::Weekday;
use ice_core::errors::Result;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, OnceLock};

/// The Icelandic holidays of one year.
///
/// All fifteen dates are computed by [`Holidays::for_year`] and stored in the
/// value; accessors are plain field reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Holidays {
    year: u16,
    new_years_day: Date,
    maundy_thursday: Date,
    good_friday: Date,
    easter_day: Date,
    easter_monday: Date,
    first_day_of_summer: Date,
    labour_day: Date,
    ascension_day: Date,
    white_monday: Date,
    national_day: Date,
    tradesmens_day: Date,
    christmas_eve: Date,
    christmas_day: Date,
    boxing_day: Date,
    new_years_eve: Date,
}

impl Holidays {
    /// Compute the holidays of `year`.
    ///
    /// Fails when `year` is outside the supported date range (1583–2199).
    pub fn for_year(year: u16) -> Result<Self> {
        let easter_day = easter_sunday(year)?;
        let maundy_thursday = easter_day.add_days(-3)?;
        let easter_monday = easter_day.add_days(1)?;
        Ok(Holidays {
            year,
            new_years_day: Date::from_ymd(year, 1, 1)?,
            maundy_thursday,
            good_friday: easter_day.add_days(-2)?,
            easter_day,
            easter_monday,
            // First Thursday on or after April 19
            first_day_of_summer: Date::from_ymd(year, 4, 19)?
                .next_weekday(Weekday::Thursday)?,
            labour_day: Date::from_ymd(year, 5, 1)?,
            ascension_day: maundy_thursday.add_days(42)?,
            white_monday: easter_monday.add_days(49)?,
            national_day: Date::from_ymd(year, 6, 17)?,
            // First Monday on or after August 1
            tradesmens_day: Date::from_ymd(year, 8, 1)?.next_weekday(Weekday::Monday)?,
            christmas_eve: Date::from_ymd(year, 12, 24)?,
            christmas_day: Date::from_ymd(year, 12, 25)?,
            boxing_day: Date::from_ymd(year, 12, 26)?,
            new_years_eve: Date::from_ymd(year, 12, 31)?,
        })
    }

    /// Return the holidays of `year` from a process-wide cache.
    ///
    /// Entries are immutable once inserted; the cache exists purely to avoid
    /// recomputing the computus for membership tests.
    pub fn cached(year: u16) -> Result<Arc<Self>> {
        static CACHE: OnceLock<Mutex<HashMap<u16, Arc<Holidays>>>> = OnceLock::new();
        let cache = CACHE.get_or_init(|| Mutex::new(HashMap::new()));
        let mut map = cache.lock().expect("holiday cache mutex poisoned");
        if let Some(h) = map.get(&year) {
            return Ok(Arc::clone(h));
        }
        let h = Arc::new(Self::for_year(year)?);
        map.insert(year, Arc::clone(&h));
        Ok(h)
    }

    /// The year these holidays belong to.
    pub fn year(&self) -> u16 {
        self.year
    }

    // ── Individual holidays ──────────────────────────────────────────────────

    /// New Year's Day (Nýársdagur), January 1.
    pub fn new_years_day(&self) -> Date {
        self.new_years_day
    }

    /// Maundy Thursday (Skírdagur), three days before Easter Sunday.
    pub fn maundy_thursday(&self) -> Date {
        self.maundy_thursday
    }

    /// Good Friday (Föstudagurinn langi), two days before Easter Sunday.
    pub fn good_friday(&self) -> Date {
        self.good_friday
    }

    /// Easter Sunday (Páskadagur).
    pub fn easter_day(&self) -> Date {
        self.easter_day
    }

    /// Easter Monday (Annar í páskum).
    pub fn easter_monday(&self) -> Date {
        self.easter_monday
    }

    /// First Day of Summer (Sumardagurinn fyrsti), the first Thursday on or
    /// after April 19.
    pub fn first_day_of_summer(&self) -> Date {
        self.first_day_of_summer
    }

    /// Labour Day (Verkalýðsdagurinn), May 1.
    pub fn labour_day(&self) -> Date {
        self.labour_day
    }

    /// Ascension Day (Uppstigningardagur), six weeks after Maundy Thursday.
    pub fn ascension_day(&self) -> Date {
        self.ascension_day
    }

    /// White Monday (Annar í hvítasunnu), seven weeks after Easter Monday.
    pub fn white_monday(&self) -> Date {
        self.white_monday
    }

    /// Icelandic National Day (Þjóðhátíðardagurinn), June 17.
    pub fn national_day(&self) -> Date {
        self.national_day
    }

    /// Tradesmen's Day (Frídagur verslunarmanna), the first Monday on or
    /// after August 1.
    pub fn tradesmens_day(&self) -> Date {
        self.tradesmens_day
    }

    /// Christmas Eve (Aðfangadagur), December 24.  Afternoon only.
    pub fn christmas_eve(&self) -> Date {
        self.christmas_eve
    }

    /// Christmas Day (Jóladagur), December 25.
    pub fn christmas_day(&self) -> Date {
        self.christmas_day
    }

    /// Boxing Day (Annar í jólum), December 26.
    pub fn boxing_day(&self) -> Date {
        self.boxing_day
    }

    /// New Year's Eve (Gamlársdagur), December 31.  Afternoon only.
    pub fn new_years_eve(&self) -> Date {
        self.new_years_eve
    }

    // ── Lists ────────────────────────────────────────────────────────────────

    /// The thirteen full-day holidays, in calendar order.
    pub fn full_holidays(&self) -> Vec<Date> {
        vec![
            self.new_years_day,
            self.maundy_thursday,
            self.good_friday,
            self.easter_day,
            self.easter_monday,
            self.first_day_of_summer,
            self.labour_day,
            self.ascension_day,
            self.white_monday,
            self.national_day,
            self.tradesmens_day,
            self.christmas_day,
            self.boxing_day,
        ]
    }

    /// The two partial holidays (holiday from noon).
    pub fn partial_holidays(&self) -> Vec<Date> {
        vec![self.christmas_eve, self.new_years_eve]
    }

    /// All fifteen holidays, partial and full, in calendar order.
    pub fn all_holidays(&self) -> Vec<Date> {
        vec![
            self.new_years_day,
            self.maundy_thursday,
            self.good_friday,
            self.easter_day,
            self.easter_monday,
            self.first_day_of_summer,
            self.labour_day,
            self.ascension_day,
            self.white_monday,
            self.national_day,
            self.tradesmens_day,
            self.christmas_eve,
            self.christmas_day,
            self.boxing_day,
            self.new_years_eve,
        ]
    }

    // ── Membership tests ─────────────────────────────────────────────────────

    /// Return `true` if `date` is a holiday (full or partial) in its year.
    pub fn is_holiday(date: Date) -> Result<bool> {
        Ok(Self::cached(date.year())?.all_holidays().contains(&date))
    }

    /// Return `true` if `date` is a full-day holiday in its year.
    pub fn is_full_holiday(date: Date) -> Result<bool> {
        Ok(Self::cached(date.year())?.full_holidays().contains(&date))
    }

    /// Return `true` if `date` is a partial holiday in its year.
    pub fn is_partial_holiday(date: Date) -> Result<bool> {
        Ok(Self::cached(date.year())?
            .partial_holidays()
            .contains(&date))
    }
}

/// Compute Easter Sunday for `year` with the Anonymous Gregorian computus.
///
/// Valid for any Gregorian year; the supported range is bounded by [`Date`].
fn easter_sunday(year: u16) -> Result<Date> {
    let y = year as i32;
    let a = y % 19;
    let b = y / 100;
    let c = y % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31; // 3 = March, 4 = April
    let day = (h + l - 7 * m + 114) % 31 + 1;
    Date::from_ymd(year, month as u8, day as u8)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn easter_2009() {
        let h = Holidays::for_year(2009).unwrap();
        assert_eq!(h.easter_day(), date(2009, 4, 12));
        assert_eq!(h.easter_monday(), date(2009, 4, 13));
        assert_eq!(h.maundy_thursday(), date(2009, 4, 9));
        assert_eq!(h.good_friday(), date(2009, 4, 10));
        assert_eq!(h.ascension_day(), date(2009, 5, 21));
        assert_eq!(h.white_monday(), date(2009, 6, 1));
    }

    #[test]
    fn easter_reference_years() {
        // Published astronomical-ecclesiastical tables
        let known = [
            (1900, 4, 15),
            (1913, 3, 23),
            (1943, 4, 25),
            (1954, 4, 18),
            (1979, 4, 15),
            (2000, 4, 23),
            (2008, 3, 23),
            (2011, 4, 24),
            (2013, 3, 31),
            (2016, 3, 27),
            (2024, 3, 31),
            (2038, 4, 25),
            (2049, 4, 18),
            (2100, 3, 28),
        ];
        for (y, m, d) in known {
            assert_eq!(
                Holidays::for_year(y).unwrap().easter_day(),
                date(y, m, d),
                "Easter {y}"
            );
        }
    }

    #[test]
    fn easter_is_always_a_sunday() {
        for y in 1900..=2100 {
            let e = Holidays::for_year(y).unwrap().easter_day();
            assert_eq!(e.weekday(), Weekday::Sunday, "Easter {y} is {e}");
            // Easter falls between March 22 and April 25
            assert!(
                (e.month() == 3 && e.day_of_month() >= 22)
                    || (e.month() == 4 && e.day_of_month() <= 25),
                "Easter {y} out of range: {e}"
            );
        }
    }

    #[test]
    fn years_before_1800() {
        // The computus is defined for any Gregorian year, from 1583 on
        let h = Holidays::for_year(1583).unwrap();
        assert_eq!(h.easter_day(), date(1583, 4, 10));
        let h = Holidays::for_year(1700).unwrap();
        assert_eq!(h.easter_day(), date(1700, 4, 11));
        assert_eq!(h.all_holidays().len(), 15);
        assert!(Holidays::is_holiday(date(1700, 12, 25)).unwrap());
        // Pre-Gregorian years stay out of range
        assert!(Holidays::for_year(1582).is_err());
    }

    #[test]
    fn weekday_anchored_holidays() {
        let h = Holidays::for_year(2009).unwrap();
        assert_eq!(h.first_day_of_summer(), date(2009, 4, 23));
        let h13 = Holidays::for_year(2013).unwrap();
        assert_eq!(h13.tradesmens_day(), date(2013, 8, 5));
        // Aug 1 2022 was itself a Monday
        let h22 = Holidays::for_year(2022).unwrap();
        assert_eq!(h22.tradesmens_day(), date(2022, 8, 1));
    }

    #[test]
    fn list_sizes() {
        let h = Holidays::for_year(2024).unwrap();
        assert_eq!(h.full_holidays().len(), 13);
        assert_eq!(h.partial_holidays().len(), 2);
        assert_eq!(h.all_holidays().len(), 15);
    }

    #[test]
    fn membership() {
        assert!(Holidays::is_holiday(date(2009, 4, 12)).unwrap());
        assert!(Holidays::is_full_holiday(date(2009, 4, 12)).unwrap());
        assert!(!Holidays::is_partial_holiday(date(2009, 4, 12)).unwrap());

        assert!(Holidays::is_holiday(date(2009, 12, 24)).unwrap());
        assert!(Holidays::is_partial_holiday(date(2009, 12, 24)).unwrap());
        assert!(!Holidays::is_full_holiday(date(2009, 12, 24)).unwrap());

        assert!(!Holidays::is_holiday(date(2009, 6, 16)).unwrap());
    }

    #[test]
    fn cached_returns_same_value() {
        let a = Holidays::cached(2024).unwrap();
        let b = Holidays::cached(2024).unwrap();
        assert_eq!(*a, *b);
        assert_eq!(*a, Holidays::for_year(2024).unwrap());
    }
}
