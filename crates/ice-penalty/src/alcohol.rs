//! Alcohol offense tables.
//!
//! Four staircases: breath (mg/L) and blood (‰), each for a first and a
//! repeat offense.  Data tables from the Icelandic traffic regulation
//! (reglugerd.is).

use crate::punishment::{Punishment, PunishmentTable};
use ice_core::errors::Result;

/// How the alcohol level was measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlcoholMeasurement {
    /// Alcohol in breath, mg/L ("Útöndunarlofti").
    Breath,
    /// Alcohol in blood, per mille ("Blóði").
    Blood,
}

impl AlcoholMeasurement {
    /// The Icelandic name of the measurement medium.
    pub fn icelandic_name(&self) -> &'static str {
        match self {
            AlcoholMeasurement::Breath => "Útöndunarlofti",
            AlcoholMeasurement::Blood => "Blóði",
        }
    }
}

impl std::fmt::Display for AlcoholMeasurement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.icelandic_name())
    }
}

/// First offense, alcohol in blood (‰).
pub fn blood_first_offense() -> Result<PunishmentTable> {
    PunishmentTable::new(vec![
        Punishment::new(0.50, 70000, 2, 0),
        Punishment::new(0.61, 70000, 4, 0),
        Punishment::new(0.76, 90000, 6, 0),
        Punishment::new(0.91, 100000, 8, 0),
        Punishment::new(1.11, 110000, 10, 0),
        Punishment::new(1.20, 140000, 12, 0),
        Punishment::new(1.51, 160000, 18, 0),
        Punishment::new(2.01, 160000, 24, 0),
    ])
}

/// First offense, alcohol in breath (mg/L).
pub fn breath_first_offense() -> Result<PunishmentTable> {
    PunishmentTable::new(vec![
        Punishment::new(0.25, 70000, 2, 0),
        Punishment::new(0.31, 70000, 4, 0),
        Punishment::new(0.38, 90000, 6, 0),
        Punishment::new(0.46, 100000, 8, 0),
        Punishment::new(0.56, 110000, 10, 0),
        Punishment::new(0.60, 140000, 12, 0),
        Punishment::new(0.76, 160000, 18, 0),
        Punishment::new(1.01, 160000, 24, 0),
    ])
}

/// Repeat offense, alcohol in blood (‰).
pub fn blood_repeat_offense() -> Result<PunishmentTable> {
    PunishmentTable::new(vec![
        Punishment::new(0.50, 180000, 24, 0),
        Punishment::new(1.20, 200000, 36, 0),
        Punishment::new(1.51, 220000, 42, 0),
        Punishment::new(2.01, 240000, 48, 0),
    ])
}

/// Repeat offense, alcohol in breath (mg/L).
pub fn breath_repeat_offense() -> Result<PunishmentTable> {
    PunishmentTable::new(vec![
        Punishment::new(0.25, 180000, 24, 0),
        Punishment::new(0.60, 200000, 36, 0),
        Punishment::new(0.76, 220000, 42, 0),
        Punishment::new(1.01, 240000, 48, 0),
    ])
}

/// Build the staircase for `measurement` and offense history.
pub fn table_for(
    measurement: AlcoholMeasurement,
    first_offense: bool,
) -> Result<PunishmentTable> {
    match (measurement, first_offense) {
        (AlcoholMeasurement::Breath, true) => breath_first_offense(),
        (AlcoholMeasurement::Breath, false) => breath_repeat_offense(),
        (AlcoholMeasurement::Blood, true) => blood_first_offense(),
        (AlcoholMeasurement::Blood, false) => blood_repeat_offense(),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breath_first_offense_vector() {
        let p = breath_first_offense().unwrap().lookup(0.55).copied().unwrap();
        assert_eq!((p.fine, p.months_without_license, p.points), (100000, 8, 0));
    }

    #[test]
    fn blood_first_offense_vector() {
        let p = blood_first_offense().unwrap().lookup(1.20).copied().unwrap();
        assert_eq!((p.fine, p.months_without_license, p.points), (140000, 12, 0));
    }

    #[test]
    fn below_legal_threshold() {
        assert!(blood_first_offense().unwrap().lookup(0.49).is_none());
        assert!(breath_repeat_offense().unwrap().lookup(0.24).is_none());
    }

    #[test]
    fn repeat_offenses_are_harsher() {
        let first = blood_first_offense().unwrap();
        let repeat = blood_repeat_offense().unwrap();
        for value in [0.5, 0.8, 1.3, 1.6, 2.5] {
            let f = first.lookup(value).unwrap();
            let r = repeat.lookup(value).unwrap();
            assert!(r.fine > f.fine, "fine at {value}");
            assert!(
                r.months_without_license > f.months_without_license,
                "suspension at {value}"
            );
        }
    }

    #[test]
    fn measurement_names() {
        assert_eq!(AlcoholMeasurement::Breath.to_string(), "Útöndunarlofti");
        assert_eq!(AlcoholMeasurement::Blood.to_string(), "Blóði");
    }
}
