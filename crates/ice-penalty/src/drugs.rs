//! Drug offense tables.
//!
//! One staircase per substance, with the blood concentration in ng/mL as the
//! lookup value, plus a single-row table for any substance detected in
//! urine.  Data tables from the Icelandic traffic regulation (reglugerd.is).

use crate::punishment::{Punishment, PunishmentTable};
use ice_core::errors::Result;

/// The substances the tables cover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Substance {
    /// Amfetamín.
    Amphetamines,
    /// Kannabis.
    Cannabis,
    /// MDMA.
    Mdma,
    /// Kókaín.
    Cocaine,
}

impl Substance {
    /// All covered substances.
    pub const ALL: [Substance; 4] = [
        Substance::Amphetamines,
        Substance::Cannabis,
        Substance::Mdma,
        Substance::Cocaine,
    ];

    /// The Icelandic name of the substance.
    pub fn icelandic_name(&self) -> &'static str {
        match self {
            Substance::Amphetamines => "Amfetamín",
            Substance::Cannabis => "Kannabis",
            Substance::Mdma => "MDMA",
            Substance::Cocaine => "Kókaín",
        }
    }
}

impl std::fmt::Display for Substance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.icelandic_name())
    }
}

/// Amphetamines in blood.
pub fn amphetamines_in_blood() -> Result<PunishmentTable> {
    PunishmentTable::new(vec![
        Punishment::new(0.01, 70000, 4, 0),
        Punishment::new(170.0, 140000, 12, 0),
    ])
}

/// Cannabis in blood.
pub fn cannabis_in_blood() -> Result<PunishmentTable> {
    PunishmentTable::new(vec![
        Punishment::new(0.01, 70000, 4, 0),
        Punishment::new(2.0, 140000, 12, 0),
    ])
}

/// MDMA in blood.
pub fn mdma_in_blood() -> Result<PunishmentTable> {
    PunishmentTable::new(vec![Punishment::new(220.0, 140000, 12, 0)])
}

/// Cocaine in blood.
pub fn cocaine_in_blood() -> Result<PunishmentTable> {
    PunishmentTable::new(vec![
        Punishment::new(0.01, 70000, 4, 0),
        Punishment::new(30.0, 140000, 12, 0),
    ])
}

/// Any substance detected in urine.
pub fn any_in_urine() -> Result<PunishmentTable> {
    PunishmentTable::new(vec![Punishment::new(0.01, 70000, 3, 0)])
}

/// Build the blood staircase for `substance`.
pub fn table_for(substance: Substance) -> Result<PunishmentTable> {
    match substance {
        Substance::Amphetamines => amphetamines_in_blood(),
        Substance::Cannabis => cannabis_in_blood(),
        Substance::Mdma => mdma_in_blood(),
        Substance::Cocaine => cocaine_in_blood(),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cannabis_vector() {
        let p = cannabis_in_blood().unwrap().lookup(0.5).copied().unwrap();
        assert_eq!((p.fine, p.months_without_license, p.points), (70000, 4, 0));
    }

    #[test]
    fn mdma_below_bound_is_none() {
        assert!(mdma_in_blood().unwrap().lookup(100.0).is_none());
        assert!(mdma_in_blood().unwrap().lookup(220.0).is_some());
    }

    #[test]
    fn cocaine_vector() {
        let p = cocaine_in_blood().unwrap().lookup(40.0).copied().unwrap();
        assert_eq!((p.fine, p.months_without_license, p.points), (140000, 12, 0));
    }

    #[test]
    fn urine_table_is_one_row() {
        let table = any_in_urine().unwrap();
        assert_eq!(table.records().len(), 1);
        let p = table.lookup(1.0).unwrap();
        assert_eq!((p.fine, p.months_without_license, p.points), (70000, 3, 0));
    }

    #[test]
    fn all_substance_tables_are_well_formed() {
        for substance in Substance::ALL {
            let table = table_for(substance).unwrap();
            assert!(table.minimum_bound() > 0.0);
        }
    }
}
