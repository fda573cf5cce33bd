//! `Punishment` record, staircase table, and Icelandic description rendering.

use ice_core::errors::Result;
use ice_core::text::{format_grouped, human_readable_list};
use ice_core::{ensure, Natural, Real};

/// Points above this threshold signal statutory prosecution instead of a
/// civil penalty.
const PROSECUTION_POINTS: Natural = 3;

/// One row of a staircase table.
///
/// `lower_bound` is the lowest measurement this punishment applies to; the
/// other fields are the penalty itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Punishment {
    /// Lowest measurement (km/h, ‰, mg/L, or ng/mL) this record applies to.
    pub lower_bound: Real,
    /// Monetary fine in ISK.
    pub fine: Natural,
    /// Months of license suspension.
    pub months_without_license: Natural,
    /// Penalty points entered in the driving record.
    pub points: Natural,
}

impl Punishment {
    /// Create a punishment record.
    pub const fn new(
        lower_bound: Real,
        fine: Natural,
        months_without_license: Natural,
        points: Natural,
    ) -> Self {
        Punishment {
            lower_bound,
            fine,
            months_without_license,
            points,
        }
    }

    /// Return `true` if this record marks the statutory prosecution
    /// threshold (more than three points).
    pub fn is_prosecution(&self) -> bool {
        self.points > PROSECUTION_POINTS
    }

    /// Render the punishment as Icelandic prose.
    ///
    /// Past the prosecution threshold the description is the fixed phrase
    /// `"Þín bíður ákæra & dómur"`; otherwise the non-zero components are
    /// joined into a sentence, e.g.
    /// `"Þín bíður 60.000 króna fjársekt og 3 refsipunktar í ökuferilsskrá"`.
    pub fn description(&self) -> String {
        if self.is_prosecution() {
            return "Þín bíður ákæra & dómur".to_string();
        }

        let mut parts = Vec::new();

        if self.fine > 0 {
            parts.push(format!("{} króna fjársekt", format_grouped(self.fine as u64)));
        }

        if self.months_without_license > 0 {
            let unit = if self.months_without_license > 1 {
                "mánuði"
            } else {
                "mánuð"
            };
            parts.push(format!(
                "svipting ökuleyfis í {} {unit}",
                self.months_without_license
            ));
        }

        if self.points > 0 {
            let unit = if self.points > 1 {
                "refsipunktar"
            } else {
                "refsipunktur"
            };
            parts.push(format!("{} {unit} í ökuferilsskrá", self.points));
        }

        format!("Þín bíður {}", human_readable_list(&parts))
    }
}

/// A staircase table: punishment records sorted by strictly increasing
/// `lower_bound`.
///
/// The first record's bound is the minimum prosecutable measurement; values
/// below it carry no punishment.
#[derive(Debug, Clone, PartialEq)]
pub struct PunishmentTable {
    records: Vec<Punishment>,
}

impl PunishmentTable {
    /// Build a table from records.
    ///
    /// Fails when the table is empty or the bounds are not strictly
    /// increasing; shipped tables never trip this.
    pub fn new(records: Vec<Punishment>) -> Result<Self> {
        ensure!(!records.is_empty(), "punishment table may not be empty");
        for pair in records.windows(2) {
            ensure!(
                pair[0].lower_bound < pair[1].lower_bound,
                "punishment table bounds must be strictly increasing: {} then {}",
                pair[0].lower_bound,
                pair[1].lower_bound
            );
        }
        Ok(PunishmentTable { records })
    }

    /// The records, in ascending bound order.
    pub fn records(&self) -> &[Punishment] {
        &self.records
    }

    /// The minimum measurement the table punishes at all.
    pub fn minimum_bound(&self) -> Real {
        self.records[0].lower_bound
    }

    /// Look up the punishment for `value`.
    ///
    /// Scans from the highest bound downward and returns the first record
    /// whose bound does not exceed `value`; the highest qualifying record
    /// wins on exact bound equality.  `None` when `value` lies below the
    /// lowest bound.
    pub fn lookup(&self, value: Real) -> Option<&Punishment> {
        self.records.iter().rev().find(|p| value >= p.lower_bound)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn table() -> PunishmentTable {
        PunishmentTable::new(vec![
            Punishment::new(1.0, 10000, 0, 0),
            Punishment::new(2.0, 20000, 1, 1),
            Punishment::new(3.0, 0, 0, 4),
        ])
        .unwrap()
    }

    #[test]
    fn lookup_below_first_bound_is_none() {
        assert_eq!(table().lookup(0.99), None);
    }

    #[test]
    fn lookup_exact_bound_selects_that_record() {
        let t = table();
        assert_eq!(t.lookup(2.0).unwrap().fine, 20000);
        assert_eq!(t.lookup(1.0).unwrap().fine, 10000);
    }

    #[test]
    fn lookup_between_bounds_selects_lower() {
        assert_eq!(table().lookup(2.5).unwrap().fine, 20000);
    }

    #[test]
    fn lookup_above_last_bound_selects_last() {
        assert!(table().lookup(99.0).unwrap().is_prosecution());
    }

    #[test]
    fn empty_and_missorted_tables_are_rejected() {
        assert!(PunishmentTable::new(vec![]).is_err());
        assert!(PunishmentTable::new(vec![
            Punishment::new(2.0, 0, 0, 0),
            Punishment::new(1.0, 0, 0, 0),
        ])
        .is_err());
        assert!(PunishmentTable::new(vec![
            Punishment::new(1.0, 0, 0, 0),
            Punishment::new(1.0, 0, 0, 0),
        ])
        .is_err());
    }

    #[test]
    fn description_components() {
        assert_eq!(
            Punishment::new(0.0, 60000, 0, 3).description(),
            "Þín bíður 60.000 króna fjársekt og 3 refsipunktar í ökuferilsskrá"
        );
        assert_eq!(
            Punishment::new(0.0, 70000, 2, 0).description(),
            "Þín bíður 70.000 króna fjársekt og svipting ökuleyfis í 2 mánuði"
        );
        assert_eq!(
            Punishment::new(0.0, 45000, 1, 1).description(),
            "Þín bíður 45.000 króna fjársekt, svipting ökuleyfis í 1 mánuð \
             og 1 refsipunktur í ökuferilsskrá"
        );
    }

    #[test]
    fn description_prosecution() {
        assert_eq!(
            Punishment::new(0.0, 0, 0, 4).description(),
            "Þín bíður ákæra & dómur"
        );
    }

    proptest! {
        #[test]
        fn lookup_selects_the_maximal_qualifying_bound(v in -10.0f64..10.0) {
            let t = table();
            match t.lookup(v) {
                None => prop_assert!(v < t.minimum_bound()),
                Some(r) => {
                    prop_assert!(r.lower_bound <= v);
                    for other in t.records() {
                        if other.lower_bound <= v {
                            prop_assert!(other.lower_bound <= r.lower_bound);
                        }
                    }
                }
            }
        }
    }
}
