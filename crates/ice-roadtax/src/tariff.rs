//! Road-tax tariff configuration and calculation.
//!
//! The tax has three tiers over vehicle mass `W` in kilograms:
//!
//! * tier 1: a per-kg rate on the mass up to 1000 kg;
//! * tier 2: a per-kg rate on the mass between 1001 and 3000 kg;
//! * tier 3: a flat rate per *started* metric ton above 3000 kg;
//!
//! clamped between a minimum and maximum amount.  The basis for the figures
//! is published at <http://www.rsk.is/einstakl/skattar/bifreida>.
//!
//! Vehicles under 400 kg are exempt by regulation; this calculator does not
//! take that into account.

use ice_core::{Natural, Real};

/// Mass covered by tier 1, in kg.
const TIER1_WEIGHT: Real = 1000.0;

/// Mass covered by tier 2, in kg (on top of tier 1).
const TIER2_WEIGHT: Real = 2000.0;

/// One tariff version: the five statutory amounts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tariff {
    /// The tax can never be lower than this amount.
    pub min_amount_due: Natural,
    /// The tax can never be higher than this amount.
    pub max_amount_due: Natural,
    /// Amount paid per kg up to 1000 kg.
    pub per_kg_tier1: Real,
    /// Amount paid per kg between 1001 and 3000 kg.
    pub per_kg_tier2: Real,
    /// Amount paid per started ton above 3000 kg.
    pub per_started_ton: Real,
}

impl Tariff {
    /// The current tariff.
    pub const fn current() -> Self {
        Tariff {
            min_amount_due: 4650,
            max_amount_due: 56074,
            per_kg_tier1: 9.30,
            per_kg_tier2: 12.55,
            per_started_ton: 3100.0,
        }
    }

    /// The preceding tariff, kept for historical computations.
    pub const fn previous() -> Self {
        Tariff {
            min_amount_due: 4227,
            max_amount_due: 50976,
            per_kg_tier1: 8.45,
            per_kg_tier2: 11.40,
            per_started_ton: 2818.0,
        }
    }

    /// The total amount due for a vehicle of `weight_kg`.
    ///
    /// The tier sum is rounded half-away-from-zero before clamping; the
    /// published figures are consistent with that convention.
    pub fn amount_due(&self, weight_kg: Natural) -> Natural {
        let w = weight_kg as Real;

        let tier1 = w.min(TIER1_WEIGHT) * self.per_kg_tier1;
        let tier2 = (w - TIER1_WEIGHT).clamp(0.0, TIER2_WEIGHT) * self.per_kg_tier2;
        let tier3 = if w > TIER1_WEIGHT + TIER2_WEIGHT {
            ((w - TIER1_WEIGHT - TIER2_WEIGHT) / 1000.0).ceil() * self.per_started_ton
        } else {
            0.0
        };

        let raw = (tier1 + tier2 + tier3).round();
        (raw as Natural).clamp(self.min_amount_due, self.max_amount_due)
    }
}

impl Default for Tariff {
    fn default() -> Self {
        Tariff::current()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn current_tariff_vectors() {
        let tariff = Tariff::current();
        assert_eq!(tariff.amount_due(500), 4650); // clamped to the minimum
        assert_eq!(tariff.amount_due(1000), 9300);
        assert_eq!(tariff.amount_due(2000), 21850);
        assert_eq!(tariff.amount_due(3001), 37500);
        assert_eq!(tariff.amount_due(9236), 56074); // clamped to the maximum
    }

    #[test]
    fn tier_boundaries() {
        let tariff = Tariff::current();
        // Tier 2 starts at 1001 kg
        assert_eq!(tariff.amount_due(1001), 9313); // 9300 + 12.55 rounded
        // Tier 3 starts at 3001 kg, per started ton
        assert_eq!(tariff.amount_due(3000), 34400);
        assert_eq!(tariff.amount_due(4000), 37500);
        assert_eq!(tariff.amount_due(4001), 40600);
    }

    #[test]
    fn previous_tariff() {
        let tariff = Tariff::previous();
        assert_eq!(tariff.amount_due(0), 4227);
        assert_eq!(tariff.amount_due(1000), 8450);
        // 8450 + 2000 * 11.40 = 31250
        assert_eq!(tariff.amount_due(3000), 31250);
        assert_eq!(tariff.amount_due(100_000), 50976);
    }

    #[test]
    fn zero_weight_pays_the_minimum() {
        assert_eq!(Tariff::current().amount_due(0), 4650);
    }

    proptest! {
        #[test]
        fn monotone_and_bounded(w1 in 0u32..20_000, w2 in 0u32..20_000) {
            let tariff = Tariff::current();
            let (lo, hi) = (w1.min(w2), w1.max(w2));
            prop_assert!(tariff.amount_due(lo) <= tariff.amount_due(hi));
            let due = tariff.amount_due(w1);
            prop_assert!(due >= tariff.min_amount_due);
            prop_assert!(due <= tariff.max_amount_due);
        }
    }
}
