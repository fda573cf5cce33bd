//! The `PenaltyTables` facade.
//!
//! Bundles every statutory staircase into one immutable value.  Nothing here
//! is global: hosts that need historical table versions side by side simply
//! hold several `PenaltyTables` values.

use crate::alcohol::{self, AlcoholMeasurement};
use crate::drugs::{self, Substance};
use crate::punishment::{Punishment, PunishmentTable};
use crate::speeding::{self, SpeedLimit};
use ice_core::errors::Result;
use ice_core::{reject, Real};

/// All punishment tables for one regulation version.
#[derive(Debug, Clone, PartialEq)]
pub struct PenaltyTables {
    speeding: [PunishmentTable; 7],
    alcohol_blood_first: PunishmentTable,
    alcohol_blood_repeat: PunishmentTable,
    alcohol_breath_first: PunishmentTable,
    alcohol_breath_repeat: PunishmentTable,
    drugs: [PunishmentTable; 4],
    urine: PunishmentTable,
}

impl PenaltyTables {
    /// Build the currently shipped statutory tables.
    ///
    /// The literals are known-good; a mis-sorted literal is a programming
    /// error and panics.
    pub fn statutory() -> Self {
        let build = || -> Result<Self> {
            Ok(PenaltyTables {
                speeding: [
                    speeding::table_for_30()?,
                    speeding::table_for_35()?,
                    speeding::table_for_50()?,
                    speeding::table_for_60()?,
                    speeding::table_for_70()?,
                    speeding::table_for_80()?,
                    speeding::table_for_90()?,
                ],
                alcohol_blood_first: alcohol::blood_first_offense()?,
                alcohol_blood_repeat: alcohol::blood_repeat_offense()?,
                alcohol_breath_first: alcohol::breath_first_offense()?,
                alcohol_breath_repeat: alcohol::breath_repeat_offense()?,
                drugs: [
                    drugs::amphetamines_in_blood()?,
                    drugs::cannabis_in_blood()?,
                    drugs::mdma_in_blood()?,
                    drugs::cocaine_in_blood()?,
                ],
                urine: drugs::any_in_urine()?,
            })
        };
        build().expect("statutory penalty tables are well-formed")
    }

    // ── Table accessors ──────────────────────────────────────────────────────

    /// The staircase for a zone with the given speed limit.
    pub fn speeding(&self, limit: SpeedLimit) -> &PunishmentTable {
        let index = SpeedLimit::ALL
            .iter()
            .position(|l| *l == limit)
            .expect("SpeedLimit::ALL covers every variant");
        &self.speeding[index]
    }

    /// The alcohol staircase for the given measurement and offense history.
    pub fn alcohol(
        &self,
        measurement: AlcoholMeasurement,
        first_offense: bool,
    ) -> &PunishmentTable {
        match (measurement, first_offense) {
            (AlcoholMeasurement::Blood, true) => &self.alcohol_blood_first,
            (AlcoholMeasurement::Blood, false) => &self.alcohol_blood_repeat,
            (AlcoholMeasurement::Breath, true) => &self.alcohol_breath_first,
            (AlcoholMeasurement::Breath, false) => &self.alcohol_breath_repeat,
        }
    }

    /// The blood staircase for the given substance.
    pub fn drug(&self, substance: Substance) -> &PunishmentTable {
        let index = Substance::ALL
            .iter()
            .position(|s| *s == substance)
            .expect("Substance::ALL covers every variant");
        &self.drugs[index]
    }

    /// The single-row table for any substance detected in urine.
    pub fn drug_in_urine(&self) -> &PunishmentTable {
        &self.urine
    }

    // ── Lookups ──────────────────────────────────────────────────────────────

    /// The punishment for driving at `driving_speed` km/h in a zone with the
    /// given limit.
    ///
    /// `Ok(None)` when the speed is below the prosecutable threshold; an
    /// error only for a non-finite measurement.
    pub fn speeding_punishment(
        &self,
        limit: SpeedLimit,
        driving_speed: Real,
    ) -> Result<Option<&Punishment>> {
        if !driving_speed.is_finite() {
            reject!("driving speed must be a finite number");
        }
        Ok(self.speeding(limit).lookup(driving_speed))
    }

    /// The punishment for an alcohol level of `value` (mg/L for breath, ‰
    /// for blood).
    pub fn alcohol_punishment(
        &self,
        measurement: AlcoholMeasurement,
        first_offense: bool,
        value: Real,
    ) -> Result<Option<&Punishment>> {
        if !value.is_finite() {
            reject!("alcohol level must be a finite number");
        }
        Ok(self.alcohol(measurement, first_offense).lookup(value))
    }

    /// The punishment for `value` ng/mL of `substance` in blood.
    pub fn drug_punishment(
        &self,
        substance: Substance,
        value: Real,
    ) -> Result<Option<&Punishment>> {
        if !value.is_finite() {
            reject!("drug level must be a finite number");
        }
        Ok(self.drug(substance).lookup(value))
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
