//! # ice-penalty
//!
//! Icelandic driving-offense punishment tables: speeding, alcohol, and drug
//! offenses.  Each offense maps a measurement to a [`Punishment`] through a
//! staircase table — a sequence of records sorted by lower bound, where the
//! highest qualifying bound wins.
//!
//! The statutory data ships as an immutable [`PenaltyTables`] value built by
//! [`PenaltyTables::statutory`]; nothing in this crate is global, so several
//! table versions can coexist.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Alcohol offense tables (breath and blood, first and repeat offense).
pub mod alcohol;

/// Drug offense tables, per substance.
pub mod drugs;

/// `Punishment` record, staircase table, and description rendering.
pub mod punishment;

/// Speeding tables, one per legal speed limit.
pub mod speeding;

/// The `PenaltyTables` facade bundling all statutory tables.
pub mod tables;

pub use alcohol::AlcoholMeasurement;
pub use drugs::Substance;
pub use punishment::{Punishment, PunishmentTable};
pub use speeding::SpeedLimit;
pub use tables::PenaltyTables;
