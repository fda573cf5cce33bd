//! Speeding punishment tables.
//!
//! One staircase per legal speed limit, with the measured driving speed in
//! km/h as the lookup value.  Data tables from <http://www.us.is/id/4501>.

use crate::punishment::{Punishment, PunishmentTable};
use ice_core::errors::Result;
use ice_core::reject;

/// The speed limits used on Icelandic roads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpeedLimit {
    /// 30 km/h zone.
    Kmh30,
    /// 35 km/h zone.
    Kmh35,
    /// 50 km/h zone.
    Kmh50,
    /// 60 km/h zone.
    Kmh60,
    /// 70 km/h zone.
    Kmh70,
    /// 80 km/h zone.
    Kmh80,
    /// 90 km/h zone.
    Kmh90,
}

impl SpeedLimit {
    /// All limits, ascending.
    pub const ALL: [SpeedLimit; 7] = [
        SpeedLimit::Kmh30,
        SpeedLimit::Kmh35,
        SpeedLimit::Kmh50,
        SpeedLimit::Kmh60,
        SpeedLimit::Kmh70,
        SpeedLimit::Kmh80,
        SpeedLimit::Kmh90,
    ];

    /// Map a raw km/h figure to a limit.
    ///
    /// Fails for anything other than 30, 35, 50, 60, 70, 80, or 90.
    pub fn from_kmh(limit: u32) -> Result<Self> {
        match limit {
            30 => Ok(SpeedLimit::Kmh30),
            35 => Ok(SpeedLimit::Kmh35),
            50 => Ok(SpeedLimit::Kmh50),
            60 => Ok(SpeedLimit::Kmh60),
            70 => Ok(SpeedLimit::Kmh70),
            80 => Ok(SpeedLimit::Kmh80),
            90 => Ok(SpeedLimit::Kmh90),
            other => reject!(
                "invalid speed limit {other}, must be one of 30, 35, 50, 60, 70, 80 or 90"
            ),
        }
    }

    /// The limit in km/h.
    pub fn kmh(&self) -> u32 {
        match self {
            SpeedLimit::Kmh30 => 30,
            SpeedLimit::Kmh35 => 35,
            SpeedLimit::Kmh50 => 50,
            SpeedLimit::Kmh60 => 60,
            SpeedLimit::Kmh70 => 70,
            SpeedLimit::Kmh80 => 80,
            SpeedLimit::Kmh90 => 90,
        }
    }
}

impl std::fmt::Display for SpeedLimit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} km/h", self.kmh())
    }
}

/// Build the staircase for a 30 km/h zone.
pub fn table_for_30() -> Result<PunishmentTable> {
    PunishmentTable::new(vec![
        Punishment::new(36.0, 5000, 0, 0),
        Punishment::new(41.0, 10000, 0, 0),
        Punishment::new(46.0, 15000, 0, 1),
        Punishment::new(51.0, 20000, 0, 2),
        Punishment::new(56.0, 25000, 0, 3),
        Punishment::new(61.0, 45000, 3, 3),
        Punishment::new(66.0, 55000, 3, 3),
        Punishment::new(71.0, 70000, 3, 3),
        Punishment::new(76.0, 0, 0, 4),
    ])
}

/// Build the staircase for a 35 km/h zone.
pub fn table_for_35() -> Result<PunishmentTable> {
    PunishmentTable::new(vec![
        Punishment::new(41.0, 5000, 0, 0),
        Punishment::new(46.0, 10000, 0, 0),
        Punishment::new(51.0, 15000, 0, 1),
        Punishment::new(56.0, 20000, 0, 2),
        Punishment::new(61.0, 25000, 0, 3),
        Punishment::new(66.0, 45000, 0, 3),
        Punishment::new(71.0, 50000, 3, 3),
        Punishment::new(76.0, 55000, 3, 3),
        Punishment::new(81.0, 70000, 3, 3),
        Punishment::new(86.0, 0, 0, 4),
    ])
}

/// Build the staircase for a 50 km/h zone.
pub fn table_for_50() -> Result<PunishmentTable> {
    PunishmentTable::new(vec![
        Punishment::new(56.0, 5000, 0, 0),
        Punishment::new(61.0, 10000, 0, 0),
        Punishment::new(66.0, 15000, 0, 0),
        Punishment::new(71.0, 20000, 0, 0),
        Punishment::new(76.0, 25000, 0, 1),
        Punishment::new(81.0, 30000, 0, 2),
        Punishment::new(86.0, 40000, 0, 3),
        Punishment::new(91.0, 50000, 0, 3),
        Punishment::new(96.0, 60000, 0, 3),
        Punishment::new(101.0, 90000, 3, 3),
        Punishment::new(111.0, 110000, 3, 3),
        Punishment::new(121.0, 130000, 3, 3),
        Punishment::new(131.0, 0, 0, 4),
    ])
}

/// Build the staircase for a 60 km/h zone.
pub fn table_for_60() -> Result<PunishmentTable> {
    PunishmentTable::new(vec![
        Punishment::new(66.0, 5000, 0, 0),
        Punishment::new(71.0, 10000, 0, 0),
        Punishment::new(76.0, 15000, 0, 0),
        Punishment::new(81.0, 20000, 0, 0),
        Punishment::new(86.0, 30000, 0, 1),
        Punishment::new(91.0, 40000, 0, 2),
        Punishment::new(96.0, 50000, 0, 3),
        Punishment::new(101.0, 60000, 0, 3),
        Punishment::new(111.0, 80000, 1, 3),
        Punishment::new(121.0, 110000, 3, 3),
        Punishment::new(131.0, 130000, 3, 3),
        Punishment::new(141.0, 0, 0, 4),
    ])
}

/// Build the staircase for a 70 km/h zone.
pub fn table_for_70() -> Result<PunishmentTable> {
    PunishmentTable::new(vec![
        Punishment::new(76.0, 5000, 0, 0),
        Punishment::new(81.0, 10000, 0, 0),
        Punishment::new(86.0, 15000, 0, 0),
        Punishment::new(91.0, 30000, 0, 0),
        Punishment::new(96.0, 40000, 0, 1),
        Punishment::new(101.0, 50000, 0, 2),
        Punishment::new(111.0, 60000, 0, 3),
        Punishment::new(121.0, 80000, 1, 3),
        Punishment::new(131.0, 110000, 2, 3),
        Punishment::new(141.0, 140000, 3, 3),
        Punishment::new(151.0, 0, 0, 4),
    ])
}

/// Build the staircase for an 80 km/h zone.
pub fn table_for_80() -> Result<PunishmentTable> {
    PunishmentTable::new(vec![
        Punishment::new(86.0, 10000, 0, 0),
        Punishment::new(91.0, 20000, 0, 0),
        Punishment::new(96.0, 30000, 0, 0),
        Punishment::new(101.0, 50000, 0, 1),
        Punishment::new(111.0, 60000, 0, 2),
        Punishment::new(121.0, 80000, 0, 3),
        Punishment::new(131.0, 110000, 1, 3),
        Punishment::new(141.0, 140000, 2, 3),
        Punishment::new(151.0, 150000, 3, 3),
        Punishment::new(161.0, 0, 0, 4),
    ])
}

/// Build the staircase for a 90 km/h zone.
pub fn table_for_90() -> Result<PunishmentTable> {
    PunishmentTable::new(vec![
        Punishment::new(96.0, 10000, 0, 0),
        Punishment::new(101.0, 30000, 0, 0),
        Punishment::new(111.0, 50000, 0, 1),
        Punishment::new(121.0, 70000, 0, 2),
        Punishment::new(131.0, 90000, 0, 3),
        Punishment::new(141.0, 130000, 1, 3),
        Punishment::new(151.0, 140000, 2, 3),
        Punishment::new(161.0, 150000, 3, 3),
        Punishment::new(171.0, 0, 0, 4),
    ])
}

/// Build the staircase for `limit`.
pub fn table_for(limit: SpeedLimit) -> Result<PunishmentTable> {
    match limit {
        SpeedLimit::Kmh30 => table_for_30(),
        SpeedLimit::Kmh35 => table_for_35(),
        SpeedLimit::Kmh50 => table_for_50(),
        SpeedLimit::Kmh60 => table_for_60(),
        SpeedLimit::Kmh70 => table_for_70(),
        SpeedLimit::Kmh80 => table_for_80(),
        SpeedLimit::Kmh90 => table_for_90(),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
