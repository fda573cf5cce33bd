//! # ice-roadtax
//!
//! The semi-annual Icelandic road tax, a piecewise function of vehicle mass.
//! Tariff levels are configuration values, not hard-coded constants; two
//! published tariffs ship with the crate.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Tariff configuration and the tax calculation.
pub mod tariff;

pub use tariff::Tariff;
