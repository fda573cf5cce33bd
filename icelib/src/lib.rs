//! # icelib
//!
//! Icelandic civic domain rules as a library of pure functions: national-ID
//! (kennitala) validation and parsing, the statutory holiday calendar,
//! driving-offense punishment tables, and the weight-based road tax.
//!
//! This crate is a **façade** that re-exports all public items from the
//! underlying workspace crates.  Application code should depend on this
//! crate rather than the individual `ice-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! icelib = "0.1"
//! ```
//!
//! ```rust
//! use icelib::persidno;
//!
//! assert!(persidno::is_valid("091179-4829"));
//! assert_eq!(persidno::format("0911794829"), "091179-4829");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, aliases, errors, and Icelandic text helpers.
pub use ice_core as core;

/// Dates, weekdays, the injectable clock, and the holiday calendar.
pub use ice_time as time;

/// National-identifier validation, classification, and parsing.
pub use ice_persidno as persidno;

/// Driving-offense punishment tables.
pub use ice_penalty as penalty;

/// Weight-based road tax.
pub use ice_roadtax as roadtax;
