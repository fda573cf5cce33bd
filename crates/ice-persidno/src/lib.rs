//! # ice-persidno
//!
//! Validation, classification, and parsing of the Icelandic national
//! identifier (kennitala), called "persidno" here after the naming used by
//! the registry systems this library grew out of.
//!
//! All accessors are null-tolerant: structurally broken input yields `None`
//! rather than an error.  [`is_valid`] is the only function that reifies
//! "invalid" as a boolean.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Persidno cleanup, validation, classification, and date derivation.
pub mod persidno;

pub use persidno::{
    age, age_at, birth_date, birth_day, birth_month, birth_year, clean, format, format_with,
    foundation_date, is_valid, kind, next_birthday, PersidnoKind,
};
