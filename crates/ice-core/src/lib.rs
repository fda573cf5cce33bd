//! # ice-core
//!
//! Core types, the error hierarchy, and shared text/number helpers for the
//! icelib-rs workspace.  Everything here is a pure value or a pure function;
//! the crate performs no I/O and holds no state.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Tolerance-based floating-point comparison.
pub mod comparison;

/// Error types and the `ensure!` / `reject!` macros.
pub mod errors;

/// Icelandic text rendering: list joining and digit grouping.
pub mod text;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Floating-point type used throughout the library.
pub type Real = f64;

/// Signed integer type used for general-purpose counting.
pub type Integer = i32;

/// Non-negative integer type (fines, months, points, kilograms).
pub type Natural = u32;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
