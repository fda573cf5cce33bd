//! Error types for icelib-rs.
//!
//! The whole workspace shares a single `thiserror`-derived enum.  The error
//! taxonomy is deliberately small: invalid caller input, date construction
//! failures, and broken internal preconditions.  "No result applies" is never
//! an error; functions with that outcome return an `Option` instead.

use thiserror::Error;

/// The top-level error type used throughout icelib-rs.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// Precondition violated (mis-sorted table, empty table).
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// Date-related error.
    #[error("date error: {0}")]
    Date(String),

    /// A mandatory argument is absent or out of range.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Shorthand `Result` type used throughout icelib-rs.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use ice_core::ensure;
/// fn positive(x: f64) -> ice_core::Result<f64> {
///     ensure!(x > 0.0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1.0).is_ok());
/// assert!(positive(-1.0).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}

/// Return `Err(Error::InvalidArgument(...))` immediately.
///
/// # Example
/// ```
/// use ice_core::reject;
/// fn lookup(key: &str) -> ice_core::Result<u32> {
///     match key {
///         "a" => Ok(1),
///         other => reject!("unknown key {other}"),
///     }
/// }
/// assert!(lookup("a").is_ok());
/// assert!(lookup("b").is_err());
/// ```
#[macro_export]
macro_rules! reject {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::InvalidArgument(format!($($msg)*)))
    };
}
