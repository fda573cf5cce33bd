//! Tolerance-based floating-point comparison.
//!
//! The statutory tables store their bounds as decimal fractions (per-mille
//! alcohol levels, ng/mL drug levels) which are not exactly representable in
//! binary.  Table code compares against these helpers instead of `==`.

use crate::Real;

/// Default epsilon for close-enough comparisons.
pub const EPSILON: Real = 1e-9;

/// Return `true` if `|a - b| <= epsilon`.
#[inline]
pub fn close(a: Real, b: Real, epsilon: Real) -> bool {
    (a - b).abs() <= epsilon
}

/// Return `true` if `a` and `b` differ by at most [`EPSILON`].
#[inline]
pub fn close_default(a: Real, b: Real) -> bool {
    close(a, b, EPSILON)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn close_basic() {
        assert!(close(1.0, 1.0 + 1e-10, 1e-9));
        assert!(!close(1.0, 1.0 + 1e-8, 1e-9));
    }

    #[test]
    fn decimal_literals() {
        // 0.61 as the sum of 0.5 and 0.11 drifts in binary
        assert!(close_default(0.5 + 0.11, 0.61));
    }
}
