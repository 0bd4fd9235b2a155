//! Shared test utilities and fixtures.

#![allow(dead_code)]

use typelit::{S, Z};

// Re-export canonical test utilities from typelit::testing
pub use typelit::testing::{assert_type_eq, bit_value, nat_value};

// ============================================================================
// SMALL NATURALS
// ============================================================================

pub type One = S<Z>;
pub type Two = S<One>;
pub type Three = S<Two>;
pub type Four = S<Three>;

// ============================================================================
// ASSERTIONS
// ============================================================================

/// Assert two floats are the same value, treating the infinities as equal
/// to themselves and rejecting a `-0.0` where `0.0` was expected.
pub fn assert_same_f64(actual: f64, expected: f64) {
    assert_eq!(
        actual.to_bits(),
        expected.to_bits(),
        "expected {:?}, got {:?}",
        expected,
        actual
    );
}
