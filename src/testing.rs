//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! Type-level results are checked by naming the expected type and asking
//! the compiler to prove the two equal.

#![doc(hidden)]

/// Implemented only when `Self` and `Rhs` are the same type.
pub trait Same<Rhs: ?Sized> {}

impl<T: ?Sized> Same<T> for T {}

/// Compiles only when `A` and `B` are the same type.
///
/// ```
/// use typelit::testing::assert_type_eq;
/// use typelit::{Negate, NInt, PInt, S, Z};
///
/// assert_type_eq::<Negate<PInt<S<Z>>>, NInt<S<Z>>>();
/// ```
///
/// ```compile_fail
/// use typelit::testing::assert_type_eq;
/// use typelit::{Abs, NInt, S, Z};
///
/// assert_type_eq::<Abs<NInt<S<Z>>>, NInt<S<Z>>>();
/// ```
pub fn assert_type_eq<A, B>()
where
    A: Same<B> + ?Sized,
    B: ?Sized,
{
}

/// Value of a type-level natural, for readable assertions.
pub fn nat_value<N: crate::Nat>() -> usize {
    N::VALUE
}

/// Value of a type-level boolean, for readable assertions.
pub fn bit_value<B: crate::Bit>() -> bool {
    B::VALUE
}
