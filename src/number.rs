// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Signed numbers and the sign operators.
//!
//! The macros flip signs by editing a leading `-` on a string. Here the
//! leading `-` is a type: [`NInt`] wraps a magnitude the way `-` prefixes
//! one, so absolute value and negation are plain pattern matches on the
//! wrapper. Zero is shared with the naturals and carries no wrapper, which
//! is what keeps `-0` from existing.
//!
//! | Type | Value |
//! |------|-------|
//! | `Z` | `0` |
//! | `PInt<N>` | `+N` |
//! | `NInt<N>` | `-N` |
//! | `PosInf` | `+∞` |
//! | `NegInf` | `−∞` |

use crate::bit::{Bit, False, True};
use crate::nat::{Nat, NonZero, S, Z};
use crate::sealed::Sealed;

/// Value-level positive infinity, also accepted by the literal macros.
pub const POSITIVE_INFINITY: f64 = f64::INFINITY;

/// Value-level negative infinity, also accepted by the literal macros.
pub const NEGATIVE_INFINITY: f64 = f64::NEG_INFINITY;

/// A positive integer with magnitude `N`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PInt<N>(pub N);

/// A negative integer with magnitude `N`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct NInt<N>(pub N);

/// The positive-infinity sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PosInf;

/// The negative-infinity sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct NegInf;

impl<N: NonZero> Sealed for PInt<N> {}
impl<N: NonZero> Sealed for NInt<N> {}
impl Sealed for PosInf {}
impl Sealed for NegInf {}

/// Anything the sign operators accept.
pub trait Number: Sealed + Copy + Default {
    const VALUE: f64;
}

/// Finite numbers, whose value fits an `i64`.
pub trait Integer: Number {
    const I64: i64;
}

impl Number for Z {
    const VALUE: f64 = 0.0;
}

impl<N: NonZero> Number for PInt<N> {
    const VALUE: f64 = N::VALUE as f64;
}

impl<N: NonZero> Number for NInt<N> {
    const VALUE: f64 = -(N::VALUE as f64);
}

impl Number for PosInf {
    const VALUE: f64 = f64::INFINITY;
}

impl Number for NegInf {
    const VALUE: f64 = f64::NEG_INFINITY;
}

impl Integer for Z {
    const I64: i64 = 0;
}

impl<N: NonZero> Integer for PInt<N> {
    const I64: i64 = N::VALUE as i64;
}

impl<N: NonZero> Integer for NInt<N> {
    const I64: i64 = -(N::VALUE as i64);
}

// ============================================================================
// ABSOLUTE VALUE
// ============================================================================

/// Non-negative magnitude. Negative infinity maps to positive infinity.
pub trait ComputeAbs: Number {
    type Output: Number;
}

impl ComputeAbs for Z {
    type Output = Z;
}

impl<N: NonZero> ComputeAbs for PInt<N> {
    type Output = PInt<N>;
}

impl<N: NonZero> ComputeAbs for NInt<N> {
    type Output = PInt<N>;
}

impl ComputeAbs for PosInf {
    type Output = PosInf;
}

impl ComputeAbs for NegInf {
    type Output = PosInf;
}

pub type Abs<N> = <N as ComputeAbs>::Output;

// ============================================================================
// SIGN REVERSAL
// ============================================================================

/// Additive inverse. Zero is its own inverse and the infinities swap.
pub trait ComputeNegate: Number {
    type Output: Number;
}

impl ComputeNegate for Z {
    type Output = Z;
}

impl ComputeNegate for PosInf {
    type Output = NegInf;
}

impl ComputeNegate for NegInf {
    type Output = PosInf;
}

impl<N: NonZero> ComputeNegate for NInt<N> {
    type Output = PInt<N>;
}

impl<N: NonZero> ComputeNegate for PInt<N> {
    type Output = NInt<N>;
}

pub type Negate<N> = <N as ComputeNegate>::Output;

// ============================================================================
// NUMERIC-LIKE
// ============================================================================

/// Whether a typelit type denotes a number.
///
/// Naturals, signed integers and the infinities are numbers; booleans and
/// unions are not. String inputs are handled by `is_number_like!`.
pub trait ComputeIsNumberLike {
    type Output: Bit;
}

impl ComputeIsNumberLike for Z {
    type Output = True;
}

impl<N: Nat> ComputeIsNumberLike for S<N> {
    type Output = True;
}

impl<N: NonZero> ComputeIsNumberLike for PInt<N> {
    type Output = True;
}

impl<N: NonZero> ComputeIsNumberLike for NInt<N> {
    type Output = True;
}

impl ComputeIsNumberLike for PosInf {
    type Output = True;
}

impl ComputeIsNumberLike for NegInf {
    type Output = True;
}

impl ComputeIsNumberLike for True {
    type Output = False;
}

impl ComputeIsNumberLike for False {
    type Output = False;
}

pub type IsNumberLike<T> = <T as ComputeIsNumberLike>::Output;
