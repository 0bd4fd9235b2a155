// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Unions of naturals, and their minimum and maximum by counting.
//!
//! A union is an unordered set, so the type-level encoding is a cons list
//! whose order means nothing: `Union<H, T>` adds `H` to `T`, and [`Never`]
//! is the empty union. Duplicates are allowed and harmless.
//!
//! There is no way to compare two naturals for "less than" without writing
//! the comparison ourselves, and no way to sort. What the list does support
//! is membership ([`Contains`]) and removal ([`Exclude`]). The extremes are
//! found with just those two and a counter:
//!
//! - **min**: count up from `Z`; the first counter in the union is the answer.
//! - **max**: count up from `Z`; every time the counter is in the union,
//!   remove it and look again without counting. When the union is empty the
//!   counter is sitting on the last value removed.
//!
//! Each counting step costs several levels of trait resolution, and the
//! solver slows down sharply as the counter grows. The type layer therefore
//! supports members in `0..=127`: `num_union!` and `nat!` reject anything
//! larger, and a scan that reaches 127 needs `#![recursion_limit = "1024"]`
//! in the crate that names it. Raising the limit further does not buy range.
//! The literal macros (`union_min!`/`union_max!`) cover `0..=999`.
//!
//! # Example
//!
//! ```ignore
//! use typelit::{num_union, Nat, UnionMax, UnionMin};
//!
//! type U = num_union!(3 | 1 | 2);
//! assert_eq!(<UnionMin<U> as Nat>::VALUE, 1);
//! assert_eq!(<UnionMax<U> as Nat>::VALUE, 3);
//! ```

use std::marker::PhantomData;

use crate::bit::{Bit, ComputeOr, False, Or, True};
use crate::nat::{ComputeNatEq, Nat, NatEq, S, Z};
use crate::number::ComputeIsNumberLike;
use crate::sealed::Sealed;

/// The empty union.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Never;

/// The union of `H` and the members of `T`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Union<H, T>(PhantomData<(H, T)>);

impl Sealed for Never {}
impl<H: Nat, T: NatUnion> Sealed for Union<H, T> {}

/// A type-level union of naturals.
pub trait NatUnion: Sealed {
    /// Number of entries, counting duplicates.
    const LEN: usize;
}

impl NatUnion for Never {
    const LEN: usize = 0;
}

impl<H: Nat, T: NatUnion> NatUnion for Union<H, T> {
    const LEN: usize = T::LEN + 1;
}

impl ComputeIsNumberLike for Never {
    type Output = False;
}

impl<H, T> ComputeIsNumberLike for Union<H, T> {
    type Output = False;
}

// ============================================================================
// EMPTINESS, MEMBERSHIP, EXCLUSION
// ============================================================================

/// `True` only for the empty union.
pub trait ComputeIsNever {
    type Output: Bit;
}

impl ComputeIsNever for Never {
    type Output = True;
}

impl<H, T> ComputeIsNever for Union<H, T> {
    type Output = False;
}

pub type IsNever<U> = <U as ComputeIsNever>::Output;

/// Whether `N` is a member.
pub trait ComputeContains<N> {
    type Output: Bit;
}

impl<N> ComputeContains<N> for Never {
    type Output = False;
}

impl<N, H, T> ComputeContains<N> for Union<H, T>
where
    H: ComputeNatEq<N>,
    T: ComputeContains<N>,
    NatEq<H, N>: ComputeOr<Contains<T, N>>,
{
    type Output = Or<NatEq<H, N>, Contains<T, N>>;
}

pub type Contains<U, N> = <U as ComputeContains<N>>::Output;

/// The union without any member equal to `N`.
pub trait ComputeExclude<N> {
    type Output;
}

impl<N> ComputeExclude<N> for Never {
    type Output = Never;
}

impl<N, H, T> ComputeExclude<N> for Union<H, T>
where
    H: ComputeNatEq<N>,
    T: ComputeExclude<N>,
    NatEq<H, N>: ExcludeHead<H, Exclude<T, N>>,
{
    type Output = <NatEq<H, N> as ExcludeHead<H, Exclude<T, N>>>::Output;
}

pub type Exclude<U, N> = <U as ComputeExclude<N>>::Output;

/// Drop the head (`True`) or keep it in front of the rest (`False`).
#[doc(hidden)]
pub trait ExcludeHead<H, Rest> {
    type Output;
}

impl<H, Rest> ExcludeHead<H, Rest> for True {
    type Output = Rest;
}

impl<H, Rest> ExcludeHead<H, Rest> for False {
    type Output = Union<H, Rest>;
}

// ============================================================================
// MINIMUM
// ============================================================================

/// Smallest member at or above counter `C`.
#[doc(hidden)]
pub trait MinFrom<C> {
    type Output: Nat;
}

impl<U, C> MinFrom<C> for U
where
    U: ComputeContains<C>,
    Contains<U, C>: MinStep<U, C>,
{
    type Output = <Contains<U, C> as MinStep<U, C>>::Output;
}

/// Stop on a hit, otherwise move the counter up one.
#[doc(hidden)]
pub trait MinStep<U, C> {
    type Output: Nat;
}

impl<U, C: Nat> MinStep<U, C> for True {
    type Output = C;
}

impl<U, C> MinStep<U, C> for False
where
    U: MinFrom<S<C>>,
{
    type Output = <U as MinFrom<S<C>>>::Output;
}

/// The smallest member of `U`.
pub type UnionMin<U> = <U as MinFrom<Z>>::Output;

// ============================================================================
// MAXIMUM
// ============================================================================

/// Largest member, scanning from counter `C` with `U` the members not yet seen.
#[doc(hidden)]
pub trait MaxFrom<C> {
    type Output: Nat;
}

impl<U, C> MaxFrom<C> for U
where
    U: ComputeIsNever,
    IsNever<U>: MaxCheck<U, C>,
{
    type Output = <IsNever<U> as MaxCheck<U, C>>::Output;
}

/// Empty union: the counter is the answer. Otherwise test membership.
#[doc(hidden)]
pub trait MaxCheck<U, C> {
    type Output: Nat;
}

impl<U, C: Nat> MaxCheck<U, C> for True {
    type Output = C;
}

impl<U, C> MaxCheck<U, C> for False
where
    U: ComputeContains<C>,
    Contains<U, C>: MaxStep<U, C>,
{
    type Output = <Contains<U, C> as MaxStep<U, C>>::Output;
}

/// On a hit, narrow the union and keep the counter; otherwise count up.
#[doc(hidden)]
pub trait MaxStep<U, C> {
    type Output: Nat;
}

impl<U, C> MaxStep<U, C> for True
where
    U: ComputeExclude<C>,
    Exclude<U, C>: MaxFrom<C>,
{
    type Output = <Exclude<U, C> as MaxFrom<C>>::Output;
}

impl<U, C> MaxStep<U, C> for False
where
    U: MaxFrom<S<C>>,
{
    type Output = <U as MaxFrom<S<C>>>::Output;
}

/// The largest member of `U`. `UnionMax<Never>` is `Z`.
pub type UnionMax<U> = <U as MaxFrom<Z>>::Output;
