// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Unary naturals: zero [`Z`] and successor [`S`].
//!
//! The length of the nesting is the number. This is the counter the union
//! scans grow one step at a time. The only question it can answer cheaply
//! is "are these two the same length?", and that is the only one the scans
//! ask.
//!
//! Building `S<S<S<...>>>` by hand gets old fast; use `nat!(n)`.

use crate::bit::{Bit, False, True};
use crate::sealed::Sealed;

/// The number zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Z;

/// The successor of `N` (i.e. `N + 1`).
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct S<N>(pub N);

impl Sealed for Z {}
impl<N: Sealed> Sealed for S<N> {}

/// A unary natural and its value-level equivalent.
pub trait Nat: Sealed + Copy + Default {
    const VALUE: usize;
}

impl Nat for Z {
    const VALUE: usize = 0;
}

impl<N: Nat> Nat for S<N> {
    const VALUE: usize = N::VALUE + 1;
}

/// Naturals other than zero; the magnitudes of signed integers.
pub trait NonZero: Nat {}

impl<N: Nat> NonZero for S<N> {}

/// Structural equality: peel one `S` off each side until one runs out.
pub trait ComputeNatEq<Rhs> {
    type Output: Bit;
}

impl ComputeNatEq<Z> for Z {
    type Output = True;
}

impl<N> ComputeNatEq<S<N>> for Z {
    type Output = False;
}

impl<N> ComputeNatEq<Z> for S<N> {
    type Output = False;
}

impl<N, M> ComputeNatEq<S<M>> for S<N>
where
    N: ComputeNatEq<M>,
{
    type Output = <N as ComputeNatEq<M>>::Output;
}

pub type NatEq<A, B> = <A as ComputeNatEq<B>>::Output;
