// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Type-level booleans.
//!
//! Every predicate in this crate answers with `True` or `False`, and every
//! branch is an impl on one of the two. There is no `if` at this level, only
//! a trait implemented twice.

use crate::sealed::Sealed;

/// The type-level `true`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct True;

/// The type-level `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct False;

impl Sealed for True {}
impl Sealed for False {}

/// A type-level boolean and its value-level equivalent.
pub trait Bit: Sealed + Copy + Default {
    const VALUE: bool;
}

impl Bit for True {
    const VALUE: bool = true;
}

impl Bit for False {
    const VALUE: bool = false;
}

/// Logical or on type-level booleans.
pub trait ComputeOr<Rhs: Bit>: Bit {
    type Output: Bit;
}

impl<Rhs: Bit> ComputeOr<Rhs> for True {
    type Output = True;
}

impl<Rhs: Bit> ComputeOr<Rhs> for False {
    type Output = Rhs;
}

pub type Or<A, B> = <A as ComputeOr<B>>::Output;
