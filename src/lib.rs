// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Compile-time transformations over numeric literals.
//!
//! Absolute value, sign reversal, the minimum and maximum of a union, a
//! numeric-like test and string-to-number parsing, all finished before your
//! crate is done compiling. Nothing here runs at runtime except the literal
//! or type it leaves behind.
//!
//! # Two layers
//!
//! ```text
//! ┌──────────────────────────────┐     ┌──────────────────────────────┐
//! │        literal layer         │     │          type layer          │
//! │   (typelit-macros, proc)     │     │     (this crate, traits)     │
//! │                              │     │                              │
//! │  number_absolute!(-3) => 3   │     │  Abs<NInt<N>>  = PInt<N>     │
//! │  reverse_sign!(2.5) => -2.5  │     │  Negate<PosInf> = NegInf     │
//! │  union_max!(3|1|2)  => 3     │     │  UnionMax<U>   = S<S<S<Z>>>  │
//! │  is_number_like!("7") => true│     │  IsNumberLike<Z> = True      │
//! └──────────────┬───────────────┘     └───────────────▲──────────────┘
//!                │       nat!  int!  num_union!        │
//!                └─────────────────────────────────────┘
//! ```
//!
//! The **literal layer** takes literal tokens and expands to literal tokens,
//! so the result can sit anywhere a literal can: a `const`, an array length,
//! a `match` arm, a const-generic argument.
//!
//! The **type layer** encodes the same operations as traits with an
//! associated `Output`. Naturals are unary ([`Z`], [`S`]), signed integers
//! wrap a natural ([`PInt`], [`NInt`]) and unions are cons lists ([`Union`],
//! [`Never`]). The constructor macros build those types from literals, for
//! magnitudes in `0..=127`.
//!
//! # Module map
//!
//! | Module | Contents |
//! |--------|----------|
//! | `bit` | [`True`], [`False`], [`Or`] |
//! | `nat` | [`Z`], [`S`], [`NatEq`] |
//! | `number` | [`PInt`], [`NInt`], [`PosInf`], [`NegInf`], [`Abs`], [`Negate`], [`IsNumberLike`] |
//! | `union` | [`Union`], [`Never`], [`Contains`], [`Exclude`], [`IsNever`], [`UnionMin`], [`UnionMax`] |
//!
//! # Usage
//!
//! ```
//! use typelit::{number_absolute, reverse_sign, union_max, union_min};
//!
//! const A: i32 = number_absolute!(-3);
//! const B: f64 = reverse_sign!(2.5);
//! let buf = [0u8; union_max!(4 | 16 | 8)];
//!
//! assert_eq!(A, 3);
//! assert_eq!(B, -2.5);
//! assert_eq!(buf.len(), 16);
//! assert_eq!(union_min!(3 | 1 | 2), 1);
//! ```
//!
//! ```
//! use typelit::{int, nat, num_union, Abs, Integer, Nat, UnionMax, UnionMin};
//!
//! assert_eq!(<nat!(5) as Nat>::VALUE, 5);
//! assert_eq!(<Abs<int!(-4)> as Integer>::I64, 4);
//!
//! type U = num_union!(3 | 1 | 2);
//! assert_eq!(<UnionMin<U> as Nat>::VALUE, 1);
//! assert_eq!(<UnionMax<U> as Nat>::VALUE, 3);
//! ```
//!
//! # Rejected input
//!
//! Bad input is a compile error at the call site. A union needs members:
//!
//! ```compile_fail
//! let _ = typelit::union_min!();
//! ```
//!
//! Naturals have no sign:
//!
//! ```compile_fail
//! type Bad = typelit::nat!(-1);
//! ```
//!
//! Type-level integers have no fractions:
//!
//! ```compile_fail
//! type Bad = typelit::int!(1.5);
//! ```
//!
//! Strings that are not numerals do not parse:
//!
//! ```compile_fail
//! const X: f64 = typelit::string_to_number!("1.2.3");
//! ```
//!
//! The type layer stops at 127:
//!
//! ```compile_fail
//! type Bad = typelit::num_union!(1 | 128);
//! ```
//!
//! The union scans count to 999 and no further:
//!
//! ```compile_fail
//! const X: usize = typelit::union_max!(1000);
//! ```
//!
//! # Configuration
//!
//! - Feature `macros` (default): the literal macros and the `nat!`, `int!`
//!   and `num_union!` constructors. Without it only the type layer is built.
//! - `TYPELIT_TRACE_EXPANSION`: set it while building to print every literal
//!   macro expansion to stderr.

// Macro output names `::typelit::...`, which has to resolve inside this crate too.
extern crate self as typelit;

mod sealed {
    pub trait Sealed {}
}

mod bit;
#[cfg(feature = "macros")]
mod contracts;
mod nat;
mod number;
mod union;

#[doc(hidden)]
pub mod testing;

pub use bit::{Bit, ComputeOr, False, Or, True};
pub use nat::{ComputeNatEq, Nat, NatEq, NonZero, S, Z};
pub use number::{
    Abs, ComputeAbs, ComputeIsNumberLike, ComputeNegate, Integer, IsNumberLike, NInt, NegInf,
    Negate, Number, PInt, PosInf, NEGATIVE_INFINITY, POSITIVE_INFINITY,
};
pub use union::{
    ComputeContains, ComputeExclude, ComputeIsNever, Contains, Exclude, IsNever, NatUnion, Never,
    Union, UnionMax, UnionMin,
};

#[doc(hidden)]
pub use union::{ExcludeHead, MaxCheck, MaxFrom, MaxStep, MinFrom, MinStep};

#[cfg(feature = "macros")]
pub use typelit_macros::{
    int, is_number_like, nat, num_union, number_absolute, reverse_sign, string_to_number,
    union_max, union_min,
};
