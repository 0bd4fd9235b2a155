// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Procedural macros that compute with numeric literals at compile time.
//!
//! Rust has no literal types, but a macro that takes literal tokens and
//! emits literal tokens is the next best thing: `number_absolute!(-3)` is
//! `3` by the time the compiler type-checks it, so it works in a `const`,
//! an array length, a `match` arm or a const-generic argument.
//!
//! These macros never do arithmetic. A sign flip strips or prepends `-` on
//! the string rendering and parses the result again, and the union scans
//! count from zero and test for membership. If rustc could compare two
//! literals we would not need any of that, but it can't at this level.
//!
//! # How it works
//!
//! 1. **Parse**: the argument becomes a `NumericLiteral`, a
//!    canonical decimal magnitude with a sign (or an infinity sentinel)
//! 2. **Evaluate**: `transform`, `union_scan` and `numeral` compute on
//!    the rendering
//! 3. **Emit**: `codegen` turns the result back into tokens, or into the
//!    marker types of the `typelit` crate for the type constructors
//!
//! Failures are compile errors at the call site.
//!
//! # Example
//!
//! ```ignore
//! use typelit::{number_absolute, reverse_sign, union_max, union_min};
//!
//! const A: i32 = number_absolute!(-3);     // 3
//! const B: f64 = reverse_sign!(2.5);       // -2.5
//! const C: usize = union_min!(3 | 1 | 2);  // 1
//! const D: usize = union_max!(3 | 1 | 2);  // 3
//!
//! let buf = [0u8; union_max!(4 | 16 | 8)];
//! ```

use proc_macro::TokenStream;

mod codegen;
mod error;
mod expand;
mod literal;
mod numeral;
mod trace;
mod transform;
mod union_scan;

fn finish(result: syn::Result<proc_macro2::TokenStream>) -> TokenStream {
    result.unwrap_or_else(syn::Error::into_compile_error).into()
}

/// Absolute value of a numeric literal.
///
/// Accepts integer and float literals with an optional `-`, and the
/// infinity sentinels. `number_absolute!(NegativeInfinity)` is positive
/// infinity.
///
/// ```ignore
/// assert_eq!(number_absolute!(-1), 1);
/// assert_eq!(number_absolute!(1), 1);
/// assert_eq!(number_absolute!(-0.5), 0.5);
/// ```
#[proc_macro]
pub fn number_absolute(input: TokenStream) -> TokenStream {
    finish(expand::number_absolute(input.into()))
}

/// The same literal with the opposite sign.
///
/// Zero stays zero (there is no `-0`), and the infinities swap.
///
/// ```ignore
/// assert_eq!(reverse_sign!(-1), 1);
/// assert_eq!(reverse_sign!(1), -1);
/// assert_eq!(reverse_sign!(PositiveInfinity), f64::NEG_INFINITY);
/// ```
#[proc_macro]
pub fn reverse_sign(input: TokenStream) -> TokenStream {
    finish(expand::reverse_sign_of(input.into()))
}

/// `true` if the argument is a number, a numeric primitive type, or a string
/// that looks like one.
///
/// The primitive types are `i8` through `i128`, `isize`, `u8` through `u128`,
/// `usize`, `f32` and `f64`, bare or as `core::primitive::*`. A string qualifies
/// when it is a run of digits, or two runs of digits around a single `.`. Any
/// other input is `false`.
///
/// Signed strings are `false`: `is_number_like!("-1")` does not hold even
/// though `is_number_like!(-1)` does.
///
/// ```ignore
/// assert!(is_number_like!("1"));
/// assert!(is_number_like!("1.5"));
/// assert!(is_number_like!(1));
/// assert!(is_number_like!(f64));
/// assert!(!is_number_like!("a"));
/// ```
#[proc_macro]
pub fn is_number_like(input: TokenStream) -> TokenStream {
    finish(expand::is_number_like(input.into()))
}

/// Smallest member of a `|`-separated union of literals in `0..=999`.
///
/// An empty union has no smallest member and is a compile error.
///
/// ```ignore
/// assert_eq!(union_min!(3 | 1 | 2), 1);
/// ```
#[proc_macro]
pub fn union_min(input: TokenStream) -> TokenStream {
    finish(expand::union_minimum(input.into()))
}

/// Largest member of a `|`-separated union of literals in `0..=999`.
///
/// An empty union gives `0`, the same as `UnionMax<Never>`.
///
/// ```ignore
/// assert_eq!(union_max!(1 | 3 | 2), 3);
/// ```
#[proc_macro]
pub fn union_max(input: TokenStream) -> TokenStream {
    finish(expand::union_maximum(input.into()))
}

/// Parse a string literal into the numeric literal it spells.
///
/// `"Infinity"` and `"-Infinity"` map to the sentinels. Anything that is not
/// a numeral is a compile error.
///
/// ```ignore
/// assert_eq!(string_to_number!("42"), 42);
/// assert_eq!(string_to_number!("-1.50"), -1.5);
/// ```
#[proc_macro]
pub fn string_to_number(input: TokenStream) -> TokenStream {
    finish(expand::parse_number(input.into()))
}

// ============================================================================
// TYPE CONSTRUCTORS
// ============================================================================

/// The unary natural for a non-negative integer literal: `nat!(2)` is
/// `S<S<Z>>`.
///
/// The type layer covers `0..=127`; larger literals are a compile error.
#[proc_macro]
pub fn nat(input: TokenStream) -> TokenStream {
    finish(expand::nat(input.into()))
}

/// The signed integer type for an integer literal or infinity sentinel:
/// `int!(-2)` is `NInt<S<S<Z>>>`, `int!(0)` is `Z`. Magnitudes above 127
/// are a compile error.
#[proc_macro]
pub fn int(input: TokenStream) -> TokenStream {
    finish(expand::int(input.into()))
}

/// A type-level union of naturals: `num_union!(3 | 1 | 2)`.
///
/// An empty invocation is `Never`, the empty union. Members must lie in
/// `0..=127`.
#[proc_macro]
pub fn num_union(input: TokenStream) -> TokenStream {
    finish(expand::num_union(input.into()))
}
