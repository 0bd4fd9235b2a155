// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Compile-time contracts for both layers.
//!
//! Every block below is a `const` evaluated while this crate builds. If one
//! of the laws stops holding, the crate stops compiling. There is nothing to
//! run and nothing to turn off in release builds.
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! `cargo xtask verify` counts the `INVARIANT:` markers in `src/` and fails
//! if any go missing.
//!
//! | Contract | Literal layer | Type layer |
//! |----------|---------------|------------|
//! | absolute value is non-negative and idempotent | `number_absolute!` | `Abs` |
//! | sign reversal is an involution that fixes zero | `reverse_sign!` | `Negate` |
//! | the infinities swap under reversal | `reverse_sign!` | `Negate` |
//! | union extremes | `union_min!`, `union_max!` | `UnionMin`, `UnionMax` |
//! | signed strings are not number-like | `is_number_like!` | n/a |

use crate::{
    int, is_number_like, nat, num_union, number_absolute, reverse_sign, string_to_number,
    union_max, union_min, Abs, Bit, Integer, IsNever, Nat, Negate, Never, Number, UnionMax,
    UnionMin,
};

// ============================================================================
// ABSOLUTE VALUE
// ============================================================================

const _: () = {
    // INVARIANT: abs_of_non_negative (|n| = n for n >= 0)
    assert!(number_absolute!(0) == 0);
    assert!(number_absolute!(7) == 7);
    assert!(number_absolute!(2.5) == 2.5);

    // |-n| = n
    assert!(number_absolute!(-7) == 7);
    assert!(number_absolute!(-0.5) == 0.5);

    // INVARIANT: abs_idempotent (||n|| = |n|)
    assert!(<Abs<Abs<int!(-7)>> as Integer>::I64 == <Abs<int!(-7)> as Integer>::I64);
    assert!(<Abs<Abs<int!(7)>> as Integer>::I64 == <Abs<int!(7)> as Integer>::I64);
    assert!(<Abs<int!(NegativeInfinity)> as Number>::VALUE == f64::INFINITY);
};

// ============================================================================
// SIGN REVERSAL
// ============================================================================

const _: () = {
    // INVARIANT: reverse_sign_fixes_zero (-0 = 0)
    assert!(reverse_sign!(0) == 0);
    assert!(<Negate<int!(0)> as Integer>::I64 == 0);

    // INVARIANT: reverse_sign_involution (-(-n) = n)
    assert!(reverse_sign!(-3) == 3);
    assert!(reverse_sign!(3) == -3);
    assert!(<Negate<Negate<int!(-3)>> as Integer>::I64 == -3);

    // abs(n) = abs(-n)
    assert!(<Abs<Negate<int!(-3)>> as Integer>::I64 == <Abs<int!(-3)> as Integer>::I64);

    // INVARIANT: infinities_swap (-(+inf) = -inf, -(-inf) = +inf)
    assert!(reverse_sign!(PositiveInfinity) == f64::NEG_INFINITY);
    assert!(reverse_sign!(NegativeInfinity) == f64::INFINITY);
    assert!(<Negate<int!(PositiveInfinity)> as Number>::VALUE == f64::NEG_INFINITY);
};

// ============================================================================
// UNION EXTREMES
// ============================================================================

const _: () = {
    // INVARIANT: union_extremes (min/max of {3, 1, 2}, {0}, {999, 0, 500})
    assert!(union_min!(3 | 1 | 2) == 1);
    assert!(union_max!(3 | 1 | 2) == 3);
    assert!(union_min!(0) == 0);
    assert!(union_max!(0) == 0);
    assert!(union_min!(999 | 0 | 500) == 0);
    assert!(union_max!(999 | 0 | 500) == 999);

    assert!(<UnionMin<num_union!(3 | 1 | 2)> as Nat>::VALUE == 1);
    assert!(<UnionMax<num_union!(3 | 1 | 2)> as Nat>::VALUE == 3);
    assert!(<UnionMax<num_union!(0)> as Nat>::VALUE == 0);
    assert!(<nat!(12) as Nat>::VALUE == 12);
    assert!(<IsNever<Never> as Bit>::VALUE);
};

// ============================================================================
// NUMERIC-LIKE
// ============================================================================

const _: () = {
    assert!(is_number_like!(42));
    assert!(is_number_like!("42"));
    assert!(is_number_like!("3.14"));
    assert!(!is_number_like!("3.14.1"));
    assert!(!is_number_like!("abc"));

    // INVARIANT: signed_strings_not_number_like (the literal -1 is, the string "-1" is not)
    assert!(is_number_like!(-1));
    assert!(!is_number_like!("-1"));

    assert!(string_to_number!("1e3") == 1000.0);
};
