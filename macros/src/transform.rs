// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Sign transforms on numeric literals.
//!
//! Both operations work on the rendering, never on a numeric value: look at
//! the leading `-`, strip or prepend it, and hand the result back to
//! [`string_to_number`]. The literal category of the input is carried across
//! the round trip.

use crate::error::EvalError;
use crate::literal::NumericLiteral;
use crate::numeral::string_to_number;

/// The non-negative magnitude of `n`.
///
/// If the rendering is `-` followed by something, that something is parsed
/// and returned; otherwise `n` comes back unchanged. `-Infinity` goes
/// through the same path and lands on positive infinity.
pub fn absolute(n: &NumericLiteral) -> Result<NumericLiteral, EvalError> {
    let rendered = n.render();
    match rendered.strip_prefix('-') {
        Some(positive) if !positive.is_empty() => {
            Ok(string_to_number(positive)?.with_kind(n.kind()))
        }
        _ => Ok(n.clone()),
    }
}

/// The additive inverse of `n`.
///
/// Zero and the two infinities are fixed up front; everything else flips the
/// leading `-` of its rendering.
pub fn reverse_sign(n: &NumericLiteral) -> Result<NumericLiteral, EvalError> {
    if n.is_zero() {
        return Ok(n.clone());
    }
    match n {
        NumericLiteral::PositiveInfinity => return Ok(NumericLiteral::NegativeInfinity),
        NumericLiteral::NegativeInfinity => return Ok(NumericLiteral::PositiveInfinity),
        NumericLiteral::Finite { .. } => {}
    }

    let rendered = n.render();
    let flipped = match rendered.strip_prefix('-') {
        Some(positive) => positive.to_string(),
        None => format!("-{}", rendered),
    };

    string_to_number(&flipped)
        .map(|value| value.with_kind(n.kind()))
        .map_err(|_| EvalError::NoMatchingCase {
            operation: "reverse_sign",
            input: rendered,
        })
}
