// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! String-level numerals.
//!
//! Everything in this crate that touches a number goes through a string at
//! some point: the sign flip and absolute value strip or prepend a `-` on the
//! rendering and then come back here to re-parse. So this module owns the
//! one grammar and the one canonical form.
//!
//! Canonical magnitudes are plain positional decimals. `"007"` becomes `"7"`,
//! `"1.50"` becomes `"1.5"`, `"2.5e2"` becomes `"250"`.

use crate::error::EvalError;
use crate::literal::{LiteralKind, NumericLiteral};

/// Rendering of the positive-infinity sentinel.
pub const INFINITY: &str = "Infinity";

/// Exponents beyond this are rejected rather than expanded into digits.
const MAX_EXPONENT: i64 = 1024;

/// Parse a numeral-shaped string into a numeric literal.
///
/// Accepts `Infinity`, `-Infinity` and `-? digits (. digits)? ([eE] [+-]? digits)?`.
/// Anything else (empty, whitespace, a leading `+`, a second `.`) is
/// [`EvalError::NotANumeral`].
///
/// ```ignore
/// assert_eq!(string_to_number("-12.50")?.render(), "-12.5");
/// assert_eq!(string_to_number("Infinity")?, NumericLiteral::PositiveInfinity);
/// ```
pub fn string_to_number(input: &str) -> Result<NumericLiteral, EvalError> {
    let not_a_numeral = || EvalError::NotANumeral {
        input: input.to_string(),
    };

    let (negative, body) = match input.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, input),
    };

    if body == INFINITY {
        return Ok(if negative {
            NumericLiteral::NegativeInfinity
        } else {
            NumericLiteral::PositiveInfinity
        });
    }

    let magnitude = canonical_magnitude(body).ok_or_else(not_a_numeral)?;
    let kind = if body.contains(['.', 'e', 'E']) {
        LiteralKind::Float
    } else {
        LiteralKind::Int
    };

    Ok(NumericLiteral::finite(negative, magnitude, kind))
}

/// Canonical positional form of an unsigned numeral, or `None` if `body`
/// does not follow the grammar.
pub fn canonical_magnitude(body: &str) -> Option<String> {
    let (mantissa, exponent) = match body.find(['e', 'E']) {
        Some(at) => (&body[..at], parse_exponent(&body[at + 1..])?),
        None => (body, 0),
    };

    let (int_digits, frac_digits) = match mantissa.split_once('.') {
        Some((int, frac)) if is_digit_run(frac) => (int, frac),
        Some(_) => return None,
        None => (mantissa, ""),
    };
    if !is_digit_run(int_digits) {
        return None;
    }

    // Slide the decimal point by the exponent over the concatenated digits.
    let digits: String = [int_digits, frac_digits].concat();
    let point = int_digits.len() as i64 + exponent;
    let (int_part, frac_part) = if point <= 0 {
        let zeros = "0".repeat(point.unsigned_abs() as usize);
        ("0".to_string(), format!("{}{}", zeros, digits))
    } else if point as usize >= digits.len() {
        let zeros = "0".repeat(point as usize - digits.len());
        (format!("{}{}", digits, zeros), String::new())
    } else {
        let (int, frac) = digits.split_at(point as usize);
        (int.to_string(), frac.to_string())
    };

    let int_part = int_part.trim_start_matches('0');
    let frac_part = frac_part.trim_end_matches('0');
    let int_part = if int_part.is_empty() { "0" } else { int_part };

    Some(if frac_part.is_empty() {
        int_part.to_string()
    } else {
        format!("{}.{}", int_part, frac_part)
    })
}

fn parse_exponent(text: &str) -> Option<i64> {
    let (sign, digits) = match text.as_bytes().first() {
        Some(b'-') => (-1, &text[1..]),
        Some(b'+') => (1, &text[1..]),
        _ => (1, text),
    };
    if !is_digit_run(digits) {
        return None;
    }
    let value: i64 = digits.parse().ok()?;
    (value <= MAX_EXPONENT).then_some(sign * value)
}

/// Non-empty run of ASCII digits.
pub fn is_digit_run(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}

/// Whether a string looks like a number: a digit run, or two digit runs
/// joined by exactly one `.`.
///
/// Signs, whitespace and exponents do not qualify. `"-1"` is `false` here
/// even though it parses with [`string_to_number`]; callers rely on that.
pub fn is_number_like_str(text: &str) -> bool {
    if is_digit_run(text) {
        return true;
    }
    match text.split_once('.') {
        Some((int, frac)) => is_digit_run(int) && is_digit_run(frac),
        None => false,
    }
}
