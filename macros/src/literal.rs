// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The numeric literal model and its token-level parser.
//!
//! A `NumericLiteral` is what a macro argument like `-3`, `2.5e1` or
//! `f64::NEG_INFINITY` means once the Rust literal syntax has been peeled
//! off. Its [`render`](NumericLiteral::render) form is the string the
//! transforms pattern-match on.

use proc_macro2::Span;
use syn::parse::{Parse, ParseStream};
use syn::{Lit, Token};

use crate::error::{EvalError, TYPE_LEVEL_LIMIT};
use crate::numeral::{canonical_magnitude, INFINITY};

/// Which Rust literal category a value is emitted as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralKind {
    Int,
    Float,
}

/// A number known at expansion time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NumericLiteral {
    /// `magnitude` is canonical: no sign, no leading or trailing zeros, no exponent.
    Finite {
        negative: bool,
        magnitude: String,
        kind: LiteralKind,
    },
    PositiveInfinity,
    NegativeInfinity,
}

impl NumericLiteral {
    /// Build a finite literal. Negative zero collapses to zero, and a
    /// fractional magnitude is always a float.
    pub fn finite(negative: bool, magnitude: String, kind: LiteralKind) -> Self {
        let negative = negative && magnitude != "0";
        let kind = if magnitude.contains('.') {
            LiteralKind::Float
        } else {
            kind
        };
        NumericLiteral::Finite {
            negative,
            magnitude,
            kind,
        }
    }

    pub fn kind(&self) -> LiteralKind {
        match self {
            NumericLiteral::Finite { kind, .. } => *kind,
            NumericLiteral::PositiveInfinity | NumericLiteral::NegativeInfinity => {
                LiteralKind::Float
            }
        }
    }

    /// Re-apply a literal category after a round trip through the rendering.
    ///
    /// `2.0` renders as `"2"`, which parses back as an integer; this puts
    /// the float back.
    pub fn with_kind(self, kind: LiteralKind) -> Self {
        match self {
            NumericLiteral::Finite {
                negative,
                magnitude,
                ..
            } => NumericLiteral::finite(negative, magnitude, kind),
            infinite => infinite,
        }
    }

    pub fn is_zero(&self) -> bool {
        matches!(self, NumericLiteral::Finite { magnitude, .. } if magnitude == "0")
    }

    /// The string form: `"3"`, `"-3"`, `"0.5"`, `"Infinity"`, `"-Infinity"`.
    pub fn render(&self) -> String {
        match self {
            NumericLiteral::Finite {
                negative: true,
                magnitude,
                ..
            } => format!("-{}", magnitude),
            NumericLiteral::Finite { magnitude, .. } => magnitude.clone(),
            NumericLiteral::PositiveInfinity => INFINITY.to_string(),
            NumericLiteral::NegativeInfinity => format!("-{}", INFINITY),
        }
    }

    /// The value as a counter position, if it is a whole number `>= 0`.
    pub fn counter_value(&self) -> Option<usize> {
        match self {
            NumericLiteral::Finite {
                negative: false,
                magnitude,
                ..
            } => magnitude.parse().ok(),
            _ => None,
        }
    }

    /// The value as a type-level natural, below [`TYPE_LEVEL_LIMIT`].
    pub fn to_natural(&self) -> Result<usize, EvalError> {
        let n = self.counter_value().ok_or_else(|| EvalError::NotANatural {
            input: self.render(),
        })?;
        check_type_level(n, self)
    }

    /// Flip the sign as written in source, for a `-` in front of an operand.
    fn negate_syntax(self) -> Self {
        match self {
            NumericLiteral::Finite {
                negative,
                magnitude,
                kind,
            } => NumericLiteral::finite(!negative, magnitude, kind),
            NumericLiteral::PositiveInfinity => NumericLiteral::NegativeInfinity,
            NumericLiteral::NegativeInfinity => NumericLiteral::PositiveInfinity,
        }
    }
}

/// Reject magnitudes the type constructors would nest too deeply.
pub fn check_type_level(n: usize, value: &NumericLiteral) -> Result<usize, EvalError> {
    if n >= TYPE_LEVEL_LIMIT {
        return Err(EvalError::BeyondTypeLimit {
            input: value.render(),
            limit: TYPE_LEVEL_LIMIT,
        });
    }
    Ok(n)
}

/// A parsed macro operand together with where it was written.
#[derive(Debug, Clone)]
pub struct Operand {
    pub value: NumericLiteral,
    pub span: Span,
}

impl Parse for Operand {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let span = input.span();

        if input.peek(Token![-]) {
            input.parse::<Token![-]>()?;
            let inner: Operand = input.parse()?;
            return Ok(Operand {
                value: inner.value.negate_syntax(),
                span,
            });
        }

        if input.peek(syn::token::Paren) {
            let content;
            syn::parenthesized!(content in input);
            let inner: Operand = content.parse()?;
            return Ok(Operand {
                value: inner.value,
                span,
            });
        }

        if input.peek(Lit) {
            let value = match input.parse::<Lit>()? {
                Lit::Int(int) => from_digits(int.base10_digits(), LiteralKind::Int)
                    .ok_or_else(|| syn::Error::new(int.span(), "integer literal has no decimal form"))?,
                Lit::Float(float) => from_digits(float.base10_digits(), LiteralKind::Float)
                    .ok_or_else(|| syn::Error::new(float.span(), "float literal has no decimal form"))?,
                other => {
                    return Err(syn::Error::new(
                        other.span(),
                        "expected an integer or float literal",
                    ))
                }
            };
            return Ok(Operand { value, span });
        }

        let path = input.call(syn::Path::parse_mod_style)?;
        let last = path
            .segments
            .last()
            .map(|segment| segment.ident.to_string())
            .unwrap_or_default();
        let value = match last.as_str() {
            "PositiveInfinity" | "PosInf" | "INFINITY" | "POSITIVE_INFINITY" => {
                NumericLiteral::PositiveInfinity
            }
            "NegativeInfinity" | "NegInf" | "NEG_INFINITY" | "NEGATIVE_INFINITY" => {
                NumericLiteral::NegativeInfinity
            }
            _ => {
                return Err(syn::Error::new(
                    span,
                    "expected a numeric literal or an infinity sentinel",
                ))
            }
        };
        Ok(Operand { value, span })
    }
}

/// Literal digits as syn reports them. Tokens built by other macros may
/// carry their own `-`.
fn from_digits(digits: &str, kind: LiteralKind) -> Option<NumericLiteral> {
    let (negative, digits) = match digits.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, digits),
    };
    // `1.` is a valid Rust float; the numeral grammar wants `1.0`.
    let magnitude = match digits.strip_suffix('.') {
        Some(int) => canonical_magnitude(int)?,
        None => canonical_magnitude(digits)?,
    };
    Some(NumericLiteral::finite(negative, magnitude, kind))
}
