//! Expressions for computed literals.
//!
//! Output is always unsuffixed so it takes its type from context, the way a
//! hand-written literal would. Negative values are parenthesised so the
//! expansion composes with method calls and patterns.

use proc_macro2::{Span, TokenStream};
use quote::{quote, quote_spanned};
use syn::{LitBool, LitFloat, LitInt};

use crate::literal::{LiteralKind, NumericLiteral};

/// The expression a numeric literal expands to.
///
/// | Value | Tokens |
/// |-------|--------|
/// | `3` (int) | `3` |
/// | `-3` (int) | `(-3)` |
/// | `2` (float) | `2.0` |
/// | `Infinity` | `::core::primitive::f64::INFINITY` |
/// | `-Infinity` | `::core::primitive::f64::NEG_INFINITY` |
pub fn literal_tokens(value: &NumericLiteral, span: Span) -> TokenStream {
    match value {
        NumericLiteral::PositiveInfinity => {
            quote_spanned!(span=> ::core::primitive::f64::INFINITY)
        }
        NumericLiteral::NegativeInfinity => {
            quote_spanned!(span=> ::core::primitive::f64::NEG_INFINITY)
        }
        NumericLiteral::Finite {
            negative,
            magnitude,
            kind,
        } => {
            let lit = match kind {
                LiteralKind::Int => {
                    let lit = LitInt::new(magnitude, span);
                    quote!(#lit)
                }
                LiteralKind::Float => {
                    let text = if magnitude.contains('.') {
                        magnitude.clone()
                    } else {
                        format!("{}.0", magnitude)
                    };
                    let lit = LitFloat::new(&text, span);
                    quote!(#lit)
                }
            };
            if *negative {
                quote_spanned!(span=> (-#lit))
            } else {
                lit
            }
        }
    }
}

pub fn bool_tokens(value: bool, span: Span) -> TokenStream {
    let lit = LitBool::new(value, span);
    quote!(#lit)
}
