//! Literal to type translation for the type layer.
//!
//! This module turns numbers known at expansion time into the marker types
//! of the `typelit` crate, so `nat!(3)` can stand where a type is expected.
//!
//! # Type Mappings
//!
//! | Literal | Type |
//! |---------|------|
//! | `0` | `Z` |
//! | `3` (natural) | `S<S<S<Z>>>` |
//! | `3` (integer) | `PInt<S<S<S<Z>>>>` |
//! | `-3` | `NInt<S<S<S<Z>>>>` |
//! | `PositiveInfinity` | `PosInf` |
//! | `NegativeInfinity` | `NegInf` |
//! | `1 \| 2` | `Union<S<Z>, Union<S<S<Z>>, Never>>` |

use proc_macro2::{Span, TokenStream};
use quote::quote_spanned;

use crate::error::EvalError;
use crate::literal::{check_type_level, NumericLiteral};

/// Unary natural with `n` successors around zero.
///
/// Callers bound `n` with `check_type_level` first; this emits one `S` per unit.
pub fn nat_type(n: usize, span: Span) -> TokenStream {
    (0..n).fold(quote_spanned!(span=> ::typelit::Z), |inner, _| {
        quote_spanned!(span=> ::typelit::S<#inner>)
    })
}

/// Signed integer or infinity sentinel.
///
/// Fractional values have no type-level form.
pub fn int_type(value: &NumericLiteral, span: Span) -> Result<TokenStream, EvalError> {
    match value {
        NumericLiteral::PositiveInfinity => Ok(quote_spanned!(span=> ::typelit::PosInf)),
        NumericLiteral::NegativeInfinity => Ok(quote_spanned!(span=> ::typelit::NegInf)),
        NumericLiteral::Finite {
            negative,
            magnitude,
            ..
        } => {
            let n: usize = magnitude.parse().map_err(|_| EvalError::NotAnInteger {
                input: value.render(),
            })?;
            let n = check_type_level(n, value)?;
            let nat = nat_type(n, span);
            Ok(match (n, negative) {
                (0, _) => nat,
                (_, false) => quote_spanned!(span=> ::typelit::PInt<#nat>),
                (_, true) => quote_spanned!(span=> ::typelit::NInt<#nat>),
            })
        }
    }
}

/// Union of naturals as a cons list ending in `Never`, in source order.
pub fn union_type(members: &[usize], span: Span) -> TokenStream {
    members
        .iter()
        .rev()
        .fold(quote_spanned!(span=> ::typelit::Never), |tail, &member| {
            let head = nat_type(member, span);
            quote_spanned!(span=> ::typelit::Union<#head, #tail>)
        })
}
