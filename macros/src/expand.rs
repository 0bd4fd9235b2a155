// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Macro bodies on `proc_macro2` tokens.
//!
//! Each function parses its input, runs the evaluation and emits tokens.
//! Keeping them off `proc_macro::TokenStream` lets the unit tests drive them
//! directly.

use proc_macro2::{Span, TokenStream};
use syn::parse::{Parse, ParseStream};
use syn::punctuated::Punctuated;
use syn::{LitStr, Token};

use crate::codegen::{bool_tokens, int_type, literal_tokens, nat_type, union_type};
use crate::literal::{LiteralKind, NumericLiteral, Operand};
use crate::numeral::{is_number_like_str, string_to_number};
use crate::trace;
use crate::transform::{absolute, reverse_sign};
use crate::union_scan::{union_max, union_min};

/// `a | b | c`, with an optional leading `|`.
struct UnionInput {
    members: Vec<Operand>,
}

impl Parse for UnionInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        if input.peek(Token![|]) {
            input.parse::<Token![|]>()?;
        }
        if input.is_empty() {
            return Ok(UnionInput {
                members: Vec::new(),
            });
        }
        let members = Punctuated::<Operand, Token![|]>::parse_separated_nonempty(input)?;
        Ok(UnionInput {
            members: members.into_iter().collect(),
        })
    }
}

impl UnionInput {
    fn values(&self) -> Vec<NumericLiteral> {
        self.members.iter().map(|m| m.value.clone()).collect()
    }

    fn require_members(&self, name: &str) -> syn::Result<()> {
        if self.members.is_empty() {
            return Err(syn::Error::new(
                Span::call_site(),
                format!("{}! needs at least one member", name),
            ));
        }
        Ok(())
    }
}

fn traced(
    name: &str,
    input: TokenStream,
    body: impl FnOnce(TokenStream) -> syn::Result<TokenStream>,
) -> syn::Result<TokenStream> {
    let output = body(input.clone());
    trace::expansion(name, &input, &output);
    output
}

pub fn number_absolute(input: TokenStream) -> syn::Result<TokenStream> {
    traced("number_absolute", input, |input| {
        let operand: Operand = syn::parse2(input)?;
        let value = absolute(&operand.value).map_err(|e| e.at(operand.span))?;
        Ok(literal_tokens(&value, operand.span))
    })
}

pub fn reverse_sign_of(input: TokenStream) -> syn::Result<TokenStream> {
    traced("reverse_sign", input, |input| {
        let operand: Operand = syn::parse2(input)?;
        let value = reverse_sign(&operand.value).map_err(|e| e.at(operand.span))?;
        Ok(literal_tokens(&value, operand.span))
    })
}

/// Primitive numeric types, bare or through `core::primitive`/`std::primitive`.
const NUMERIC_PRIMITIVES: &[&str] = &[
    "i8", "i16", "i32", "i64", "i128", "isize", "u8", "u16", "u32", "u64", "u128", "usize",
    "f32", "f64",
];

fn is_numeric_primitive(path: &syn::Path) -> bool {
    if path.segments.iter().any(|s| !s.arguments.is_none()) {
        return false;
    }
    let idents: Vec<String> = path.segments.iter().map(|s| s.ident.to_string()).collect();
    let (last, prefix) = match idents.split_last() {
        Some(split) => split,
        None => return false,
    };
    let prefix_ok = match prefix {
        [] => path.leading_colon.is_none(),
        [root, primitive] => (root == "core" || root == "std") && primitive == "primitive",
        _ => false,
    };
    prefix_ok && NUMERIC_PRIMITIVES.contains(&last.as_str())
}

/// Never fails: input that is neither a number, a numeric primitive type nor a
/// string is just `false`.
pub fn is_number_like(input: TokenStream) -> syn::Result<TokenStream> {
    traced("is_number_like", input, |input| {
        let span = input
            .clone()
            .into_iter()
            .next()
            .map_or_else(Span::call_site, |tt| tt.span());

        let verdict = if syn::parse2::<Operand>(input.clone()).is_ok() {
            true
        } else if let Ok(path) = syn::parse2::<syn::Path>(input.clone()) {
            is_numeric_primitive(&path)
        } else if let Ok(text) = syn::parse2::<LitStr>(input) {
            is_number_like_str(&text.value())
        } else {
            false
        };
        Ok(bool_tokens(verdict, span))
    })
}

pub fn union_minimum(input: TokenStream) -> syn::Result<TokenStream> {
    traced("union_min", input, |input| {
        let union: UnionInput = syn::parse2(input)?;
        union.require_members("union_min")?;
        let min = union_min(&union.values()).map_err(|e| e.at(Span::call_site()))?;
        Ok(literal_tokens(&counter_literal(min), Span::call_site()))
    })
}

pub fn union_maximum(input: TokenStream) -> syn::Result<TokenStream> {
    traced("union_max", input, |input| {
        // An empty union is already exhausted, as `UnionMax<Never>` is `Z`.
        let union: UnionInput = syn::parse2(input)?;
        let max = union_max(&union.values()).map_err(|e| e.at(Span::call_site()))?;
        Ok(literal_tokens(&counter_literal(max), Span::call_site()))
    })
}

pub fn parse_number(input: TokenStream) -> syn::Result<TokenStream> {
    traced("string_to_number", input, |input| {
        let text: LitStr = syn::parse2(input)?;
        let value = string_to_number(&text.value()).map_err(|e| e.at(text.span()))?;
        Ok(literal_tokens(&value, text.span()))
    })
}

pub fn nat(input: TokenStream) -> syn::Result<TokenStream> {
    let operand: Operand = syn::parse2(input)?;
    let n = operand.value.to_natural().map_err(|e| e.at(operand.span))?;
    Ok(nat_type(n, operand.span))
}

pub fn int(input: TokenStream) -> syn::Result<TokenStream> {
    let operand: Operand = syn::parse2(input)?;
    int_type(&operand.value, operand.span).map_err(|e| e.at(operand.span))
}

pub fn num_union(input: TokenStream) -> syn::Result<TokenStream> {
    let union: UnionInput = syn::parse2(input)?;
    let members = union
        .members
        .iter()
        .map(|m| m.value.to_natural().map_err(|e| e.at(m.span)))
        .collect::<syn::Result<Vec<_>>>()?;
    Ok(union_type(&members, Span::call_site()))
}

/// Counter positions come out as plain integer literals.
fn counter_literal(counter: usize) -> NumericLiteral {
    NumericLiteral::finite(false, counter.to_string(), LiteralKind::Int)
}
