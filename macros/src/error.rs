// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Evaluation failures.
//!
//! Nothing here can fail at runtime. Every variant ends up as a
//! `compile_error!` at the macro call site, pointing at the offending tokens.

use std::fmt;

use proc_macro2::Span;

/// Counter values the union scans may reach before giving up.
///
/// Counting starts at 0, so the supported member domain is `0..=999`.
pub const COUNTER_BUDGET: usize = 1000;

/// Naturals the type constructors will build.
///
/// Each unit is one `S<..>` of nesting and each type-level scan step is
/// several levels of trait resolution, so the type layer stops at `0..=127`.
/// Scans near the top need `#![recursion_limit = "1024"]` in the using crate.
pub const TYPE_LEVEL_LIMIT: usize = 128;

/// Why a literal computation produced no result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// The string is not shaped like a numeral.
    NotANumeral { input: String },
    /// No case of a case table matched (the re-parse after a sign flip failed).
    NoMatchingCase { operation: &'static str, input: String },
    /// A union scan ran past the counter budget.
    DepthExceeded { operation: &'static str, limit: usize },
    /// A type-level natural was requested for something that is not one.
    NotANatural { input: String },
    /// A type-level integer was requested for a fractional value.
    NotAnInteger { input: String },
    /// A type-level natural or magnitude was requested past the type-level limit.
    BeyondTypeLimit { input: String, limit: usize },
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvalError::NotANumeral { input } => {
                write!(f, "{:?} is not a numeral", input)
            }
            EvalError::NoMatchingCase { operation, input } => {
                write!(f, "{} has no case for `{}`", operation, input)
            }
            EvalError::DepthExceeded { operation, limit } => {
                write!(
                    f,
                    "{} exceeded its counter budget of {} steps; members must lie in 0..={}",
                    operation,
                    limit,
                    limit - 1
                )
            }
            EvalError::NotANatural { input } => {
                write!(f, "`{}` is not a non-negative integer", input)
            }
            EvalError::NotAnInteger { input } => {
                write!(f, "`{}` has no type-level integer form", input)
            }
            EvalError::BeyondTypeLimit { input, limit } => {
                write!(
                    f,
                    "`{}` is too large for the type layer; magnitudes must lie in 0..={}",
                    input,
                    limit - 1
                )
            }
        }
    }
}

impl std::error::Error for EvalError {}

impl EvalError {
    /// Attach a span so the error can be reported as a compiler diagnostic.
    pub fn at(self, span: Span) -> syn::Error {
        syn::Error::new(span, self)
    }
}
