// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Token emission: literal results back to Rust expressions, and
//! literals to the type-level encodings of the `typelit` crate.

pub mod literal;
pub mod types;

pub use literal::{bool_tokens, literal_tokens};
pub use types::{int_type, nat_type, union_type};
