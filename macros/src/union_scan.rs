// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Minimum and maximum of a union of numeric literals by counting.
//!
//! A union has no order, and the only question these scans ask of it is
//! "is the counter's value one of your members?". Min counts up from zero
//! and stops at the first hit. Max counts up too, crossing members off as
//! it meets them, and stops when nothing is left.
//!
//! # Domain
//!
//! The counter may reach `0..COUNTER_BUDGET`. Members outside `0..=999`
//! (negative, fractional, infinite, too large) are never met, so a scan
//! that needs one runs out of budget with [`EvalError::DepthExceeded`].

use crate::error::{EvalError, COUNTER_BUDGET};
use crate::literal::NumericLiteral;

fn is_member(member: &NumericLiteral, counter: usize) -> bool {
    member.counter_value() == Some(counter)
}

/// Smallest member: the first counter value that is in the union.
pub fn union_min(members: &[NumericLiteral]) -> Result<usize, EvalError> {
    (0..COUNTER_BUDGET)
        .find(|&counter| members.iter().any(|member| is_member(member, counter)))
        .ok_or(EvalError::DepthExceeded {
            operation: "union_min",
            limit: COUNTER_BUDGET,
        })
}

/// Largest member: the counter value at which the last member was crossed off.
///
/// An empty union is already exhausted and yields the starting counter, `0`.
pub fn union_max(members: &[NumericLiteral]) -> Result<usize, EvalError> {
    let mut remaining: Vec<&NumericLiteral> = members.iter().collect();
    let mut counter = 0;

    loop {
        if remaining.is_empty() {
            return Ok(counter);
        }

        if remaining.iter().any(|member| is_member(member, counter)) {
            // Narrow without moving the counter; the emptiness check above
            // decides whether this was the last one.
            remaining.retain(|member| !is_member(member, counter));
            continue;
        }

        counter += 1;
        if counter == COUNTER_BUDGET {
            return Err(EvalError::DepthExceeded {
                operation: "union_max",
                limit: COUNTER_BUDGET,
            });
        }
    }
}
