//! `string_to_number!`: numeral strings to literals.

use crate::common::assert_same_f64;
use typelit::string_to_number;

#[test]
fn test_integers() {
    assert_eq!(string_to_number!("0"), 0);
    assert_eq!(string_to_number!("42"), 42);
    assert_eq!(string_to_number!("-42"), -42);
    assert_eq!(string_to_number!("007"), 7);
}

#[test]
fn test_floats() {
    assert_same_f64(string_to_number!("3.14"), 3.14);
    assert_same_f64(string_to_number!("-0.5"), -0.5);
    assert_same_f64(string_to_number!("2.50"), 2.5);
}

#[test]
fn test_exponents_fold_into_the_magnitude() {
    assert_same_f64(string_to_number!("1e3"), 1000.0);
    assert_same_f64(string_to_number!("1.5E-2"), 0.015);
    assert_same_f64(string_to_number!("-2e+1"), -20.0);
}

#[test]
fn test_negative_zero_collapses() {
    assert_eq!(string_to_number!("-0"), 0);
    assert_same_f64(string_to_number!("-0.0"), 0.0);
}

#[test]
fn test_infinity() {
    assert_same_f64(string_to_number!("Infinity"), f64::INFINITY);
    assert_same_f64(string_to_number!("-Infinity"), f64::NEG_INFINITY);
}
