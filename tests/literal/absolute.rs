//! `number_absolute!` on integers, floats and the infinity sentinels.

use crate::common::assert_same_f64;
use typelit::number_absolute;

#[test]
fn test_non_negative_is_unchanged() {
    assert_eq!(number_absolute!(0), 0);
    assert_eq!(number_absolute!(1), 1);
    assert_eq!(number_absolute!(999), 999);
    assert_same_f64(number_absolute!(2.5), 2.5);
}

#[test]
fn test_negative_loses_its_sign() {
    assert_eq!(number_absolute!(-1), 1);
    assert_eq!(number_absolute!(-42), 42);
    assert_same_f64(number_absolute!(-0.5), 0.5);
    assert_same_f64(number_absolute!(-1.25e2), 125.0);
}

#[test]
fn test_negative_zero_is_zero() {
    assert_same_f64(number_absolute!(-0.0), 0.0);
    assert_eq!(number_absolute!(-0), 0);
}

#[test]
fn test_infinities() {
    assert_same_f64(number_absolute!(NegativeInfinity), f64::INFINITY);
    assert_same_f64(number_absolute!(PositiveInfinity), f64::INFINITY);
    assert_same_f64(number_absolute!(f64::NEG_INFINITY), f64::INFINITY);
    assert_same_f64(number_absolute!(-f64::INFINITY), f64::INFINITY);
}

#[test]
fn test_idempotent() {
    assert_eq!(number_absolute!(-7), number_absolute!(7));
    assert_same_f64(number_absolute!(-3.5), number_absolute!(3.5));
}

#[test]
fn test_other_bases_and_suffixes() {
    let hex: u32 = number_absolute!(-0xff);
    let suffixed: i64 = number_absolute!(-12_000i64);
    assert_eq!(hex, 255);
    assert_eq!(suffixed, 12_000);
}

#[test]
fn test_float_kind_is_kept() {
    // A float input stays a float even when the magnitude is whole.
    let whole: f32 = number_absolute!(-2.0);
    assert_eq!(whole, 2.0);
}

#[test]
fn test_usable_in_const_and_array_length() {
    const LEN: usize = number_absolute!(-4);
    let buf = [0u8; number_absolute!(-3)];
    assert_eq!(LEN, 4);
    assert_eq!(buf.len(), 3);
}
