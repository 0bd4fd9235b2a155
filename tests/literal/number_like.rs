//! `is_number_like!` over numbers, numeral strings and everything else.

use typelit::is_number_like;

#[test]
fn test_numbers_are_number_like() {
    assert!(is_number_like!(42));
    assert!(is_number_like!(0));
    assert!(is_number_like!(-1));
    assert!(is_number_like!(3.14));
    assert!(is_number_like!(1e9));
    assert!(is_number_like!(PositiveInfinity));
    assert!(is_number_like!(f64::NEG_INFINITY));
}

#[test]
fn test_digit_strings() {
    assert!(is_number_like!("0"));
    assert!(is_number_like!("7"));
    assert!(is_number_like!("999"));
    assert!(is_number_like!("007"));
}

#[test]
fn test_decimal_strings() {
    assert!(is_number_like!("3.14"));
    assert!(is_number_like!("0.5"));
    assert!(!is_number_like!("3.14.1"));
    assert!(!is_number_like!(".5"));
    assert!(!is_number_like!("5."));
}

#[test]
fn test_signed_strings_are_not_number_like() {
    // The literal is, the string is not.
    assert!(is_number_like!(-1));
    assert!(!is_number_like!("-1"));
    assert!(!is_number_like!("+1"));
}

#[test]
fn test_other_strings() {
    assert!(!is_number_like!("abc"));
    assert!(!is_number_like!(""));
    assert!(!is_number_like!(" 1"));
    assert!(!is_number_like!("1e3"));
    assert!(!is_number_like!("Infinity"));
}

#[test]
fn test_numeric_primitive_types() {
    assert!(is_number_like!(f64));
    assert!(is_number_like!(u8));
    assert!(is_number_like!(i128));
    assert!(is_number_like!(core::primitive::usize));
    assert!(!is_number_like!(bool));
    assert!(!is_number_like!(char));
}

#[test]
fn test_other_tokens() {
    assert!(!is_number_like!(true));
    assert!(!is_number_like!('7'));
    assert!(!is_number_like!(String));
    assert!(!is_number_like!(1 + 1));
}

#[test]
fn test_usable_in_const() {
    const NUMERIC: bool = is_number_like!("12");
    const _: () = assert!(NUMERIC);
}
