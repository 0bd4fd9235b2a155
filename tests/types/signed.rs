//! `Abs`, `Negate` and `IsNumberLike` on the signed marker types.

use crate::common::{assert_type_eq, bit_value, One, Three, Two};
use typelit::{
    int, nat, Abs, False, Integer, IsNumberLike, NInt, NegInf, Negate, Never, Number, PInt,
    PosInf, True, Union, Z,
};

#[test]
fn test_constructors() {
    assert_type_eq::<int!(0), Z>();
    assert_type_eq::<int!(3), PInt<Three>>();
    assert_type_eq::<int!(-2), NInt<Two>>();
    assert_type_eq::<int!(PositiveInfinity), PosInf>();
    assert_type_eq::<int!(f64::NEG_INFINITY), NegInf>();
    assert_type_eq::<nat!(2), Two>();
}

#[test]
fn test_abs_of_non_negative_is_identity() {
    assert_type_eq::<Abs<Z>, Z>();
    assert_type_eq::<Abs<PInt<One>>, PInt<One>>();
    assert_type_eq::<Abs<PosInf>, PosInf>();
}

#[test]
fn test_abs_drops_the_sign() {
    assert_type_eq::<Abs<int!(-3)>, int!(3)>();
    assert_type_eq::<Abs<NegInf>, PosInf>();
    assert_eq!(<Abs<int!(-40)> as Integer>::I64, 40);
}

#[test]
fn test_abs_idempotent() {
    assert_type_eq::<Abs<Abs<int!(-3)>>, Abs<int!(-3)>>();
    assert_type_eq::<Abs<Abs<NegInf>>, Abs<NegInf>>();
}

#[test]
fn test_negate_case_table() {
    assert_type_eq::<Negate<Z>, Z>();
    assert_type_eq::<Negate<PosInf>, NegInf>();
    assert_type_eq::<Negate<NegInf>, PosInf>();
    assert_type_eq::<Negate<int!(-1)>, int!(1)>();
    assert_type_eq::<Negate<int!(1)>, int!(-1)>();
}

#[test]
fn test_negate_involution() {
    assert_type_eq::<Negate<Negate<int!(-7)>>, int!(-7)>();
    assert_type_eq::<Negate<Negate<int!(7)>>, int!(7)>();
    assert_type_eq::<Negate<Negate<PosInf>>, PosInf>();
}

#[test]
fn test_abs_agrees_across_negate() {
    assert_type_eq::<Abs<Negate<int!(-5)>>, Abs<int!(-5)>>();
}

#[test]
fn test_values() {
    assert_eq!(<int!(-12) as Integer>::I64, -12);
    assert_eq!(<int!(-12) as Number>::VALUE, -12.0);
    assert_eq!(<Negate<PosInf> as Number>::VALUE, f64::NEG_INFINITY);
}

#[test]
fn test_number_like() {
    assert_type_eq::<IsNumberLike<Z>, True>();
    assert_type_eq::<IsNumberLike<Three>, True>();
    assert_type_eq::<IsNumberLike<int!(-1)>, True>();
    assert_type_eq::<IsNumberLike<NegInf>, True>();
    assert_type_eq::<IsNumberLike<True>, False>();
    assert_type_eq::<IsNumberLike<Never>, False>();
    assert!(!bit_value::<IsNumberLike<Union<One, Never>>>());
}
