//! Type-level unions: the primitives, then the counting scans.

use crate::common::{assert_type_eq, bit_value, nat_value, One, Three, Two};
use typelit::{
    nat, num_union, Contains, Exclude, False, IsNever, NatUnion, Never, True, Union, UnionMax,
    UnionMin, Z,
};

#[test]
fn test_num_union_keeps_source_order() {
    assert_type_eq::<num_union!(3 | 1 | 2), Union<Three, Union<One, Union<Two, Never>>>>();
    assert_type_eq::<num_union!(0), Union<Z, Never>>();
    assert_eq!(<num_union!(5 | 5 | 6) as NatUnion>::LEN, 3);
}

#[test]
fn test_is_never() {
    assert_type_eq::<IsNever<Never>, True>();
    assert_type_eq::<IsNever<num_union!(0)>, False>();
}

#[test]
fn test_contains() {
    assert!(bit_value::<Contains<num_union!(3 | 1 | 2), Two>>());
    assert!(!bit_value::<Contains<num_union!(3 | 1 | 2), Z>>());
    assert!(!bit_value::<Contains<Never, One>>());
}

#[test]
fn test_exclude_removes_every_copy() {
    assert_type_eq::<Exclude<num_union!(3 | 1 | 3), Three>, num_union!(1)>();
    assert_type_eq::<Exclude<num_union!(2 | 2), Two>, Never>();
    assert_type_eq::<Exclude<num_union!(1 | 2), Three>, num_union!(1 | 2)>();
}

#[test]
fn test_three_one_two() {
    assert_type_eq::<UnionMin<num_union!(3 | 1 | 2)>, One>();
    assert_type_eq::<UnionMax<num_union!(3 | 1 | 2)>, Three>();
}

#[test]
fn test_singleton_zero() {
    assert_type_eq::<UnionMin<num_union!(0)>, Z>();
    assert_type_eq::<UnionMax<num_union!(0)>, Z>();
}

#[test]
fn test_spread_out_members() {
    assert_eq!(nat_value::<UnionMin<num_union!(20 | 0 | 10)>>(), 0);
    assert_eq!(nat_value::<UnionMax<num_union!(20 | 0 | 10)>>(), 20);
}

#[test]
fn test_duplicates() {
    assert_type_eq::<UnionMin<num_union!(4 | 4 | 6)>, nat!(4)>();
    assert_type_eq::<UnionMax<num_union!(4 | 6 | 6)>, nat!(6)>();
}

#[test]
fn test_empty_union_max_is_zero() {
    assert_type_eq::<UnionMax<Never>, Z>();
}

#[test]
fn test_layers_agree() {
    assert_eq!(
        nat_value::<UnionMax<num_union!(9 | 2 | 7)>>(),
        typelit::union_max!(9 | 2 | 7)
    );
    assert_eq!(
        nat_value::<UnionMin<num_union!(9 | 2 | 7)>>(),
        typelit::union_min!(9 | 2 | 7)
    );
}

#[test]
fn test_largest_supported_members() {
    // 127 is the top of the type layer; num_union!(128) does not compile.
    assert_eq!(nat_value::<UnionMax<num_union!(127 | 0 | 64)>>(), 127);
    assert_eq!(nat_value::<UnionMin<num_union!(127 | 0 | 64)>>(), 0);
    assert_eq!(nat_value::<UnionMin<num_union!(127)>>(), 127);
    assert_type_eq::<UnionMax<num_union!(127)>, nat!(127)>();
}
