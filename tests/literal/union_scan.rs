//! `union_min!` and `union_max!` across the counter domain.

use typelit::{union_max, union_min};

#[test]
fn test_three_one_two() {
    assert_eq!(union_min!(3 | 1 | 2), 1);
    assert_eq!(union_max!(3 | 1 | 2), 3);
}

#[test]
fn test_singleton_zero() {
    assert_eq!(union_min!(0), 0);
    assert_eq!(union_max!(0), 0);
}

#[test]
fn test_domain_edges() {
    assert_eq!(union_min!(999 | 0 | 500), 0);
    assert_eq!(union_max!(999 | 0 | 500), 999);
    assert_eq!(union_min!(999), 999);
    assert_eq!(union_max!(999), 999);
}

#[test]
fn test_order_does_not_matter() {
    assert_eq!(union_max!(1 | 2 | 3), union_max!(3 | 2 | 1));
    assert_eq!(union_min!(1 | 2 | 3), union_min!(2 | 3 | 1));
}

#[test]
fn test_duplicates() {
    assert_eq!(union_min!(5 | 5 | 9 | 9), 5);
    assert_eq!(union_max!(5 | 5 | 9 | 9), 9);
}

#[test]
fn test_whole_floats_count_as_members() {
    assert_eq!(union_max!(2.0 | 1), 2);
    assert_eq!(union_min!(4 | 3.0), 3);
}

#[test]
fn test_empty_union_max_matches_the_type_layer() {
    assert_eq!(union_max!(), 0);
    assert_eq!(
        union_max!(),
        typelit::testing::nat_value::<typelit::UnionMax<typelit::Never>>()
    );
}

#[test]
fn test_leading_bar() {
    assert_eq!(union_max!(| 4 | 8), 8);
}

#[test]
fn test_usable_in_const_generics() {
    struct Buffer<const N: usize>([u8; N]);

    let buffer = Buffer::<{ union_max!(16 | 4 | 8) }>([0; 16]);
    assert_eq!(buffer.0.len(), 16);
}

#[test]
fn test_usable_in_patterns() {
    let describe = |n: usize| match n {
        union_min!(7 | 3 | 5) => "smallest",
        union_max!(7 | 3 | 5) => "largest",
        _ => "middle",
    };
    assert_eq!(describe(3), "smallest");
    assert_eq!(describe(7), "largest");
    assert_eq!(describe(5), "middle");
}
