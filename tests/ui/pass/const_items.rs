use typelit::{
    is_number_like, number_absolute, reverse_sign, string_to_number, union_max, union_min,
};

const ABS: i32 = number_absolute!(-3);
const FLIPPED: f64 = reverse_sign!(2.5);
const SMALLEST: usize = union_min!(3 | 1 | 2);
const LARGEST: usize = union_max!(999 | 0 | 500);
const NUMERIC: bool = is_number_like!("3.14");
const PARSED: i64 = string_to_number!("-17");
const FLOOR: f64 = reverse_sign!(PositiveInfinity);

static TABLE: [u8; union_max!(4 | 16 | 8)] = [0; 16];

fn main() {
    assert_eq!(ABS, 3);
    assert_eq!(FLIPPED, -2.5);
    assert_eq!(SMALLEST, 1);
    assert_eq!(LARGEST, 999);
    assert!(NUMERIC);
    assert_eq!(PARSED, -17);
    assert!(FLOOR.is_infinite() && FLOOR < 0.0);
    assert_eq!(TABLE.len(), 16);
}
