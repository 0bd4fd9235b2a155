use typelit::{number_absolute, reverse_sign, union_max, union_min};

fn bucket(n: i32) -> &'static str {
    match n {
        reverse_sign!(1) => "minus one",
        number_absolute!(-1) => "one",
        union_min!(5 | 3 | 9) => "three",
        union_max!(5 | 3 | 9) => "nine",
        _ => "elsewhere",
    }
}

fn main() {
    assert_eq!(bucket(-1), "minus one");
    assert_eq!(bucket(1), "one");
    assert_eq!(bucket(3), "three");
    assert_eq!(bucket(9), "nine");
    assert_eq!(bucket(10), "elsewhere");
}
