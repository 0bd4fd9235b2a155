use typelit::{int, nat, num_union, Abs, Integer, Nat, Negate, UnionMax, UnionMin};

type Magnitude = Abs<int!(-6)>;
type Back = Negate<Negate<int!(-6)>>;
type Members = num_union!(6 | 2 | 4);

fn width<N: Nat>() -> usize {
    N::VALUE
}

fn main() {
    assert_eq!(<Magnitude as Integer>::I64, 6);
    assert_eq!(<Back as Integer>::I64, -6);
    assert_eq!(width::<UnionMin<Members>>(), 2);
    assert_eq!(width::<UnionMax<Members>>(), 6);
    assert_eq!(width::<nat!(0)>(), 0);
}
