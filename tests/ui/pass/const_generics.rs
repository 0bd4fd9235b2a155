use typelit::{number_absolute, union_max};

struct Ring<const N: usize> {
    slots: [u32; N],
}

impl<const N: usize> Ring<N> {
    fn new() -> Self {
        Ring { slots: [0; N] }
    }
}

fn main() {
    let ring = Ring::<{ union_max!(8 | 32 | 16) }>::new();
    let small = Ring::<{ number_absolute!(-2) }>::new();
    assert_eq!(ring.slots.len(), 32);
    assert_eq!(small.slots.len(), 2);
}
