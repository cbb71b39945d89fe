#[macro_use(quickcheck)]
extern crate quickcheck_macros;

use quickcheck::{Arbitrary, Gen};

mod tree;

/// The things a quicktest can do to a tree.
#[derive(Copy, Clone, Debug)]
enum Op<T> {
    /// Insert the value into the tree
    Insert(T),
    /// Remove the value from the tree
    Remove(T),
}

impl<T> Arbitrary for Op<T>
where
    T: Arbitrary,
{
    fn arbitrary(g: &mut Gen) -> Self {
        if bool::arbitrary(g) {
            Op::Insert(T::arbitrary(g))
        } else {
            Op::Remove(T::arbitrary(g))
        }
    }
}
