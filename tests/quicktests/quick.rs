use quickcheck::{Arbitrary, Gen};

/// An enum for the various kinds of "things" to do to
/// a binary search tree in a quicktest.
#[derive(Copy, Clone, Debug)]
pub(crate) enum Op<V> {
    /// Insert the value into the tree.
    Insert(V),
    /// Delete the value from the tree.
    Delete(V),
    /// Rebuild the tree into minimal height.
    Rebalance,
}

impl<V> Arbitrary for Op<V>
where
    V: Arbitrary,
{
    /// Tells quickcheck how to randomly choose an operation.
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 1, 2]).unwrap() {
            0 => Op::Insert(V::arbitrary(g)),
            1 => Op::Delete(V::arbitrary(g)),
            2 => Op::Rebalance,
            _ => unreachable!(),
        }
    }
}
