use bstree::{Error, Tree};

use quickcheck_macros::quickcheck;
use std::collections::BTreeSet;

use crate::Op;

/// Applies a set of operations to a tree and a model `BTreeSet`.
/// This way we can ensure that after a random smattering of inserts,
/// deletes, and rebalances both containers hold the same values.
fn do_ops(ops: &[Op<i8>], tree: &mut Tree<i8>, model: &mut BTreeSet<i8>) {
    for op in ops {
        match op {
            Op::Insert(v) => {
                tree.insert(*v);
                model.insert(*v);
            }
            Op::Delete(v) => {
                tree.delete(v);
                model.remove(v);
            }
            Op::Rebalance => tree.rebalance(),
        }
    }
}

fn in_order(tree: &Tree<i8>) -> Vec<i8> {
    tree.in_order(|node| *node.value())
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut model = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut model);
    in_order(&tree) == model.iter().copied().collect::<Vec<_>>()
        && model.iter().all(|v| tree.find(v).is_some())
}

#[quickcheck]
fn in_order_is_strictly_increasing(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut model = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut model);
    in_order(&tree).windows(2).all(|pair| pair[0] < pair[1])
}

#[quickcheck]
fn build_sorts_and_dedups(xs: Vec<i8>) -> bool {
    let tree = Tree::from_values(xs.clone());
    let expected: Vec<i8> = xs.into_iter().collect::<BTreeSet<_>>().into_iter().collect();

    in_order(&tree) == expected
}

#[quickcheck]
fn build_is_balanced(xs: Vec<i8>) -> bool {
    Tree::from_values(xs).is_balanced()
}

#[quickcheck]
fn insert_and_delete_conserve_size(xs: Vec<i8>, v: i8) -> bool {
    let mut tree = Tree::from_values(xs);
    let len_before = tree.len();
    let was_present = tree.find(&v).is_some();

    tree.insert(v);
    let len_with_v = if was_present { len_before } else { len_before + 1 };
    if tree.len() != len_with_v {
        return false;
    }

    tree.delete(&v);
    tree.len() == len_with_v - 1 && tree.find(&v).is_none()
}

#[quickcheck]
fn delete_then_absent(xs: Vec<i8>) -> bool {
    let mut tree = Tree::from_values(xs.clone());
    for x in &xs {
        tree.delete(x);
        if tree.find(x).is_some() {
            return false;
        }
    }

    tree.is_empty()
}

#[quickcheck]
fn traversals_visit_each_node_exactly_once(xs: Vec<i8>) -> bool {
    let tree = Tree::from_values(xs);
    let sorted = in_order(&tree);

    let mut level: Vec<i8> = tree.level_order(|node| *node.value());
    let mut pre: Vec<i8> = tree.pre_order(|node| *node.value());
    let mut post: Vec<i8> = tree.post_order(|node| *node.value());
    level.sort_unstable();
    pre.sort_unstable();
    post.sort_unstable();

    level == sorted && pre == sorted && post == sorted
}

#[quickcheck]
fn rebalance_preserves_values(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut model = BTreeSet::new();
    do_ops(&ops, &mut tree, &mut model);

    tree.rebalance();

    tree.is_balanced() && in_order(&tree) == model.iter().copied().collect::<Vec<_>>()
}

#[quickcheck]
fn depth_agrees_with_find(xs: Vec<i8>, probe: i8) -> bool {
    let tree = Tree::from_values(xs);
    match tree.depth(&probe) {
        Ok(depth) => {
            tree.find(&probe).is_some() && tree.height().map_or(false, |height| depth <= height)
        }
        Err(Error::NotFound) => tree.find(&probe).is_none(),
        Err(_) => false,
    }
}
