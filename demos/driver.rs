//! Demo driver: builds a tree from random values, exercises every public
//! operation, and renders the results. Run with
//! `cargo run --example driver`.

use bstree::Tree;

use rand::Rng;

/// `n` random numbers in `min..max`. Zero `n` gives an empty collection.
fn rand_numbers(n: usize, min: i32, max: i32) -> Vec<i32> {
    let mut rng = rand::thread_rng();
    (0..n).map(|_| rng.gen_range(min..max)).collect()
}

fn report(tree: &Tree<i32>) {
    println!("Is tree balanced? {}", tree.is_balanced());
    println!("Level Order: {:?}", tree.level_order_values());
    println!("Pre Order: {:?}", tree.pre_order_values());
    println!("In Order: {:?}", tree.in_order_values());
    println!("Post Order: {:?}", tree.post_order_values());
}

fn main() {
    println!("Creating a tree of numbers < 100...");
    let mut tree = Tree::from_values(rand_numbers(10, 0, 100));
    tree.print();
    report(&tree);

    println!("Adding 5 numbers greater than 100...");
    for value in 101..=105 {
        tree.insert(value);
    }
    tree.print();
    println!("Is tree balanced? {}", tree.is_balanced());

    println!("Rebalancing the tree...");
    tree.rebalance();
    tree.print();
    report(&tree);
}
