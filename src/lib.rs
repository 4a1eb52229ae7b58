//! An unbalanced, ordered Binary Search Tree (BST) with explicit rebalancing.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored values. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a value
//! and will sometimes have child `Node`s. The most important invariants
//! of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! The benefits of these invariants are many. For instance, searching for
//! values in the tree takes `O(height)` (where `height` is defined as the longest
//! path from the root `Node` to a leaf `Node`). BSTs also naturally support
//! sorted iteration by visiting the left subtree, then the subtree root, then
//! the right subtree.
//!
//! The tree in this crate does **not** maintain balance as values are inserted
//! and deleted - a long run of ascending insertions will happily degrade it
//! toward a linked list. Instead, [`Tree::from_values`] builds a
//! minimal-height tree up front, [`Tree::is_balanced`] reports whether every
//! node's subtree heights differ by at most one, and [`Tree::rebalance`]
//! restores that shape on request by rebuilding the whole tree from its
//! sorted in-order sequence.
//!
//! # Examples
//!
//! ```
//! use bstree::Tree;
//!
//! let mut tree = Tree::from_values(vec![3, 1, 4, 1, 5]);
//!
//! // Duplicates are dropped during construction.
//! assert_eq!(tree.in_order_values(), [&1, &3, &4, &5]);
//!
//! tree.insert(2);
//! tree.delete(&4);
//! assert_eq!(tree.in_order_values(), [&1, &2, &3, &5]);
//! ```

#![deny(missing_docs)]

pub mod error;
pub mod node;
pub mod queue;
pub mod tree;
pub mod util;

pub use error::{Error, Result};
pub use node::Node;
pub use queue::Queue;
pub use tree::Tree;
