//! The BST itself: construction, mutation, lookup, traversal, balance
//! inspection, rebalancing, and rendering.
//!
//! # Examples
//!
//! ```
//! use bstree::Tree;
//!
//! let mut tree = Tree::from_values(vec![0, 1, 2, 3, 4, 5, 6]);
//!
//! // Construction picks middles, so seven values make a height-2 tree.
//! assert_eq!(tree.height(), Some(2));
//! assert!(tree.is_balanced());
//!
//! // A run of ascending inserts degrades the shape...
//! for value in 7..=13 {
//!     tree.insert(value);
//! }
//! assert!(!tree.is_balanced());
//!
//! // ...until the caller asks for a rebuild.
//! tree.rebalance();
//! assert!(tree.is_balanced());
//! assert_eq!(tree.in_order_values().len(), 14);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::iter::FromIterator;

use crate::error::{Error, Result};
use crate::node::{Link, Node};
use crate::queue::Queue;
use crate::util::{dedup, merge_sort};

/// An unbalanced Binary Search Tree storing each distinct value once.
///
/// The tree owns its root and each node owns its children, so dropping the
/// tree (or excising a subtree during [`delete`](Tree::delete) or
/// [`rebalance`](Tree::rebalance)) releases every affected node.
///
/// Mutations never rebalance on their own; see [`rebalance`](Tree::rebalance).
#[derive(Debug, Clone)]
pub struct Tree<T> {
    root: Link<T>,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> FromIterator<T> for Tree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_values(iter)
    }
}

impl<T> Tree<T> {
    /// Creates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Whether the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The number of values stored in the tree. Counted on demand in `O(n)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let tree = Tree::from_values(vec![5, 5, 2, 9]);
    /// assert_eq!(tree.len(), 3);
    /// ```
    pub fn len(&self) -> usize {
        fn count<T>(link: &Link<T>) -> usize {
            match link.as_deref() {
                None => 0,
                Some(node) => 1 + count(&node.left) + count(&node.right),
            }
        }
        count(&self.root)
    }

    /// The height of the tree: the number of edges on the longest path from
    /// the root to a leaf. `None` for an empty tree, `Some(0)` for a lone
    /// root.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// assert_eq!(Tree::<i32>::new().height(), None);
    /// assert_eq!(Tree::from_values(vec![1]).height(), Some(0));
    /// assert_eq!(Tree::from_values(vec![0, 1, 2, 3, 4, 5, 6]).height(), Some(2));
    /// ```
    pub fn height(&self) -> Option<usize> {
        self.root.as_deref().map(Node::height)
    }
}

impl<T: Ord> Tree<T> {
    /// Builds a minimal-height tree from an arbitrary collection.
    ///
    /// The input is deduplicated and sorted, then folded recursively: the
    /// middle element (left-biased on even splits) becomes the subtree root
    /// and the halves on either side become its children. For `n` distinct
    /// values the resulting height is `floor(log2(n))`. An empty collection
    /// yields an empty tree.
    ///
    /// [`rebalance`](Tree::rebalance) reuses the same fold.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let tree = Tree::from_values(vec![6, 3, 3, 0, 5, 1, 2, 4]);
    /// assert_eq!(
    ///     tree.in_order_values(),
    ///     [&0, &1, &2, &3, &4, &5, &6],
    /// );
    /// assert_eq!(tree.height(), Some(2));
    /// ```
    pub fn from_values<I: IntoIterator<Item = T>>(values: I) -> Self {
        let values = merge_sort(dedup(values.into_iter().collect()));
        Self {
            root: build_balanced(values),
        }
    }

    /// Inserts `value` into the tree. Inserting a value that is already
    /// present leaves the tree unchanged.
    ///
    /// The new value always becomes a leaf (or the root of an empty tree);
    /// no rebalancing happens, so repeated ordered insertion can degrade the
    /// tree toward a list.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(2);
    /// tree.insert(1);
    /// tree.insert(2);
    ///
    /// assert_eq!(tree.in_order_values(), [&1, &2]);
    /// ```
    pub fn insert(&mut self, value: T) {
        insert_into(&mut self.root, value);
    }

    /// Deletes `value` from the tree. Deleting a value that is not present
    /// leaves the tree unchanged.
    ///
    /// A node with two children is removed by predecessor substitution: the
    /// rightmost value of its left subtree replaces its own, and that
    /// predecessor node is excised (its former left child takes its place).
    /// Only the predecessor's position changes; the rest of the tree keeps
    /// its shape.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let mut tree = Tree::from_values(vec![0, 1, 2, 3, 4, 5, 6]);
    /// tree.delete(&4);
    /// tree.delete(&100); // no-op
    ///
    /// assert_eq!(tree.in_order_values(), [&0, &1, &2, &3, &5, &6]);
    /// assert!(tree.find(&4).is_none());
    /// ```
    pub fn delete(&mut self, value: &T) {
        delete_from(&mut self.root, value);
    }

    /// Looks up `value`, returning its node. `None` when the value is not
    /// present.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let tree = Tree::from_values(vec![2, 1, 3]);
    ///
    /// assert_eq!(tree.find(&3).map(|n| n.value()), Some(&3));
    /// assert!(tree.find(&7).is_none());
    /// ```
    pub fn find(&self, value: &T) -> Option<&Node<T>> {
        find_in(&self.root, value)
    }

    /// The number of edges between the root and the node holding `value`.
    /// The root itself is at depth 0.
    ///
    /// The lookup re-descends from the root by comparison, so it costs
    /// `O(height)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] when `value` is not in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::{Error, Tree};
    ///
    /// let tree = Tree::from_values(vec![0, 1, 2, 3, 4, 5, 6]);
    ///
    /// assert_eq!(tree.depth(&3), Ok(0));
    /// assert_eq!(tree.depth(&6), Ok(2));
    /// assert_eq!(tree.depth(&42), Err(Error::NotFound));
    /// ```
    pub fn depth(&self, value: &T) -> Result<usize> {
        let mut node = self.root.as_deref();
        let mut depth = 0;
        while let Some(current) = node {
            match value.cmp(&current.data) {
                Ordering::Equal => return Ok(depth),
                Ordering::Less => node = current.left.as_deref(),
                Ordering::Greater => node = current.right.as_deref(),
            }
            depth += 1;
        }
        Err(Error::NotFound)
    }

    /// Whether every node's left and right subtree heights differ by at most
    /// one. This is the AVL balance condition, checked at every node - it is
    /// inspected here but never maintained automatically.
    ///
    /// An empty tree is balanced.
    pub fn is_balanced(&self) -> bool {
        balanced_height(&self.root).is_some()
    }

    /// Restores minimal height by rebuilding the tree from its in-order
    /// value sequence. Already-balanced trees are left untouched.
    ///
    /// The in-order sequence is already sorted and free of duplicates, so
    /// the rebuild skips the sort/dedup step and runs in `O(n)` time and
    /// space.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for value in 0..8 {
    ///     tree.insert(value); // builds a right-leaning chain
    /// }
    /// assert!(!tree.is_balanced());
    ///
    /// tree.rebalance();
    /// assert!(tree.is_balanced());
    /// assert_eq!(tree.height(), Some(3));
    /// ```
    pub fn rebalance(&mut self) {
        if self.is_balanced() {
            return;
        }
        let mut values = Vec::with_capacity(self.len());
        drain_in_order(self.root.take(), &mut values);
        self.root = build_balanced(values);
    }
}

/// Traversals. Each visits every node exactly once, applies the visitor to
/// it, and collects the results in visitation order. None of them mutate the
/// tree; a repeated call re-traverses from scratch.
impl<T> Tree<T> {
    /// Breadth-first traversal: the root first, then each level left to
    /// right.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let tree = Tree::from_values(vec![0, 1, 2, 3, 4, 5, 6]);
    /// let values: Vec<i32> = tree.level_order(|node| *node.value());
    /// assert_eq!(values, [3, 1, 5, 0, 2, 4, 6]);
    /// ```
    pub fn level_order<'a, R, F>(&'a self, mut visit: F) -> Vec<R>
    where
        F: FnMut(&'a Node<T>) -> R,
    {
        let mut results = Vec::new();
        let mut queue = Queue::new();
        if let Some(root) = self.root.as_deref() {
            queue.enqueue(root);
        }
        // The queue only runs dry when the whole tree has been visited.
        while let Ok(node) = queue.dequeue() {
            results.push(visit(node));
            if let Some(left) = node.left.as_deref() {
                queue.enqueue(left);
            }
            if let Some(right) = node.right.as_deref() {
                queue.enqueue(right);
            }
        }
        results
    }

    /// Depth-first traversal visiting each node before its subtrees.
    pub fn pre_order<'a, R, F>(&'a self, mut visit: F) -> Vec<R>
    where
        F: FnMut(&'a Node<T>) -> R,
    {
        let mut results = Vec::new();
        pre_order_in(&self.root, &mut visit, &mut results);
        results
    }

    /// Depth-first traversal visiting each node between its subtrees. For a
    /// BST this yields the values in strictly increasing order.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let tree = Tree::from_values(vec![9, 4, 7]);
    /// let values: Vec<i32> = tree.in_order(|node| *node.value());
    /// assert_eq!(values, [4, 7, 9]);
    /// ```
    pub fn in_order<'a, R, F>(&'a self, mut visit: F) -> Vec<R>
    where
        F: FnMut(&'a Node<T>) -> R,
    {
        let mut results = Vec::new();
        in_order_in(&self.root, &mut visit, &mut results);
        results
    }

    /// Depth-first traversal visiting each node after its subtrees.
    pub fn post_order<'a, R, F>(&'a self, mut visit: F) -> Vec<R>
    where
        F: FnMut(&'a Node<T>) -> R,
    {
        let mut results = Vec::new();
        post_order_in(&self.root, &mut visit, &mut results);
        results
    }

    /// [`level_order`](Tree::level_order) with the default visitor: project
    /// each node to a reference to its value.
    pub fn level_order_values(&self) -> Vec<&T> {
        self.level_order(Node::value)
    }

    /// [`pre_order`](Tree::pre_order) with the default visitor.
    pub fn pre_order_values(&self) -> Vec<&T> {
        self.pre_order(Node::value)
    }

    /// [`in_order`](Tree::in_order) with the default visitor. The result is
    /// sorted and duplicate-free.
    pub fn in_order_values(&self) -> Vec<&T> {
        self.in_order(Node::value)
    }

    /// [`post_order`](Tree::post_order) with the default visitor.
    pub fn post_order_values(&self) -> Vec<&T> {
        self.post_order(Node::value)
    }
}

impl<T: fmt::Display> Tree<T> {
    /// Renders the tree shape as indented, branch-drawn text: the right
    /// subtree above the root line, the left subtree below it. An empty tree
    /// renders as an empty string.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let tree = Tree::from_values(vec![1, 2, 3]);
    /// assert_eq!(
    ///     tree.render(),
    ///     "\u{2502}   \u{250c}\u{2500}\u{2500} 3\n\
    ///      \u{2514}\u{2500}\u{2500} 2\n    \
    ///      \u{2514}\u{2500}\u{2500} 1\n",
    /// );
    /// ```
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Writes [`render`](Tree::render)'s output to stdout. Purely for
    /// diagnostics and demos.
    pub fn print(&self) {
        print!("{}", self);
    }
}

impl<T: fmt::Display> fmt::Display for Tree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.root.as_deref() {
            Some(root) => render_into(root, "", true, f),
            None => Ok(()),
        }
    }
}

fn render_into<T: fmt::Display>(
    node: &Node<T>,
    prefix: &str,
    is_left: bool,
    f: &mut fmt::Formatter<'_>,
) -> fmt::Result {
    if let Some(right) = node.right.as_deref() {
        let deeper = format!("{}{}", prefix, if is_left { "│   " } else { "    " });
        render_into(right, &deeper, false, f)?;
    }
    writeln!(f, "{}{} {}", prefix, if is_left { "└──" } else { "┌──" }, node.data)?;
    if let Some(left) = node.left.as_deref() {
        let deeper = format!("{}{}", prefix, if is_left { "    " } else { "│   " });
        render_into(left, &deeper, true, f)?;
    }
    Ok(())
}

/// Folds a sorted, duplicate-free `Vec` into a minimal-height subtree by
/// repeatedly promoting the (left-biased) middle element.
fn build_balanced<T>(mut values: Vec<T>) -> Link<T> {
    if values.is_empty() {
        return None;
    }
    let mid = (values.len() - 1) / 2;
    let right = build_balanced(values.split_off(mid + 1));
    let data = values.pop().expect("values still holds the middle element");
    let left = build_balanced(values);
    Some(Box::new(Node { data, left, right }))
}

fn insert_into<T: Ord>(link: &mut Link<T>, value: T) {
    match link {
        None => *link = Some(Box::new(Node::new(value))),
        Some(node) => match value.cmp(&node.data) {
            Ordering::Less => insert_into(&mut node.left, value),
            // Already in the tree.
            Ordering::Equal => {}
            Ordering::Greater => insert_into(&mut node.right, value),
        },
    }
}

fn delete_from<T: Ord>(link: &mut Link<T>, value: &T) {
    let node = match link {
        None => return, // not found
        Some(node) => node,
    };
    match value.cmp(&node.data) {
        Ordering::Less => delete_from(&mut node.left, value),
        Ordering::Greater => delete_from(&mut node.right, value),
        Ordering::Equal => excise(link),
    }
}

/// Removes the node at `link`, which must be occupied.
///
/// A node without a left child (leaves included) is replaced by its right
/// child. Otherwise the node's value is overwritten with its in-order
/// predecessor's and the predecessor node is excised instead.
fn excise<T>(link: &mut Link<T>) {
    let mut node = link.take().expect("excise requires an occupied link");
    if node.left.is_none() {
        *link = node.right.take();
        return;
    }
    let predecessor = take_rightmost(&mut node.left);
    node.data = predecessor.data;
    *link = Some(node);
}

/// Detaches and returns the rightmost node of the subtree at `link`,
/// reattaching that node's left child in its place. `link` must be occupied.
fn take_rightmost<T>(link: &mut Link<T>) -> Box<Node<T>> {
    let node = link.as_mut().expect("take_rightmost requires an occupied link");
    if node.right.is_some() {
        return take_rightmost(&mut node.right);
    }
    let mut rightmost = link.take().expect("occupied link checked above");
    *link = rightmost.left.take();
    rightmost
}

fn find_in<'a, T: Ord>(link: &'a Link<T>, value: &T) -> Option<&'a Node<T>> {
    let node = link.as_deref()?;
    match value.cmp(&node.data) {
        Ordering::Less => find_in(&node.left, value),
        Ordering::Equal => Some(node),
        Ordering::Greater => find_in(&node.right, value),
    }
}

fn pre_order_in<'a, T, R, F>(link: &'a Link<T>, visit: &mut F, results: &mut Vec<R>)
where
    F: FnMut(&'a Node<T>) -> R,
{
    if let Some(node) = link.as_deref() {
        results.push(visit(node));
        pre_order_in(&node.left, visit, results);
        pre_order_in(&node.right, visit, results);
    }
}

fn in_order_in<'a, T, R, F>(link: &'a Link<T>, visit: &mut F, results: &mut Vec<R>)
where
    F: FnMut(&'a Node<T>) -> R,
{
    if let Some(node) = link.as_deref() {
        in_order_in(&node.left, visit, results);
        results.push(visit(node));
        in_order_in(&node.right, visit, results);
    }
}

fn post_order_in<'a, T, R, F>(link: &'a Link<T>, visit: &mut F, results: &mut Vec<R>)
where
    F: FnMut(&'a Node<T>) -> R,
{
    if let Some(node) = link.as_deref() {
        post_order_in(&node.left, visit, results);
        post_order_in(&node.right, visit, results);
        results.push(visit(node));
    }
}

/// Moves the subtree's values into `values` in sorted order, consuming the
/// nodes as it goes.
fn drain_in_order<T>(link: Link<T>, values: &mut Vec<T>) {
    if let Some(mut node) = link {
        drain_in_order(node.left.take(), values);
        let right = node.right.take();
        values.push(node.data);
        drain_in_order(right, values);
    }
}

/// `Some(height)` when the subtree is balanced at every node, `None`
/// otherwise. An absent subtree has height -1.
fn balanced_height<T>(link: &Link<T>) -> Option<i64> {
    let node = match link.as_deref() {
        None => return Some(-1),
        Some(node) => node,
    };
    let left = balanced_height(&node.left)?;
    let right = balanced_height(&node.right)?;
    if (left - right).abs() <= 1 {
        Some(1 + left.max(right))
    } else {
        None
    }
}
