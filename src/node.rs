//! The tree's storage unit.
//!
//! A [`Node`] owns one value and up to two children. Child links are owned
//! `Box`es, so the node graph is a strict ownership hierarchy: dropping a
//! node drops its whole subtree and no node is ever reachable from two
//! parents.

/// An owned, possibly-absent child link.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// A single node of a [`Tree`](crate::Tree): one value plus two optional
/// child links.
///
/// Nodes are created by the tree itself (during construction and insertion)
/// and handed out by reference from [`Tree::find`](crate::Tree::find) and the
/// traversal visitors. They cannot be built or restructured from outside the
/// crate, which is what keeps the tree-wide ordering invariant safe.
#[derive(Debug, Clone)]
pub struct Node<T> {
    pub(crate) data: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

impl<T> Node<T> {
    /// Creates a childless node holding `data`.
    pub(crate) fn new(data: T) -> Self {
        Self {
            data,
            left: None,
            right: None,
        }
    }

    /// The value stored in this node.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let tree = Tree::from_values(vec![2, 1, 3]);
    /// let node = tree.find(&2).unwrap();
    /// assert_eq!(node.value(), &2);
    /// ```
    pub fn value(&self) -> &T {
        &self.data
    }

    /// This node's left child, if any.
    pub fn left(&self) -> Option<&Node<T>> {
        self.left.as_deref()
    }

    /// This node's right child, if any.
    pub fn right(&self) -> Option<&Node<T>> {
        self.right.as_deref()
    }

    /// Whether this node has no children.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let tree = Tree::from_values(vec![2, 1, 3]);
    /// assert!(!tree.find(&2).unwrap().is_leaf());
    /// assert!(tree.find(&1).unwrap().is_leaf());
    /// ```
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// The height of the subtree rooted at this node: the number of edges on
    /// the longest downward path. A leaf has height 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let tree = Tree::from_values(vec![0, 1, 2, 3, 4, 5, 6]);
    /// assert_eq!(tree.find(&3).unwrap().height(), 2);
    /// assert_eq!(tree.find(&0).unwrap().height(), 0);
    /// ```
    pub fn height(&self) -> usize {
        // `link_height` is -1 for an absent child, so a node with a single
        // child still gets a well-defined height.
        (1 + link_height(&self.left).max(link_height(&self.right))) as usize
    }
}

/// Height of a possibly-absent subtree. An absent child counts as -1 so that
/// a leaf comes out at 0 and a single-child node at `child + 1`.
pub(crate) fn link_height<T>(link: &Link<T>) -> i64 {
    match link.as_deref() {
        None => -1,
        Some(node) => 1 + link_height(&node.left).max(link_height(&node.right)),
    }
}
