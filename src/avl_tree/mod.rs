//! Self-balancing binary search tree where the heights of the two child subtrees of any node
//! differ by at most one.

mod node;
mod tree;

pub use self::node::Height;
use crate::search_tree::SearchTree;

/// An ordered multiset implemented using an avl tree.
///
/// An avl tree is a self-balancing binary search tree that maintains the invariant that the
/// heights of two child subtrees of any node differ by at most one.
///
/// # Examples
/// ```
/// use search_trees::avl_tree::AvlTree;
///
/// let mut tree = AvlTree::new();
/// for key in 1..=5 {
///     tree.insert(key);
/// }
///
/// assert_eq!(tree.height(), 3);
/// assert_eq!(tree.root().map(|node| *node.key()), Some(2));
/// assert_eq!(tree.root().map(|node| node.height()), Some(3));
/// ```
pub type AvlTree<T> = SearchTree<T, Height>;
