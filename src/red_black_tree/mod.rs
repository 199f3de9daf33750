//! Self-balancing binary search tree that uses a color bit to ensure that the tree remains
//! approximately balanced during insertions.
//!
//! The tree is a left-leaning red black tree: a red link joins two nodes that together form a
//! 3-node of the equivalent 2-3 tree, and only left links may be red.

mod node;
mod tree;

pub use self::node::Color;
use crate::search_tree::SearchTree;

/// An ordered multiset implemented using a left-leaning red black tree.
///
/// # Examples
/// ```
/// use search_trees::red_black_tree::{Color, RedBlackTree};
///
/// let mut tree = RedBlackTree::new();
/// tree.insert(1);
/// tree.insert(2);
///
/// let root = tree.root().unwrap();
/// assert_eq!(*root.key(), 2);
/// assert_eq!(root.color(), Color::Black);
/// assert_eq!(root.left().map(|node| node.color()), Some(Color::Red));
/// ```
pub type RedBlackTree<T> = SearchTree<T, Color>;
