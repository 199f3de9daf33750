//! Ordered-key containers backed by binary search trees.
//!
//! Three trees share one node layout and one recursive insertion routine, and differ only in
//! the balance metadata attached to each node and the rebalancing step applied on the way back
//! up from an insertion:
//!
//! - [`bst::Bst`] performs no rebalancing.
//! - [`avl_tree::AvlTree`] keeps the heights of sibling subtrees within one of each other.
//! - [`red_black_tree::RedBlackTree`] keeps a left-leaning red black coloring.
//!
//! All three accept duplicate keys: a key that is not less than a node's key is placed in that
//! node's right subtree.
//!
//! # Examples
//! ```
//! use search_trees::red_black_tree::RedBlackTree;
//!
//! let mut tree = RedBlackTree::new();
//! for key in vec![5, 3, 8, 1, 4, 7, 9] {
//!     tree.insert(key);
//! }
//!
//! assert!(tree.search(&4).is_some());
//! assert!(tree.search(&6).is_none());
//! assert!(tree.validate().is_ok());
//! ```

mod balance;
mod error;
mod node;
mod search_tree;
mod tree;

pub mod avl_tree;
pub mod bst;
pub mod red_black_tree;

pub use crate::balance::{Balance, Side};
pub use crate::error::{Error, Result};
pub use crate::node::{Node, Tree};
pub use crate::search_tree::SearchTree;
