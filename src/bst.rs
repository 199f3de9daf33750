//! Binary search tree that performs no rebalancing.
//!
//! Keys are placed exactly where the descent ends, so inserting keys in sorted order degenerates
//! the tree into a chain and makes every operation linear in the number of keys. There is no
//! depth guarantee: recursion depth during insertion and search is bounded only by the height of
//! the tree.

use crate::balance::Balance;
use crate::error::Result;
use crate::node::{Node, Tree};
use crate::search_tree::SearchTree;

/// Balance metadata of a node in an unbalanced tree. It carries nothing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Unbalanced;

impl Balance for Unbalanced {
    fn leaf() -> Self {
        Unbalanced
    }

    fn rebalance<T>(node: Box<Node<T, Self>>) -> Box<Node<T, Self>> {
        node
    }

    fn validate<T>(_tree: &Tree<T, Self>) -> Result<()> {
        Ok(())
    }
}

/// An ordered multiset implemented using an unbalanced binary search tree.
///
/// # Examples
/// ```
/// use search_trees::bst::Bst;
///
/// let mut tree = Bst::new();
/// tree.insert(5);
/// tree.insert(3);
/// tree.insert(8);
///
/// assert_eq!(tree.len(), 3);
/// assert_eq!(tree.search(&3).map(|node| *node.key()), Some(3));
/// assert!(tree.search(&6).is_none());
/// ```
pub type Bst<T> = SearchTree<T, Unbalanced>;
