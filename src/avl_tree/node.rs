use crate::node::{Node, Tree};
use std::cmp;

/// Balance metadata of an avl node: the number of nodes on the longest path from the node down
/// to a leaf. A leaf has height one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Height(pub(crate) usize);

fn height<T>(tree: &Tree<T, Height>) -> usize {
    match tree {
        None => 0,
        Some(ref node) => node.balance.0,
    }
}

impl<T> Node<T, Height> {
    /// Returns the stored height of the subtree rooted at this node.
    pub fn height(&self) -> usize {
        self.balance.0
    }

    /// Returns the height of the left subtree minus the height of the right subtree.
    pub fn balance_factor(&self) -> i64 {
        (height(&self.left) as i64) - (height(&self.right) as i64)
    }

    pub(crate) fn update(&mut self) {
        self.balance.0 = cmp::max(height(&self.left), height(&self.right)) + 1;
    }
}
