use crate::node::{Node, Tree};
use log::trace;

/// An enum representing the color of a node in a red black tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Color {
    Red,
    Black,
}

pub fn is_red<T>(tree: &Tree<T, Color>) -> bool {
    match tree {
        None => false,
        Some(ref node) => node.balance == Color::Red,
    }
}

impl<T> Node<T, Color> {
    /// Returns the color of the link from this node's parent to this node.
    pub fn color(&self) -> Color {
        self.balance
    }

    /// Returns `true` if this node is red.
    pub fn is_red(&self) -> bool {
        self.balance == Color::Red
    }

    // splits a temporary 4-node by passing its middle key up to the parent
    pub(crate) fn flip_colors(&mut self) {
        trace!("splitting 4-node");
        self.balance = Color::Red;
        if let Some(ref mut child) = self.left {
            child.balance = Color::Black;
        }
        if let Some(ref mut child) = self.right {
            child.balance = Color::Black;
        }
    }
}
