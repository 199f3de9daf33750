use crate::balance::{Balance, Side};

/// An owned, possibly empty subtree.
pub type Tree<T, B> = Option<Box<Node<T, B>>>;

/// A struct representing an internal node of a binary search tree.
///
/// `B` is the balance metadata carried by the node: nothing for an unbalanced tree, a height for
/// an avl tree and a color for a red black tree.
#[derive(Debug)]
pub struct Node<T, B> {
    pub(crate) key: T,
    pub(crate) balance: B,
    pub(crate) left: Tree<T, B>,
    pub(crate) right: Tree<T, B>,
}

impl<T, B> Node<T, B>
where
    B: Balance,
{
    pub(crate) fn new(key: T) -> Self {
        Node {
            key,
            balance: B::leaf(),
            left: None,
            right: None,
        }
    }
}

impl<T, B> Node<T, B> {
    /// Returns the key stored in this node.
    pub fn key(&self) -> &T {
        &self.key
    }

    /// Returns the balance metadata of this node.
    pub fn balance(&self) -> &B {
        &self.balance
    }

    /// Returns the left child of this node, if any.
    pub fn left(&self) -> Option<&Node<T, B>> {
        self.left.as_ref().map(|node| &**node)
    }

    /// Returns the right child of this node, if any.
    pub fn right(&self) -> Option<&Node<T, B>> {
        self.right.as_ref().map(|node| &**node)
    }

    pub(crate) fn child_mut(&mut self, side: Side) -> Option<&mut Node<T, B>> {
        match side {
            Side::Left => self.left.as_mut().map(|node| &mut **node),
            Side::Right => self.right.as_mut().map(|node| &mut **node),
        }
    }
}
