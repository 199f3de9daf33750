use crate::error::Result;
use crate::node::{Node, Tree};

/// The side of a node on which a child sits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// Balance metadata for a single binary search tree node, together with the rule that restores
/// the tree's invariant after an insertion.
///
/// The insertion skeleton in the tree module descends to a leaf, attaches a node built with
/// `leaf()`, and calls `rebalance` once per ancestor on the way back up. Implementations only
/// describe the local step.
///
/// This trait is sealed: the strategies are [`Unbalanced`](crate::bst::Unbalanced),
/// [`Height`](crate::avl_tree::Height) and [`Color`](crate::red_black_tree::Color).
///
/// ```compile_fail
/// use search_trees::{Balance, Node, Result, Tree};
///
/// struct Custom;
///
/// impl Balance for Custom {
///     fn leaf() -> Self {
///         Custom
///     }
///
///     fn rebalance<T>(node: Box<Node<T, Self>>) -> Box<Node<T, Self>> {
///         node
///     }
///
///     fn validate<T>(_tree: &Tree<T, Self>) -> Result<()> {
///         Ok(())
///     }
/// }
/// ```
pub trait Balance: Sized + private::Sealed {
    /// Returns the metadata of a freshly inserted node.
    fn leaf() -> Self;

    /// Restores the invariant of the subtree rooted at `node` after one of its subtrees grew,
    /// returning the new root of the subtree.
    fn rebalance<T>(node: Box<Node<T, Self>>) -> Box<Node<T, Self>>;

    /// Fixes up metadata after a rotation made `node` the root of its subtree. The node it
    /// replaced is now its child on `side`.
    fn rotated<T>(_node: &mut Node<T, Self>, _side: Side) {}

    /// Runs once on the root at the end of every top-level insertion.
    fn fix_root<T>(_root: &mut Node<T, Self>) {}

    /// Checks the invariants this metadata is responsible for.
    fn validate<T>(tree: &Tree<T, Self>) -> Result<()>;
}

pub(crate) mod private {
    pub trait Sealed {}

    impl Sealed for crate::bst::Unbalanced {}
    impl Sealed for crate::avl_tree::Height {}
    impl Sealed for crate::red_black_tree::Color {}
}
