use std::error;
use std::fmt;
use std::result;

/// An enum representing the first invariant violation found when validating a tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    /// An in-order traversal produced a key smaller than its predecessor.
    OutOfOrder,
    /// The number of reachable nodes differs from the tracked length.
    LengthMismatch { expected: usize, actual: usize },
    /// A stored avl height differs from the height computed from its children.
    HeightMismatch { expected: usize, actual: usize },
    /// The heights of the two subtrees of an avl node differ by more than one.
    Unbalanced { balance_factor: i64 },
    /// The root of a red black tree is red.
    RedRoot,
    /// A red black node has a red right child.
    RedRightChild,
    /// A red node of a red black tree has a red left child.
    DoubleRed,
    /// Two sibling subtrees of a red black node have different black heights.
    BlackImbalance { left: usize, right: usize },
}

pub type Result<T> = result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::OutOfOrder => write!(f, "keys are out of order"),
            Error::LengthMismatch { expected, actual } => {
                write!(f, "expected {} nodes, found {}", expected, actual)
            },
            Error::HeightMismatch { expected, actual } => {
                write!(f, "expected stored height {}, found {}", expected, actual)
            },
            Error::Unbalanced { balance_factor } => {
                write!(f, "node has balance factor {}", balance_factor)
            },
            Error::RedRoot => write!(f, "root is red"),
            Error::RedRightChild => write!(f, "node has a red right child"),
            Error::DoubleRed => write!(f, "red node has a red left child"),
            Error::BlackImbalance { left, right } => {
                write!(f, "black heights differ: left {}, right {}", left, right)
            },
        }
    }
}

impl error::Error for Error {}
