use crate::balance::{Balance, Side};
use crate::error::{Error, Result};
use crate::node::{Node, Tree};
use log::trace;
use std::cmp;

pub fn height<T, B>(tree: &Tree<T, B>) -> usize {
    match tree {
        None => 0,
        Some(ref node) => cmp::max(height(&node.left), height(&node.right)) + 1,
    }
}

pub fn len<T, B>(tree: &Tree<T, B>) -> usize {
    match tree {
        None => 0,
        Some(ref node) => len(&node.left) + len(&node.right) + 1,
    }
}

// precondition: the node has a right child
pub fn rotate_left<T, B>(mut node: Box<Node<T, B>>) -> Box<Node<T, B>>
where
    B: Balance,
{
    trace!("rotating left");
    let mut child = match node.right.take() {
        Some(child) => child,
        None => unreachable!(),
    };
    node.right = child.left.take();
    child.left = Some(node);
    B::rotated(&mut child, Side::Left);
    child
}

// precondition: the node has a left child
pub fn rotate_right<T, B>(mut node: Box<Node<T, B>>) -> Box<Node<T, B>>
where
    B: Balance,
{
    trace!("rotating right");
    let mut child = match node.left.take() {
        Some(child) => child,
        None => unreachable!(),
    };
    node.left = child.right.take();
    child.right = Some(node);
    B::rotated(&mut child, Side::Right);
    child
}

/// Inserts `key` into `tree` and returns the new root of the tree. Keys that are not less than a
/// node's key are routed right, so duplicates are kept as distinct nodes.
pub fn insert<T, B>(tree: Tree<T, B>, key: T) -> Box<Node<T, B>>
where
    T: Ord,
    B: Balance,
{
    let mut node = match tree {
        Some(node) => node,
        None => return Box::new(Node::new(key)),
    };

    if key < node.key {
        node.left = Some(insert(node.left.take(), key));
    } else {
        node.right = Some(insert(node.right.take(), key));
    }

    B::rebalance(node)
}

pub fn search<'a, T, B>(tree: &'a Tree<T, B>, key: &T) -> Option<&'a Node<T, B>>
where
    T: Ord,
{
    tree.as_ref().and_then(|node| {
        match key.cmp(&node.key) {
            cmp::Ordering::Less => search(&node.left, key),
            cmp::Ordering::Greater => search(&node.right, key),
            cmp::Ordering::Equal => Some(&**node),
        }
    })
}

fn check_order<'a, T, B>(tree: &'a Tree<T, B>, prev: &mut Option<&'a T>) -> Result<()>
where
    T: Ord,
{
    if let Some(node) = tree {
        check_order(&node.left, prev)?;
        if let Some(prev_key) = *prev {
            if node.key < *prev_key {
                return Err(Error::OutOfOrder);
            }
        }
        *prev = Some(&node.key);
        check_order(&node.right, prev)?;
    }
    Ok(())
}

/// Checks that an in-order traversal of `tree` yields non-decreasing keys.
pub fn validate_order<T, B>(tree: &Tree<T, B>) -> Result<()>
where
    T: Ord,
{
    check_order(tree, &mut None)
}
