use crate::avl_tree::node::Height;
use crate::balance::{Balance, Side};
use crate::error::{Error, Result};
use crate::node::{Node, Tree};
use crate::tree::{rotate_left, rotate_right};
use std::cmp;

impl Balance for Height {
    fn leaf() -> Self {
        Height(1)
    }

    fn rebalance<T>(mut node: Box<Node<T, Self>>) -> Box<Node<T, Self>> {
        node.update();

        if node.balance_factor() > 1 {
            if let Some(child) = node.left.take() {
                if child.balance_factor() < 0 {
                    node.left = Some(rotate_left(child));
                } else {
                    node.left = Some(child);
                }
            }
            node = rotate_right(node);
        } else if node.balance_factor() < -1 {
            if let Some(child) = node.right.take() {
                if child.balance_factor() > 0 {
                    node.right = Some(rotate_right(child));
                } else {
                    node.right = Some(child);
                }
            }
            node = rotate_left(node);
        }

        node
    }

    // the demoted child is refreshed before the new root
    fn rotated<T>(node: &mut Node<T, Self>, side: Side) {
        if let Some(child) = node.child_mut(side) {
            child.update();
        }
        node.update();
    }

    fn validate<T>(tree: &Tree<T, Self>) -> Result<()> {
        check_heights(tree).map(|_| ())
    }
}

fn check_heights<T>(tree: &Tree<T, Height>) -> Result<usize> {
    let node = match tree {
        Some(ref node) => node,
        None => return Ok(0),
    };

    let left = check_heights(&node.left)?;
    let right = check_heights(&node.right)?;
    let expected = cmp::max(left, right) + 1;
    if node.height() != expected {
        return Err(Error::HeightMismatch {
            expected,
            actual: node.height(),
        });
    }

    let balance_factor = (left as i64) - (right as i64);
    if balance_factor.abs() > 1 {
        return Err(Error::Unbalanced { balance_factor });
    }

    Ok(expected)
}
