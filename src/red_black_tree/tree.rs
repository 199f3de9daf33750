use crate::balance::{Balance, Side};
use crate::error::{Error, Result};
use crate::node::{Node, Tree};
use crate::red_black_tree::node::{is_red, Color};
use crate::tree::{rotate_left, rotate_right};
use log::trace;
use std::mem;

impl Balance for Color {
    fn leaf() -> Self {
        Color::Red
    }

    fn rebalance<T>(mut node: Box<Node<T, Self>>) -> Box<Node<T, Self>> {
        if is_red(&node.right) && !is_red(&node.left) {
            node = rotate_left(node);
        }

        let should_rotate = {
            if let Some(ref child) = node.left {
                child.is_red() && is_red(&child.left)
            } else {
                false
            }
        };
        if should_rotate {
            node = rotate_right(node);
        }

        if is_red(&node.left) && is_red(&node.right) {
            node.flip_colors();
        }

        node
    }

    fn rotated<T>(node: &mut Node<T, Self>, side: Side) {
        let color = match node.child_mut(side) {
            Some(child) => mem::replace(&mut child.balance, Color::Red),
            None => return,
        };
        node.balance = color;
    }

    fn fix_root<T>(root: &mut Node<T, Self>) {
        if root.is_red() {
            trace!("recoloring root black");
            root.balance = Color::Black;
        }
    }

    fn validate<T>(tree: &Tree<T, Self>) -> Result<()> {
        if is_red(tree) {
            return Err(Error::RedRoot);
        }
        black_height(tree).map(|_| ())
    }
}

fn black_height<T>(tree: &Tree<T, Color>) -> Result<usize> {
    let node = match tree {
        Some(ref node) => node,
        None => return Ok(0),
    };

    if is_red(&node.right) {
        return Err(Error::RedRightChild);
    }
    if node.is_red() && is_red(&node.left) {
        return Err(Error::DoubleRed);
    }

    let left = black_height(&node.left)?;
    let right = black_height(&node.right)?;
    if left != right {
        return Err(Error::BlackImbalance { left, right });
    }

    Ok(if node.is_red() { left } else { left + 1 })
}

#[cfg(test)]
mod tests {
    use super::Color;
    use crate::balance::Balance;
    use crate::error::Error;
    use crate::node::Node;
    use crate::red_black_tree::RedBlackTree;

    fn node(key: u32, color: Color) -> Box<Node<u32, Color>> {
        let mut node = Box::new(Node::new(key));
        node.balance = color;
        node
    }

    #[test]
    fn test_single_insert_is_black() {
        let mut tree = RedBlackTree::new();
        tree.insert(1);
        assert_eq!(tree.root().map(|node| node.color()), Some(Color::Black));
    }

    #[test]
    fn test_lean_left() {
        let tree: RedBlackTree<u32> = vec![1, 2].into_iter().collect();
        let root = tree.root().unwrap();
        assert_eq!(*root.key(), 2);
        assert!(root.right().is_none());
        assert!(root.left().unwrap().is_red());
    }

    #[test]
    fn test_split_four_node() {
        let tree: RedBlackTree<u32> = vec![2, 1, 3].into_iter().collect();
        let root = tree.root().unwrap();
        assert_eq!(*root.key(), 2);
        assert_eq!(root.color(), Color::Black);
        assert_eq!(root.left().map(|node| node.color()), Some(Color::Black));
        assert_eq!(root.right().map(|node| node.color()), Some(Color::Black));
    }

    #[test]
    fn test_double_red_left() {
        let tree: RedBlackTree<u32> = vec![3, 2, 1].into_iter().collect();
        let root = tree.root().unwrap();
        assert_eq!(*root.key(), 2);
        assert_eq!(root.left().map(|node| *node.key()), Some(1));
        assert_eq!(root.right().map(|node| *node.key()), Some(3));
        assert_eq!(tree.validate(), Ok(()));
    }

    #[test]
    fn test_ascending_insert() {
        let tree: RedBlackTree<u32> = (1..=5).collect();
        let root = tree.root().unwrap();
        assert_eq!(root.color(), Color::Black);
        assert_eq!(*root.key(), 4);
        assert_eq!(root.left().map(|node| (*node.key(), node.color())), Some((2, Color::Red)));
        assert_eq!(root.right().map(|node| (*node.key(), node.color())), Some((5, Color::Black)));
        assert_eq!(tree.validate(), Ok(()));
    }

    #[test]
    fn test_validate_red_root() {
        assert_eq!(Color::validate(&Some(node(1, Color::Red))), Err(Error::RedRoot));
    }

    #[test]
    fn test_validate_red_right_child() {
        let mut root = node(1, Color::Black);
        root.right = Some(node(2, Color::Red));
        assert_eq!(Color::validate(&Some(root)), Err(Error::RedRightChild));
    }

    #[test]
    fn test_validate_double_red() {
        let mut child = node(2, Color::Red);
        child.left = Some(node(1, Color::Red));
        let mut root = node(3, Color::Black);
        root.left = Some(child);
        assert_eq!(Color::validate(&Some(root)), Err(Error::DoubleRed));
    }

    #[test]
    fn test_validate_black_imbalance() {
        let mut root = node(2, Color::Black);
        root.left = Some(node(1, Color::Black));
        assert_eq!(
            Color::validate(&Some(root)),
            Err(Error::BlackImbalance { left: 1, right: 0 }),
        );
    }
}
