use crate::balance::Balance;
use crate::error::{Error, Result};
use crate::node::{Node, Tree};
use crate::tree;
use std::iter::FromIterator;

/// An ordered multiset backed by a binary search tree whose shape is maintained by the balance
/// strategy `B`.
///
/// Duplicate keys are kept as distinct nodes: a key that is not less than a node's key is always
/// placed in that node's right subtree. Use the aliases [`Bst`](crate::bst::Bst),
/// [`AvlTree`](crate::avl_tree::AvlTree) and [`RedBlackTree`](crate::red_black_tree::RedBlackTree)
/// to pick a strategy.
///
/// # Examples
/// ```
/// use search_trees::avl_tree::AvlTree;
///
/// let mut tree = AvlTree::new();
/// tree.insert(1);
/// tree.insert(2);
/// tree.insert(3);
///
/// assert_eq!(tree.len(), 3);
/// assert_eq!(tree.root().map(|node| *node.key()), Some(2));
/// assert!(tree.contains(&3));
/// assert!(tree.validate().is_ok());
/// ```
#[derive(Debug)]
pub struct SearchTree<T, B> {
    root: Tree<T, B>,
    len: usize,
}

impl<T, B> SearchTree<T, B>
where
    T: Ord,
    B: Balance,
{
    /// Constructs a new, empty `SearchTree<T, B>`.
    ///
    /// # Examples
    /// ```
    /// use search_trees::red_black_tree::RedBlackTree;
    ///
    /// let tree: RedBlackTree<u32> = RedBlackTree::new();
    /// assert!(tree.is_empty());
    /// ```
    pub fn new() -> Self {
        SearchTree { root: None, len: 0 }
    }

    /// Inserts a key into the tree. Every insertion creates a new node, including insertions of
    /// keys that are already present.
    ///
    /// # Examples
    /// ```
    /// use search_trees::bst::Bst;
    ///
    /// let mut tree = Bst::new();
    /// tree.insert(1);
    /// tree.insert(1);
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn insert(&mut self, key: T) {
        let mut root = tree::insert(self.root.take(), key);
        B::fix_root(&mut root);
        self.root = Some(root);
        self.len += 1;
    }

    /// Returns the topmost node whose key is equal to `key`, or `None` if no such node exists.
    ///
    /// # Examples
    /// ```
    /// use search_trees::red_black_tree::RedBlackTree;
    ///
    /// let mut tree = RedBlackTree::new();
    /// tree.insert(1);
    /// assert_eq!(tree.search(&1).map(|node| *node.key()), Some(1));
    /// assert!(tree.search(&0).is_none());
    /// ```
    pub fn search(&self, key: &T) -> Option<&Node<T, B>> {
        tree::search(&self.root, key)
    }

    /// Checks if a key exists in the tree.
    ///
    /// # Examples
    /// ```
    /// use search_trees::avl_tree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// tree.insert(1);
    /// assert!(!tree.contains(&0));
    /// assert!(tree.contains(&1));
    /// ```
    pub fn contains(&self, key: &T) -> bool {
        self.search(key).is_some()
    }

    /// Returns the root node of the tree, or `None` if the tree is empty.
    pub fn root(&self) -> Option<&Node<T, B>> {
        self.root.as_ref().map(|node| &**node)
    }

    /// Returns the number of nodes in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the tree is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of nodes on the longest path from the root to a leaf. An empty tree has
    /// height zero.
    ///
    /// # Examples
    /// ```
    /// use search_trees::bst::Bst;
    ///
    /// let mut tree = Bst::new();
    /// assert_eq!(tree.height(), 0);
    /// tree.insert(1);
    /// tree.insert(2);
    /// assert_eq!(tree.height(), 2);
    /// ```
    pub fn height(&self) -> usize {
        tree::height(&self.root)
    }

    /// Removes every key from the tree.
    pub fn clear(&mut self) {
        self.root = None;
        self.len = 0;
    }

    /// Checks the ordering invariant and the invariant maintained by the balance strategy,
    /// returning the first violation found.
    ///
    /// # Examples
    /// ```
    /// use search_trees::red_black_tree::RedBlackTree;
    ///
    /// let tree: RedBlackTree<u32> = (0..100).collect();
    /// assert_eq!(tree.validate(), Ok(()));
    /// ```
    pub fn validate(&self) -> Result<()> {
        let actual = tree::len(&self.root);
        if actual != self.len {
            return Err(Error::LengthMismatch { expected: self.len, actual });
        }
        tree::validate_order(&self.root)?;
        B::validate(&self.root)
    }
}

impl<T, B> Default for SearchTree<T, B>
where
    T: Ord,
    B: Balance,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, B> Extend<T> for SearchTree<T, B>
where
    T: Ord,
    B: Balance,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<T, B> FromIterator<T> for SearchTree<T, B>
where
    T: Ord,
    B: Balance,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}
