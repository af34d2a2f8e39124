//! An unbalanced BST of keys. Keys are kept in the order given by their `Ord`
//! implementation and inserting a key that is already present does nothing.
//!
//! Every walk over the tree is a loop or uses an explicit stack so a tree
//! built from already-sorted keys (a chain as tall as the number of keys)
//! can't overflow the call stack.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::OrderedTree;
//!
//! let mut tree = OrderedTree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.contains(&1));
//! assert_eq!(tree.height(), 0);
//!
//! tree.insert(1);
//! assert!(tree.contains(&1));
//! assert_eq!(tree.height(), 1);
//!
//! // Inserting the same key again leaves the tree alone.
//! tree.insert(1);
//! assert_eq!(tree.len(), 1);
//! assert_eq!(tree.height(), 1);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::iter::FromIterator;

use crate::iter::{Direction, Iter};

/// A Binary Search Tree over keys of type `K`. This can be used for inserting
/// keys, checking whether a key is present, and visiting the keys in
/// ascending or descending order. No rebalancing is done.
pub struct OrderedTree<K> {
    root: Option<Box<Node<K>>>,
    len: usize,
}

impl<K> Default for OrderedTree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Drop for OrderedTree<K> {
    // The drop glue for `Box<Node>` recurses once per level which a degenerate tree would turn
    // into a stack overflow. Detach every child before its parent is dropped instead.
    fn drop(&mut self) {
        let mut pending: Vec<Box<Node<K>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}

impl<K> Clone for OrderedTree<K>
where
    K: Clone + Ord,
{
    /// Inserting keys in pre-order rebuilds exactly the same shape.
    fn clone(&self) -> Self {
        let mut tree = Self::new();
        let mut stack: Vec<&Node<K>> = self.root().into_iter().collect();
        while let Some(node) = stack.pop() {
            tree.insert(node.key.clone());
            // Right first so the left subtree is popped (and inserted) first.
            stack.extend(node.right());
            stack.extend(node.left());
        }
        tree
    }
}

impl<K> fmt::Debug for OrderedTree<K>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.ascending()).finish()
    }
}

impl<K> FromIterator<K> for OrderedTree<K>
where
    K: Ord,
{
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<K> Extend<K> for OrderedTree<K>
where
    K: Ord,
{
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<'a, K> IntoIterator for &'a OrderedTree<K> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.ascending()
    }
}

impl<K> OrderedTree<K> {
    /// Generate a new, empty `OrderedTree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Returns how many distinct keys are stored in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no key has been inserted yet.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Inserts the given key into the tree. If an equal key is already stored,
    /// the tree is left unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    ///
    /// tree.insert(2);
    /// tree.insert(1);
    /// tree.insert(2);
    ///
    /// assert_eq!(tree.len(), 2);
    /// assert!(tree.contains(&1));
    /// assert!(tree.contains(&2));
    /// ```
    pub fn insert(&mut self, key: K)
    where
        K: Ord,
    {
        let mut slot = &mut self.root;
        loop {
            match slot {
                None => {
                    *slot = Some(Node::new_boxed(key));
                    self.len += 1;
                    return;
                }
                Some(node) => match key.cmp(&node.key) {
                    Ordering::Less => slot = &mut node.left,
                    Ordering::Equal => return,
                    Ordering::Greater => slot = &mut node.right,
                },
            }
        }
    }

    /// Returns whether a key equal to the given one is stored in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// tree.insert(1);
    ///
    /// assert!(tree.contains(&1));
    /// assert!(!tree.contains(&42));
    /// ```
    pub fn contains(&self, key: &K) -> bool
    where
        K: Ord,
    {
        let mut current = self.root();
        while let Some(node) = current {
            current = match key.cmp(&node.key) {
                Ordering::Less => node.left(),
                Ordering::Equal => return true,
                Ordering::Greater => node.right(),
            };
        }
        false
    }

    /// Returns an iterator over the keys from smallest to largest. Each call starts a fresh
    /// traversal of the tree as it currently is.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let tree: OrderedTree<_> = vec![2, 3, 1].into_iter().collect();
    /// let keys: Vec<_> = tree.ascending().collect();
    ///
    /// assert_eq!(keys, [&1, &2, &3]);
    /// ```
    pub fn ascending(&self) -> Iter<'_, K> {
        Iter::new(self.root(), self.len, Direction::Ascending)
    }

    /// Returns an iterator over the keys from largest to smallest. This yields exactly the
    /// reverse of [`ascending`][Self::ascending].
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let tree: OrderedTree<_> = vec![2, 3, 1].into_iter().collect();
    /// let keys: Vec<_> = tree.descending().collect();
    ///
    /// assert_eq!(keys, [&3, &2, &1]);
    /// ```
    pub fn descending(&self) -> Iter<'_, K> {
        Iter::new(self.root(), self.len, Direction::Descending)
    }

    /// Gets the height of this tree, i.e. how many nodes are on the longest path from the root
    /// to a leaf. An empty tree has a height of 0 and a tree holding a single key has a height
    /// of 1.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// assert_eq!(tree.height(), 0);
    ///
    /// tree.insert(2);
    /// assert_eq!(tree.height(), 1);
    ///
    /// // Both children hang off the root so this is still only two levels.
    /// tree.insert(1);
    /// tree.insert(3);
    /// assert_eq!(tree.height(), 2);
    /// ```
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack: Vec<(&Node<K>, usize)> =
            self.root().map(|root| (root, 1)).into_iter().collect();
        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            stack.extend(node.left().map(|left| (left, depth + 1)));
            stack.extend(node.right().map(|right| (right, depth + 1)));
        }
        height
    }

    /// Returns the smallest key in the tree, if there is one.
    pub fn min(&self) -> Option<&K> {
        let mut node = self.root()?;
        while let Some(left) = node.left() {
            node = left;
        }
        Some(&node.key)
    }

    /// Returns the largest key in the tree, if there is one.
    pub fn max(&self) -> Option<&K> {
        let mut node = self.root()?;
        while let Some(right) = node.right() {
            node = right;
        }
        Some(&node.key)
    }

    fn root(&self) -> Option<&Node<K>> {
        self.root.as_deref()
    }
}

/// A single stored key. Each child is owned by exactly one parent and there is no pointer back
/// up the tree.
pub(crate) struct Node<K> {
    pub(crate) key: K,
    left: Option<Box<Node<K>>>,
    right: Option<Box<Node<K>>>,
}

impl<K> Node<K> {
    fn new_boxed(key: K) -> Box<Self> {
        Box::new(Node {
            key,
            left: None,
            right: None,
        })
    }

    pub(crate) fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    pub(crate) fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }
}
