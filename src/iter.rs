//! Borrowing iterators over the keys of an [`OrderedTree`][crate::OrderedTree].
//!
//! Instead of recursing into subtrees the iterator keeps a stack of the nodes
//! whose key hasn't been yielded yet. After yielding a node it pushes the
//! "spine" of that node's far subtree, i.e. the path found by repeatedly
//! following the near child. Ascending order follows left children and
//! descending order follows right children; otherwise the two are identical.

use std::fmt;
use std::iter::FusedIterator;

use crate::tree::Node;

/// Which end of the tree an [`Iter`] starts from.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Direction {
    /// In-order: left subtree, key, right subtree.
    Ascending,
    /// Reverse in-order: right subtree, key, left subtree.
    Descending,
}

/// An iterator over the keys of an [`OrderedTree`][crate::OrderedTree].
///
/// Created by [`OrderedTree::ascending`][crate::OrderedTree::ascending] and
/// [`OrderedTree::descending`][crate::OrderedTree::descending]. Holding one borrows the tree so
/// it can't be modified mid-traversal; to start over, ask the tree for a new one.
pub struct Iter<'a, K> {
    stack: Vec<&'a Node<K>>,
    direction: Direction,
    remaining: usize,
}

impl<'a, K> Iter<'a, K> {
    pub(crate) fn new(root: Option<&'a Node<K>>, len: usize, direction: Direction) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            direction,
            remaining: len,
        };
        iter.push_spine(root);
        iter
    }

    /// Pushes `node` and every node reached from it by following the near child.
    fn push_spine(&mut self, mut node: Option<&'a Node<K>>) {
        while let Some(current) = node {
            self.stack.push(current);
            node = match self.direction {
                Direction::Ascending => current.left(),
                Direction::Descending => current.right(),
            };
        }
    }
}

// Manual implementation so cloning the iterator doesn't require `K: Clone`.
impl<'a, K> Clone for Iter<'a, K> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
            direction: self.direction,
            remaining: self.remaining,
        }
    }
}

impl<'a, K> fmt::Debug for Iter<'a, K>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.remaining -= 1;

        let far = match self.direction {
            Direction::Ascending => node.right(),
            Direction::Descending => node.left(),
        };
        self.push_spine(far);

        Some(&node.key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, K> ExactSizeIterator for Iter<'a, K> {}

impl<'a, K> FusedIterator for Iter<'a, K> {}
