//! This crate exposes an unbalanced Binary Search Tree (BST) of ordered keys,
//! mostly for educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert and find stored keys. BSTs are typically defined recursively using
//! the notion of a `Node`. A `Node` stores one key and may have up to two
//! child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for a key takes `O(height)` where `height` is the number of
//! `Node`s on the longest path from the root to a leaf. This tree does no
//! rebalancing so the height depends entirely on insertion order: inserting
//! already-sorted keys produces a chain as tall as the number of keys. BSTs
//! also naturally support sorted iteration by visiting the left subtree, then
//! the subtree root, then the right subtree.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::OrderedTree;
//!
//! let mut tree = OrderedTree::new();
//! for key in [5, 3, 7, 2, 4, 6, 8, 1, 9].iter().copied() {
//!     tree.insert(key);
//! }
//!
//! assert!(tree.contains(&4));
//! assert!(!tree.contains(&42));
//! assert_eq!(tree.height(), 4);
//!
//! let ascending: Vec<_> = tree.ascending().copied().collect();
//! assert_eq!(ascending, [1, 2, 3, 4, 5, 6, 7, 8, 9]);
//!
//! let descending: Vec<_> = tree.descending().copied().collect();
//! assert_eq!(descending, [9, 8, 7, 6, 5, 4, 3, 2, 1]);
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod iter;
pub mod tree;

pub use iter::Iter;
pub use tree::OrderedTree;
