//! This crate exposes a plain, unbalanced Binary Search Tree (BST) mostly for educational
//! purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and remove stored values. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a value
//! (the value that was inserted) and may have up to two child `Node`s.
//! The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Together these mean a value is stored at most once. Inserting a value the
//! tree already holds is simply ignored.
//!
//! Searching for values in the tree takes `O(height)` (where `height` is defined as
//! the longest path from the root `Node` to a leaf `Node`). The [`Tree`] here does
//! nothing to limit its height: values inserted in random order give a height around
//! `O(lg N)`, values inserted in sorted order give a height of `N`. BSTs also naturally
//! support sorted iteration by visiting the left subtree, then the subtree root, then
//! the right subtree, which is what [`Tree::iter`] does.
//!
//! The crate logs through the [`log`] facade and never installs a logger itself.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod iter;
pub mod tree;

pub use tree::Tree;
