//! In-order iterators over a [`Tree`][crate::Tree].
//!
//! Both iterators keep an explicit stack holding the left spine of the part of the tree they
//! haven't visited yet, so walking a tall tree never recurses.

use std::iter::FusedIterator;
use std::mem;

use crate::tree::{Link, Node};

/// A borrowing iterator over the values of a tree in ascending order.
///
/// Created by [`Tree::iter`][crate::Tree::iter].
pub struct Iter<'a, T> {
    stack: Vec<&'a Node<T>>,
    remaining: usize,
}

/// Manual implementation of `Clone` so that cloning the iterator doesn't require `T: Clone`.
impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
            remaining: self.remaining,
        }
    }
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>, len: usize) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            remaining: len,
        };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.as_deref();
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        // Everything left of `node` has been yielded already. Its right subtree comes next.
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}
impl<'a, T> FusedIterator for Iter<'a, T> {}

/// An owning iterator over the values of a tree in ascending order.
///
/// Created by the [`IntoIterator`] implementation of [`Tree`][crate::Tree].
pub struct IntoIter<T> {
    stack: Vec<Box<Node<T>>>,
    remaining: usize,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(root: Link<T>, len: usize) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            remaining: len,
        };
        iter.push_left_spine(root);
        iter
    }

    /// Pushes `link` and its chain of left children. The left links are taken on the way down so
    /// every node on the stack only still owns its right subtree.
    fn push_left_spine(&mut self, mut link: Link<T>) {
        while let Some(mut node) = link {
            link = node.left.take();
            self.stack.push(node);
        }
    }
}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        Node::drop_all(mem::take(&mut self.stack));
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let mut node = self.stack.pop()?;
        self.push_left_spine(node.right.take());
        self.remaining -= 1;

        let Node { value, .. } = *node;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}
