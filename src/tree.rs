//! A plain, unbalanced BST. Every node exclusively owns its two children so the whole tree is
//! a single ownership hierarchy rooted at the [`Tree`]. Nothing is ever rotated: the shape of the
//! tree is decided entirely by the order in which values arrive.
//!
//! # Examples
//!
//! ```
//! use plain_bst::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert_eq!(tree.find(&1), None);
//! assert_eq!(tree.maximum(), None);
//!
//! tree.insert(1);
//! tree.insert(3);
//! tree.insert(2);
//! assert_eq!(tree.find(&2), Some(&2));
//!
//! // Inserting a value that is already stored changes nothing.
//! assert!(!tree.insert(3));
//! assert_eq!(tree.len(), 3);
//!
//! // Values always come back out in ascending order.
//! assert_eq!(tree.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
//! assert_eq!(tree.maximum(), Some(&3));
//!
//! // Removing a value hands it back.
//! assert_eq!(tree.remove(&3), Some(3));
//! assert_eq!(tree.remove(&3), None);
//! assert_eq!(tree.maximum(), Some(&2));
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::mem;

use log::{debug, trace};

use crate::iter::{IntoIter, Iter};

/// The spot a subtree hangs from. `None` is the empty spot below a leaf.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// An unbalanced Binary Search Tree holding distinct values of `T`. This can be used for
/// inserting, finding, and removing values and for walking them in ascending order.
///
/// Because the tree never rebalances, operations take `O(height)`. That is `O(lg N)` on average
/// for values arriving in random order but `O(N)` when they arrive sorted.
pub struct Tree<T> {
    root: Link<T>,
    len: usize,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Tree<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Clone for Tree<T>
where
    T: Clone,
{
    /// Copies the tree node for node, keeping its shape. The copy is built bottom up with an
    /// explicit stack so tall trees don't overflow the call stack.
    fn clone(&self) -> Self {
        // Every `Visit` pushes exactly one finished link onto `built`, so when a `Build` step
        // comes up its node's left and right copies are the top two entries.
        let mut steps = vec![CloneStep::Visit(self.root.as_deref())];
        let mut built: Vec<Link<T>> = Vec::new();
        while let Some(step) = steps.pop() {
            match step {
                CloneStep::Visit(None) => built.push(None),
                CloneStep::Visit(Some(node)) => {
                    steps.push(CloneStep::Build(node));
                    steps.push(CloneStep::Visit(node.right.as_deref()));
                    steps.push(CloneStep::Visit(node.left.as_deref()));
                }
                CloneStep::Build(node) => {
                    let right = built.pop().flatten();
                    let left = built.pop().flatten();
                    built.push(Some(Box::new(Node {
                        value: node.value.clone(),
                        left,
                        right,
                    })));
                }
            }
        }

        Self {
            root: built.pop().flatten(),
            len: self.len,
        }
    }
}

enum CloneStep<'a, T> {
    /// Copy this subtree.
    Visit(Option<&'a Node<T>>),
    /// Both subtrees of this node are copied; copy the node itself.
    Build(&'a Node<T>),
}

impl<T> fmt::Debug for Tree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Two trees are equal when they hold the same values, regardless of their shapes.
impl<T> PartialEq for Tree<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T> Eq for Tree<T> where T: Eq {}

impl<T> Tree<T> {
    /// Generate a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// How many values are stored in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no values at all.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns the largest value in the tree by following right children as far as they go, or
    /// `None` if the tree is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use plain_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.maximum(), None);
    ///
    /// // A stored `-1` is just another value.
    /// tree.insert(-1);
    /// assert_eq!(tree.maximum(), Some(&-1));
    ///
    /// tree.insert(7);
    /// tree.insert(3);
    /// assert_eq!(tree.maximum(), Some(&7));
    /// ```
    pub fn maximum(&self) -> Option<&T> {
        let mut node = self.root.as_deref()?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Some(&node.value)
    }

    /// Returns the smallest value in the tree, or `None` if the tree is empty.
    pub fn minimum(&self) -> Option<&T> {
        let mut node = self.root.as_deref()?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Some(&node.value)
    }

    /// The number of nodes on the longest path from the root down to a leaf. An empty tree has a
    /// height of 0 and a tree with just a root has a height of 1.
    ///
    /// # Examples
    ///
    /// ```
    /// use plain_bst::Tree;
    ///
    /// // Sorted input degenerates into a list.
    /// let sorted: Tree<_> = (0..10).collect();
    /// assert_eq!(sorted.height(), 10);
    ///
    /// let shuffled: Tree<_> = [3, 1, 5, 0, 2, 4, 6].into_iter().collect();
    /// assert_eq!(shuffled.height(), 3);
    /// ```
    pub fn height(&self) -> usize {
        let mut tallest = 0;
        let mut stack: Vec<(&Node<T>, usize)> =
            self.root.as_deref().map(|n| (n, 1)).into_iter().collect();
        while let Some((node, depth)) = stack.pop() {
            tallest = tallest.max(depth);
            stack.extend(node.left.as_deref().map(|n| (n, depth + 1)));
            stack.extend(node.right.as_deref().map(|n| (n, depth + 1)));
        }
        tallest
    }

    /// Walks the stored values in ascending order (left subtree, then the node, then the right
    /// subtree). The iterator is lazy and borrows the tree, so calling `iter` again starts a
    /// fresh walk.
    ///
    /// # Examples
    ///
    /// ```
    /// use plain_bst::Tree;
    ///
    /// let tree: Tree<_> = [50, 30, 70, 20, 40, 60, 80].into_iter().collect();
    ///
    /// let values: Vec<_> = tree.iter().copied().collect();
    /// assert_eq!(values, vec![20, 30, 40, 50, 60, 70, 80]);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.root.as_deref(), self.len)
    }

    /// Drops every node in the tree, leaving it empty.
    pub fn clear(&mut self) {
        Node::drop_all(self.root.take().into_iter().collect());
        self.len = 0;
    }
}

impl<T> Tree<T>
where
    T: Ord,
{
    /// Potentially finds the stored value equal to the given one. If no node holds such a value,
    /// `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use plain_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    ///
    /// assert_eq!(tree.find(&1), Some(&1));
    /// assert_eq!(tree.find(&42), None);
    /// ```
    pub fn find(&self, value: &T) -> Option<&T> {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            match value.cmp(&node.value) {
                Ordering::Less => current = node.left.as_deref(),
                Ordering::Equal => return Some(&node.value),
                Ordering::Greater => current = node.right.as_deref(),
            }
        }
        None
    }

    /// Whether the tree holds a value equal to the given one.
    pub fn contains(&self, value: &T) -> bool {
        self.find(value).is_some()
    }

    /// Inserts the given value into the tree. Inserting a value the tree already holds is a
    /// no-op: the stored value stays and the new one is dropped. Returns whether a new node was
    /// created.
    ///
    /// # Examples
    ///
    /// ```
    /// use plain_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(1));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, value: T) -> bool {
        let mut link = &mut self.root;
        while let Some(node) = link {
            link = match value.cmp(&node.value) {
                Ordering::Less => &mut node.left,
                Ordering::Equal => {
                    trace!("insert absorbed a value that is already stored");
                    return false;
                }
                Ordering::Greater => &mut node.right,
            };
        }

        *link = Some(Node::new_boxed(value));
        self.len += 1;
        true
    }

    /// Removes the node holding the given value from the tree and returns the stored value. If
    /// the tree does not hold the value, nothing happens and `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use plain_bst::Tree;
    ///
    /// let mut tree: Tree<_> = [2, 1, 3].into_iter().collect();
    ///
    /// // The root has two children so its successor takes its place.
    /// assert_eq!(tree.remove(&2), Some(2));
    /// assert_eq!(tree.remove(&2), None);
    /// assert_eq!(tree.iter().copied().collect::<Vec<_>>(), vec![1, 3]);
    /// ```
    pub fn remove(&mut self, value: &T) -> Option<T> {
        let removed = Node::remove(&mut self.root, value);
        match removed {
            Some(_) => self.len -= 1,
            None => trace!("remove found nothing to remove"),
        }
        removed
    }
}

impl<T> Extend<T> for Tree<T>
where
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, values: I) {
        for value in values {
            self.insert(value);
        }
    }
}

impl<T> FromIterator<T> for Tree<T>
where
    T: Ord,
{
    /// Builds a tree by inserting the values in the order they're yielded, so the shape of the
    /// tree follows the order of the iterator.
    fn from_iter<I: IntoIterator<Item = T>>(values: I) -> Self {
        let mut tree = Self::new();
        tree.extend(values);
        tree
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for Tree<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    /// Consumes the tree, yielding its values in ascending order.
    fn into_iter(mut self) -> Self::IntoIter {
        let len = mem::take(&mut self.len);
        IntoIter::new(self.root.take(), len)
    }
}

pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

impl<T> Node<T> {
    fn new_boxed(value: T) -> Box<Self> {
        Box::new(Self {
            value,
            left: None,
            right: None,
        })
    }

    /// Drops the given subtrees one node at a time. Dropping a `Box<Node>` directly recurses once
    /// per level which overflows the stack on a tall enough (e.g. sorted) tree.
    pub(crate) fn drop_all(mut stack: Vec<Box<Self>>) {
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }

    /// Unlinks the leftmost node of the subtree at `link` and returns its value. The leftmost
    /// node never has a left child so its right child (if any) takes its spot.
    fn take_min(mut link: &mut Link<T>) -> Option<T> {
        while link.as_ref()?.left.is_some() {
            link = &mut link.as_mut()?.left;
        }

        let Node { value, right, .. } = *link.take()?;
        *link = right;
        Some(value)
    }
}

impl<T> Node<T>
where
    T: Ord,
{
    /// Walks down to the link holding `value` and removes the node hanging from it.
    fn remove(mut link: &mut Link<T>, value: &T) -> Option<T> {
        loop {
            let node = link.as_ref()?;
            link = match value.cmp(&node.value) {
                Ordering::Less => &mut link.as_mut()?.left,
                Ordering::Equal => break,
                Ordering::Greater => &mut link.as_mut()?.right,
            };
        }

        let node = link.as_mut()?;

        // With two children we keep this node where it is and give it the value of its in-order
        // successor, i.e. the smallest value of its right subtree. The successor's own node is
        // the one that gets unlinked.
        if node.left.is_some() && node.right.is_some() {
            let successor = Self::take_min(&mut node.right)?;
            debug!("promoted the in-order successor into a node with two children");
            return Some(mem::replace(&mut node.value, successor));
        }

        // Zero or one child: whatever child there is takes this node's spot.
        let Node {
            value: removed,
            left,
            right,
        } = *link.take()?;
        *link = left.or(right);
        Some(removed)
    }
}
