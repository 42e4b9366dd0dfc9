use std::cmp::Ordering;
use std::fmt;

/// A binary tree node that owns its record and both subtrees.
#[derive(Debug)]
pub struct Node<T> {
    data: T,
    left: Option<Box<Node<T>>>,
    right: Option<Box<Node<T>>>,
}

impl<T> Node<T> {
    /// Create a leaf node.
    pub fn new(data: T) -> Self {
        Self {
            data,
            left: None,
            right: None,
        }
    }

    /// Create a node with the given children.
    pub fn with_children(data: T, left: Option<Node<T>>, right: Option<Node<T>>) -> Self {
        Self {
            data,
            left: left.map(Box::new),
            right: right.map(Box::new),
        }
    }

    /// Replace the left child. The caller keeps the tree ordered.
    pub fn set_left(&mut self, left: Option<Node<T>>) {
        self.left = left.map(Box::new);
    }

    /// Replace the right child. The caller keeps the tree ordered.
    pub fn set_right(&mut self, right: Option<Node<T>>) {
        self.right = right.map(Box::new);
    }

    pub fn data(&self) -> &T {
        &self.data
    }

    pub fn left(&self) -> Option<&Node<T>> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&Node<T>> {
        self.right.as_deref()
    }

    /// The child link a record ranked `ord` against this node belongs in.
    /// Anything not `Less` goes right.
    pub(crate) fn child_slot(&mut self, ord: Ordering) -> &mut Option<Box<Node<T>>> {
        match ord {
            Ordering::Less => &mut self.left,
            _ => &mut self.right,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

// Unlinks descendants onto a heap stack so a degenerate chain drops in
// constant stack depth.
impl<T> Drop for Node<T> {
    fn drop(&mut self) {
        let mut pending: Vec<Box<Node<T>>> = Vec::new();
        pending.extend(self.left.take());
        pending.extend(self.right.take());

        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}

impl<T: fmt::Display> fmt::Display for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.data.fmt(f)
    }
}
