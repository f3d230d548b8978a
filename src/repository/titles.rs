//! Title tree: unbalanced binary search tree keyed by title
//!
//! Equal titles descend to the right, so among books sharing a title the one inserted
//! first sits closest to the root and is the one [`TitleTree::search`] returns. No
//! rebalancing is done: inserting titles in sorted order degenerates the tree into a
//! list with O(n) lookups. All walks are iterative so a degenerate tree cannot exhaust
//! the stack.

use crate::models::book::Book;

use super::arena::Handle;

struct Node {
    title: String,
    handle: Handle<Book>,
    left: Link,
    right: Link,
}

type Link = Option<Box<Node>>;

#[derive(Default)]
pub struct TitleTree {
    root: Link,
    len: usize,
}

impl TitleTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, title: &str, handle: Handle<Book>) {
        let mut link = &mut self.root;
        let mut depth = 0usize;
        while let Some(node) = link {
            link = if title < node.title.as_str() {
                &mut node.left
            } else {
                &mut node.right
            };
            depth += 1;
        }
        *link = Some(Box::new(Node {
            title: title.to_string(),
            handle,
            left: None,
            right: None,
        }));
        self.len += 1;
        tracing::debug!(title, depth, "title tree insert");
    }

    /// First exact match on the descent path
    pub fn search(&self, title: &str) -> Option<Handle<Book>> {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            if title == node.title {
                return Some(node.handle);
            }
            current = if title < node.title.as_str() {
                node.left.as_deref()
            } else {
                node.right.as_deref()
            };
        }
        None
    }

    /// Remove the node holding `handle`, located by descending on `title`.
    /// Returns false if no such node exists.
    pub fn remove(&mut self, title: &str, handle: Handle<Book>) -> bool {
        let mut link = &mut self.root;
        loop {
            match link.as_deref() {
                None => return false,
                Some(node) if node.handle == handle && node.title == title => break,
                Some(_) => {}
            }
            let Some(node) = link else { return false };
            link = if title < node.title.as_str() {
                &mut node.left
            } else {
                &mut node.right
            };
        }

        let Some(mut target) = link.take() else {
            return false;
        };
        *link = match (target.left.take(), target.right.take()) {
            (None, None) => None,
            (Some(left), None) => Some(left),
            (None, Some(right)) => Some(right),
            (Some(left), Some(right)) => {
                // In-order successor takes the removed node's place.
                let mut rest = Some(right);
                match detach_min(&mut rest) {
                    Some(mut successor) => {
                        successor.left = Some(left);
                        successor.right = rest;
                        Some(successor)
                    }
                    None => Some(left),
                }
            }
        };
        self.len -= 1;
        true
    }

    /// In-order traversal: ascending by title, equal titles in insertion order
    pub fn sorted_handles(&self) -> Vec<Handle<Book>> {
        let mut out = Vec::with_capacity(self.len);
        let mut stack: Vec<&Node> = Vec::new();
        let mut current = self.root.as_deref();
        loop {
            while let Some(node) = current {
                stack.push(node);
                current = node.left.as_deref();
            }
            match stack.pop() {
                Some(node) => {
                    out.push(node.handle);
                    current = node.right.as_deref();
                }
                None => break,
            }
        }
        out
    }

    /// Number of nodes on the longest root-to-leaf path
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack: Vec<(&Node, usize)> = self.root.as_deref().map(|n| (n, 1)).into_iter().collect();
        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            for child in [node.left.as_deref(), node.right.as_deref()].into_iter().flatten() {
                stack.push((child, depth + 1));
            }
        }
        height
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Unlink and return the leftmost node under `link`, splicing its right child into its place.
fn detach_min(mut link: &mut Link) -> Option<Box<Node>> {
    loop {
        let has_left = link.as_ref()?.left.is_some();
        if !has_left {
            break;
        }
        let Some(node) = link else { return None };
        link = &mut node.left;
    }
    let mut min = link.take()?;
    *link = min.right.take();
    Some(min)
}

impl Drop for TitleTree {
    // Tear down iteratively; the default recursive drop can overflow on a degenerate tree.
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}
