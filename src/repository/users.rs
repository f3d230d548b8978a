//! User directory: singly linked list with insertion at the head
//!
//! The most recently registered user is found first; lookups are a linear scan.
//! Identifiers are handed out sequentially from 1 and never reused.

use crate::models::user::User;

use super::arena::Handle;

struct UserNode {
    user_id: u32,
    handle: Handle<User>,
    next: Option<Box<UserNode>>,
}

pub struct UserList {
    head: Option<Box<UserNode>>,
    next_id: u32,
    len: usize,
}

impl UserList {
    pub fn new() -> Self {
        Self {
            head: None,
            next_id: 1,
            len: 0,
        }
    }

    /// Reserve the next sequential identifier
    pub fn allocate_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn push_front(&mut self, user_id: u32, handle: Handle<User>) {
        let node = Box::new(UserNode {
            user_id,
            handle,
            next: self.head.take(),
        });
        self.head = Some(node);
        self.len += 1;
    }

    pub fn find(&self, user_id: u32) -> Option<Handle<User>> {
        self.iter()
            .find(|(id, _)| *id == user_id)
            .map(|(_, handle)| handle)
    }

    /// Head-to-tail, i.e. newest registration first
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            next: self.head.as_deref(),
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl Default for UserList {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for UserList {
    fn drop(&mut self) {
        let mut current = self.head.take();
        while let Some(mut node) = current {
            current = node.next.take();
        }
    }
}

pub struct Iter<'a> {
    next: Option<&'a UserNode>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (u32, Handle<User>);

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            (node.user_id, node.handle)
        })
    }
}
