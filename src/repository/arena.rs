//! Slot arena owning every catalog record
//!
//! Indices never hold records directly. They store [`Handle`]s into an arena, so a
//! mutation made through one index is visible through every other one, and removing a
//! record cannot leave a dangling reference behind: a stale handle simply resolves to
//! `None`.

use std::{fmt, hash::Hash, marker::PhantomData};

/// Typed index into an [`Arena`]
pub struct Handle<T> {
    slot: usize,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Handle<T> {
    fn new(slot: usize) -> Self {
        Self {
            slot,
            _marker: PhantomData,
        }
    }
}

// Manual impls so `T` itself needs none of these bounds.
impl<T> Clone for Handle<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Handle<T> {}

impl<T> PartialEq for Handle<T> {
    fn eq(&self, other: &Self) -> bool {
        self.slot == other.slot
    }
}

impl<T> Eq for Handle<T> {}

impl<T> Hash for Handle<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.slot.hash(state);
    }
}

impl<T> fmt::Debug for Handle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Handle({})", self.slot)
    }
}

pub struct Arena<T> {
    slots: Vec<Option<T>>,
    len: usize,
}

impl<T> Arena<T> {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            len: 0,
        }
    }

    /// Slots are never reused, so a handle to a removed record stays dead.
    pub fn insert(&mut self, value: T) -> Handle<T> {
        self.slots.push(Some(value));
        self.len += 1;
        Handle::new(self.slots.len() - 1)
    }

    pub fn get(&self, handle: Handle<T>) -> Option<&T> {
        self.slots.get(handle.slot).and_then(Option::as_ref)
    }

    pub fn get_mut(&mut self, handle: Handle<T>) -> Option<&mut T> {
        self.slots.get_mut(handle.slot).and_then(Option::as_mut)
    }

    pub fn remove(&mut self, handle: Handle<T>) -> Option<T> {
        let value = self.slots.get_mut(handle.slot)?.take();
        if value.is_some() {
            self.len -= 1;
        }
        value
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self::new()
    }
}
