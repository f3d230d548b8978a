//! Book table: fixed-size hash table keyed by ISBN
//!
//! Collisions are resolved by chaining. The bucket count is set once at construction
//! and the table never rehashes, so lookups degrade towards a linear scan once the
//! catalog grows well past the bucket count. Chains hold handles into the repository
//! arena, not books.

use crate::models::book::Book;

use super::arena::Handle;

#[derive(Debug)]
struct Entry {
    isbn: String,
    handle: Handle<Book>,
}

pub struct BookTable {
    buckets: Vec<Vec<Entry>>,
    len: usize,
}

impl BookTable {
    /// `bucket_count` is clamped to at least one bucket.
    pub fn new(bucket_count: usize) -> Self {
        let bucket_count = bucket_count.max(1);
        Self {
            buckets: (0..bucket_count).map(|_| Vec::new()).collect(),
            len: 0,
        }
    }

    /// Polynomial rolling hash: `h = (h * 31 + byte) mod bucket_count`
    pub fn bucket_of(&self, isbn: &str) -> usize {
        let n = self.buckets.len();
        isbn.bytes()
            .fold(0usize, |h, b| (h.wrapping_mul(31).wrapping_add(b as usize)) % n)
    }

    /// Append to the key's chain. Duplicate keys are not checked here; the catalog
    /// rejects them before inserting.
    pub fn insert(&mut self, isbn: &str, handle: Handle<Book>) {
        let bucket = self.bucket_of(isbn);
        self.buckets[bucket].push(Entry {
            isbn: isbn.to_string(),
            handle,
        });
        self.len += 1;
        tracing::debug!(isbn, bucket, chain = self.buckets[bucket].len(), "book table insert");
    }

    pub fn search(&self, isbn: &str) -> Option<Handle<Book>> {
        self.buckets[self.bucket_of(isbn)]
            .iter()
            .find(|entry| entry.isbn == isbn)
            .map(|entry| entry.handle)
    }

    /// Unlink the first entry for `isbn`. No-op when absent.
    pub fn remove(&mut self, isbn: &str) -> Option<Handle<Book>> {
        let bucket = self.bucket_of(isbn);
        let chain = &mut self.buckets[bucket];
        let pos = chain.iter().position(|entry| entry.isbn == isbn)?;
        self.len -= 1;
        Some(chain.remove(pos).handle)
    }

    /// Every handle, bucket by bucket, each chain in insertion order
    pub fn handles(&self) -> impl Iterator<Item = Handle<Book>> + '_ {
        self.buckets
            .iter()
            .flat_map(|chain| chain.iter().map(|entry| entry.handle))
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }
}
