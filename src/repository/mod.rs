//! Repository layer: in-memory record storage and the indices over it
//!
//! Every [`Book`] and [`User`] lives in exactly one arena slot. The book table, the
//! title tree and the user list only hold handles, and the repository is the only
//! place that inserts into or removes from them, which keeps a book present in the
//! book table if and only if it is present in the title tree.

pub mod arena;
pub mod books;
pub mod titles;
pub mod users;

use crate::{
    error::{AppError, AppResult},
    models::{book::Book, user::User},
};

use arena::{Arena, Handle};
use books::BookTable;
use titles::TitleTree;
use users::UserList;

/// Main repository struct holding all catalog state
pub struct Repository {
    books: Arena<Book>,
    users: Arena<User>,
    book_table: BookTable,
    title_tree: TitleTree,
    user_list: UserList,
}

impl Repository {
    /// Create an empty repository whose book table has `bucket_count` buckets
    pub fn new(bucket_count: usize) -> Self {
        Self {
            books: Arena::new(),
            users: Arena::new(),
            book_table: BookTable::new(bucket_count),
            title_tree: TitleTree::new(),
            user_list: UserList::new(),
        }
    }

    // ---- books ----

    /// Store a book and index it by ISBN and by title. The caller is responsible
    /// for rejecting duplicate ISBNs first.
    pub fn books_insert(&mut self, book: Book) -> Handle<Book> {
        let isbn = book.isbn.clone();
        let title = book.title.clone();
        let handle = self.books.insert(book);
        self.book_table.insert(&isbn, handle);
        self.title_tree.insert(&title, handle);
        handle
    }

    pub fn books_isbn_exists(&self, isbn: &str) -> bool {
        self.book_table.search(isbn).is_some()
    }

    /// Get book by ISBN
    pub fn books_get_by_isbn(&self, isbn: &str) -> AppResult<&Book> {
        self.book_table
            .search(isbn)
            .and_then(|handle| self.books.get(handle))
            .ok_or_else(|| AppError::BookNotFound(isbn.to_string()))
    }

    /// Get book by exact title; the earliest inserted wins among duplicates
    pub fn books_get_by_title(&self, title: &str) -> Option<&Book> {
        self.title_tree
            .search(title)
            .and_then(|handle| self.books.get(handle))
    }

    /// Unlink a book from both indices and release its record
    pub fn books_remove(&mut self, isbn: &str) -> AppResult<Book> {
        let handle = self
            .book_table
            .remove(isbn)
            .ok_or_else(|| AppError::BookNotFound(isbn.to_string()))?;
        let book = self
            .books
            .remove(handle)
            .ok_or_else(|| AppError::BookNotFound(isbn.to_string()))?;
        if !self.title_tree.remove(&book.title, handle) {
            tracing::warn!(isbn, title = %book.title, "book missing from title tree on removal");
        }
        Ok(book)
    }

    /// All books in book-table order (bucket, then chain)
    pub fn books_all(&self) -> Vec<&Book> {
        self.book_table
            .handles()
            .filter_map(|handle| self.books.get(handle))
            .collect()
    }

    /// All books ascending by title
    pub fn books_sorted_by_title(&self) -> Vec<&Book> {
        self.title_tree
            .sorted_handles()
            .into_iter()
            .filter_map(|handle| self.books.get(handle))
            .collect()
    }

    pub fn books_count(&self) -> usize {
        self.books.len()
    }

    // ---- users ----

    /// Register a user under the next sequential identifier
    pub fn users_create(&mut self, name: &str, email: &str) -> User {
        let id = self.user_list.allocate_id();
        let user = User::new(id, name, email);
        let handle = self.users.insert(user.clone());
        self.user_list.push_front(id, handle);
        user
    }

    /// Get user by ID
    pub fn users_get_by_id(&self, user_id: u32) -> AppResult<&User> {
        self.user_list
            .find(user_id)
            .and_then(|handle| self.users.get(handle))
            .ok_or(AppError::UserNotFound(user_id))
    }

    /// All users, most recently registered first
    pub fn users_all(&self) -> Vec<&User> {
        self.user_list
            .iter()
            .filter_map(|(_, handle)| self.users.get(handle))
            .collect()
    }

    pub fn users_count(&self) -> usize {
        self.users.len()
    }

    // ---- loans ----

    /// Resolve both sides of a loan for mutation. The user is resolved first, so an
    /// unknown user is reported even when the book is unknown too.
    pub fn loan_parties_mut(
        &mut self,
        user_id: u32,
        isbn: &str,
    ) -> AppResult<(&mut User, &mut Book)> {
        let user_handle = self
            .user_list
            .find(user_id)
            .ok_or(AppError::UserNotFound(user_id))?;
        let book_handle = self
            .book_table
            .search(isbn)
            .ok_or_else(|| AppError::BookNotFound(isbn.to_string()))?;

        let user = self
            .users
            .get_mut(user_handle)
            .ok_or(AppError::UserNotFound(user_id))?;
        let book = self
            .books
            .get_mut(book_handle)
            .ok_or_else(|| AppError::BookNotFound(isbn.to_string()))?;
        Ok((user, book))
    }
}
