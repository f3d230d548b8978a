//! Catalog management service

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, CreateBook},
};

use super::Library;

impl Library {
    /// Add a book to the catalog. Fails with `DuplicateBook` if the ISBN is already
    /// present, leaving the existing record untouched.
    pub fn add_book(&mut self, book: CreateBook) -> AppResult<()> {
        book.validate()?;

        if self.repository.books_isbn_exists(&book.isbn) {
            return Err(AppError::DuplicateBook(book.isbn));
        }

        let isbn = book.isbn.clone();
        self.repository.books_insert(Book::new(book));
        tracing::info!(%isbn, "book added to catalog");
        Ok(())
    }

    /// Remove a book from the catalog. A book on loan cannot be removed. Its borrow
    /// history leaves the ranking with it.
    pub fn remove_book(&mut self, isbn: &str) -> AppResult<Book> {
        let book = self.repository.books_get_by_isbn(isbn)?;
        if !book.is_available {
            return Err(AppError::BookOnLoan(isbn.to_string()));
        }

        let removed = self.repository.books_remove(isbn)?;
        self.frequency.retire(isbn);
        tracing::info!(isbn, title = %removed.title, "book removed from catalog");
        Ok(removed)
    }

    pub fn find_book_by_isbn(&self, isbn: &str) -> Option<&Book> {
        self.repository.books_get_by_isbn(isbn).ok()
    }

    /// Exact title lookup; among equal titles the earliest added book is returned
    pub fn find_book_by_title(&self, title: &str) -> Option<&Book> {
        self.repository.books_get_by_title(title)
    }

    /// Books whose author matches exactly, in catalog order
    pub fn books_by_author(&self, author: &str) -> Vec<&Book> {
        self.repository
            .books_all()
            .into_iter()
            .filter(|book| book.author == author)
            .collect()
    }

    /// Every book, in unspecified (hash bucket) order
    pub fn all_books(&self) -> Vec<&Book> {
        self.repository.books_all()
    }

    /// Every book, ascending by title
    pub fn all_books_sorted(&self) -> Vec<&Book> {
        self.repository.books_sorted_by_title()
    }

    pub fn book_count(&self) -> usize {
        self.repository.books_count()
    }
}
