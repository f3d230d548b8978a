//! Catalog command handlers

use serde_json::Value;

use crate::{error::AppResult, models::book::CreateBook, services::Library};

use super::to_json;

/// Add a book; renders the stored record
pub fn add_book(library: &mut Library, book: CreateBook) -> AppResult<Value> {
    let isbn = book.isbn.clone();
    library.add_book(book)?;
    to_json(library.find_book_by_isbn(&isbn))
}

/// Remove a book; renders the removed record
pub fn remove_book(library: &mut Library, isbn: &str) -> AppResult<Value> {
    to_json(library.remove_book(isbn)?)
}

/// Renders `null` when no book has this ISBN
pub fn find_by_isbn(library: &Library, isbn: &str) -> AppResult<Value> {
    to_json(library.find_book_by_isbn(isbn))
}

/// Renders `null` when no book has this title
pub fn find_by_title(library: &Library, title: &str) -> AppResult<Value> {
    to_json(library.find_book_by_title(title))
}

pub fn by_author(library: &Library, author: &str) -> AppResult<Value> {
    to_json(library.books_by_author(author))
}

pub fn list(library: &Library) -> AppResult<Value> {
    to_json(library.all_books())
}

pub fn list_sorted(library: &Library) -> AppResult<Value> {
    to_json(library.all_books_sorted())
}
