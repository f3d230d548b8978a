//! Report rows produced by the statistics service

use serde::Serialize;

use super::{book::Book, user::User};

/// One row of the most-borrowed ranking
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BorrowRanking {
    pub isbn: String,
    pub count: u32,
    pub title: String,
}

/// A user currently holding at least one book, with the books in issue order
#[derive(Debug, Clone, Serialize)]
pub struct ActiveUser {
    pub user: User,
    pub books: Vec<Book>,
}
