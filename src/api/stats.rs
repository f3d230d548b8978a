//! Report command handlers

use serde_json::Value;

use crate::{error::AppResult, services::Library};

use super::to_json;

pub fn currently_borrowed(library: &Library) -> AppResult<Value> {
    to_json(library.currently_borrowed_books())
}

/// Most borrowed books, highest count first
pub fn most_borrowed(library: &Library) -> AppResult<Value> {
    to_json(library.most_borrowed_books())
}

pub fn active_users(library: &Library) -> AppResult<Value> {
    to_json(library.active_users())
}
