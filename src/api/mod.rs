//! Command dispatcher
//!
//! The boundary between callers and [`Library`]: each [`Command`] is one validated
//! request, routed to a handler that calls exactly one library operation and renders
//! its result as JSON. Failures never abort a script; they become error responses.

pub mod books;
pub mod loans;
pub mod stats;
pub mod users;

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    error::{AppResult, ErrorResponse},
    models::{book::CreateBook, loan::LoanRequest},
    services::Library,
};

/// One request from a command script
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Command {
    AddBook(CreateBook),
    RemoveBook { isbn: String },
    FindBookByIsbn { isbn: String },
    FindBookByTitle { title: String },
    BooksByAuthor { author: String },
    AllBooks,
    AllBooksSorted,
    RegisterUser { name: String, email: String },
    FindUser { user_id: u32 },
    AllUsers,
    IssueBook { user_id: u32, isbn: String },
    ReturnBook { user_id: u32, isbn: String },
    IssueBatch { requests: Vec<LoanRequest> },
    ReturnBatch { requests: Vec<LoanRequest> },
    CurrentlyBorrowed,
    MostBorrowed,
    ActiveUsers,
}

/// Rendered result of one command
#[derive(Debug, Serialize)]
pub struct Response {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorResponse>,
}

/// Run one command against the library
pub fn dispatch(library: &mut Library, command: Command) -> Response {
    tracing::debug!(?command, "dispatching command");
    let result = match command {
        Command::AddBook(book) => books::add_book(library, book),
        Command::RemoveBook { isbn } => books::remove_book(library, &isbn),
        Command::FindBookByIsbn { isbn } => books::find_by_isbn(library, &isbn),
        Command::FindBookByTitle { title } => books::find_by_title(library, &title),
        Command::BooksByAuthor { author } => books::by_author(library, &author),
        Command::AllBooks => books::list(library),
        Command::AllBooksSorted => books::list_sorted(library),
        Command::RegisterUser { name, email } => users::register(library, &name, &email),
        Command::FindUser { user_id } => users::find(library, user_id),
        Command::AllUsers => users::list(library),
        Command::IssueBook { user_id, isbn } => loans::issue(library, user_id, &isbn),
        Command::ReturnBook { user_id, isbn } => loans::return_book(library, user_id, &isbn),
        Command::IssueBatch { requests } => loans::issue_batch(library, requests),
        Command::ReturnBatch { requests } => loans::return_batch(library, requests),
        Command::CurrentlyBorrowed => stats::currently_borrowed(library),
        Command::MostBorrowed => stats::most_borrowed(library),
        Command::ActiveUsers => stats::active_users(library),
    };

    match result {
        Ok(data) => Response {
            ok: true,
            data: Some(data),
            error: None,
        },
        Err(e) => Response {
            ok: false,
            data: None,
            error: Some(ErrorResponse::from(&e)),
        },
    }
}

/// Parse a command script: a JSON array of command objects
pub fn parse_script(text: &str) -> AppResult<Vec<Command>> {
    Ok(serde_json::from_str(text)?)
}

/// Read and parse a command script from disk
pub fn load_script(path: &Path) -> AppResult<Vec<Command>> {
    let text = std::fs::read_to_string(path)?;
    parse_script(&text)
}

fn to_json<T: Serialize>(value: T) -> AppResult<Value> {
    Ok(serde_json::to_value(value)?)
}
