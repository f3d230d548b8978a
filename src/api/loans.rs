//! Loan command handlers

use serde_json::{json, Value};

use crate::{
    error::AppResult,
    models::loan::{LoanRequest, OutcomeDetails},
    services::Library,
};

use super::to_json;

/// Issue a book to a user
pub fn issue(library: &mut Library, user_id: u32, isbn: &str) -> AppResult<Value> {
    library.issue_book(user_id, isbn)?;
    Ok(json!({ "user_id": user_id, "isbn": isbn, "status": "issued" }))
}

/// Return a borrowed book
pub fn return_book(library: &mut Library, user_id: u32, isbn: &str) -> AppResult<Value> {
    library.return_book(user_id, isbn)?;
    Ok(json!({ "user_id": user_id, "isbn": isbn, "status": "returned" }))
}

/// Process several issue requests. The command itself succeeds; per-request failures
/// are reported in the outcome list.
pub fn issue_batch(library: &mut Library, requests: Vec<LoanRequest>) -> AppResult<Value> {
    let outcomes = library.issue_batch(requests);
    to_json(outcomes.iter().map(OutcomeDetails::from).collect::<Vec<_>>())
}

/// Process several return requests, reporting each outcome
pub fn return_batch(library: &mut Library, requests: Vec<LoanRequest>) -> AppResult<Value> {
    let outcomes = library.return_batch(requests);
    to_json(outcomes.iter().map(OutcomeDetails::from).collect::<Vec<_>>())
}
