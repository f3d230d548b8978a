//! User command handlers

use serde_json::Value;

use crate::{error::AppResult, models::user::UserSummary, services::Library};

use super::to_json;

/// Register a user; renders the new record with its assigned ID
pub fn register(library: &mut Library, name: &str, email: &str) -> AppResult<Value> {
    to_json(library.register_user(name, email))
}

/// Renders `null` for an unknown ID
pub fn find(library: &Library, user_id: u32) -> AppResult<Value> {
    to_json(library.find_user(user_id))
}

pub fn list(library: &Library) -> AppResult<Value> {
    let users: Vec<UserSummary> = library.all_users();
    to_json(users)
}
