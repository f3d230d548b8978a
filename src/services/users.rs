//! User registration service

use crate::models::user::{User, UserSummary};

use super::Library;

impl Library {
    /// Register a user under the next sequential identifier. Always succeeds.
    pub fn register_user(&mut self, name: &str, email: &str) -> User {
        let user = self.repository.users_create(name, email);
        tracing::info!(user_id = user.id, name, "user registered");
        user
    }

    pub fn find_user(&self, user_id: u32) -> Option<&User> {
        self.repository.users_get_by_id(user_id).ok()
    }

    /// Summary of every user, most recently registered first
    pub fn all_users(&self) -> Vec<UserSummary> {
        self.repository
            .users_all()
            .into_iter()
            .map(UserSummary::from)
            .collect()
    }

    pub fn user_count(&self) -> usize {
        self.repository.users_count()
    }
}
