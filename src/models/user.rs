//! User (borrower) model and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Registered borrower
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Sequential identifier starting at 1, never reused
    pub id: u32,
    pub name: String,
    pub email: String,
    /// ISBNs currently held, in issue order
    pub borrowed: Vec<String>,
    pub registered_at: DateTime<Utc>,
}

impl User {
    pub fn new(id: u32, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            borrowed: Vec::new(),
            registered_at: Utc::now(),
        }
    }

    pub fn has_borrowed(&self, isbn: &str) -> bool {
        self.borrowed.iter().any(|b| b == isbn)
    }

    /// Remove the first occurrence of `isbn`, keeping the remaining entries in order.
    /// Returns false if the user does not hold it.
    pub fn take_borrowed(&mut self, isbn: &str) -> bool {
        match self.borrowed.iter().position(|b| b == isbn) {
            Some(pos) => {
                self.borrowed.remove(pos);
                true
            }
            None => false,
        }
    }
}

/// Short user representation for listings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSummary {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub borrowed_count: usize,
}

impl From<&User> for UserSummary {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            borrowed_count: user.borrowed.len(),
        }
    }
}
