//! Book (catalog entry) model and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Catalog entry, owned by the repository arena and shared by both book indices
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Unique identifier, immutable after creation
    pub isbn: String,
    pub title: String,
    pub author: String,
    /// Free text
    pub genre: String,
    pub is_available: bool,
    /// Number of successful issues, never decremented
    pub borrow_count: u32,
    pub added_at: DateTime<Utc>,
}

impl Book {
    pub fn new(data: CreateBook) -> Self {
        Self {
            isbn: data.isbn,
            title: data.title,
            author: data.author,
            genre: data.genre,
            is_available: true,
            borrow_count: 0,
            added_at: Utc::now(),
        }
    }
}

/// Create book request
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateBook {
    #[validate(custom(function = "not_blank"))]
    pub isbn: String,
    #[validate(custom(function = "not_blank"))]
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub genre: String,
}

impl CreateBook {
    pub fn new(
        isbn: impl Into<String>,
        title: impl Into<String>,
        author: impl Into<String>,
        genre: impl Into<String>,
    ) -> Self {
        Self {
            isbn: isbn.into(),
            title: title.into(),
            author: author.into(),
            genre: genre.into(),
        }
    }
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}
