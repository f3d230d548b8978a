//! Error types for the Shelfmark catalog

use serde::Serialize;
use thiserror::Error;

/// Stable numeric error codes reported by the command dispatcher
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[repr(u32)]
pub enum ErrorCode {
    Failure = 1,
    NoSuchUser = 4,
    NoSuchItem = 5,
    ItemNotAvailable = 7,
    Duplicate = 8,
    SpecimenBorrowed = 13,
    BadValue = 18,
    NotBorrowedByUser = 22,
}

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Book with ISBN {0} already exists")]
    DuplicateBook(String),

    #[error("Book with ISBN {0} not found")]
    BookNotFound(String),

    #[error("User with ID {0} not found")]
    UserNotFound(u32),

    #[error("Book with ISBN {0} is not available")]
    BookUnavailable(String),

    #[error("User {user_id} has not borrowed book {isbn}")]
    NotBorrowedByUser { user_id: u32, isbn: String },

    #[error("Book with ISBN {0} is on loan and cannot be removed")]
    BookOnLoan(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    /// Numeric code used when the error crosses the dispatcher boundary
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::DuplicateBook(_) => ErrorCode::Duplicate,
            AppError::BookNotFound(_) => ErrorCode::NoSuchItem,
            AppError::UserNotFound(_) => ErrorCode::NoSuchUser,
            AppError::BookUnavailable(_) => ErrorCode::ItemNotAvailable,
            AppError::NotBorrowedByUser { .. } => ErrorCode::NotBorrowedByUser,
            AppError::BookOnLoan(_) => ErrorCode::SpecimenBorrowed,
            AppError::InvalidInput(_) => ErrorCode::BadValue,
            AppError::Io(_) | AppError::Json(_) => ErrorCode::Failure,
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::InvalidInput(errors.to_string())
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub code: u32,
    pub error: String,
    pub message: String,
}

impl From<&AppError> for ErrorResponse {
    fn from(err: &AppError) -> Self {
        let code = err.code();
        Self {
            code: code as u32,
            error: format!("{:?}", code),
            message: err.to_string(),
        }
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
