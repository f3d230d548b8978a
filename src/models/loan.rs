//! Loan (issue/return) request model and related types

use serde::{Deserialize, Serialize};

use crate::error::{AppError, ErrorResponse};

/// Direction of a queued request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoanKind {
    Issue,
    Return,
}

/// Pending issue or return request. Lives only between enqueue and drain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanRequest {
    pub user_id: u32,
    pub isbn: String,
}

impl LoanRequest {
    pub fn new(user_id: u32, isbn: impl Into<String>) -> Self {
        Self {
            user_id,
            isbn: isbn.into(),
        }
    }
}

/// Result of processing one drained request
#[derive(Debug)]
pub struct RequestOutcome {
    pub kind: LoanKind,
    pub request: LoanRequest,
    pub result: Result<(), AppError>,
}

impl RequestOutcome {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

/// Serializable view of a [`RequestOutcome`]
#[derive(Debug, Serialize)]
pub struct OutcomeDetails {
    pub kind: LoanKind,
    pub user_id: u32,
    pub isbn: String,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorResponse>,
}

impl From<&RequestOutcome> for OutcomeDetails {
    fn from(outcome: &RequestOutcome) -> Self {
        Self {
            kind: outcome.kind,
            user_id: outcome.request.user_id,
            isbn: outcome.request.isbn.clone(),
            success: outcome.is_success(),
            error: outcome.result.as_ref().err().map(ErrorResponse::from),
        }
    }
}
