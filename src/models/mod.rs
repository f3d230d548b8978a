//! Data models for Shelfmark

pub mod book;
pub mod loan;
pub mod report;
pub mod user;

// Re-export commonly used types
pub use book::{Book, CreateBook};
pub use loan::{LoanKind, LoanRequest, RequestOutcome};
pub use report::{ActiveUser, BorrowRanking};
pub use user::{User, UserSummary};
