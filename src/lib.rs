//! Shelfmark Library Catalog
//!
//! An in-memory library catalog and lending tracker: books indexed by ISBN and by
//! title, a directory of borrowers, and queued issue/return processing that keeps
//! availability, borrow counts and per-user loans consistent.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
pub use services::Library;
