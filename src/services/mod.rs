//! Business logic services
//!
//! [`Library`] is the catalog service: it owns the repository, the two request queues
//! and the borrow frequency table. Its operations are split by concern across the
//! submodules, each adding an `impl Library` block.

pub mod catalog;
pub mod loans;
pub mod stats;
pub mod users;

use crate::{config::CatalogConfig, repository::Repository};

use loans::RequestQueue;
use stats::BorrowFrequency;

/// In-memory library catalog and lending tracker
pub struct Library {
    repository: Repository,
    issue_queue: RequestQueue,
    return_queue: RequestQueue,
    frequency: BorrowFrequency,
}

impl Library {
    /// Create an empty library with the given catalog settings
    pub fn new(config: &CatalogConfig) -> Self {
        tracing::debug!(buckets = config.bucket_count, "creating library");
        Self {
            repository: Repository::new(config.bucket_count),
            issue_queue: RequestQueue::default(),
            return_queue: RequestQueue::default(),
            frequency: BorrowFrequency::default(),
        }
    }
}

impl Default for Library {
    fn default() -> Self {
        Self::new(&CatalogConfig::default())
    }
}
