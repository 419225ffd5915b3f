use async_trait::async_trait;

use crate::db::error::DatabaseError;
use crate::models::{Assignment, AssignmentDocument, AssignmentKey};

/// The document collection holding assignment records.
#[async_trait]
pub trait AssignmentStore: Send + Sync {
    /// All assignments in insertion order.
    async fn list(&self) -> Result<Vec<Assignment>, DatabaseError>;

    /// Append a new document and return it with its generated id.
    async fn insert(&self, document: AssignmentDocument) -> Result<Assignment, DatabaseError>;

    /// Set `done` on the first document matching `key` in insertion order,
    /// returning how many were updated (0 or 1).
    async fn set_done(&self, key: &AssignmentKey, done: bool) -> Result<u64, DatabaseError>;

    /// Remove every document matching `key`, returning how many were removed.
    async fn delete(&self, key: &AssignmentKey) -> Result<u64, DatabaseError>;

    /// Check that the backing store is reachable.
    async fn ping(&self) -> Result<(), DatabaseError>;
}
