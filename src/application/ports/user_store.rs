//! User Store Port
//!
//! Abstract interface over the user record collection.
//! The in-memory implementation lives in the infrastructure layer.

use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

/// User store error
#[derive(Debug, Error)]
pub enum UserStoreError {
    #[error("Username already exists: {0}")]
    DuplicateUsername(String),
}

/// A stored user record.
///
/// `id` is generated at creation time and never changes. `password` is stored
/// as given; hashing is out of scope for this service.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct UserRecord {
    pub id: Uuid,
    pub username: String,
    pub password: String,
}

/// User Store Port
///
/// All operations are synchronous: the backing collection is in-memory and no
/// implementation is expected to perform I/O. Absence is a normal outcome
/// (`Option`/`bool`), never an error; only the uniqueness violation is typed.
pub trait UserStorePort: Send + Sync {
    /// Snapshot of all live records, in stable order.
    fn list_all(&self) -> Vec<UserRecord>;

    /// Look up a record by id.
    fn get_by_id(&self, id: &Uuid) -> Option<UserRecord>;

    /// Look up a record by username. Used for uniqueness pre-checks.
    fn get_by_username(&self, username: &str) -> Option<UserRecord>;

    /// Create a record with a freshly generated id.
    ///
    /// Inputs are assumed non-empty; the HTTP layer validates before calling.
    /// Fails with `DuplicateUsername` if a live record already holds the
    /// username. Implementations must keep the uniqueness check and the
    /// insert inside one critical section.
    fn create(&self, username: &str, password: &str) -> Result<UserRecord, UserStoreError>;

    /// Remove a record by id. Returns whether a removal occurred.
    fn delete_by_id(&self, id: &Uuid) -> bool;
}
