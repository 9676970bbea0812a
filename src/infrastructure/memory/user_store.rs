//! In-Memory User Store Implementation

use std::collections::BTreeMap;
use std::sync::Mutex;

use uuid::Uuid;

use crate::application::ports::{UserRecord, UserStoreError, UserStorePort};

/// In-memory user store.
///
/// A single mutex guards the whole collection so that the uniqueness check
/// and the insert in `create` form one critical section; the lock is never
/// held across an await point. BTreeMap keys the records by id and gives
/// `list_all` a stable iteration order.
pub struct InMemoryUserStore {
    users: Mutex<BTreeMap<Uuid, UserRecord>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self {
            users: Mutex::new(BTreeMap::new()),
        }
    }
}

impl Default for InMemoryUserStore {
    fn default() -> Self {
        Self::new()
    }
}

impl UserStorePort for InMemoryUserStore {
    fn list_all(&self) -> Vec<UserRecord> {
        self.users.lock().unwrap().values().cloned().collect()
    }

    fn get_by_id(&self, id: &Uuid) -> Option<UserRecord> {
        self.users.lock().unwrap().get(id).cloned()
    }

    fn get_by_username(&self, username: &str) -> Option<UserRecord> {
        self.users
            .lock()
            .unwrap()
            .values()
            .find(|u| u.username == username)
            .cloned()
    }

    fn create(&self, username: &str, password: &str) -> Result<UserRecord, UserStoreError> {
        let mut users = self.users.lock().unwrap();

        if users.values().any(|u| u.username == username) {
            return Err(UserStoreError::DuplicateUsername(username.to_string()));
        }

        let record = UserRecord {
            id: Uuid::new_v4(),
            username: username.to_string(),
            password: password.to_string(),
        };
        users.insert(record.id, record.clone());

        tracing::info!(user_id = %record.id, username = %record.username, "User created");
        Ok(record)
    }

    fn delete_by_id(&self, id: &Uuid) -> bool {
        let removed = self.users.lock().unwrap().remove(id).is_some();
        if removed {
            tracing::info!(user_id = %id, "User deleted");
        }
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_then_get_by_id_returns_identical_record() {
        let store = InMemoryUserStore::new();

        let created = store.create("alice", "p1").unwrap();
        assert!(!created.id.is_nil());

        let fetched = store.get_by_id(&created.id).unwrap();
        assert_eq!(fetched, created);
    }

    #[test]
    fn test_duplicate_username_rejected_regardless_of_password() {
        let store = InMemoryUserStore::new();
        store.create("alice", "p1").unwrap();

        let result = store.create("alice", "completely-different");
        assert!(matches!(
            result,
            Err(UserStoreError::DuplicateUsername(name)) if name == "alice"
        ));
        assert_eq!(store.list_all().len(), 1);
    }

    #[test]
    fn test_get_by_username() {
        let store = InMemoryUserStore::new();
        let created = store.create("bob", "pw").unwrap();

        assert_eq!(store.get_by_username("bob").unwrap().id, created.id);
        assert!(store.get_by_username("nobody").is_none());
    }

    #[test]
    fn test_delete_absent_id_leaves_collection_unchanged() {
        let store = InMemoryUserStore::new();
        store.create("alice", "p1").unwrap();

        assert!(!store.delete_by_id(&Uuid::new_v4()));
        assert_eq!(store.list_all().len(), 1);
    }

    #[test]
    fn test_delete_is_not_idempotent_on_return_value() {
        let store = InMemoryUserStore::new();
        let record = store.create("alice", "p1").unwrap();

        assert!(store.delete_by_id(&record.id));
        assert!(!store.delete_by_id(&record.id));
        assert!(store.get_by_id(&record.id).is_none());
    }

    #[test]
    fn test_list_size_tracks_creates_minus_deletes() {
        let store = InMemoryUserStore::new();

        let a = store.create("a", "x").unwrap();
        store.create("b", "x").unwrap();
        store.create("c", "x").unwrap();
        assert_eq!(store.list_all().len(), 3);

        store.delete_by_id(&a.id);
        assert_eq!(store.list_all().len(), 2);

        // A username freed by delete can be reused.
        store.create("a", "y").unwrap();
        assert_eq!(store.list_all().len(), 3);
    }

    #[test]
    fn test_list_order_is_stable() {
        let store = InMemoryUserStore::new();
        for name in ["a", "b", "c", "d"] {
            store.create(name, "x").unwrap();
        }

        let first: Vec<Uuid> = store.list_all().iter().map(|u| u.id).collect();
        let second: Vec<Uuid> = store.list_all().iter().map(|u| u.id).collect();
        assert_eq!(first, second);
    }
}
