//! In-process key-value store with an optional byte quota.

use super::{KeyValueStore, StorageError, StorageResult};
use std::cell::RefCell;
use std::collections::BTreeMap;

/// Volatile store; contents live as long as the value.
///
/// With a quota set, a write fails when the total of key and value bytes
/// across all records would exceed it, mirroring browser storage limits.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RefCell<BTreeMap<String, String>>,
    quota_bytes: Option<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_quota(quota_bytes: usize) -> Self {
        Self {
            items: RefCell::default(),
            quota_bytes: Some(quota_bytes),
        }
    }

    fn used_bytes_excluding(&self, key: &str) -> usize {
        self.items
            .borrow()
            .iter()
            .filter(|(existing, _)| existing.as_str() != key)
            .map(|(existing, value)| existing.len() + value.len())
            .sum()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> StorageResult<()> {
        if let Some(limit) = self.quota_bytes {
            let needed = self.used_bytes_excluding(key) + key.len() + value.len();
            if needed > limit {
                return Err(StorageError::QuotaExceeded {
                    key: key.to_string(),
                    limit_bytes: limit,
                });
            }
        }
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> StorageResult<()> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::MemoryStore;
    use crate::storage::{KeyValueStore, StorageError};

    #[test]
    fn quota_counts_replaced_value_once() {
        let store = MemoryStore::with_quota(8);
        store.set_item("k", "1234567").unwrap();
        store.set_item("k", "7654321").unwrap();

        let err = store.set_item("k", "12345678").unwrap_err();
        assert!(matches!(err, StorageError::QuotaExceeded { limit_bytes: 8, .. }));
        assert_eq!(store.get_item("k").unwrap().as_deref(), Some("7654321"));
    }
}
