use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use super::{KeyValueStore, StorageError};

/// In-memory backend.
///
/// With a quota set, a `set` whose key plus value would push the total stored
/// bytes past the limit fails with [`StorageError::QuotaExceeded`] and leaves
/// the previous value in place, the way browser local storage behaves.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    entries: Mutex<HashMap<String, String>>,
    quota: Option<usize>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_quota(limit: usize) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            quota: Some(limit),
        }
    }

    /// Total bytes held (keys plus values).
    pub fn used_bytes(&self) -> usize {
        let entries = self.entries.lock().expect("lock poisoned");
        entries.iter().map(|(k, v)| k.len() + v.len()).sum()
    }

    /// Synchronous read for tests and diagnostics.
    pub fn peek(&self, key: &str) -> Option<String> {
        self.entries.lock().expect("lock poisoned").get(key).cloned()
    }
}

#[async_trait]
impl KeyValueStore for InMemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.peek(key))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().expect("lock poisoned");
        if let Some(limit) = self.quota {
            let others: usize = entries
                .iter()
                .filter(|(k, _)| k.as_str() != key)
                .map(|(k, v)| k.len() + v.len())
                .sum();
            let requested = others + key.len() + value.len();
            if requested > limit {
                return Err(StorageError::QuotaExceeded { requested, limit });
            }
        }
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries.lock().expect("lock poisoned").remove(key);
        Ok(())
    }
}
