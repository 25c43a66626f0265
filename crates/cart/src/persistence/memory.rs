use std::collections::HashMap;
use std::sync::RwLock;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::{KeyValueStore, PersistenceError};

/// In-memory key/value store for tests/dev.
///
/// An optional per-value byte quota mimics browser storage limits.
#[derive(Debug, Default)]
pub struct InMemoryKeyValueStore {
    inner: RwLock<HashMap<String, String>>,
    quota: Option<usize>,
    writes: AtomicUsize,
}

impl InMemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject any value longer than `limit` bytes.
    pub fn with_quota(limit: usize) -> Self {
        Self {
            quota: Some(limit),
            ..Self::default()
        }
    }

    /// Number of `set` calls attempted so far, successful or not.
    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

impl KeyValueStore for InMemoryKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        let map = self
            .inner
            .read()
            .map_err(|_| PersistenceError::Unavailable("lock poisoned".into()))?;
        Ok(map.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PersistenceError> {
        self.writes.fetch_add(1, Ordering::SeqCst);

        if let Some(limit) = self.quota {
            if value.len() > limit {
                return Err(PersistenceError::QuotaExceeded {
                    key: key.to_string(),
                    bytes: value.len(),
                    limit,
                });
            }
        }

        let mut map = self
            .inner
            .write()
            .map_err(|_| PersistenceError::Unavailable("lock poisoned".into()))?;
        map.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
