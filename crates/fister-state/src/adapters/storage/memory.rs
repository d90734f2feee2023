use crate::domain::errors::StorageError;
use crate::ports::outbound::SlotStorage;
use std::collections::HashMap;

/// Quota of a typical browser origin's local storage (5 MiB).
pub const DEFAULT_QUOTA_BYTES: usize = 5 * 1024 * 1024;

/// In-memory slot storage.
///
/// Unbounded by default. `with_quota` caps the total size of keys plus
/// values, rejecting writes past it with `StorageError::QuotaExceeded`.
#[derive(Debug, Default, Clone)]
pub struct InMemorySlotStorage {
    data: HashMap<String, String>,
    quota: Option<usize>,
}

impl InMemorySlotStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage that rejects writes once keys + values exceed `quota` bytes.
    pub fn with_quota(quota: usize) -> Self {
        Self {
            data: HashMap::new(),
            quota: Some(quota),
        }
    }

    /// Bytes currently used by keys and values.
    pub fn used_bytes(&self) -> usize {
        self.data.iter().map(|(k, v)| k.len() + v.len()).sum()
    }
}

impl SlotStorage for InMemorySlotStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.data.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        if let Some(quota) = self.quota {
            let replaced = self.data.get(key).map_or(0, |old| key.len() + old.len());
            let required = self.used_bytes() - replaced + key.len() + value.len();
            if required > quota {
                return Err(StorageError::QuotaExceeded { required, quota });
            }
        }
        self.data.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
