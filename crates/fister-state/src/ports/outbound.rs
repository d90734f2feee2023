//! # Outbound Ports (Driven Ports)
//!
//! Dependencies required by the state store service. Implementations live in
//! `crate::adapters`.

use crate::domain::errors::StorageError;
use crate::domain::notification::Notification;

/// Flat string-keyed, string-valued storage.
///
/// Production: `FileBackedSlotStorage`
/// Testing: `InMemorySlotStorage`
pub trait SlotStorage: Send + Sync {
    /// Read a slot. `Ok(None)` means nothing is stored under `key`.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write a slot, replacing any previous value.
    ///
    /// There is no removal: a slot, once written, only ever gets replaced.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Delivery of transient user-facing messages.
///
/// Delivery must not block and cannot fail.
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Wall-clock source (for testability).
pub trait TimeSource: Send + Sync {
    /// Milliseconds since the Unix epoch.
    fn now_millis(&self) -> u64;
}
