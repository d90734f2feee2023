//! # Inbound Ports (Driving Ports)
//!
//! The API the presentation layer drives the store through.

use crate::domain::notification::Notification;
use crate::domain::records::{CatalogRecord, RecordKind, UserRecord};

/// Result of a save. A failed save has already been logged and notified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The slot now holds the in-memory record.
    Persisted,
    /// The write was rejected; the in-memory record is still current.
    NotPersisted,
}

impl SaveOutcome {
    pub fn is_persisted(self) -> bool {
        self == SaveOutcome::Persisted
    }

    /// Combine two outcomes; persisted only if both are.
    pub fn and(self, other: SaveOutcome) -> SaveOutcome {
        if self.is_persisted() && other.is_persisted() {
            SaveOutcome::Persisted
        } else {
            SaveOutcome::NotPersisted
        }
    }
}

/// State store API.
///
/// `load_*` never fails: an unusable slot is replaced by the default record,
/// which is persisted before returning. `save` never fails either; rejected
/// writes come back as `SaveOutcome::NotPersisted`.
pub trait StateStoreApi {
    /// Current catalog record.
    fn catalog(&self) -> &CatalogRecord;

    /// Current user record.
    fn user(&self) -> &UserRecord;

    /// Re-hydrate the catalog from its slot.
    fn load_catalog(&mut self) -> &CatalogRecord;

    /// Re-hydrate the user record from its slot.
    fn load_user(&mut self) -> &UserRecord;

    /// Re-hydrate one slot.
    fn load(&mut self, kind: RecordKind) {
        match kind {
            RecordKind::Catalog => {
                self.load_catalog();
            }
            RecordKind::User => {
                self.load_user();
            }
        }
    }

    /// Persist the in-memory record of `kind`.
    fn save(&mut self, kind: RecordKind) -> SaveOutcome;

    /// Persist both records.
    fn save_all(&mut self) -> SaveOutcome;

    /// Mutate the catalog in place, then persist it.
    fn mutate_catalog<T, F>(&mut self, f: F) -> (T, SaveOutcome)
    where
        F: FnOnce(&mut CatalogRecord) -> T;

    /// Mutate the user record in place, then persist it.
    fn mutate_user<T, F>(&mut self, f: F) -> (T, SaveOutcome)
    where
        F: FnOnce(&mut UserRecord) -> T;

    /// Forward a message to the notification surface.
    fn notify(&self, notification: Notification);
}
