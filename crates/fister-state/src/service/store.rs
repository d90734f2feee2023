//! # State Store API Implementation
//!
//! Implements the StateStoreApi trait for get / mutate / save.

use super::*;
use crate::domain::codec::encode;
use crate::domain::notification::Notification;
use crate::domain::records::RecordKind;
use crate::ports::inbound::{SaveOutcome, StateStoreApi};

impl<S, N> StateStoreApi for StateStoreService<S, N>
where
    S: SlotStorage,
    N: Notifier,
{
    fn catalog(&self) -> &CatalogRecord {
        &self.catalog
    }

    fn user(&self) -> &UserRecord {
        &self.user
    }

    fn load_catalog(&mut self) -> &CatalogRecord {
        self.catalog = self.hydrate::<CatalogRecord>();
        &self.catalog
    }

    fn load_user(&mut self) -> &UserRecord {
        self.user = self.hydrate::<UserRecord>();
        &self.user
    }

    fn save(&mut self, kind: RecordKind) -> SaveOutcome {
        let encoded = self.encode_current(kind);
        self.write_slot(kind, &encoded)
    }

    fn save_all(&mut self) -> SaveOutcome {
        let mut failed = false;
        for kind in RecordKind::ALL {
            let encoded = self.encode_current(kind);
            failed |= self.try_write_slot(kind, &encoded).is_err();
        }

        if failed {
            self.notifier.notify(Notification::save_failed());
            SaveOutcome::NotPersisted
        } else {
            SaveOutcome::Persisted
        }
    }

    fn mutate_catalog<T, F>(&mut self, f: F) -> (T, SaveOutcome)
    where
        F: FnOnce(&mut CatalogRecord) -> T,
    {
        let value = f(&mut self.catalog);
        (value, self.save(RecordKind::Catalog))
    }

    fn mutate_user<T, F>(&mut self, f: F) -> (T, SaveOutcome)
    where
        F: FnOnce(&mut UserRecord) -> T,
    {
        let value = f(&mut self.user);
        (value, self.save(RecordKind::User))
    }

    fn notify(&self, notification: Notification) {
        self.notifier.notify(notification);
    }
}

impl<S, N> StateStoreService<S, N>
where
    S: SlotStorage,
    N: Notifier,
{
    fn encode_current(&self, kind: RecordKind) -> String {
        match kind {
            RecordKind::Catalog => encode(&self.catalog),
            RecordKind::User => encode(&self.user),
        }
    }
}
