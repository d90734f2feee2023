//! # Self-Healing Hydration
//!
//! Reads a slot back into a record. A slot that is absent, unreadable or
//! undecodable, or whose required keys are missing or of the wrong JSON type,
//! resets the record to its default and writes that default back, so the
//! next load finds a valid value and performs no write.
//!
//! There is no partial repair at that level: a catalog without `analytics`
//! loses its servers too. Below it, optional fields recover one by one
//! during typed conversion and the slot is left as stored.

use super::*;
use crate::domain::codec::{decode_value, encode};
use crate::domain::errors::{LoadFailure, PersistFailure, ShapeInvalid};
use crate::domain::notification::Notification;
use crate::domain::records::{PersistedRecord, RecordKind};
use crate::ports::inbound::SaveOutcome;

impl<S, N> StateStoreService<S, N>
where
    S: SlotStorage,
    N: Notifier,
{
    /// Read and validate the slot for `R` without any recovery.
    pub(crate) fn read_slot<R: PersistedRecord>(&self) -> Result<R, LoadFailure> {
        let key = self.config.slot_key(R::KIND);

        let stored = self
            .storage
            .get(key)
            .map_err(LoadFailure::Unreadable)?
            .ok_or(LoadFailure::Absent)?;

        let value = decode_value(&stored)?;
        R::check_shape(&value)?;

        serde_json::from_value(value)
            .map_err(|e| LoadFailure::Shape(ShapeInvalid::Mistyped(e.to_string())))
    }

    /// Load `R`, falling back to (and persisting) its default.
    pub(crate) fn hydrate<R: PersistedRecord>(&mut self) -> R {
        match self.read_slot::<R>() {
            Ok(record) => {
                tracing::debug!(kind = %R::KIND, slot = %self.config.slot_key(R::KIND), "Hydrated record");
                record
            }
            Err(reason) => {
                let slot = self.config.slot_key(R::KIND);
                if reason == LoadFailure::Absent {
                    tracing::info!(kind = %R::KIND, %slot, "Slot empty, writing defaults");
                } else {
                    tracing::warn!(
                        kind = %R::KIND,
                        %slot,
                        %reason,
                        "Stored record unusable, resetting to defaults"
                    );
                }

                let record = R::default();
                let encoded = encode(&record);
                // A failed write has been reported; the default still serves
                // the rest of the session.
                self.write_slot(R::KIND, &encoded);
                record
            }
        }
    }

    /// Write an encoded record, reporting a rejected write once.
    pub(crate) fn write_slot(&mut self, kind: RecordKind, encoded: &str) -> SaveOutcome {
        match self.try_write_slot(kind, encoded) {
            Ok(()) => SaveOutcome::Persisted,
            Err(_) => {
                self.notifier.notify(Notification::save_failed());
                SaveOutcome::NotPersisted
            }
        }
    }

    /// Write an encoded record. Failures are logged but not notified.
    pub(crate) fn try_write_slot(
        &mut self,
        kind: RecordKind,
        encoded: &str,
    ) -> Result<(), PersistFailure> {
        let slot = self.config.slot_key(kind);

        match self.storage.set(slot, encoded) {
            Ok(()) => {
                tracing::debug!(%kind, %slot, bytes = encoded.len(), "Persisted record");
                Ok(())
            }
            Err(source) => {
                let failure = PersistFailure {
                    slot: slot.to_string(),
                    source,
                };
                tracing::error!(%kind, error = %failure, "Error saving data");
                Err(failure)
            }
        }
    }
}
