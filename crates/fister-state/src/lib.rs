//! # FisterSMS State Store
//!
//! Local persistence layer for the FisterSMS storefront. Owns the two records
//! the storefront works with and round-trips them through a flat,
//! string-keyed slot storage (the browser origin's local storage when the
//! storefront runs in a browser).
//!
//! ## Records
//!
//! | Record | Slot (default key) | Required keys |
//! |--------|--------------------|---------------|
//! | `CatalogRecord` | `fisterSMS_db_v15_config` | `servers`, `analytics` |
//! | `UserRecord` | `fisterSMS_user_v15_state` | `balance` |
//!
//! ## Slot Value Format
//!
//! ```text
//! record ──serde_json──→ JSON text ──Base64 (STANDARD)──→ slot value
//! ```
//!
//! The Base64 step is obfuscation only. It offers no confidentiality and no
//! integrity protection.
//!
//! ## Self-Healing Load
//!
//! Loading never fails. An absent slot, an undecodable value or a record
//! missing a required key is replaced by the default record, which is then
//! written back so the next load reads a valid value. Optional fields that
//! do not fit fall back to their defaults one by one, and unknown keys are
//! kept.
//!
//! ## Crate Structure (Hexagonal Architecture)
//!
//! - `domain/` - Records, codec, shape validation, errors
//! - `ports/` - Port traits (inbound store API, outbound storage/notifier/time)
//! - `adapters/` - Slot storage, notifier and clock implementations
//! - `service/` - `StateStoreService`, the application service
//! - `storefront/` - Presentation-layer actions built on the store
//!
//! ## Usage
//!
//! ```ignore
//! use fister_state::{StateStoreService, StoreConfig, StateStoreApi};
//!
//! let mut store = StateStoreService::new_in_memory(StoreConfig::default());
//! let (_, outcome) = store.mutate_user(|user| user.balance -= 12.5);
//! assert!(outcome.is_persisted());
//! ```

pub mod adapters;
pub mod config;
pub mod domain;
pub mod logging;
pub mod ports;
pub mod service;
pub mod storefront;

#[cfg(test)]
pub(crate) mod test_utils;

// Re-export key types for convenience
pub use config::StoreConfig;
pub use domain::codec::{decode, decode_value, encode};
pub use domain::errors::{
    ConfigError, DecodeFailure, LoadFailure, LoggingError, PersistFailure, ShapeInvalid,
    StorageError,
};
pub use domain::ids::ServerIdGenerator;
pub use domain::notification::{Notification, Severity};
pub use domain::records::{
    Analytics, CatalogRecord, PersistedRecord, RecordKind, Seo, ServerEntry, UserRecord,
};
pub use ports::inbound::{SaveOutcome, StateStoreApi};
pub use ports::outbound::{Notifier, SlotStorage, TimeSource};
pub use service::{StateStoreDependencies, StateStoreService};
