//! # State Store Service
//!
//! The application service that owns both records.
//!
//! ## Architecture
//!
//! This service:
//! 1. Hydrates both records on construction (self-healing, see `hydrate.rs`)
//! 2. Implements `StateStoreApi` for get / mutate / save
//! 3. Reports rejected writes through the `Notifier` port
//! 4. Uses dependency injection for storage and notification

mod hydrate;
mod store;

use crate::adapters::{
    FileBackedSlotStorage, InMemorySlotStorage, TracingNotifier, DEFAULT_QUOTA_BYTES,
};
use crate::config::StoreConfig;
use crate::domain::errors::ConfigError;
use crate::domain::records::{CatalogRecord, UserRecord};
use crate::ports::outbound::{Notifier, SlotStorage};

/// The State Store Service.
///
/// Single owner of the catalog and user records. Every mutation goes through
/// `&mut self`, so no two read-modify-write sequences can interleave.
pub struct StateStoreService<S, N>
where
    S: SlotStorage,
    N: Notifier,
{
    /// Slot storage holding both encoded records.
    pub(crate) storage: S,
    /// Notification surface for rejected writes.
    pub(crate) notifier: N,
    /// Slot keys and related settings.
    pub(crate) config: StoreConfig,
    /// In-memory catalog record.
    pub(crate) catalog: CatalogRecord,
    /// In-memory user record.
    pub(crate) user: UserRecord,
}

/// Dependencies for StateStoreService
pub struct StateStoreDependencies<S, N> {
    pub storage: S,
    pub notifier: N,
}

impl<S, N> StateStoreService<S, N>
where
    S: SlotStorage,
    N: Notifier,
{
    /// Create the service and hydrate both records from `deps.storage`.
    pub fn new(deps: StateStoreDependencies<S, N>, config: StoreConfig) -> Self {
        let mut service = Self {
            storage: deps.storage,
            notifier: deps.notifier,
            config,
            catalog: CatalogRecord::default(),
            user: UserRecord::default(),
        };

        service.catalog = service.hydrate::<CatalogRecord>();
        service.user = service.hydrate::<UserRecord>();

        tracing::info!(
            servers = service.catalog.servers.len(),
            services = service.catalog.services.len(),
            balance = service.user.balance,
            "State store ready"
        );

        service
    }

    /// Like `new`, rejecting unusable slot keys first.
    pub fn try_new(
        deps: StateStoreDependencies<S, N>,
        config: StoreConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(deps, config))
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Direct access to the slot storage. Changes made here are only seen by
    /// the in-memory records after the next `load_*`.
    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Tear the service down, returning its storage.
    pub fn into_storage(self) -> S {
        self.storage
    }
}

impl StateStoreService<InMemorySlotStorage, TracingNotifier> {
    /// Service over fresh in-memory storage capped at a browser origin's
    /// quota, notifying through the log.
    pub fn new_in_memory(config: StoreConfig) -> Self {
        let deps = StateStoreDependencies {
            storage: InMemorySlotStorage::with_quota(DEFAULT_QUOTA_BYTES),
            notifier: TracingNotifier,
        };
        Self::new(deps, config)
    }
}

impl StateStoreService<FileBackedSlotStorage, TracingNotifier> {
    /// Service over the file at `config.storage_path`, notifying through the log.
    pub fn new_file_backed(config: StoreConfig) -> Result<Self, ConfigError> {
        let path = config
            .storage_path
            .clone()
            .ok_or(ConfigError::MissingStoragePath)?;
        let deps = StateStoreDependencies {
            storage: FileBackedSlotStorage::new(path),
            notifier: TracingNotifier,
        };
        Self::try_new(deps, config)
    }
}
