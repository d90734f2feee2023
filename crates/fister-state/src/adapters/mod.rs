//! # Adapters Module
//!
//! Implementations of the outbound ports.
//!
//! ## Modules
//!
//! - `storage`: `SlotStorage` implementations (in-memory, file-backed)
//! - `notify`: `Notifier` implementations
//! - `infra`: Clock

pub mod infra;
pub mod notify;
pub mod storage;

pub use infra::SystemTimeSource;
pub use notify::TracingNotifier;
pub use storage::{FileBackedSlotStorage, InMemorySlotStorage, DEFAULT_QUOTA_BYTES};
