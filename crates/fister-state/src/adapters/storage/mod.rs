//! Storage Adapters
//!
//! Implementations of the `SlotStorage` trait.

mod file;
mod memory;

pub use file::FileBackedSlotStorage;
pub use memory::{InMemorySlotStorage, DEFAULT_QUOTA_BYTES};
