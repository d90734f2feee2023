//! # Domain Errors
//!
//! Error types for the state store.
//!
//! ## Recovery Policy
//!
//! | Error | Raised by | Recovered by |
//! |-------|-----------|--------------|
//! | `DecodeFailure` | `decode` | `load` (reset to defaults) |
//! | `ShapeInvalid` | shape validation | `load` (reset to defaults) |
//! | `PersistFailure` | slot write | `save` (logged + one notification) |
//!
//! None of these escape the store's public `load` / `save` operations.

use thiserror::Error;

/// Slot storage errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// The write would exceed the storage quota.
    #[error("Storage quota exceeded: write needs {required} bytes, quota is {quota} bytes")]
    QuotaExceeded { required: usize, quota: usize },

    /// I/O error during read/write.
    #[error("Storage I/O error: {message}")]
    Io { message: String },

    /// The storage medium rejected the write for another reason.
    #[error("Storage write rejected: {message}")]
    Rejected { message: String },
}

impl From<std::io::Error> for StorageError {
    fn from(err: std::io::Error) -> Self {
        StorageError::Io {
            message: err.to_string(),
        }
    }
}

/// The stored value could not be turned back into structured text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeFailure {
    /// Slot value is empty.
    #[error("stored value is empty")]
    Empty,

    /// Slot value is not valid Base64.
    #[error("malformed encoding: {0}")]
    Encoding(String),

    /// Decoded bytes are not UTF-8 text.
    #[error("decoded payload is not UTF-8: {0}")]
    NotText(String),

    /// Decoded text is not valid JSON (or not the requested record type).
    #[error("structured parse failed: {0}")]
    Parse(String),
}

/// The decoded value does not have the shape required for its record kind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeInvalid {
    /// Top-level value is not an object.
    #[error("top-level value is not an object")]
    NotAnObject,

    /// A required key is absent or null.
    #[error("required key `{key}` is missing")]
    MissingKey { key: &'static str },

    /// A required key holds a value of the wrong JSON type.
    #[error("required key `{key}` must hold a JSON {expected}")]
    WrongType {
        key: &'static str,
        expected: &'static str,
    },

    /// Typed conversion failed after the key checks passed.
    #[error("value does not fit the record: {0}")]
    Mistyped(String),
}

/// Why a slot could not be hydrated. Always recovered inside `load`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadFailure {
    /// No value stored under the slot key.
    #[error("slot is empty")]
    Absent,

    /// The storage medium failed on read.
    #[error("slot could not be read: {0}")]
    Unreadable(StorageError),

    #[error(transparent)]
    Decode(#[from] DecodeFailure),

    #[error(transparent)]
    Shape(#[from] ShapeInvalid),
}

/// A slot write was rejected. Caught at the `save` boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Could not persist slot `{slot}`: {source}")]
pub struct PersistFailure {
    pub slot: String,
    pub source: StorageError,
}

/// Invalid store configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Slot key `{field}` must not be empty")]
    EmptySlotKey { field: &'static str },

    #[error("Catalog and user slots share the key `{key}`")]
    SharedSlotKey { key: String },

    #[error("File-backed storage requested but no storage path is configured")]
    MissingStoragePath,
}

/// Logging initialization errors.
#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Invalid log filter: {0}")]
    Filter(String),

    #[error("Failed to install subscriber: {0}")]
    Init(String),
}
