//! # Domain Layer
//!
//! Records, their wire codec and the rules applied when hydrating them.
//!
//! ## Modules
//!
//! - `records` - `CatalogRecord`, `UserRecord` and their default shapes
//! - `codec` - JSON + Base64 slot value transform
//! - `shape` - Required-key presence checks
//! - `ids` - Monotonic server identifiers
//! - `notification` - User-facing transient messages
//! - `errors` - Domain error types

pub mod codec;
pub mod errors;
pub mod ids;
pub mod notification;
pub mod records;
pub mod shape;
