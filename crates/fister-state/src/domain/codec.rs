//! # Slot Value Codec
//!
//! JSON text wrapped in standard padded Base64 (RFC 4648 §4).
//!
//! This is a reversible text transform so a record can live in a plain
//! string slot. It is NOT encryption: anyone holding the slot value can read
//! and rewrite the record.

use crate::domain::errors::DecodeFailure;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

/// Encode a record into a slot value.
///
/// Serializing one of the store's records cannot fail. A caller-supplied
/// type whose `Serialize` impl errors yields an empty string, which the next
/// load treats as an absent slot.
pub fn encode<R: Serialize + ?Sized>(record: &R) -> String {
    match serde_json::to_vec(record) {
        Ok(json) => STANDARD.encode(json),
        Err(e) => {
            tracing::error!(error = %e, "record is not representable as JSON");
            String::new()
        }
    }
}

/// Reverse the transform and parse the JSON text, without any shape check.
///
/// Surrounding whitespace is ignored.
pub fn decode_value(encoded: &str) -> Result<Value, DecodeFailure> {
    let encoded = encoded.trim();
    if encoded.is_empty() {
        return Err(DecodeFailure::Empty);
    }

    let bytes = STANDARD
        .decode(encoded)
        .map_err(|e| DecodeFailure::Encoding(e.to_string()))?;
    let text = std::str::from_utf8(&bytes).map_err(|e| DecodeFailure::NotText(e.to_string()))?;

    serde_json::from_str(text).map_err(|e| DecodeFailure::Parse(e.to_string()))
}

/// Decode a slot value directly into a typed record.
pub fn decode<R: DeserializeOwned>(encoded: &str) -> Result<R, DecodeFailure> {
    let value = decode_value(encoded)?;
    serde_json::from_value(value).map_err(|e| DecodeFailure::Parse(e.to_string()))
}
