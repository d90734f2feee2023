//! # Shape Validation
//!
//! Checks on decoded values before typed conversion. A required key must
//! exist, must not be `null`, and must hold the JSON type its record field
//! is built from (`servers` an array, `analytics` an object, `balance` a
//! number). Nothing else is checked: optional fields and nested entries
//! recover per field during conversion.

use crate::domain::errors::ShapeInvalid;
use serde_json::{Map, Value};

/// JSON type a required key has to hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonKind {
    Array,
    Object,
    Number,
}

impl JsonKind {
    pub const fn label(self) -> &'static str {
        match self {
            JsonKind::Array => "array",
            JsonKind::Object => "object",
            JsonKind::Number => "number",
        }
    }

    fn matches(self, value: &Value) -> bool {
        match self {
            JsonKind::Array => value.is_array(),
            JsonKind::Object => value.is_object(),
            JsonKind::Number => value.is_number(),
        }
    }
}

/// Require the value to be a JSON object.
pub fn require_object(value: &Value) -> Result<&Map<String, Value>, ShapeInvalid> {
    value.as_object().ok_or(ShapeInvalid::NotAnObject)
}

/// Require every key in `keys` to be present, non-null and of its kind.
///
/// Reports the first offending key in `keys` order.
pub fn require_keys(
    value: &Value,
    keys: &[(&'static str, JsonKind)],
) -> Result<(), ShapeInvalid> {
    let object = require_object(value)?;
    for &(key, kind) in keys {
        match object.get(key) {
            None | Some(Value::Null) => return Err(ShapeInvalid::MissingKey { key }),
            Some(found) if !kind.matches(found) => {
                return Err(ShapeInvalid::WrongType {
                    key,
                    expected: kind.label(),
                })
            }
            Some(_) => {}
        }
    }
    Ok(())
}
