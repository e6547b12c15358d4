// 📏 Length Computor - UTF-16 units of text, elements of a sequence
//
// The typed path (`get_length`) is total. Loosely-typed JSON goes through
// `LengthInput::try_from` first, which is where WrongInputKind comes from.

use crate::error::{Result, UtilityError};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

// ============================================================================
// LENGTH INPUT
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LengthInput {
    Text(String),
    Sequence(Vec<Value>),
}

impl From<&str> for LengthInput {
    fn from(s: &str) -> Self {
        LengthInput::Text(s.to_string())
    }
}

impl From<Vec<Value>> for LengthInput {
    fn from(items: Vec<Value>) -> Self {
        LengthInput::Sequence(items)
    }
}

impl TryFrom<Value> for LengthInput {
    type Error = UtilityError;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::String(s) => Ok(LengthInput::Text(s)),
            Value::Array(items) => Ok(LengthInput::Sequence(items)),
            other => {
                let found = json_kind(&other);
                warn!(found, "length requested for unsupported input");
                Err(UtilityError::WrongInputKind { found })
            }
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// ============================================================================
// LENGTH
// ============================================================================

/// Number of UTF-16 code units for text, number of elements for a sequence.
///
/// Text outside the Basic Multilingual Plane counts twice (`"😀"` is 2).
pub fn get_length(input: &LengthInput) -> usize {
    match input {
        LengthInput::Text(s) => s.encode_utf16().count(),
        LengthInput::Sequence(items) => items.len(),
    }
}

/// Length of an arbitrary JSON value, rejecting anything but strings and arrays.
pub fn get_length_of_value(value: &Value) -> Result<usize> {
    let input = LengthInput::try_from(value.clone())?;
    Ok(get_length(&input))
}

// ============================================================================
// TESTS
// ============================================================================
