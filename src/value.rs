// 🔤 Value Formatter - one rule per variant
// Text is shouted, numbers are scaled by ten, booleans are flipped.

use serde::{Deserialize, Serialize};

// ============================================================================
// INPUT VALUE
// ============================================================================

/// A scalar that is text, a number or a boolean.
///
/// Deserializes from a bare JSON scalar (`"abc"`, `3`, `true`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InputValue {
    Boolean(bool),
    Number(f64),
    Text(String),
}

impl From<&str> for InputValue {
    fn from(s: &str) -> Self {
        InputValue::Text(s.to_string())
    }
}

impl From<String> for InputValue {
    fn from(s: String) -> Self {
        InputValue::Text(s)
    }
}

impl From<f64> for InputValue {
    fn from(n: f64) -> Self {
        InputValue::Number(n)
    }
}

impl From<bool> for InputValue {
    fn from(b: bool) -> Self {
        InputValue::Boolean(b)
    }
}

// ============================================================================
// FORMATTER
// ============================================================================

pub const NUMBER_SCALE: f64 = 10.0;

/// Format a value according to its variant; the variant is preserved.
pub fn format_value(input: &InputValue) -> InputValue {
    match input {
        InputValue::Text(s) => InputValue::Text(s.to_uppercase()),
        InputValue::Number(n) => InputValue::Number(n * NUMBER_SCALE),
        InputValue::Boolean(b) => InputValue::Boolean(!b),
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_is_uppercased() {
        assert_eq!(format_value(&"hello".into()), InputValue::from("HELLO"));
        assert_eq!(format_value(&"".into()), InputValue::from(""));
        assert_eq!(format_value(&"Straße".into()), InputValue::from("STRASSE"));
    }

    #[test]
    fn test_number_is_scaled() {
        assert_eq!(format_value(&5.0.into()), InputValue::Number(50.0));
        assert_eq!(format_value(&(-1.5).into()), InputValue::Number(-15.0));
        assert_eq!(format_value(&0.0.into()), InputValue::Number(0.0));
    }

    #[test]
    fn test_boolean_is_negated() {
        assert_eq!(format_value(&true.into()), InputValue::Boolean(false));
        assert_eq!(format_value(&false.into()), InputValue::Boolean(true));
    }

    #[test]
    fn test_deserialize_from_json_scalars() {
        let values: Vec<InputValue> = serde_json::from_str(r#"["abc", 3, true]"#).unwrap();
        assert_eq!(
            values,
            vec![
                InputValue::Text("abc".to_string()),
                InputValue::Number(3.0),
                InputValue::Boolean(true),
            ]
        );
    }
}
