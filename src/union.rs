// 🔗 Union - merge a second sequence into a copy of the first
//
// Membership for each element of `second` is checked against the result built
// so far, not against `first` alone. Duplicates inside `first` survive;
// repeats inside `second` collapse to their first occurrence.

use serde::{Deserialize, Serialize};
use tracing::debug;

// ============================================================================
// MIXED VALUE
// ============================================================================

/// Text or number. `Number(5.0)` and `Text("5")` are never equal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MixedValue {
    Number(f64),
    Text(String),
}

impl From<&str> for MixedValue {
    fn from(s: &str) -> Self {
        MixedValue::Text(s.to_string())
    }
}

impl From<f64> for MixedValue {
    fn from(n: f64) -> Self {
        MixedValue::Number(n)
    }
}

impl From<i32> for MixedValue {
    fn from(n: i32) -> Self {
        MixedValue::Number(f64::from(n))
    }
}

// ============================================================================
// UNION
// ============================================================================

pub fn get_unique_values<T: PartialEq + Clone>(first: &[T], second: &[T]) -> Vec<T> {
    let mut merged = first.to_vec();

    for candidate in second {
        if !merged.contains(candidate) {
            merged.push(candidate.clone());
        }
    }

    debug!(
        first = first.len(),
        second = second.len(),
        merged = merged.len(),
        "merged sequences"
    );
    merged
}

// ============================================================================
// TESTS
// ============================================================================
