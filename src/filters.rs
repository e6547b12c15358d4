// 🔎 Record Filters - rated items and active users
// Both return fresh vectors in input order; inputs are only borrowed.

use crate::config::{FilterConfig, DEFAULT_MIN_RATING};
use serde::{Deserialize, Serialize};
use tracing::debug;

// ============================================================================
// RECORDS
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatedItem {
    pub title: String,
    pub rating: f64,
}

impl RatedItem {
    pub fn new(title: impl Into<String>, rating: f64) -> Self {
        RatedItem {
            title: title.into(),
            rating,
        }
    }
}

/// User account record. `id` is expected to be unique but that is not checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub is_active: bool,
}

// ============================================================================
// RATING FILTER
// ============================================================================

/// Keep items rated 4 or higher
pub fn filter_by_rating(items: &[RatedItem]) -> Vec<RatedItem> {
    filter_by_min_rating(items, DEFAULT_MIN_RATING)
}

/// Keep items whose rating is at least `min_rating`
pub fn filter_by_min_rating(items: &[RatedItem], min_rating: f64) -> Vec<RatedItem> {
    let kept: Vec<RatedItem> = items
        .iter()
        .filter(|item| item.rating >= min_rating)
        .cloned()
        .collect();

    debug!(
        input = items.len(),
        kept = kept.len(),
        min_rating,
        "filtered rated items"
    );
    kept
}

pub fn filter_by_config(items: &[RatedItem], config: &FilterConfig) -> Vec<RatedItem> {
    filter_by_min_rating(items, config.min_rating)
}

// ============================================================================
// ACTIVE USER FILTER
// ============================================================================

pub fn filter_active_users(users: &[User]) -> Vec<User> {
    let active: Vec<User> = users.iter().filter(|u| u.is_active).cloned().collect();

    debug!(input = users.len(), active = active.len(), "filtered users");
    active
}

// ============================================================================
// TESTS
// ============================================================================
