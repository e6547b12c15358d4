// ⚙️ Filter Configuration - thresholds as data
// Loaded from JSON the same way classification rules are; every field has a default.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Items rated at or above this are kept by `filter_by_rating`
pub const DEFAULT_MIN_RATING: f64 = 4.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterConfig {
    #[serde(default = "default_min_rating")]
    pub min_rating: f64,
}

fn default_min_rating() -> f64 {
    DEFAULT_MIN_RATING
}

impl Default for FilterConfig {
    fn default() -> Self {
        FilterConfig {
            min_rating: DEFAULT_MIN_RATING,
        }
    }
}

impl FilterConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse filter config JSON")
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read filter config: {}", path.display()))?;
        Self::from_json_str(&content)
    }
}
