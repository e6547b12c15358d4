// 📂 Record Loading - batches of records from CSV or JSON files
// Any of the record types (products, users, rated items, books) can be loaded.

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Load a CSV file with a header row. Empty cells become `None` for optional fields.
pub fn load_csv<T: DeserializeOwned>(csv_path: &Path) -> Result<Vec<T>> {
    let mut rdr = csv::Reader::from_path(csv_path)
        .with_context(|| format!("Failed to open CSV file: {}", csv_path.display()))?;

    let mut records = Vec::new();
    for (line, result) in rdr.deserialize().enumerate() {
        // +2: header row and 1-based numbering
        let record: T = result
            .with_context(|| format!("Failed to deserialize record on line {}", line + 2))?;
        records.push(record);
    }

    debug!(path = %csv_path.display(), count = records.len(), "loaded CSV records");
    Ok(records)
}

/// Load a JSON file holding an array of records
pub fn load_json<T: DeserializeOwned>(json_path: &Path) -> Result<Vec<T>> {
    let content = fs::read_to_string(json_path)
        .with_context(|| format!("Failed to read JSON file: {}", json_path.display()))?;
    let records: Vec<T> = serde_json::from_str(&content).context("Failed to parse JSON records")?;

    debug!(path = %json_path.display(), count = records.len(), "loaded JSON records");
    Ok(records)
}
