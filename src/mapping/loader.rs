//! Loading the item -> icon dataset.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::error::{Error, Result};
use crate::mapping::record::IconRecord;

/// Load the icon mapping from a JSON file.
///
/// The file must hold a JSON array of objects. Any read or shape error is
/// fatal for the run; there is no per-record tolerance at this stage.
pub fn load_mapping(path: &Path) -> Result<Vec<IconRecord>> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::Mapping(format!("Mapping file not found: {}", path.display()))
        } else {
            Error::Mapping(format!("Failed to read {}: {}", path.display(), e))
        }
    })?;

    let records = parse_mapping(&content)?;

    tracing::info!(
        "Loaded {} icon records from {}",
        records.len(),
        path.display()
    );

    let duplicates = count_duplicate_icons(&records);
    if duplicates > 0 {
        tracing::warn!(
            "{} duplicate icon identifier(s) in mapping; the last download of each wins",
            duplicates
        );
    }

    Ok(records)
}

/// Parse mapping content into records.
pub fn parse_mapping(content: &str) -> Result<Vec<IconRecord>> {
    let value: Value = serde_json::from_str(content)?;

    let entries = match value {
        Value::Array(entries) => entries,
        other => {
            return Err(Error::Mapping(format!(
                "Expected a JSON array of records, found {}",
                json_kind(&other)
            )))
        }
    };

    entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            if !entry.is_object() {
                return Err(Error::Mapping(format!(
                    "Record {} is {}, expected an object",
                    index,
                    json_kind(&entry)
                )));
            }

            serde_json::from_value(entry)
                .map_err(|e| Error::Mapping(format!("Record {}: {}", index, e)))
        })
        .collect()
}

/// Count icon identifiers that appear more than once.
fn count_duplicate_icons(records: &[IconRecord]) -> usize {
    let mut seen = HashSet::new();
    records
        .iter()
        .filter_map(IconRecord::icon)
        .filter(|icon| !seen.insert(*icon))
        .count()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
