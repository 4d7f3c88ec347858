//! Icon record representation.

use serde::Deserialize;
use serde_json::{Map, Value};

/// One entry of the item -> icon mapping.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct IconRecord {
    /// Remote icon identifier, also used as the local file name.
    #[serde(default)]
    pub icon: Option<String>,

    /// Remaining fields of the source object, carried through untouched.
    /// Nothing here is type-checked, `name` included.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl IconRecord {
    /// Create a record with only an icon identifier.
    pub fn new(icon: impl Into<String>) -> Self {
        Self {
            icon: Some(icon.into()),
            ..Default::default()
        }
    }

    /// The icon identifier, or `None` when it is missing or blank.
    pub fn icon(&self) -> Option<&str> {
        self.icon.as_deref().filter(|icon| !icon.trim().is_empty())
    }

    /// Item name from the passthrough fields, if it is a string.
    pub fn name(&self) -> Option<&str> {
        self.extra.get("name").and_then(Value::as_str)
    }

    /// Label used in log lines: the icon, falling back to the item name.
    pub fn label(&self) -> &str {
        self.icon().or(self.name()).unwrap_or("<unnamed>")
    }
}
