//! Ordered frontmatter mapping.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Delimiter line opening and closing a YAML frontmatter block.
pub const FRONTMATTER_DELIMITER: &str = "---";

/// Policy for attribute keys that appear more than once in a note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicateKeys {
    /// Keep the last value seen (the reference behavior).
    #[default]
    Overwrite,
    /// Fail the conversion, naming the repeated key.
    Error,
}

/// Ordered key-value metadata destined for the YAML frontmatter header.
///
/// Keys keep their first-insertion position; overwriting a key replaces the
/// value in place. Duplicate handling itself is the translator's concern;
/// this type only reports whether an insert replaced an existing value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Frontmatter {
    entries: IndexMap<String, String>,
}

impl Frontmatter {
    /// Create an empty frontmatter mapping.
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the mapping has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Insert a key-value pair, returning the previous value if the key
    /// already existed. The key keeps its original position on overwrite.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.entries.insert(key.into(), value.into())
    }

    /// Get a value by key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(|v| v.as_str())
    }

    /// Check whether a key exists.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Iterate over entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Serialize as a YAML frontmatter block.
    ///
    /// Emits the opening delimiter, one `key: value` line per entry in
    /// insertion order, the closing delimiter, and a blank separator line.
    /// The `title` value is double-quoted; other values are emitted trimmed.
    /// Empty frontmatter produces an empty string.
    pub fn to_yaml_block(&self) -> String {
        if self.entries.is_empty() {
            return String::new();
        }

        let mut lines = vec![FRONTMATTER_DELIMITER.to_string()];
        for (key, value) in &self.entries {
            if key == "title" {
                lines.push(format!("{}: \"{}\"", key, escape_yaml(value.trim())));
            } else {
                lines.push(format!("{}: {}", key, value.trim()));
            }
        }
        lines.push(FRONTMATTER_DELIMITER.to_string());
        lines.push(String::new());
        lines.push(String::new());

        lines.join("\n")
    }
}

/// Escape special characters for YAML strings.
fn escape_yaml(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}
