//! Translated note type.

use serde::{Deserialize, Serialize};

use super::Frontmatter;

/// A translated note: frontmatter metadata plus rewritten content lines.
///
/// Content entries are already in their final Markdown form; prose entries
/// carry one leading newline so paragraphs stay blank-line separated when
/// the note is serialized.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Note {
    /// Frontmatter metadata (title, attributes).
    pub frontmatter: Frontmatter,

    /// Rewritten content lines in document order.
    pub content: Vec<String>,
}

impl Note {
    /// Create a new empty note.
    pub fn new() -> Self {
        Self {
            frontmatter: Frontmatter::new(),
            content: Vec::new(),
        }
    }

    /// Check whether the note has neither frontmatter nor content.
    pub fn is_empty(&self) -> bool {
        self.frontmatter.is_empty() && self.content.is_empty()
    }

    /// The note title, if one was promoted from a heading or attribute.
    pub fn title(&self) -> Option<&str> {
        self.frontmatter.get("title")
    }

    /// Number of content lines.
    pub fn content_len(&self) -> usize {
        self.content.len()
    }

    /// Serialize the note as Markdown with a YAML frontmatter header.
    ///
    /// The frontmatter block is omitted entirely when no metadata was
    /// collected.
    pub fn to_markdown(&self) -> String {
        let mut output = self.frontmatter.to_yaml_block();
        if !self.content.is_empty() {
            output.push_str(&self.content.join("\n"));
            output.push('\n');
        }
        output
    }
}
