//! Line classification for sanitized note lines.
//!
//! Classification and rewriting are kept separate: the classifier assigns
//! each line a [`LineClass`] tag and the translator dispatches on it. The
//! precedence order below is significant and mirrors the source format:
//! list-style markers shadow attribute lines (they share the `::` syntax),
//! and list items shadow headings and attributes.

use regex::Regex;

/// Attribute value that turns the preceding line into a numbered list item.
pub const ORDERED_LIST_MARKER: &str = "logseq.order-list-type:: number";

/// Attribute value that turns the preceding line into a bulleted list item.
pub const BULLET_LIST_MARKER: &str = "logseq.order-list-type:: bullet";

/// Classification of a single sanitized line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineClass<'a> {
    /// `logseq.order-list-type:: number`: rewrite the previous line as `1. `.
    OrderedListMarker,
    /// `logseq.order-list-type:: bullet`: rewrite the previous line as `* `.
    BulletListMarker,
    /// An outline list line (`leading whitespace, then "- "`).
    ListItem,
    /// A `# ` heading; the payload is the trimmed title text.
    Heading(&'a str),
    /// A `key:: value` attribute destined for frontmatter.
    Attribute {
        /// Attribute name, without the `::` marker.
        key: &'a str,
        /// Attribute value, trimmed.
        value: &'a str,
    },
    /// Anything else: ordinary prose content.
    Prose,
}

/// Classifies sanitized lines into [`LineClass`] tags.
pub struct LineClassifier {
    attribute_regex: Regex,
    list_regex: Regex,
}

impl LineClassifier {
    /// Create a new classifier.
    pub fn new() -> Self {
        Self {
            attribute_regex: Regex::new(r"^[A-Za-z0-9-_.]+::\s").unwrap(),
            list_regex: Regex::new(r"^[\s\t]*- ").unwrap(),
        }
    }

    /// Classify one sanitized line.
    pub fn classify<'a>(&self, line: &'a str) -> LineClass<'a> {
        if line.contains(ORDERED_LIST_MARKER) {
            return LineClass::OrderedListMarker;
        }
        if line.contains(BULLET_LIST_MARKER) {
            return LineClass::BulletListMarker;
        }
        if self.list_regex.is_match(line) {
            return LineClass::ListItem;
        }
        if let Some(title) = line.strip_prefix("# ") {
            return LineClass::Heading(title.trim());
        }
        if let Some(m) = self.attribute_regex.find(line) {
            let marker = m.as_str();
            let key = marker.trim_end().trim_end_matches("::");
            return LineClass::Attribute {
                key,
                value: line[m.end()..].trim(),
            };
        }
        LineClass::Prose
    }
}

impl Default for LineClassifier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordered_marker() {
        let classifier = LineClassifier::new();
        assert_eq!(
            classifier.classify("logseq.order-list-type:: number"),
            LineClass::OrderedListMarker
        );
        // The marker wins even with surrounding text.
        assert_eq!(
            classifier.classify("  logseq.order-list-type:: number"),
            LineClass::OrderedListMarker
        );
    }

    #[test]
    fn test_bullet_marker() {
        let classifier = LineClassifier::new();
        assert_eq!(
            classifier.classify("logseq.order-list-type:: bullet"),
            LineClass::BulletListMarker
        );
    }

    #[test]
    fn test_list_item() {
        let classifier = LineClassifier::new();
        assert_eq!(classifier.classify("\t- nested item"), LineClass::ListItem);
        assert_eq!(classifier.classify("- top item"), LineClass::ListItem);
        assert_eq!(classifier.classify("   - spaced"), LineClass::ListItem);
    }

    #[test]
    fn test_heading() {
        let classifier = LineClassifier::new();
        assert_eq!(
            classifier.classify("# My Title  "),
            LineClass::Heading("My Title")
        );
        // Only h1 is promoted; deeper headings stay prose.
        assert_eq!(classifier.classify("## Section"), LineClass::Prose);
    }

    #[test]
    fn test_attribute() {
        let classifier = LineClassifier::new();
        assert_eq!(
            classifier.classify("tags:: a, b, c"),
            LineClass::Attribute {
                key: "tags",
                value: "a, b, c"
            }
        );
        assert_eq!(
            classifier.classify("my-key.sub_2:: value"),
            LineClass::Attribute {
                key: "my-key.sub_2",
                value: "value"
            }
        );
    }

    #[test]
    fn test_attribute_requires_line_start() {
        let classifier = LineClassifier::new();
        assert_eq!(
            classifier.classify("see also tags:: a"),
            LineClass::Prose
        );
    }

    #[test]
    fn test_double_colon_without_space_is_prose() {
        let classifier = LineClassifier::new();
        assert_eq!(classifier.classify("tags::a"), LineClass::Prose);
    }

    #[test]
    fn test_prose() {
        let classifier = LineClassifier::new();
        assert_eq!(classifier.classify("just a paragraph"), LineClass::Prose);
    }
}
