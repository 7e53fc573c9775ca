//! # unlogseq
//!
//! Convert Logseq outline notes to standard Markdown with YAML frontmatter.
//!
//! Logseq writes every line as an outline list item and encodes metadata as
//! inline `key:: value` attributes. This library undoes both: outline
//! prefixes are stripped, attribute lines are collected into a frontmatter
//! header, a `# ` heading becomes the `title` entry, and
//! `logseq.order-list-type::` instructions rewrite list markers.
//!
//! ## Quick Start
//!
//! ```no_run
//! use unlogseq::{load_file, translate};
//!
//! fn main() -> unlogseq::Result<()> {
//!     // Load and sanitize a Logseq note
//!     let lines = load_file("Homepage.md")?;
//!
//!     // Translate to Markdown with frontmatter
//!     let note = translate(&lines)?;
//!     println!("{}", note.to_markdown());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Frontmatter extraction**: `key:: value` attributes and `# ` titles
//! - **List rewriting**: ordered/bulleted list-type instructions applied
//! - **Explicit duplicate policy**: last-write-wins or fail fast
//! - **Batch support**: recursive directory listing with extension filters

pub mod classify;
pub mod error;
pub mod loader;
pub mod model;
pub mod translate;
pub mod walk;

// Re-export commonly used types
pub use classify::{LineClass, LineClassifier, BULLET_LIST_MARKER, ORDERED_LIST_MARKER};
pub use error::{Error, Result};
pub use loader::{load_file, load_file_with_options, load_str, Encoding, LoadOptions, SourceLine};
pub use model::{DuplicateKeys, Frontmatter, Note};
pub use translate::{translate, translate_with_options, JsonFormat, TranslateOptions, Translator};
pub use walk::{list_tree, list_tree_filtered, TreeListing};

use std::path::Path;

/// Load a note file and translate it with default options.
///
/// # Example
///
/// ```no_run
/// use unlogseq::translate_file;
///
/// let note = translate_file("Homepage.md").unwrap();
/// println!("title: {:?}", note.title());
/// ```
pub fn translate_file<P: AsRef<Path>>(path: P) -> Result<Note> {
    let lines = loader::load_file(path)?;
    translate::translate(&lines)
}

/// Translate note content already held in memory with default options.
pub fn translate_str(text: &str) -> Result<Note> {
    let lines = loader::load_str(text);
    translate::translate(&lines)
}

/// Convert a note file straight to Markdown.
///
/// # Example
///
/// ```no_run
/// use unlogseq::to_markdown;
///
/// let markdown = to_markdown("Homepage.md").unwrap();
/// std::fs::write("output.md", markdown).unwrap();
/// ```
pub fn to_markdown<P: AsRef<Path>>(path: P) -> Result<String> {
    Ok(translate_file(path)?.to_markdown())
}

/// Builder for loading and translating Logseq notes.
///
/// # Example
///
/// ```no_run
/// use unlogseq::Unlogseq;
///
/// let markdown = Unlogseq::new()
///     .lossy()
///     .strict_keys()
///     .convert("Homepage.md")?
///     .to_markdown();
/// # Ok::<(), unlogseq::Error>(())
/// ```
pub struct Unlogseq {
    load_options: LoadOptions,
    translate_options: TranslateOptions,
}

impl Unlogseq {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            load_options: LoadOptions::default(),
            translate_options: TranslateOptions::default(),
        }
    }

    /// Set the source encoding.
    pub fn with_encoding(mut self, encoding: Encoding) -> Self {
        self.load_options = self.load_options.with_encoding(encoding);
        self
    }

    /// Decode with replacement characters instead of failing on bad bytes.
    pub fn lossy(mut self) -> Self {
        self.load_options = self.load_options.lossy();
        self
    }

    /// Strip all trailing whitespace from sanitized lines.
    pub fn trim_trailing(mut self) -> Self {
        self.load_options = self.load_options.with_trim_trailing(true);
        self
    }

    /// Fail on repeated frontmatter keys instead of overwriting.
    pub fn strict_keys(mut self) -> Self {
        self.translate_options = self.translate_options.strict_keys();
        self
    }

    /// Set the bullet marker character for list rewriting.
    pub fn with_bullet_marker(mut self, marker: char) -> Self {
        self.translate_options = self.translate_options.with_bullet_marker(marker);
        self
    }

    /// Load and translate a note file.
    pub fn convert<P: AsRef<Path>>(self, path: P) -> Result<UnlogseqResult> {
        let lines = loader::load_file_with_options(path, &self.load_options)?;
        let note = Translator::new(self.translate_options).translate(&lines)?;
        Ok(UnlogseqResult { note })
    }

    /// Translate note content already held in memory.
    pub fn convert_str(self, text: &str) -> Result<UnlogseqResult> {
        let lines = loader::load_str_with_options(text, &self.load_options);
        let note = Translator::new(self.translate_options).translate(&lines)?;
        Ok(UnlogseqResult { note })
    }
}

impl Default for Unlogseq {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of translating a note.
pub struct UnlogseqResult {
    /// The translated note
    pub note: Note,
}

impl UnlogseqResult {
    /// Serialize as Markdown with frontmatter.
    pub fn to_markdown(&self) -> String {
        self.note.to_markdown()
    }

    /// Serialize as JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        translate::to_json(&self.note, format)
    }

    /// Get the translated note.
    pub fn note(&self) -> &Note {
        &self.note
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unlogseq_builder() {
        let unlogseq = Unlogseq::new().lossy().strict_keys();

        assert_eq!(unlogseq.load_options.encoding, Encoding::Utf8Lossy);
        assert_eq!(
            unlogseq.translate_options.duplicate_keys,
            DuplicateKeys::Error
        );
    }

    #[test]
    fn test_unlogseq_builder_default() {
        let builder = Unlogseq::default();
        assert_eq!(builder.load_options.encoding, Encoding::Utf8);
        assert_eq!(
            builder.translate_options.duplicate_keys,
            DuplicateKeys::Overwrite
        );
    }

    #[test]
    fn test_convert_str_end_to_end() {
        let input = "- # Homepage\n- tags:: home, index\n- Welcome to my notes.\n";
        let result = Unlogseq::new().convert_str(input).unwrap();

        let markdown = result.to_markdown();
        assert!(markdown.starts_with("---\ntitle: \"Homepage\"\n"));
        assert!(markdown.contains("tags: home, index"));
        assert!(markdown.contains("Welcome to my notes."));
    }

    #[test]
    fn test_translate_str_without_metadata() {
        let note = translate_str("- plain note body\n").unwrap();
        assert!(note.frontmatter.is_empty());
        assert_eq!(note.to_markdown(), "\nplain note body\n");
    }

    #[test]
    fn test_convert_str_strict_keys_fails_on_duplicate() {
        let input = "- k:: 1\n- k:: 2\n";
        let result = Unlogseq::new().strict_keys().convert_str(input);
        assert!(result.is_err());
    }

    #[test]
    fn test_translate_file_missing_path() {
        let result = translate_file("/nonexistent/unlogseq-test.md");
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
