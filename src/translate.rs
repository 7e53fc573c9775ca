//! Translating sanitized note lines into Markdown and frontmatter.

use crate::classify::{LineClass, LineClassifier};
use crate::error::{Error, Result};
use crate::loader::SourceLine;
use crate::model::{DuplicateKeys, Note};

/// Indentation substituted for each embedded tab in list content.
const TAB_INDENT: &str = "    ";

/// Translate sanitized lines with default options.
pub fn translate(lines: &[SourceLine]) -> Result<Note> {
    Translator::new(TranslateOptions::default()).translate(lines)
}

/// Translate sanitized lines with custom options.
pub fn translate_with_options(lines: &[SourceLine], options: TranslateOptions) -> Result<Note> {
    Translator::new(options).translate(lines)
}

/// Options for note translation.
#[derive(Debug, Clone)]
pub struct TranslateOptions {
    /// Policy for repeated frontmatter keys
    pub duplicate_keys: DuplicateKeys,

    /// Character to use when rewriting bullet-style list continuations
    pub bullet_marker: char,
}

impl TranslateOptions {
    /// Create new translate options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the duplicate-key policy.
    pub fn with_duplicate_keys(mut self, policy: DuplicateKeys) -> Self {
        self.duplicate_keys = policy;
        self
    }

    /// Fail on repeated frontmatter keys instead of overwriting.
    pub fn strict_keys(mut self) -> Self {
        self.duplicate_keys = DuplicateKeys::Error;
        self
    }

    /// Set the bullet marker character.
    pub fn with_bullet_marker(mut self, marker: char) -> Self {
        self.bullet_marker = marker;
        self
    }
}

impl Default for TranslateOptions {
    fn default() -> Self {
        Self {
            duplicate_keys: DuplicateKeys::Overwrite,
            bullet_marker: '*',
        }
    }
}

/// Translates sanitized lines into a [`Note`].
pub struct Translator {
    options: TranslateOptions,
    classifier: LineClassifier,
}

impl Translator {
    /// Create a new translator.
    pub fn new(options: TranslateOptions) -> Self {
        Self {
            options,
            classifier: LineClassifier::new(),
        }
    }

    /// Translate a sequence of sanitized lines.
    ///
    /// A single forward pass: each line is classified and either rewritten
    /// into content, recorded as frontmatter, or consumed as a
    /// list-continuation instruction that mutates the previous content line.
    pub fn translate(&self, lines: &[SourceLine]) -> Result<Note> {
        let mut note = Note::new();

        for line in lines {
            match self.classifier.classify(&line.text) {
                LineClass::OrderedListMarker => {
                    self.merge_list_marker(&mut note, "1. ", line.number)?;
                }
                LineClass::BulletListMarker => {
                    let marker = format!("{} ", self.options.bullet_marker);
                    self.merge_list_marker(&mut note, &marker, line.number)?;
                }
                LineClass::ListItem => {
                    note.content.push(line.text.replace('\t', TAB_INDENT));
                }
                LineClass::Heading(title) => {
                    self.record(&mut note, "title", title, line.number)?;
                }
                LineClass::Attribute { key, value } => {
                    self.record(&mut note, key, value, line.number)?;
                }
                LineClass::Prose => {
                    // Leading newline keeps paragraphs blank-line separated.
                    note.content.push(format!("\n{}", line.text));
                }
            }
        }

        Ok(note)
    }

    /// Rewrite the previous content line's dash prefix with `marker`.
    ///
    /// The marker line itself produces no output. Requires at least one
    /// prior content line; a marker with nothing to rewrite is a structural
    /// error in the source.
    fn merge_list_marker(&self, note: &mut Note, marker: &str, line: usize) -> Result<()> {
        let previous = note
            .content
            .pop()
            .ok_or(Error::ListMergeUnderflow { line })?;

        let rewritten = previous
            .trim_start_matches('\n')
            .replacen("- ", marker, 1)
            .replace('\t', TAB_INDENT);
        log::debug!("line {}: rewrote list item with marker {:?}", line, marker);
        note.content.push(rewritten);
        Ok(())
    }

    fn record(&self, note: &mut Note, key: &str, value: &str, line: usize) -> Result<()> {
        if self.options.duplicate_keys == DuplicateKeys::Error && note.frontmatter.contains_key(key)
        {
            return Err(Error::DuplicateKey {
                key: key.to_string(),
                line,
            });
        }
        if note.frontmatter.insert(key, value).is_some() {
            log::warn!("line {}: frontmatter key {:?} overwritten", line, key);
        }
        Ok(())
    }
}

/// Output format for JSON rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed with indentation
    #[default]
    Pretty,
    /// Compact single-line output
    Compact,
}

/// Serialize a note as JSON.
pub fn to_json(note: &Note, format: JsonFormat) -> Result<String> {
    let json = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(note)?,
        JsonFormat::Compact => serde_json::to_string(note)?,
    };
    Ok(json)
}
