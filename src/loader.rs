//! Loading and sanitizing Logseq note files.
//!
//! Logseq stores every line as an outline list item. The loader undoes that
//! "everything is a list" framing: placeholder lines are dropped, the
//! two-character outline prefix (`"- "` or two spaces) is stripped, and one
//! leading tab is removed so the first outline level starts at column zero.
//! Each surviving line keeps its 1-based position in the source file so
//! structural errors downstream can cite it.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Text encoding used to decode note files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Encoding {
    /// Strict UTF-8; invalid bytes are an error.
    #[default]
    Utf8,
    /// UTF-8 with invalid bytes replaced by U+FFFD.
    Utf8Lossy,
}

impl FromStr for Encoding {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self> {
        match name.to_ascii_lowercase().replace('_', "-").as_str() {
            "utf-8" | "utf8" => Ok(Encoding::Utf8),
            "utf-8-lossy" | "utf8-lossy" => Ok(Encoding::Utf8Lossy),
            _ => Err(Error::UnknownEncoding(name.to_string())),
        }
    }
}

/// Options for loading note files.
#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    /// Text encoding of the source file
    pub encoding: Encoding,

    /// Strip all trailing whitespace instead of only the line terminator
    pub trim_trailing_whitespace: bool,
}

impl LoadOptions {
    /// Create new load options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the text encoding.
    pub fn with_encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Decode with replacement characters instead of failing on bad bytes.
    pub fn lossy(mut self) -> Self {
        self.encoding = Encoding::Utf8Lossy;
        self
    }

    /// Strip all trailing whitespace from sanitized lines.
    pub fn with_trim_trailing(mut self, trim: bool) -> Self {
        self.trim_trailing_whitespace = trim;
        self
    }
}

/// A sanitized line together with its position in the source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLine {
    /// 1-based line number in the original file.
    pub number: usize,
    /// Sanitized line text, without trailing terminator.
    pub text: String,
}

impl SourceLine {
    /// Create a source line.
    pub fn new(number: usize, text: impl Into<String>) -> Self {
        Self {
            number,
            text: text.into(),
        }
    }
}

/// Load and sanitize a note file with default options.
pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Vec<SourceLine>> {
    load_file_with_options(path, &LoadOptions::default())
}

/// Load and sanitize a note file.
pub fn load_file_with_options<P: AsRef<Path>>(
    path: P,
    options: &LoadOptions,
) -> Result<Vec<SourceLine>> {
    let bytes = fs::read(path.as_ref())?;
    let text = decode(&bytes, options.encoding)?;
    let lines = load_str_with_options(&text, options);
    log::debug!(
        "loaded {} sanitized lines from {}",
        lines.len(),
        path.as_ref().display()
    );
    Ok(lines)
}

/// Sanitize note content already held in memory.
pub fn load_str(text: &str) -> Vec<SourceLine> {
    load_str_with_options(text, &LoadOptions::default())
}

/// Sanitize note content already held in memory, with options.
pub fn load_str_with_options(text: &str, options: &LoadOptions) -> Vec<SourceLine> {
    text.split('\n')
        .enumerate()
        .filter_map(|(idx, raw)| {
            sanitize_line(raw, options).map(|clean| SourceLine::new(idx + 1, clean))
        })
        .collect()
}

/// Sanitize a single raw line.
///
/// Returns `None` for placeholder lines (blank lines and bare `-` outline
/// stubs). The input may still carry a trailing `\r` from CRLF sources.
pub fn sanitize_line(raw: &str, options: &LoadOptions) -> Option<String> {
    let line = raw.strip_suffix('\r').unwrap_or(raw);

    // Bare bullets and blank lines carry no content.
    let stripped = line.trim_end();
    if stripped.is_empty() || stripped == "-" {
        return None;
    }

    // Undo the outline-list prefix: "- " or two spaces.
    let line = line
        .strip_prefix("- ")
        .or_else(|| line.strip_prefix("  "))
        .unwrap_or(line);

    // One leading tab marks a genuine list item; it belongs at column zero.
    let line = line.strip_prefix('\t').unwrap_or(line);

    if options.trim_trailing_whitespace {
        Some(line.trim_end().to_string())
    } else {
        Some(line.to_string())
    }
}

fn decode(bytes: &[u8], encoding: Encoding) -> Result<String> {
    match encoding {
        Encoding::Utf8 => String::from_utf8(bytes.to_vec())
            .map_err(|e| Error::Encoding(format!("invalid UTF-8: {}", e.utf8_error()))),
        Encoding::Utf8Lossy => Ok(String::from_utf8_lossy(bytes).into_owned()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sanitize(raw: &str) -> Option<String> {
        sanitize_line(raw, &LoadOptions::default())
    }

    #[test]
    fn test_empty_forms_dropped() {
        assert_eq!(sanitize(""), None);
        assert_eq!(sanitize("-"), None);
        assert_eq!(sanitize("- "), None);
        assert_eq!(sanitize("-  "), None);
        assert_eq!(sanitize("   "), None);
        assert_eq!(sanitize("-\r"), None);
    }

    #[test]
    fn test_outline_prefix_stripped() {
        assert_eq!(sanitize("- hello"), Some("hello".to_string()));
        assert_eq!(sanitize("  hello"), Some("hello".to_string()));
        // Only the two-character prefix goes; the rest is untouched.
        assert_eq!(sanitize("-  spaced"), Some(" spaced".to_string()));
    }

    #[test]
    fn test_single_leading_tab_removed() {
        assert_eq!(sanitize("- \titem"), Some("item".to_string()));
        // A second tab survives; deeper nesting is not restructured.
        assert_eq!(sanitize("- \t\titem"), Some("\titem".to_string()));
    }

    #[test]
    fn test_crlf_terminator_stripped() {
        assert_eq!(sanitize("- hello\r"), Some("hello".to_string()));
    }

    #[test]
    fn test_trim_trailing_option() {
        let options = LoadOptions::new().with_trim_trailing(true);
        assert_eq!(
            sanitize_line("- hello  ", &options),
            Some("hello".to_string())
        );
        assert_eq!(sanitize("- hello  "), Some("hello  ".to_string()));
    }

    #[test]
    fn test_load_str_keeps_line_numbers() {
        let lines = load_str("- first\n\n- \n- second\n");
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], SourceLine::new(1, "first"));
        assert_eq!(lines[1], SourceLine::new(4, "second"));
    }

    #[test]
    fn test_no_sanitized_line_keeps_prefix() {
        let lines = load_str("- alpha\n  beta\n- \tgamma\n");
        for line in &lines {
            assert!(!line.text.starts_with("- "));
            assert!(!line.text.starts_with("  "));
        }
    }

    #[test]
    fn test_encoding_from_str() {
        assert_eq!(Encoding::from_str("utf-8").unwrap(), Encoding::Utf8);
        assert_eq!(Encoding::from_str("UTF8").unwrap(), Encoding::Utf8);
        assert_eq!(
            Encoding::from_str("utf_8_lossy").unwrap(),
            Encoding::Utf8Lossy
        );
        assert!(matches!(
            Encoding::from_str("latin-1"),
            Err(Error::UnknownEncoding(_))
        ));
    }

    #[test]
    fn test_decode_strict_rejects_bad_bytes() {
        let err = decode(&[0x68, 0xFF, 0x69], Encoding::Utf8).unwrap_err();
        assert!(matches!(err, Error::Encoding(_)));

        let text = decode(&[0x68, 0xFF, 0x69], Encoding::Utf8Lossy).unwrap();
        assert_eq!(text, "h\u{FFFD}i");
    }
}
