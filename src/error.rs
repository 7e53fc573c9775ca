//! Error types for unlogseq library.

use std::io;
use thiserror::Error;

/// Result type alias for unlogseq operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during note conversion.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The file content is not valid in the requested encoding.
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// The encoding name is not recognized.
    #[error("Unknown encoding: {0}")]
    UnknownEncoding(String),

    /// A list-continuation marker appeared before any content line.
    #[error("List marker on line {line} has no preceding content line to rewrite")]
    ListMergeUnderflow {
        /// 1-based line number of the marker in the source file.
        line: usize,
    },

    /// A frontmatter key was declared twice under the strict duplicate policy.
    #[error("Duplicate frontmatter key \"{key}\" on line {line}")]
    DuplicateKey {
        /// The repeated key.
        key: String,
        /// 1-based line number of the second declaration.
        line: usize,
    },

    /// Error during directory traversal.
    #[error("Directory walk error: {0}")]
    Walk(String),

    /// Error serializing output.
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

impl From<walkdir::Error> for Error {
    fn from(err: walkdir::Error) -> Self {
        let msg = err.to_string();
        match err.into_io_error() {
            Some(io_err) => Error::Io(io_err),
            None => Error::Walk(msg),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialize(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::ListMergeUnderflow { line: 3 };
        assert_eq!(
            err.to_string(),
            "List marker on line 3 has no preceding content line to rewrite"
        );

        let err = Error::DuplicateKey {
            key: "tags".to_string(),
            line: 7,
        };
        assert_eq!(
            err.to_string(),
            "Duplicate frontmatter key \"tags\" on line 7"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
