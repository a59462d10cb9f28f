//! Error types for wikidiary
//!
//! This module provides structured error handling using thiserror.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for wiki operations
pub type Result<T> = std::result::Result<T, WikiError>;

/// Errors that can occur while classifying notes or building headers
#[derive(Error, Debug)]
pub enum WikiError {
    /// The input filename does not carry the note extension
    #[error("not a note file: {name}")]
    NotANoteFile { name: String },

    /// The note directory could not be enumerated
    #[error("cannot read note directory: {path}")]
    DirectoryUnreadable {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    /// A week or quarter carries a field outside its nominal range
    #[error("invalid period: {value}")]
    InvalidPeriod { value: String },

    /// IO error during file operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed configuration file
    #[error("invalid config {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl WikiError {
    /// Create a not-a-note-file error
    pub fn not_a_note_file(name: impl Into<String>) -> Self {
        WikiError::NotANoteFile { name: name.into() }
    }

    /// Create an invalid period error
    pub fn invalid_period(value: impl Into<String>) -> Self {
        WikiError::InvalidPeriod {
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = WikiError::not_a_note_file("sheep");
        assert_eq!(err.to_string(), "not a note file: sheep");
    }

    #[test]
    fn test_invalid_period_helper() {
        let err = WikiError::invalid_period("2020 W0");
        assert!(err.to_string().contains("2020 W0"));
        assert!(matches!(err, WikiError::InvalidPeriod { .. }));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: WikiError = io_err.into();
        assert!(matches!(err, WikiError::Io(_)));
    }
}
