//! Unified error types for chatlens.
//!
//! This module provides a single [`ChatlensError`] enum that covers every
//! failure a caller can observe. Per-line problems are not errors:
//! a line that cannot be decomposed into timestamp, sender and content is a
//! classification result (see [`crate::parsing::LineKind`]), not an error,
//! and an empty log is reported by [`crate::stats::ChatAnalysis::NoMessages`].
//!
//! # Error Handling Philosophy
//!
//! - **Library users** get typed errors they can match on
//! - **Application users** get clear, actionable error messages
//! - File-level rejection is surfaced once per file, never per line

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized [`Result`] type for chatlens operations.
///
/// # Example
///
/// ```rust
/// use chatlens::error::Result;
/// use chatlens::ChatLog;
///
/// fn my_function() -> Result<ChatLog> {
///     Ok(ChatLog::default())
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatlensError>;

/// The error type for all chatlens operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatlensError {
    /// An I/O error occurred while reading an export or writing output.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// No line of the input matches the bracketed timestamp grammar.
    #[error("Not a recognized chat export{}", path.as_ref().map(|p| format!(" (file: {})", p.display())).unwrap_or_default())]
    NotAChatExport {
        /// The file path, if the input came from a file
        path: Option<PathBuf>,
    },

    /// The input file exceeds the configured size limit.
    #[error(
        "File is too large ({:.1}MB). Please export a smaller chat history (maximum {:.1}MB)",
        *size as f64 / 1024.0 / 1024.0,
        *max_size as f64 / 1024.0 / 1024.0
    )]
    FileTooLarge {
        /// Size of the file (or of the content read so far) in bytes
        size: u64,
        /// Configured maximum in bytes
        max_size: u64,
    },

    /// None of the searched directories holds a recognized export.
    #[error("No chat exports found in: {}", searched.iter().map(|p| p.display().to_string()).collect::<Vec<_>>().join(", "))]
    NoExportFound {
        /// Directories that were searched
        searched: Vec<PathBuf>,
    },

    /// The requested output format is not supported.
    #[error("Unknown output format: '{0}'. Expected one of: csv, json, jsonl")]
    UnknownFormat(String),

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// UTF-8 encoding error while converting writer output.
    #[error("UTF-8 encoding error in {context}: {source}")]
    Utf8 {
        /// Description of where the error occurred
        context: String,
        /// The underlying UTF-8 error
        #[source]
        source: std::string::FromUtf8Error,
    },
}

impl From<std::string::FromUtf8Error> for ChatlensError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        ChatlensError::Utf8 {
            context: "output conversion".to_string(),
            source: err,
        }
    }
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChatlensError {
    /// Creates a rejection for input that is not a chat export.
    pub fn not_a_chat_export(path: Option<PathBuf>) -> Self {
        ChatlensError::NotAChatExport { path }
    }

    /// Creates a size-limit error.
    pub fn file_too_large(size: u64, max_size: u64) -> Self {
        ChatlensError::FileTooLarge { size, max_size }
    }

    /// Creates an error for a discovery run that found nothing.
    pub fn no_export_found(searched: Vec<PathBuf>) -> Self {
        ChatlensError::NoExportFound { searched }
    }

    /// Attaches a path to a [`NotAChatExport`](ChatlensError::NotAChatExport)
    /// error that was raised without one. Other variants pass through.
    #[must_use]
    pub fn with_path(self, path: impl Into<PathBuf>) -> Self {
        match self {
            ChatlensError::NotAChatExport { path: None } => ChatlensError::NotAChatExport {
                path: Some(path.into()),
            },
            other => other,
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatlensError::Io(_))
    }

    /// Returns `true` if the input was rejected as not being a chat export.
    pub fn is_not_a_chat_export(&self) -> bool {
        matches!(self, ChatlensError::NotAChatExport { .. })
    }

    /// Returns `true` if the input exceeded the size limit.
    pub fn is_file_too_large(&self) -> bool {
        matches!(self, ChatlensError::FileTooLarge { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_display() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err = ChatlensError::from(io_err);
        let display = err.to_string();
        assert!(display.contains("IO error"));
        assert!(display.contains("file not found"));
        assert!(err.is_io());
    }

    #[test]
    fn test_not_a_chat_export_with_path() {
        let err = ChatlensError::not_a_chat_export(Some(PathBuf::from("/tmp/notes.txt")));
        let display = err.to_string();
        assert!(display.contains("Not a recognized chat export"));
        assert!(display.contains("/tmp/notes.txt"));
        assert!(err.is_not_a_chat_export());
    }

    #[test]
    fn test_not_a_chat_export_without_path() {
        let err = ChatlensError::not_a_chat_export(None);
        assert_eq!(err.to_string(), "Not a recognized chat export");
    }

    #[test]
    fn test_with_path_fills_missing_path() {
        let err = ChatlensError::not_a_chat_export(None).with_path("chat.txt");
        assert!(err.to_string().contains("chat.txt"));
    }

    #[test]
    fn test_with_path_keeps_other_variants() {
        let err = ChatlensError::file_too_large(1, 0).with_path("chat.txt");
        assert!(err.is_file_too_large());
    }

    #[test]
    fn test_file_too_large_display() {
        let err = ChatlensError::file_too_large(15 * 1024 * 1024, 10 * 1024 * 1024);
        let display = err.to_string();
        assert!(display.contains("15.0MB"));
        assert!(display.contains("maximum 10.0MB"));
        assert!(err.is_file_too_large());
        assert!(!err.is_io());
    }

    #[test]
    fn test_no_export_found_lists_dirs() {
        let err = ChatlensError::no_export_found(vec![
            PathBuf::from("/home/me/Desktop/WhatsAppChat"),
            PathBuf::from("/home/me/Downloads"),
        ]);
        assert_eq!(
            err.to_string(),
            "No chat exports found in: /home/me/Desktop/WhatsAppChat, /home/me/Downloads"
        );
    }

    #[test]
    fn test_unknown_format_display() {
        let err = ChatlensError::UnknownFormat("xml".into());
        assert!(err.to_string().contains("'xml'"));
    }

    #[test]
    fn test_utf8_from() {
        let bad = String::from_utf8(vec![0xff, 0xfe]).unwrap_err();
        let err: ChatlensError = bad.into();
        assert!(err.to_string().contains("output conversion"));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ChatlensError>();
    }
}
