//! Line-level parsing utilities.
//!
//! This module contains the building blocks shared by the in-memory and
//! streaming paths of [`crate::parser::ChatParser`]:
//! - [`header`] - the bracketed timestamp grammar and file-level validation
//! - [`classify`] - per-line classification into headers, continuations and
//!   malformed lines

pub mod classify;
pub mod header;

pub use classify::{LineKind, MalformedLine, classify_line};
pub use header::{
    HEADER_PATTERN, LEFT_TO_RIGHT_MARK, is_recognized_export, is_valid_header, normalize_line,
    validate_lines, validate_reader,
};
