//! Timestamp grammar for header lines.
//!
//! A header line starts with a bracketed date-time token:
//!
//! ```text
//! [1/2/23, 10:00:00] Alice: Hi there
//! [1/15/2024, 9:05:31 PM] Bob: Hello
//! ```
//!
//! Fields are digit runs of fixed widths (`D{1,2}/D{1,2}/D{2,4}` and
//! `H{1,2}:MM:SS`), optionally followed by an `AM`/`PM` marker. Dates are
//! not checked semantically, so `13/45/99` is accepted.
//!
//! A file counts as a recognized export when *any* non-empty line matches,
//! scanning until the first match or the end of input.

use std::borrow::Cow;
use std::io::BufRead;

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::{ChatlensError, Result};
use crate::reader::LossyLines;

/// Left-to-right mark inserted by some export tools.
pub const LEFT_TO_RIGHT_MARK: char = '\u{200E}';

/// Pattern for the bracketed timestamp at the start of a header line.
pub const HEADER_PATTERN: &str =
    r"^\[\d{1,2}/\d{1,2}/\d{2,4},\s+\d{1,2}:\d{2}:\d{2}(?:\s*[AP]M)?\]";

lazy_static! {
    static ref HEADER_REGEX: Regex = Regex::new(HEADER_PATTERN).unwrap();
}

/// Removes left-to-right marks and surrounding whitespace.
///
/// Borrows when the line contains no marks.
pub fn normalize_line(line: &str) -> Cow<'_, str> {
    if line.contains(LEFT_TO_RIGHT_MARK) {
        Cow::Owned(line.replace(LEFT_TO_RIGHT_MARK, "").trim().to_string())
    } else {
        Cow::Borrowed(line.trim())
    }
}

/// Returns `true` if `line` starts with a bracketed timestamp.
///
/// The line should already be normalized with [`normalize_line`]; anything
/// after the closing bracket is ignored.
///
/// # Example
///
/// ```
/// use chatlens::parsing::is_valid_header;
///
/// assert!(is_valid_header("[1/2/23, 10:00:00] Alice: Hi"));
/// assert!(is_valid_header("[12/31/2024, 11:59:59 PM] Bob: Bye"));
/// assert!(!is_valid_header("1/2/23, 10:00 - Alice: Hi"));
/// ```
pub fn is_valid_header(line: &str) -> bool {
    HEADER_REGEX.is_match(line)
}

/// Returns `true` if at least one line matches the header grammar.
///
/// Each line is normalized first and blank lines are skipped. Scanning stops
/// at the first match.
pub fn is_recognized_export<I, S>(lines: I) -> bool
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines.into_iter().any(|line| {
        let line = normalize_line(line.as_ref());
        !line.is_empty() && is_valid_header(&line)
    })
}

/// Like [`is_recognized_export`], but reports rejection as
/// [`ChatlensError::NotAChatExport`].
pub fn validate_lines<I, S>(lines: I) -> Result<()>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    if is_recognized_export(lines) {
        Ok(())
    } else {
        Err(ChatlensError::not_a_chat_export(None))
    }
}

/// Scans a reader until a header line is found.
///
/// Undecodable bytes are replaced, so only I/O failures are errors.
pub fn validate_reader<R: BufRead>(reader: R) -> Result<bool> {
    for line in LossyLines::new(reader) {
        let line = line?;
        let line = normalize_line(&line);
        if !line.is_empty() && is_valid_header(&line) {
            return Ok(true);
        }
    }
    Ok(false)
}
