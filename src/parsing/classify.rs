//! Line classification.
//!
//! Every input line falls into exactly one [`LineKind`]. Only
//! [`LineKind::Header`] carries a record; the parser drops everything else.

use std::fmt;

use crate::message::MessageRecord;

use super::header::normalize_line;

/// Why a bracketed line could not become a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedLine {
    /// The line starts with `[` but has no `]`.
    MissingClosingBracket,
    /// Nothing after the timestamp contains a `:` separating sender and text.
    MissingSenderSeparator,
}

impl fmt::Display for MalformedLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MalformedLine::MissingClosingBracket => write!(f, "missing closing bracket"),
            MalformedLine::MissingSenderSeparator => write!(f, "missing sender separator"),
        }
    }
}

/// Classification of a single line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// Blank after normalization.
    Empty,
    /// Does not start with `[`. Multi-line bodies land here and are dropped
    /// rather than appended to the previous record.
    Continuation,
    /// Starts with `[` but cannot be split into timestamp, sender and content.
    Malformed(MalformedLine),
    /// A new message.
    Header(MessageRecord),
}

impl LineKind {
    /// Returns the record for header lines.
    pub fn into_record(self) -> Option<MessageRecord> {
        match self {
            LineKind::Header(record) => Some(record),
            _ => None,
        }
    }

    /// Returns `true` for header lines.
    pub fn is_header(&self) -> bool {
        matches!(self, LineKind::Header(_))
    }
}

/// Classifies one line of a chat export.
///
/// Only the bracket and colon structure is checked here; the timestamp
/// grammar is left to the file-level validator, so `[anything] A: b` still
/// yields a record.
///
/// # Example
///
/// ```
/// use chatlens::parsing::{classify_line, LineKind, MalformedLine};
///
/// let kind = classify_line("[1/2/23, 10:00:00] Alice: Hi there");
/// let record = kind.into_record().unwrap();
/// assert_eq!(record.sender, "Alice");
///
/// assert_eq!(classify_line("and more text"), LineKind::Continuation);
/// assert_eq!(
///     classify_line("[1/2/23, 10:00:00] no colon here"),
///     LineKind::Malformed(MalformedLine::MissingSenderSeparator),
/// );
/// ```
pub fn classify_line(line: &str) -> LineKind {
    let line = normalize_line(line);

    if line.is_empty() {
        return LineKind::Empty;
    }

    let Some(after_open) = line.strip_prefix('[') else {
        return LineKind::Continuation;
    };

    let Some(close) = after_open.find(']') else {
        return LineKind::Malformed(MalformedLine::MissingClosingBracket);
    };

    let timestamp = &after_open[..close];

    // Skip "] ": the bracket itself plus one separator character.
    let mut rest = after_open[close + 1..].chars();
    rest.next();
    let body = rest.as_str();

    let Some((sender, content)) = body.split_once(':') else {
        return LineKind::Malformed(MalformedLine::MissingSenderSeparator);
    };

    LineKind::Header(MessageRecord::new(
        timestamp.trim(),
        sender.trim(),
        content.trim(),
    ))
}
