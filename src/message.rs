//! Message record type.
//!
//! This module provides [`MessageRecord`], one parsed header line of a chat
//! export. Records are produced by the line classifier and collected into a
//! [`ChatLog`](crate::ChatLog).
//!
//! # Overview
//!
//! A record always has all three fields:
//! - `timestamp`: the raw text between the brackets, trimmed, never parsed
//! - `sender`: trimmed text before the first `:`
//! - `content`: trimmed text after the first `:`
//!
//! # Examples
//!
//! ```
//! use chatlens::MessageRecord;
//!
//! let msg = MessageRecord::new("1/2/23, 10:00:00", "Alice", "Hi there");
//! assert_eq!(msg.sender(), "Alice");
//! assert_eq!(msg.content(), "Hi there");
//! ```
//!
//! ## Serialization
//!
//! ```
//! use chatlens::MessageRecord;
//!
//! let msg = MessageRecord::new("1/2/23, 10:00:00", "Alice", "Hello!");
//! let json = serde_json::to_string(&msg)?;
//! let parsed: MessageRecord = serde_json::from_str(&json)?;
//!
//! assert_eq!(msg, parsed);
//! # Ok::<(), serde_json::Error>(())
//! ```

use serde::{Deserialize, Serialize};

/// A single message parsed from a header line.
///
/// | Field | Type | Description |
/// |-------|------|-------------|
/// | `timestamp` | `String` | Text captured between `[` and `]`, trimmed |
/// | `sender` | `String` | Author name, case preserved |
/// | `content` | `String` | First line of the message body |
///
/// Timestamps stay raw on purpose: exports use locale-dependent date orders
/// and 12/24-hour clocks, and no normalization happens here.
///
/// Fields are public for reading and pattern matching. Records are values:
/// a [`ChatLog`](crate::ChatLog) only hands out shared references, and editing
/// a clone never affects the log it came from. Mutating a parsed record in
/// place is not supported.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MessageRecord {
    /// Raw timestamp, e.g. `1/2/23, 10:00:00` or `1/15/24, 10:30:45 AM`.
    pub timestamp: String,

    /// Display name of the message author.
    pub sender: String,

    /// Text content of the message.
    ///
    /// Only the header line is captured; continuation lines of multi-line
    /// messages are not appended.
    pub content: String,
}

impl MessageRecord {
    /// Creates a record from already-trimmed parts.
    pub fn new(
        timestamp: impl Into<String>,
        sender: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            timestamp: timestamp.into(),
            sender: sender.into(),
            content: content.into(),
        }
    }

    /// Returns the raw timestamp.
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    /// Returns the sender name.
    pub fn sender(&self) -> &str {
        &self.sender
    }

    /// Returns the message content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns `true` if the message body is empty (e.g. `Alice:` with nothing after).
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

impl std::fmt::Display for MessageRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}: {}", self.timestamp, self.sender, self.content)
    }
}
