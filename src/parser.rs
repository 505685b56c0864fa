//! Chat parser.
//!
//! [`ChatParser`] turns an ordered sequence of lines into a [`ChatLog`].
//! Individual lines never fail the parse: blank lines, continuation lines
//! and malformed header lines are dropped and logged at `trace` level.
//! Only I/O errors from the underlying reader, size limits, and file-level
//! format rejection surface as errors.
//!
//! # Example
//!
//! ```rust
//! use chatlens::parser::ChatParser;
//!
//! let parser = ChatParser::new();
//! let log = parser.parse_str(
//!     "[1/2/23, 10:00:00] Alice: Hi there\n\
//!      second line of Alice's message\n\
//!      [1/2/23, 10:01:00] Bob: Hello",
//! );
//!
//! assert_eq!(log.len(), 2);
//! assert_eq!(log.records()[0].content, "Hi there");
//! ```
//!
//! # Streaming
//!
//! [`ChatParser::records`] yields records lazily. Dropping the iterator early
//! is fine; it owns nothing but the reader.
//!
//! ```rust
//! use chatlens::parser::ChatParser;
//!
//! let input = b"[1/2/23, 10:00:00] Alice: Hi\n[1/2/23, 10:01:00] Bob: Yo\n";
//! let first = ChatParser::new().records(&input[..]).next().unwrap()?;
//! assert_eq!(first.sender, "Alice");
//! # Ok::<(), chatlens::ChatlensError>(())
//! ```

use std::io::BufRead;
use std::path::Path;

use tracing::{debug, trace};

use crate::chat_log::ChatLog;
use crate::config::ReaderConfig;
use crate::error::Result;
use crate::message::MessageRecord;
use crate::parsing::{LineKind, classify_line, validate_lines, validate_reader};
use crate::reader::{LossyLines, open_chat_file, read_chat_file};

/// Parser for bracketed-timestamp chat exports.
#[derive(Debug, Clone, Default)]
pub struct ChatParser {
    config: ReaderConfig,
}

impl ChatParser {
    /// Creates a parser with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a parser with custom reader configuration.
    pub fn with_config(config: ReaderConfig) -> Self {
        Self { config }
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }

    /// Parses an in-memory sequence of lines.
    pub fn parse_lines<I, S>(&self, lines: I) -> ChatLog
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let log: ChatLog = lines
            .into_iter()
            .enumerate()
            .filter_map(|(idx, line)| record_from_line(idx + 1, line.as_ref()))
            .collect();
        debug!(records = log.len(), "parsed chat lines");
        log
    }

    /// Parses text content, one message per line.
    pub fn parse_str(&self, content: &str) -> ChatLog {
        self.parse_lines(content.lines())
    }

    /// Parses everything a reader yields.
    ///
    /// Fails only if the reader does.
    pub fn parse_reader<R: BufRead>(&self, reader: R) -> Result<ChatLog> {
        let log = self.records(reader).collect::<Result<ChatLog>>()?;
        debug!(records = log.len(), "parsed chat stream");
        Ok(log)
    }

    /// Returns a lazy iterator over the records of a reader.
    pub fn records<R: BufRead>(&self, reader: R) -> Records<R> {
        Records {
            lines: LossyLines::new(reader),
            line_number: 0,
        }
    }

    /// Reads, validates and parses an export file.
    ///
    /// Returns [`NotAChatExport`](crate::ChatlensError::NotAChatExport) when
    /// no line matches the timestamp grammar, and
    /// [`FileTooLarge`](crate::ChatlensError::FileTooLarge) above the
    /// configured size limit.
    pub fn parse_file(&self, path: &Path) -> Result<ChatLog> {
        let content = read_chat_file(path, &self.config)?;
        validate_lines(content.lines()).map_err(|e| e.with_path(path))?;
        Ok(self.parse_str(&content))
    }

    /// Checks whether a file looks like a chat export without parsing it.
    ///
    /// Reading stops at the first matching line.
    pub fn is_chat_export(&self, path: &Path) -> Result<bool> {
        validate_reader(open_chat_file(path, &self.config)?)
    }
}

fn record_from_line(line_number: usize, line: &str) -> Option<MessageRecord> {
    match classify_line(line) {
        LineKind::Header(record) => Some(record),
        LineKind::Malformed(reason) => {
            trace!(line = line_number, %reason, "dropped malformed line");
            None
        }
        LineKind::Continuation => {
            trace!(line = line_number, "dropped continuation line");
            None
        }
        LineKind::Empty => None,
    }
}

/// Lazy iterator over the records of a reader.
///
/// Created by [`ChatParser::records`].
pub struct Records<R: BufRead> {
    lines: LossyLines<R>,
    line_number: usize,
}

impl<R: BufRead> Records<R> {
    /// Number of lines consumed so far.
    pub fn lines_read(&self) -> usize {
        self.line_number
    }
}

impl<R: BufRead> Iterator for Records<R> {
    type Item = Result<MessageRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(e) => return Some(Err(e.into())),
            };
            self.line_number += 1;
            if let Some(record) = record_from_line(self.line_number, &line) {
                return Some(Ok(record));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Read};

    #[test]
    fn test_scenario_single_message() {
        let log = ChatParser::new().parse_lines(["[1/2/23, 10:00:00] Alice: Hi there"]);
        assert_eq!(
            log.records(),
            &[MessageRecord::new("1/2/23, 10:00:00", "Alice", "Hi there")]
        );
    }

    #[test]
    fn test_continuation_not_merged() {
        let log = ChatParser::new().parse_lines([
            "[1/2/23, 10:00:00] Alice: first line",
            "second line",
            "[1/2/23, 10:01:00] Bob: reply",
        ]);
        assert_eq!(log.len(), 2);
        assert_eq!(log.records()[0].content, "first line");
        assert_eq!(log.records()[1].sender, "Bob");
    }

    #[test]
    fn test_line_without_colon_dropped() {
        let log = ChatParser::new().parse_lines(["[1/2/23, 10:00:00] System message without colon"]);
        assert!(log.is_empty());
    }

    #[test]
    fn test_empty_input() {
        assert!(ChatParser::new().parse_lines(Vec::<String>::new()).is_empty());
        assert!(ChatParser::new().parse_str("").is_empty());
    }

    #[test]
    fn test_owned_lines() {
        let lines = vec!["[1/2/23, 10:00:00] Alice: Hi".to_string()];
        assert_eq!(ChatParser::new().parse_lines(lines).len(), 1);
    }

    #[test]
    fn test_parse_reader_crlf() {
        let input = b"[1/2/23, 10:00:00] Alice: Hi\r\n[1/2/23, 10:01:00] Bob: Yo\r\n";
        let log = ChatParser::new().parse_reader(&input[..]).unwrap();
        assert_eq!(log.len(), 2);
        assert_eq!(log.records()[0].content, "Hi");
    }

    #[test]
    fn test_parse_reader_matches_parse_str() {
        let text = "intro\n\n[1/2/23, 10:00:00] Alice: Hi\nmore\n[x\n[1/2/23, 10:01:00] Bob: Yo\n";
        let parser = ChatParser::new();
        assert_eq!(parser.parse_reader(text.as_bytes()).unwrap(), parser.parse_str(text));
    }

    #[test]
    fn test_records_can_be_abandoned() {
        let input = b"[1/2/23, 10:00:00] A: 1\n[1/2/23, 10:00:01] B: 2\n[1/2/23, 10:00:02] C: 3\n";
        let mut records = ChatParser::new().records(&input[..]);
        assert_eq!(records.next().unwrap().unwrap().sender, "A");
        assert_eq!(records.lines_read(), 1);
        drop(records);
    }

    #[test]
    fn test_records_skip_to_next_header() {
        let input = b"noise\n\n[broken\n[1/2/23, 10:00:00] A: 1\n";
        let mut records = ChatParser::new().records(&input[..]);
        assert_eq!(records.next().unwrap().unwrap().content, "1");
        assert_eq!(records.lines_read(), 4);
        assert!(records.next().is_none());
    }

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::other("disk on fire"))
        }
    }

    #[test]
    fn test_parse_reader_io_error() {
        let reader = io::BufReader::new(FailingReader);
        let err = ChatParser::new().parse_reader(reader).unwrap_err();
        assert!(err.is_io());
    }

    #[test]
    fn test_with_config() {
        let parser = ChatParser::with_config(ReaderConfig::new().with_max_file_size(1));
        assert_eq!(parser.config().max_file_size, 1);
    }
}
