//! The parsed chat log.
//!
//! [`ChatLog`] is a plain value: an ordered list of [`MessageRecord`]s in
//! input line order. It holds no file handle and no shared state, so it can
//! be cloned, sent across threads or serialized freely.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::message::MessageRecord;

/// Ordered records parsed from one export.
///
/// # Example
///
/// ```
/// use chatlens::{ChatLog, MessageRecord};
///
/// let log: ChatLog = vec![
///     MessageRecord::new("1/2/23, 10:00:00", "Alice", "Hi"),
///     MessageRecord::new("1/2/23, 10:01:00", "Bob", "Hello"),
///     MessageRecord::new("1/2/23, 10:02:00", "Alice", "How are you?"),
/// ]
/// .into_iter()
/// .collect();
///
/// assert_eq!(log.len(), 3);
/// assert_eq!(log.senders(), vec!["Alice", "Bob"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChatLog {
    records: Vec<MessageRecord>,
}

impl ChatLog {
    /// Creates a log from records already in input order.
    pub fn new(records: Vec<MessageRecord>) -> Self {
        Self { records }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if no line produced a record.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in input order.
    pub fn records(&self) -> &[MessageRecord] {
        &self.records
    }

    /// Returns the record at `index`.
    pub fn get(&self, index: usize) -> Option<&MessageRecord> {
        self.records.get(index)
    }

    /// Iterates over records in input order.
    pub fn iter(&self) -> std::slice::Iter<'_, MessageRecord> {
        self.records.iter()
    }

    /// Distinct senders in order of first appearance.
    pub fn senders(&self) -> Vec<&str> {
        let mut seen: HashSet<&str> = HashSet::new();
        let mut senders = Vec::new();
        for record in &self.records {
            if seen.insert(record.sender.as_str()) {
                senders.push(record.sender.as_str());
            }
        }
        senders
    }

    /// Consumes the log, returning the records.
    pub fn into_records(self) -> Vec<MessageRecord> {
        self.records
    }
}

impl From<Vec<MessageRecord>> for ChatLog {
    fn from(records: Vec<MessageRecord>) -> Self {
        Self::new(records)
    }
}

impl FromIterator<MessageRecord> for ChatLog {
    fn from_iter<I: IntoIterator<Item = MessageRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl IntoIterator for ChatLog {
    type Item = MessageRecord;
    type IntoIter = std::vec::IntoIter<MessageRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a ChatLog {
    type Item = &'a MessageRecord;
    type IntoIter = std::slice::Iter<'a, MessageRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ChatLog {
        ChatLog::new(vec![
            MessageRecord::new("t1", "Bob", "one"),
            MessageRecord::new("t2", "Alice", "two"),
            MessageRecord::new("t3", "Bob", "three"),
            MessageRecord::new("t4", "alice", "four"),
        ])
    }

    #[test]
    fn test_empty() {
        let log = ChatLog::default();
        assert!(log.is_empty());
        assert_eq!(log.len(), 0);
        assert!(log.senders().is_empty());
    }

    #[test]
    fn test_order_preserved() {
        let log = sample();
        let contents: Vec<&str> = log.iter().map(|r| r.content.as_str()).collect();
        assert_eq!(contents, vec!["one", "two", "three", "four"]);
        assert_eq!(log.get(2).unwrap().timestamp, "t3");
        assert!(log.get(4).is_none());
    }

    #[test]
    fn test_senders_first_seen_case_sensitive() {
        assert_eq!(sample().senders(), vec!["Bob", "Alice", "alice"]);
    }

    #[test]
    fn test_senders_many_distinct_with_repeats() {
        let log: ChatLog = (0..3)
            .flat_map(|round| {
                (0..500).rev().map(move |i| {
                    MessageRecord::new(format!("t{round}"), format!("user{i}"), "hi")
                })
            })
            .collect();

        let senders = log.senders();
        assert_eq!(log.len(), 1500);
        assert_eq!(senders.len(), 500);
        assert_eq!(senders.first(), Some(&"user499"));
        assert_eq!(senders.last(), Some(&"user0"));
        assert_eq!(senders[1], "user498");
    }

    #[test]
    fn test_into_records() {
        let records = sample().into_records();
        assert_eq!(records.len(), 4);
    }

    #[test]
    fn test_serializes_as_array() {
        let log = ChatLog::new(vec![MessageRecord::new("t", "A", "b")]);
        let json = serde_json::to_string(&log).unwrap();
        assert_eq!(json, r#"[{"timestamp":"t","sender":"A","content":"b"}]"#);
    }

    #[test]
    fn test_ref_into_iter() {
        let log = sample();
        let mut count = 0;
        for record in &log {
            assert!(!record.sender.is_empty());
            count += 1;
        }
        assert_eq!(count, log.len());
    }
}
