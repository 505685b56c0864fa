//! Participant statistics.
//!
//! [`analyze`] counts messages per sender and ranks the senders. Results are
//! derived on every call and never cached, so analyzing the same log twice
//! gives identical output.
//!
//! # Ranking
//!
//! - Senders are compared by exact, case-sensitive name.
//! - Higher counts rank first; equal counts keep first-seen order.
//! - Percentages are rounded half away from zero to one decimal.
//!
//! # Example
//!
//! ```rust
//! use chatlens::parser::ChatParser;
//! use chatlens::stats::{ChatAnalysis, analyze};
//!
//! let log = ChatParser::new().parse_str(
//!     "[1/2/23, 10:00:00] Alice: Hi\n\
//!      [1/2/23, 10:01:00] Bob: Hello\n\
//!      [1/2/23, 10:02:00] Alice: How are you?",
//! );
//!
//! let ChatAnalysis::Stats(stats) = analyze(&log) else {
//!     panic!("log is not empty");
//! };
//! assert_eq!(stats.total_messages(), 3);
//! assert_eq!(stats.top_senders()[0].sender, "Alice");
//! assert_eq!(stats.top_senders()[0].percentage, 66.7);
//! ```

use std::collections::HashMap;

use serde::Serialize;
use tracing::debug;

use crate::chat_log::ChatLog;
use crate::config::AnalysisConfig;

/// One ranked sender.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SenderShare {
    /// Sender name as it appears in the records.
    pub sender: String,
    /// Number of records from this sender.
    pub count: usize,
    /// Share of all records, in percent, one decimal.
    pub percentage: f64,
}

/// Statistics for a non-empty log.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParticipantStats {
    total_messages: usize,
    distinct_senders: usize,
    top_senders: Vec<SenderShare>,
    #[serde(skip)]
    ranking: Vec<SenderShare>,
}

impl ParticipantStats {
    /// Total number of records analyzed.
    pub fn total_messages(&self) -> usize {
        self.total_messages
    }

    /// Number of distinct senders.
    pub fn distinct_senders(&self) -> usize {
        self.distinct_senders
    }

    /// Highest-ranked senders, capped at the configured size.
    pub fn top_senders(&self) -> &[SenderShare] {
        &self.top_senders
    }

    /// Every sender in rank order.
    pub fn all_senders(&self) -> &[SenderShare] {
        &self.ranking
    }

    /// Message count for `sender`, or 0 if the name never appears.
    pub fn count_for(&self, sender: &str) -> usize {
        self.ranking
            .iter()
            .find(|share| share.sender == sender)
            .map_or(0, |share| share.count)
    }
}

/// Result of analyzing a chat log.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ChatAnalysis {
    /// The log has no records.
    NoMessages,
    /// Statistics for a non-empty log.
    Stats(ParticipantStats),
}

impl ChatAnalysis {
    /// Total number of records, 0 for an empty log.
    pub fn total_messages(&self) -> usize {
        match self {
            ChatAnalysis::NoMessages => 0,
            ChatAnalysis::Stats(stats) => stats.total_messages,
        }
    }

    /// Returns `true` if there was nothing to analyze.
    pub fn is_empty(&self) -> bool {
        matches!(self, ChatAnalysis::NoMessages)
    }

    /// Returns the statistics of a non-empty log.
    pub fn stats(&self) -> Option<&ParticipantStats> {
        match self {
            ChatAnalysis::NoMessages => None,
            ChatAnalysis::Stats(stats) => Some(stats),
        }
    }

    /// Ranked senders; empty for an empty log.
    pub fn top_senders(&self) -> &[SenderShare] {
        match self {
            ChatAnalysis::NoMessages => &[],
            ChatAnalysis::Stats(stats) => stats.top_senders(),
        }
    }
}

/// Analyzes a log with the default ranking size of 5.
pub fn analyze(log: &ChatLog) -> ChatAnalysis {
    analyze_with(log, &AnalysisConfig::default())
}

/// Analyzes a log with a custom configuration.
pub fn analyze_with(log: &ChatLog, config: &AnalysisConfig) -> ChatAnalysis {
    let total = log.len();
    if total == 0 {
        debug!("no messages to analyze");
        return ChatAnalysis::NoMessages;
    }

    // Counts in first-seen order; the stable sort below keeps that order on ties.
    let mut counts: Vec<(&str, usize)> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();
    for record in log {
        let sender = record.sender.as_str();
        match positions.get(sender) {
            Some(&pos) => counts[pos].1 += 1,
            None => {
                positions.insert(sender, counts.len());
                counts.push((sender, 1));
            }
        }
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    let ranking: Vec<SenderShare> = counts
        .into_iter()
        .map(|(sender, count)| SenderShare {
            sender: sender.to_string(),
            count,
            percentage: percentage(count, total),
        })
        .collect();

    let top_senders = ranking.iter().take(config.top_n).cloned().collect();

    debug!(
        total,
        senders = ranking.len(),
        top_n = config.top_n,
        "analyzed chat log"
    );

    ChatAnalysis::Stats(ParticipantStats {
        total_messages: total,
        distinct_senders: ranking.len(),
        top_senders,
        ranking,
    })
}

fn percentage(count: usize, total: usize) -> f64 {
    let raw = count as f64 / total as f64 * 100.0;
    (raw * 10.0).round() / 10.0
}
