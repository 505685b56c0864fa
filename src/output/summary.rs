//! Human-readable rendering of participant statistics.

use crate::stats::ChatAnalysis;

/// Text printed for a log without records.
pub const NO_MESSAGES: &str = "No messages found in the chat file.";

/// Renders an analysis as plain text.
///
/// # Example
///
/// ```rust
/// use chatlens::output::render_summary;
/// use chatlens::parser::ChatParser;
/// use chatlens::stats::analyze;
///
/// let log = ChatParser::new().parse_str("[1/2/23, 10:00:00] Alice: Hi there");
/// let text = render_summary(&analyze(&log));
///
/// assert_eq!(
///     text,
///     "Chat Analysis:\nTotal Messages: 1\n\nTop Participants:\n- Alice: 1 messages (100.0%)\n"
/// );
/// ```
pub fn render_summary(analysis: &ChatAnalysis) -> String {
    let ChatAnalysis::Stats(stats) = analysis else {
        return NO_MESSAGES.to_string();
    };

    let mut out = format!(
        "Chat Analysis:\nTotal Messages: {}\n\nTop Participants:\n",
        stats.total_messages()
    );
    for share in stats.top_senders() {
        out.push_str(&format!(
            "- {}: {} messages ({:.1}%)\n",
            share.sender, share.count, share.percentage
        ));
    }
    out
}
