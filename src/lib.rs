//! # Chatlens
//!
//! A Rust library for turning exported chat logs into structured records and
//! participant statistics.
//!
//! ## Overview
//!
//! Chatlens reads line-oriented exports where every message starts with a
//! bracketed timestamp:
//!
//! ```text
//! [1/15/24, 10:30:45 AM] Alice: Hello everyone!
//! [1/15/24, 10:31:02 AM] Bob: Hi Alice
//! ```
//!
//! The pipeline has three stages:
//! 1. **Validation** - a file is accepted when any line matches the timestamp grammar
//! 2. **Parsing** - header lines become [`MessageRecord`]s collected in a [`ChatLog`]
//! 3. **Analysis** - per-sender counts, percentages and a top-5 ranking
//!
//! ## Quick Start
//!
//! ```rust
//! use chatlens::prelude::*;
//!
//! let log = ChatParser::new().parse_str(
//!     "[1/2/23, 10:00:00] Alice: Hi there\n\
//!      [1/2/23, 10:00:30] Bob: Hello!\n\
//!      [1/2/23, 10:01:00] Alice: How are you?",
//! );
//!
//! match analyze(&log) {
//!     ChatAnalysis::NoMessages => println!("empty export"),
//!     ChatAnalysis::Stats(stats) => {
//!         for share in stats.top_senders() {
//!             println!("{}: {} ({:.1}%)", share.sender, share.count, share.percentage);
//!         }
//!     }
//! }
//! ```
//!
//! ## Reading Files
//!
//! ```rust,no_run
//! use chatlens::prelude::*;
//!
//! let parser = ChatParser::with_config(ReaderConfig::new().with_max_file_size_mb(20));
//! let log = parser.parse_file("WhatsApp Chat.txt".as_ref())?;
//! println!("{}", render_summary(&analyze(&log)));
//! # Ok::<(), chatlens::ChatlensError>(())
//! ```
//!
//! ## Module Structure
//!
//! - [`parsing`] - timestamp grammar ([`parsing::is_valid_header`]) and line
//!   classification ([`parsing::classify_line`])
//! - [`parser`] - [`ChatParser`](parser::ChatParser) and the lazy
//!   [`Records`](parser::Records) iterator
//! - [`chat_log`] / [`message`] - [`ChatLog`] and [`MessageRecord`]
//! - [`stats`] - [`analyze`](stats::analyze) and [`ChatAnalysis`](stats::ChatAnalysis)
//! - [`reader`] - size-limited, lossy UTF-8 file reading
//! - [`discovery`] - finding exports in configured directories
//! - [`output`] - CSV/JSON/JSONL writers and the text summary
//! - [`config`] - [`ReaderConfig`](config::ReaderConfig),
//!   [`AnalysisConfig`](config::AnalysisConfig), [`DiscoveryConfig`](config::DiscoveryConfig)
//! - [`error`] - [`ChatlensError`] and [`Result`]
//! - [`prelude`] - convenient re-exports

pub mod chat_log;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod discovery;
pub mod error;
pub mod message;
pub mod output;
pub mod parser;
pub mod parsing;
pub mod reader;
pub mod stats;

// Re-export the main types at the crate root for convenience
pub use chat_log::ChatLog;
pub use error::{ChatlensError, Result};
pub use message::MessageRecord;

/// Convenient re-exports for common usage.
///
/// ```rust
/// use chatlens::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{ChatLog, MessageRecord};

    pub use crate::error::{ChatlensError, Result};

    pub use crate::parser::ChatParser;
    pub use crate::parsing::{is_recognized_export, is_valid_header};

    pub use crate::stats::{ChatAnalysis, ParticipantStats, SenderShare, analyze, analyze_with};

    pub use crate::config::{AnalysisConfig, DiscoveryConfig, ReaderConfig};

    pub use crate::discovery::{find_chat_exports, resolve_path, select_most_recent};

    pub use crate::output::{OutputFormat, render_summary, write_to_format};
}
