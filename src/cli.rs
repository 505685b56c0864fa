//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - global options and the selected [`Command`]
//! - [`Command`] - `analyze`, `parse`, `validate` and `find`
//! - [`OutputFormat`] - record output formats accepted on the command line

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::config::{DEFAULT_TOP_N, ReaderConfig};

/// Parse chat exports and report who talks the most.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatlens")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatlens analyze \"WhatsApp Chat.txt\"
    chatlens analyze --top 10 --json chat.txt
    chatlens analyze
    chatlens parse chat.txt -o records.jsonl
    chatlens parse chat.txt -f json
    chatlens validate chat.txt
    chatlens find ~/Downloads")]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Maximum export size in megabytes
    #[arg(long, global = true, value_name = "MB", default_value_t = 10)]
    pub max_size_mb: u64,
}

impl Args {
    /// Reader configuration derived from the global options.
    pub fn reader_config(&self) -> ReaderConfig {
        ReaderConfig::new().with_max_file_size_mb(self.max_size_mb)
    }
}

/// Subcommands.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print participant statistics for an export
    Analyze {
        /// Path to the export; the most recent one in the default folders when omitted
        path: Option<String>,

        /// Number of senders to list
        #[arg(short = 'n', long, default_value_t = DEFAULT_TOP_N)]
        top: usize,

        /// Print statistics as JSON
        #[arg(long)]
        json: bool,
    },

    /// Convert an export into structured records
    Parse {
        /// Path to the export
        path: String,

        /// Path to output file (defaults to records.<format>)
        #[arg(short, long)]
        output: Option<String>,

        /// Output format (inferred from the output extension, else csv)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Check whether a file is a recognized chat export
    Validate {
        /// Path to the file
        path: String,
    },

    /// List recognized exports under a directory
    Find {
        /// Directory to search (supports ~, downloads, documents, desktop)
        #[arg(default_value = ".")]
        dir: String,
    },
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// CSV with semicolon delimiter (default)
    #[default]
    Csv,

    /// JSON array of records
    Json,

    /// JSON Lines - one record per line
    #[value(alias = "ndjson")]
    Jsonl,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", crate::output::OutputFormat::from(*self))
    }
}

// Conversion to library format type
impl From<OutputFormat> for crate::output::OutputFormat {
    fn from(format: OutputFormat) -> crate::output::OutputFormat {
        match format {
            OutputFormat::Csv => crate::output::OutputFormat::Csv,
            OutputFormat::Json => crate::output::OutputFormat::Json,
            OutputFormat::Jsonl => crate::output::OutputFormat::Jsonl,
        }
    }
}
