//! Output formats and writers.
//!
//! Rendering lives here, outside the parsing and analysis core:
//! - [`write_csv`] / [`to_csv`] - CSV with semicolon delimiter - requires `csv-output` feature
//! - [`write_json`] / [`to_json`] - JSON array of records - requires `json-output` feature
//! - [`write_jsonl`] / [`to_jsonl`] - JSON Lines - requires `json-output` feature
//! - [`render_summary`] - plain-text participant statistics
//!
//! # Example
//!
//! ```rust
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn main() -> chatlens::Result<()> {
//! use chatlens::output::{OutputFormat, to_format_string};
//! use chatlens::parser::ChatParser;
//!
//! let log = ChatParser::new().parse_str("[1/2/23, 10:00:00] Alice: Hello!");
//!
//! let csv = to_format_string(&log, OutputFormat::Csv)?;
//! assert!(csv.starts_with("Timestamp;Sender;Content"));
//!
//! let format = OutputFormat::from_path("records.jsonl".as_ref())?;
//! assert_eq!(format, OutputFormat::Jsonl);
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "csv-output", feature = "json-output")))]
//! # fn main() {}
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;
#[cfg(feature = "json-output")]
mod json_writer;
mod summary;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::chat_log::ChatLog;
use crate::error::{ChatlensError, Result};

#[cfg(feature = "csv-output")]
pub use csv_writer::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use json_writer::{to_json, to_jsonl, write_json, write_jsonl};
pub use summary::{NO_MESSAGES, render_summary};

/// Output format for parsed records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum OutputFormat {
    /// CSV with semicolon delimiter (default)
    #[default]
    Csv,

    /// JSON array of records
    Json,

    /// JSON Lines - one JSON object per line
    Jsonl,
}

impl OutputFormat {
    /// Returns the file extension for this format (without dot).
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
            OutputFormat::Jsonl => "jsonl",
        }
    }

    /// Detects format from a file path based on extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default();
        ext.parse()
            .map_err(|_| ChatlensError::UnknownFormat(format!(".{ext}")))
    }

    fn required_feature(self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv-output",
            OutputFormat::Json | OutputFormat::Jsonl => "json-output",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Csv => write!(f, "CSV"),
            OutputFormat::Json => write!(f, "JSON"),
            OutputFormat::Jsonl => write!(f, "JSONL"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = ChatlensError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            "jsonl" | "ndjson" => Ok(OutputFormat::Jsonl),
            _ => Err(ChatlensError::UnknownFormat(s.to_string())),
        }
    }
}

/// Writes records to a file in the specified format.
#[allow(unused_variables)]
pub fn write_to_format(log: &ChatLog, path: &Path, format: OutputFormat) -> Result<()> {
    match format {
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => write_csv(log, path),
        #[cfg(feature = "json-output")]
        OutputFormat::Json => write_json(log, path),
        #[cfg(feature = "json-output")]
        OutputFormat::Jsonl => write_jsonl(log, path),
        #[allow(unreachable_patterns)]
        _ => Err(ChatlensError::UnknownFormat(format!(
            "{} (requires the '{}' feature)",
            format.extension(),
            format.required_feature()
        ))),
    }
}

/// Converts records to a string in the specified format.
#[allow(unused_variables)]
pub fn to_format_string(log: &ChatLog, format: OutputFormat) -> Result<String> {
    match format {
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => to_csv(log),
        #[cfg(feature = "json-output")]
        OutputFormat::Json => to_json(log),
        #[cfg(feature = "json-output")]
        OutputFormat::Jsonl => to_jsonl(log),
        #[allow(unreachable_patterns)]
        _ => Err(ChatlensError::UnknownFormat(format!(
            "{} (requires the '{}' feature)",
            format.extension(),
            format.required_feature()
        ))),
    }
}
