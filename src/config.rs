//! Configuration types for reading, discovery and analysis.
//!
//! This module provides plain configuration structs for library usage,
//! without any CLI framework dependencies:
//!
//! - [`ReaderConfig`] - size limit and buffering for export files
//! - [`AnalysisConfig`] - ranking options for participant statistics
//! - [`DiscoveryConfig`] - directories searched for exports
//!
//! # Example
//!
//! ```rust
//! use chatlens::config::{AnalysisConfig, ReaderConfig};
//!
//! let reader = ReaderConfig::new().with_max_file_size_mb(25);
//! let analysis = AnalysisConfig::new().with_top_n(10);
//!
//! assert_eq!(reader.max_file_size, 25 * 1024 * 1024);
//! assert_eq!(analysis.top_n, 10);
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Default upper bound for export files (10MB).
pub const DEFAULT_MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Default number of senders reported in the ranking.
pub const DEFAULT_TOP_N: usize = 5;

/// Configuration for reading export files.
///
/// # Example
///
/// ```rust
/// use chatlens::config::ReaderConfig;
///
/// let config = ReaderConfig::new()
///     .with_max_file_size(1024 * 1024)
///     .with_buffer_size(16 * 1024);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReaderConfig {
    /// Maximum file size in bytes (default: 10MB)
    pub max_file_size: u64,

    /// Buffer size for line-by-line reading (default: 8KB)
    pub buffer_size: usize,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            max_file_size: DEFAULT_MAX_FILE_SIZE,
            buffer_size: 8 * 1024, // 8KB
        }
    }
}

impl ReaderConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum file size in bytes.
    #[must_use]
    pub fn with_max_file_size(mut self, bytes: u64) -> Self {
        self.max_file_size = bytes;
        self
    }

    /// Sets the maximum file size in megabytes.
    #[must_use]
    pub fn with_max_file_size_mb(mut self, megabytes: u64) -> Self {
        self.max_file_size = megabytes.saturating_mul(1024 * 1024);
        self
    }

    /// Sets the buffer size for streaming reads.
    #[must_use]
    pub fn with_buffer_size(mut self, size: usize) -> Self {
        self.buffer_size = size.max(1);
        self
    }
}

/// Configuration for participant statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Maximum number of senders in the ranking (default: 5)
    pub top_n: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
        }
    }
}

impl AnalysisConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the size of the ranking.
    #[must_use]
    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }
}

/// Directories searched for chat exports.
///
/// The default candidates are `~/Desktop/WhatsAppChat` and the user's
/// download directory. Candidates that do not exist are skipped; nothing is
/// created on disk.
///
/// # Example
///
/// ```rust
/// use chatlens::config::DiscoveryConfig;
///
/// let config = DiscoveryConfig::empty()
///     .with_search_dir("/data/exports")
///     .with_extension("log");
///
/// assert_eq!(config.search_dirs.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscoveryConfig {
    /// Candidate directories, in priority order.
    pub search_dirs: Vec<PathBuf>,

    /// File extension of exports, without the dot (default: `txt`).
    pub extension: String,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        let mut search_dirs = Vec::new();
        if let Some(desktop) = dirs::desktop_dir() {
            search_dirs.push(desktop.join("WhatsAppChat"));
        }
        if let Some(downloads) = dirs::download_dir() {
            search_dirs.push(downloads);
        }

        Self {
            search_dirs,
            extension: "txt".to_string(),
        }
    }
}

impl DiscoveryConfig {
    /// Creates a configuration with the default candidate directories.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a configuration without any candidate directories.
    pub fn empty() -> Self {
        Self {
            search_dirs: Vec::new(),
            extension: "txt".to_string(),
        }
    }

    /// Appends a candidate directory.
    #[must_use]
    pub fn with_search_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.search_dirs.push(dir.into());
        self
    }

    /// Sets the export file extension (a leading dot is ignored).
    #[must_use]
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        let extension = extension.into();
        self.extension = extension.trim_start_matches('.').to_string();
        self
    }
}
