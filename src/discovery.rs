//! Locating chat exports on disk.
//!
//! Discovery is driven entirely by [`DiscoveryConfig`]: the candidate
//! directories are passed in, never implied, and nothing is created on disk.
//! The only piece of policy, picking the "most recent" export, is the pure
//! function [`select_most_recent`].
//!
//! # Example
//!
//! ```rust,no_run
//! use chatlens::config::{DiscoveryConfig, ReaderConfig};
//! use chatlens::discovery::{find_chat_exports, resolve_path};
//!
//! let root = resolve_path("downloads");
//! for export in find_chat_exports(&root, &DiscoveryConfig::default(), &ReaderConfig::default())? {
//!     println!("{} ({} bytes)", export.path.display(), export.size);
//! }
//! # Ok::<(), chatlens::ChatlensError>(())
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use serde::Serialize;
use tracing::{debug, warn};

use crate::config::{DiscoveryConfig, ReaderConfig};
use crate::error::Result;
use crate::parsing::validate_reader;
use crate::reader::open_chat_file;

/// A recognized export found on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportFile {
    /// Location of the file.
    pub path: PathBuf,
    /// Size in bytes.
    pub size: u64,
    /// Last modification time, when the platform reports one.
    pub modified: Option<DateTime<Local>>,
}

impl ExportFile {
    fn from_path(path: PathBuf) -> Result<Self> {
        let metadata = fs::metadata(&path)?;
        Ok(Self {
            size: metadata.len(),
            modified: metadata.modified().ok().map(DateTime::<Local>::from),
            path,
        })
    }
}

/// Expands `~` and the folder aliases `downloads`, `documents` and
/// `desktop`, then makes the path absolute.
///
/// Aliases are matched case-insensitively and only as the whole input.
pub fn resolve_path(input: &str) -> PathBuf {
    let expanded = if input == "~" {
        dirs::home_dir()
    } else if let Some(rest) = input.strip_prefix("~/") {
        dirs::home_dir().map(|home| home.join(rest))
    } else {
        match input.to_lowercase().as_str() {
            "downloads" => dirs::download_dir(),
            "documents" => dirs::document_dir(),
            "desktop" => dirs::desktop_dir(),
            _ => None,
        }
    };

    let path = expanded.unwrap_or_else(|| PathBuf::from(input));
    std::path::absolute(&path).unwrap_or(path)
}

fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some(extension)
}

/// Validates a candidate within the reader's size limit.
///
/// Oversized or unreadable files are logged and treated as non-exports.
fn is_chat_export(path: &Path, reader: &ReaderConfig) -> bool {
    match open_chat_file(path, reader).and_then(validate_reader) {
        Ok(valid) => valid,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "skipping candidate file");
            false
        }
    }
}

/// Recursively finds recognized exports under `root`.
///
/// Files with the configured extension are kept when any of their lines
/// matches the header grammar. Files above the reader's size limit and
/// unreadable entries are skipped with a warning; only a failure to read
/// `root` itself is an error. Results are sorted by path.
pub fn find_chat_exports(
    root: &Path,
    config: &DiscoveryConfig,
    reader: &ReaderConfig,
) -> Result<Vec<ExportFile>> {
    let mut found = Vec::new();
    let mut pending = vec![root.to_path_buf()];
    let mut is_root = true;

    while let Some(dir) = pending.pop() {
        let entries = match fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(e) if is_root => return Err(e.into()),
            Err(e) => {
                warn!(path = %dir.display(), error = %e, "skipping unreadable directory");
                continue;
            }
        };
        is_root = false;

        for entry in entries.flatten() {
            let path = entry.path();
            // Symlinked directories are not followed.
            if entry.file_type().is_ok_and(|t| t.is_dir()) {
                pending.push(path);
            } else if has_extension(&path, &config.extension) && is_chat_export(&path, reader) {
                match ExportFile::from_path(path) {
                    Ok(export) => found.push(export),
                    Err(e) => warn!(error = %e, "skipping export without metadata"),
                }
            }
        }
    }

    found.sort_by(|a, b| a.path.cmp(&b.path));
    debug!(root = %root.display(), count = found.len(), "found chat exports");
    Ok(found)
}

/// Files with the configured extension directly inside `dir`, unvalidated.
pub fn list_exports(dir: &Path, config: &DiscoveryConfig) -> Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = fs::read_dir(dir)?
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && has_extension(path, &config.extension))
        .collect();
    files.sort();
    Ok(files)
}

/// Recognized exports directly inside `dir`, sorted by path.
pub fn matching_exports(
    dir: &Path,
    config: &DiscoveryConfig,
    reader: &ReaderConfig,
) -> Result<Vec<PathBuf>> {
    let mut files = list_exports(dir, config)?;
    files.retain(|path| is_chat_export(path, reader));
    Ok(files)
}

/// First configured directory that directly contains a recognized export.
///
/// Missing directories are skipped.
pub fn find_chat_directory(config: &DiscoveryConfig, reader: &ReaderConfig) -> Option<PathBuf> {
    config
        .search_dirs
        .iter()
        .filter(|dir| dir.is_dir())
        .find(|dir| {
            list_exports(dir, config)
                .map(|files| files.iter().any(|path| is_chat_export(path, reader)))
                .unwrap_or(false)
        })
        .cloned()
}

/// Picks the export whose file name sorts last.
///
/// Export tools embed dates in file names, so the greatest name is taken as
/// the most recent. Equal names are ordered by full path.
///
/// # Example
///
/// ```
/// use chatlens::discovery::select_most_recent;
/// use std::path::PathBuf;
///
/// let picked = select_most_recent(["a/chat_2023.txt", "b/chat_2024.txt", "c/chat_2022.txt"]);
/// assert_eq!(picked, Some(PathBuf::from("b/chat_2024.txt")));
/// ```
pub fn select_most_recent<I, P>(paths: I) -> Option<PathBuf>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    paths
        .into_iter()
        .map(|p| p.as_ref().to_path_buf())
        .max_by(|a, b| a.file_name().cmp(&b.file_name()).then_with(|| a.cmp(b)))
}

/// The most recent export in the first directory that holds one.
///
/// Returns `Ok(None)` when no configured directory contains a recognized
/// export. Unrecognized files with the same extension take no part in the
/// selection.
pub fn most_recent_export(
    config: &DiscoveryConfig,
    reader: &ReaderConfig,
) -> Result<Option<PathBuf>> {
    let Some(dir) = find_chat_directory(config, reader) else {
        return Ok(None);
    };
    let files = matching_exports(&dir, config, reader)?;
    Ok(select_most_recent(files))
}
