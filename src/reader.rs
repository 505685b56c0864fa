//! Bounded reading of export files.
//!
//! Export files are read with an upper size limit and decoded leniently:
//! byte sequences that are not valid UTF-8 become U+FFFD instead of failing
//! the whole file.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use tracing::debug;

use crate::config::ReaderConfig;
use crate::error::{ChatlensError, Result};

/// Iterator over the lines of a reader, decoded with replacement.
///
/// Line terminators (`\n` and `\r\n`) are removed. Only I/O failures are
/// reported as errors.
pub struct LossyLines<R: BufRead> {
    reader: R,
    buffer: Vec<u8>,
}

impl<R: BufRead> LossyLines<R> {
    /// Wraps a buffered reader.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buffer: Vec::with_capacity(256),
        }
    }
}

impl<R: BufRead> Iterator for LossyLines<R> {
    type Item = std::io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.buffer.clear();
        match self.reader.read_until(b'\n', &mut self.buffer) {
            Ok(0) => None,
            Ok(_) => {
                if self.buffer.last() == Some(&b'\n') {
                    self.buffer.pop();
                    if self.buffer.last() == Some(&b'\r') {
                        self.buffer.pop();
                    }
                }
                Some(Ok(String::from_utf8_lossy(&self.buffer).into_owned()))
            }
            Err(e) => Some(Err(e)),
        }
    }
}

fn check_size(size: u64, config: &ReaderConfig) -> Result<()> {
    if size > config.max_file_size {
        return Err(ChatlensError::file_too_large(size, config.max_file_size));
    }
    Ok(())
}

/// Reads a whole export file into memory.
///
/// The size limit is checked against the file metadata before reading and
/// again against the bytes actually read, so files that grow while being
/// read are still rejected.
pub fn read_chat_file(path: &Path, config: &ReaderConfig) -> Result<String> {
    let file = File::open(path)?;
    let size = file.metadata()?.len();
    check_size(size, config)?;

    let mut bytes = Vec::with_capacity(usize::try_from(size).unwrap_or_default());
    file.take(config.max_file_size.saturating_add(1))
        .read_to_end(&mut bytes)?;
    check_size(bytes.len() as u64, config)?;

    debug!(path = %path.display(), bytes = bytes.len(), "read chat export");
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Opens an export file for line-by-line reading.
///
/// Only the metadata size is checked; use [`read_chat_file`] when the limit
/// must hold for the bytes actually consumed.
pub fn open_chat_file(path: &Path, config: &ReaderConfig) -> Result<BufReader<File>> {
    let file = File::open(path)?;
    let size = file.metadata()?.len();
    check_size(size, config)?;
    Ok(BufReader::with_capacity(config.buffer_size, file))
}
