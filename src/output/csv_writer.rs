//! CSV output writer.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::chat_log::ChatLog;
use crate::error::{ChatlensError, Result};

const HEADER: [&str; 3] = ["Timestamp", "Sender", "Content"];

fn write_records<W: Write>(log: &ChatLog, writer: W) -> Result<W> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b';')
        .from_writer(writer);

    writer.write_record(HEADER)?;
    for record in log {
        writer.write_record([&record.timestamp, &record.sender, &record.content])?;
    }

    writer.flush()?;
    writer
        .into_inner()
        .map_err(|e| ChatlensError::Io(e.into_error()))
}

/// Writes records to CSV with semicolon delimiter.
///
/// # Format
/// - Delimiter: `;`
/// - Columns: `Timestamp`, `Sender`, `Content`
/// - Encoding: UTF-8
pub fn write_csv(log: &ChatLog, output_path: &Path) -> Result<()> {
    let file = File::create(output_path)?;
    write_records(log, file)?;
    Ok(())
}

/// Converts records to a CSV string.
pub fn to_csv(log: &ChatLog) -> Result<String> {
    let bytes = write_records(log, Vec::new())?;
    Ok(String::from_utf8(bytes)?)
}
