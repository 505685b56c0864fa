//! JSON and JSON Lines output writers.
//!
//! JSON produces a pretty-printed array; JSONL writes one compact record
//! per line, which suits streaming consumers.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::chat_log::ChatLog;
use crate::error::Result;

/// Writes records to a JSON file as an array.
///
/// # Format
/// ```json
/// [
///   {"timestamp": "1/2/23, 10:00:00", "sender": "Alice", "content": "Hello"}
/// ]
/// ```
pub fn write_json(log: &ChatLog, output_path: &Path) -> Result<()> {
    let json = to_json(log)?;
    let mut file = File::create(output_path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

/// Converts records to a pretty-printed JSON array.
pub fn to_json(log: &ChatLog) -> Result<String> {
    Ok(serde_json::to_string_pretty(log)?)
}

/// Writes records to JSONL, one object per line.
pub fn write_jsonl(log: &ChatLog, output_path: &Path) -> Result<()> {
    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);
    for record in log {
        serde_json::to_writer(&mut writer, record)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;
    Ok(())
}

/// Converts records to a JSONL string.
pub fn to_jsonl(log: &ChatLog) -> Result<String> {
    let mut out = String::new();
    for record in log {
        out.push_str(&serde_json::to_string(record)?);
        out.push('\n');
    }
    Ok(out)
}
