use crate::errors::AppResult;
use crate::models::LogEntry;
use std::path::Path;

/// Write the filtered catalog as pretty-printed JSON.
pub fn write_json(path: &Path, entries: &[LogEntry]) -> AppResult<()> {
    let json = serde_json::to_string_pretty(entries)?;
    std::fs::write(path, json)?;
    Ok(())
}
