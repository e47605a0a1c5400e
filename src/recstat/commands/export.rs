use crate::error::{RecstatError, Result};
use crate::model::Record;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Writes records as a JSON array of `{name, value, tags, metadata}` objects.
pub fn write_records(path: &Path, records: &[Record], pretty: bool) -> Result<()> {
    // Serializing the records directly keeps field order stable
    let content = if pretty {
        serde_json::to_string_pretty(records)
    } else {
        serde_json::to_string(records)
    }
    .map_err(RecstatError::Serialization)?;

    fs::write(path, content).map_err(RecstatError::Io)?;
    debug!("Wrote {} records to {}", records.len(), path.display());
    Ok(())
}
