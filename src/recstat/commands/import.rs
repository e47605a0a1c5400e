use crate::error::{RecstatError, Result};
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::debug;

pub const NOT_A_LIST: &str = "Input data must be a list of objects";

/// Reads a JSON file whose top level must be an array. Items are returned
/// unvalidated.
pub fn read_records(path: &Path) -> Result<Vec<Value>> {
    let content = fs::read_to_string(path).map_err(RecstatError::Io)?;
    let data: Value = serde_json::from_str(&content).map_err(RecstatError::Serialization)?;
    debug!("Loaded {} bytes from {}", content.len(), path.display());

    match data {
        Value::Array(items) => Ok(items),
        _ => Err(RecstatError::InvalidInput(NOT_A_LIST.to_string())),
    }
}
