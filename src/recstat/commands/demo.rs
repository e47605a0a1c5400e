use crate::commands::stats::calculate_statistics;
use crate::commands::validate::validate_records;
use crate::commands::CmdResult;
use crate::error::Result;
use serde_json::{json, Value};

pub fn sample_data() -> Vec<Value> {
    vec![
        json!({"name": "Alpha", "value": 42, "tags": ["important", "first"]}),
        json!({"name": "Beta", "value": 23.5, "tags": ["second"]}),
        json!({"name": "Gamma", "value": 100, "tags": ["important", "large"]}),
    ]
}

/// Runs validation and statistics over [`sample_data`].
pub fn run() -> Result<CmdResult> {
    let records = validate_records(&sample_data())?;
    let statistics = calculate_statistics(&records);
    Ok(CmdResult::default()
        .with_statistics(statistics)
        .with_records(records))
}
