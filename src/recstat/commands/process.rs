use crate::commands::export::write_records;
use crate::commands::import::read_records;
use crate::commands::stats::calculate_statistics;
use crate::commands::validate::validate_records;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct ProcessOptions {
    pub output: Option<PathBuf>,
    pub stats: bool,
    pub pretty: bool,
}

impl Default for ProcessOptions {
    fn default() -> Self {
        Self {
            output: None,
            stats: false,
            pretty: true,
        }
    }
}

/// Loads, validates and optionally summarizes and re-writes a JSON file.
///
/// Any failure aborts before the output file is touched.
pub fn run(input: &Path, options: &ProcessOptions) -> Result<CmdResult> {
    let raw = read_records(input)?;
    let records = validate_records(&raw)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info(format!(
        "Processed {} items:",
        records.len()
    )));

    if options.stats {
        result = result.with_statistics(calculate_statistics(&records));
    }

    if let Some(output) = &options.output {
        write_records(output, &records, options.pretty)?;
        result.add_message(CmdMessage::success(format!(
            "Results saved to {}",
            output.display()
        )));
        result = result.with_output_path(output.clone());
    }

    Ok(result.with_records(records))
}
