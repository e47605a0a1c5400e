use crate::error::{RecstatError, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

pub const CONFIG_FILENAME: &str = "recstat.json";
const DEFAULT_TABLE_TITLE: &str = "Data Overview";
const DEFAULT_TAGS_PLACEHOLDER: &str = "none";

/// Presentation settings, stored in recstat.json. Validation rules are not
/// configurable.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct RecstatConfig {
    /// Title printed above the records table
    #[serde(default = "default_table_title")]
    pub table_title: String,

    /// Shown in the Tags column for records without tags
    #[serde(default = "default_tags_placeholder")]
    pub tags_placeholder: String,

    /// Indent JSON written by `process --output`
    #[serde(default = "default_pretty_output")]
    pub pretty_output: bool,
}

fn default_table_title() -> String {
    DEFAULT_TABLE_TITLE.to_string()
}

fn default_tags_placeholder() -> String {
    DEFAULT_TAGS_PLACEHOLDER.to_string()
}

fn default_pretty_output() -> bool {
    true
}

impl Default for RecstatConfig {
    fn default() -> Self {
        Self {
            table_title: default_table_title(),
            tags_placeholder: default_tags_placeholder(),
            pretty_output: default_pretty_output(),
        }
    }
}

impl RecstatConfig {
    /// Load config from an explicit file. The file must exist.
    pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(RecstatError::Io)?;
        let config: RecstatConfig =
            serde_json::from_str(&content).map_err(RecstatError::Serialization)?;
        Ok(config)
    }

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        Self::load_file(config_path)
    }
}
