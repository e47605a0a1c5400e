//! Data shape handed to table renderers.
//!
//! Only the row contents are decided here; styling, column widths and the
//! placeholder shown for an empty tag list belong to the UI.

use crate::model::Record;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub name: String,
    pub value: String,
    /// Comma-joined tags, `None` when the record has none.
    pub tags: Option<String>,
}

impl From<&Record> for TableRow {
    fn from(record: &Record) -> Self {
        let tags = if record.tags().is_empty() {
            None
        } else {
            Some(record.tags().join(", "))
        };
        Self {
            name: record.name().to_string(),
            value: record.value().to_string(),
            tags,
        }
    }
}

pub fn table_rows(records: &[Record]) -> Vec<TableRow> {
    records.iter().map(TableRow::from).collect()
}
