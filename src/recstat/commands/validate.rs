use crate::error::{RecstatError, Result};
use crate::model::Record;
use serde_json::Value;
use tracing::{debug, info};

/// Validates raw items into records, in order.
///
/// Stops at the first invalid item and returns its position along with the
/// validation error; nothing validated before it is returned.
pub fn validate_records(raw: &[Value]) -> Result<Vec<Record>> {
    if raw.is_empty() {
        return Err(RecstatError::EmptyInput);
    }

    let mut records = Vec::with_capacity(raw.len());
    for (index, item) in raw.iter().enumerate() {
        let record = Record::from_value(item)
            .map_err(|source| RecstatError::InvalidRecord { index, source })?;
        debug!("Processed item: {}", record);
        records.push(record);
    }

    info!("Successfully processed {} items", records.len());
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationReason;
    use crate::model::Numeric;
    use serde_json::json;

    fn sample_data() -> Vec<Value> {
        vec![
            json!({"name": "Alpha", "value": 42, "tags": ["important", "first"]}),
            json!({"name": "Beta", "value": 23.5, "tags": ["second"]}),
            json!({"name": "Gamma", "value": 100, "tags": ["important", "large"]}),
        ]
    }

    #[test]
    fn test_validate_valid_data() {
        let records = validate_records(&sample_data()).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].name(), "Alpha");
        assert_eq!(records[1].value(), Numeric::Float(23.5));
        assert_eq!(records[2].tags(), ["important", "large"]);
    }

    #[test]
    fn test_empty_input_is_its_own_error() {
        let err = validate_records(&[]).unwrap_err();
        assert!(matches!(err, RecstatError::EmptyInput));
        assert_eq!(err.to_string(), "Data cannot be empty");
    }

    #[test]
    fn test_invalid_item_fails_batch() {
        let err = validate_records(&[json!({"name": "Test", "value": -1})]).unwrap_err();
        match err {
            RecstatError::InvalidRecord { index, source } => {
                assert_eq!(index, 0);
                assert_eq!(source.field, "value");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_fail_fast_reports_first_bad_item() {
        let mut data = sample_data();
        data.insert(1, json!({"name": "  ", "value": 5}));
        data.push(json!({"name": "Later", "value": 0}));

        match validate_records(&data).unwrap_err() {
            RecstatError::InvalidRecord { index, source } => {
                assert_eq!(index, 1);
                assert_eq!(source.reason, ValidationReason::Empty);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_mixed_value_types() {
        let data = vec![
            json!({"name": "Int", "value": 42}),
            json!({"name": "Float", "value": 3.14}),
        ];
        let records = validate_records(&data).unwrap();
        assert_eq!(records[0].value(), Numeric::Int(42));
        assert_eq!(records[1].value(), Numeric::Float(3.14));
    }

    #[test]
    fn test_metadata_is_kept() {
        let data = vec![json!({
            "name": "Test",
            "value": 42,
            "metadata": {"category": "test", "priority": 1}
        })];
        let records = validate_records(&data).unwrap();
        assert_eq!(
            records[0].metadata(),
            json!({"category": "test", "priority": 1}).as_object()
        );
    }

    #[test]
    fn test_duplicates_are_kept() {
        let item = json!({"name": "Same", "value": 1});
        let records = validate_records(&[item.clone(), item]).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0], records[1]);
    }
}
