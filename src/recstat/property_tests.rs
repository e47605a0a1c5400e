//! Property-based tests for record validation and statistics

#[cfg(test)]
mod tests {
    use crate::commands::stats::calculate_statistics;
    use crate::commands::validate::validate_records;
    use crate::error::{RecstatError, ValidationReason};
    use crate::model::{Numeric, Record, NAME_MAX_LEN};
    use proptest::prelude::*;
    use serde_json::{json, Value};

    fn valid_name() -> impl Strategy<Value = String> {
        "[A-Za-z0-9][A-Za-z0-9 _-]{0,98}[A-Za-z0-9]|[A-Za-z0-9]"
    }

    fn positive_value() -> impl Strategy<Value = Value> {
        prop_oneof![
            (1i64..1_000_000).prop_map(Value::from),
            (0.001f64..1.0e9).prop_map(Value::from),
        ]
    }

    fn tags() -> impl Strategy<Value = Vec<String>> {
        prop::collection::vec("[ \t]{0,2}[a-z]{0,8}[ \t]{0,2}", 0..5)
    }

    fn raw_record() -> impl Strategy<Value = Value> {
        (valid_name(), positive_value(), tags(), any::<bool>()).prop_map(
            |(name, value, tags, with_metadata)| {
                let mut raw = json!({"name": name, "value": value, "tags": tags});
                if with_metadata {
                    raw["metadata"] = json!({"source": "proptest", "n": [1, 2.5, null]});
                }
                raw
            },
        )
    }

    proptest! {
        #[test]
        fn test_valid_input_constructs_trimmed_record(
            name in valid_name(),
            pad_left in "[ \t]{0,3}",
            pad_right in "[ \t]{0,3}",
            value in positive_value(),
            tags in tags(),
        ) {
            let raw = json!({
                "name": format!("{}{}{}", pad_left, name, pad_right),
                "value": value,
                "tags": tags,
            });
            let record = Record::from_value(&raw).unwrap();

            prop_assert!(record.name().chars().count() <= NAME_MAX_LEN);
            prop_assert_eq!(record.name(), name.as_str());
            prop_assert_eq!(record.value().to_json(), value);
            let trimmed: Vec<&str> = tags.iter().map(|t| t.trim()).collect();
            prop_assert_eq!(record.tags(), trimmed.as_slice());
            prop_assert!(record.metadata().is_none());
        }

        #[test]
        fn test_non_positive_value_is_rejected(
            name in valid_name(),
            value in prop_oneof![
                (-1_000_000i64..=0).prop_map(Value::from),
                (-1.0e9f64..=0.0).prop_map(Value::from),
            ],
        ) {
            let err = Record::from_value(&json!({"name": name, "value": value})).unwrap_err();
            prop_assert_eq!(err.field, "value");
        }

        #[test]
        fn test_blank_name_is_rejected(name in "[ \t\n]{0,10}", value in positive_value()) {
            let err = Record::from_value(&json!({"name": name, "value": value})).unwrap_err();
            prop_assert_eq!(err.field, "name");
            prop_assert_eq!(err.reason, ValidationReason::Empty);
        }

        #[test]
        fn test_projection_round_trip(raw in raw_record()) {
            let record = Record::from_value(&raw).unwrap();
            let again = Record::from_map(&record.to_map()).unwrap();
            prop_assert_eq!(again, record);
        }

        #[test]
        fn test_batch_preserves_order(items in prop::collection::vec(raw_record(), 1..20)) {
            let records = validate_records(&items).unwrap();
            prop_assert_eq!(records.len(), items.len());
            for (record, raw) in records.iter().zip(&items) {
                prop_assert_eq!(record, &Record::from_value(raw).unwrap());
            }
        }

        #[test]
        fn test_batch_is_fail_fast(
            mut items in prop::collection::vec(raw_record(), 1..20),
            tail in prop::collection::vec(raw_record(), 0..5),
            position in any::<prop::sample::Index>(),
        ) {
            let k = position.index(items.len());
            items[k] = json!({"name": "bad", "value": 0});
            items.extend(tail);

            match validate_records(&items) {
                Err(RecstatError::InvalidRecord { index, .. }) => prop_assert_eq!(index, k),
                other => prop_assert!(false, "expected InvalidRecord, got {:?}", other),
            }
        }

        #[test]
        fn test_statistics_bounds(items in prop::collection::vec(raw_record(), 1..20)) {
            let records = validate_records(&items).unwrap();
            let stats = calculate_statistics(&records);

            prop_assert_eq!(stats.count, records.len());
            prop_assert!(stats.min <= stats.average || (stats.min.as_f64() - stats.average.as_f64()).abs() < 1e-6);
            prop_assert!(stats.average <= stats.max || (stats.max.as_f64() - stats.average.as_f64()).abs() < 1e-6);
            prop_assert!(records.iter().any(|r| r.value() == stats.min));
            prop_assert!(records.iter().any(|r| r.value() == stats.max));
            prop_assert!(stats.total > Numeric::Int(0));
        }
    }
}
