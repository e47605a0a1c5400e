use crate::model::{Numeric, Record};
use serde::Serialize;

/// Summary of the `value` field over a collection of records.
///
/// An empty collection yields all zeros rather than an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Statistics {
    pub count: usize,
    pub total: Numeric,
    pub average: Numeric,
    pub min: Numeric,
    pub max: Numeric,
}

impl Statistics {
    /// Labelled values in display order.
    pub fn entries(&self) -> [(&'static str, String); 5] {
        [
            ("count", self.count.to_string()),
            ("total", self.total.to_string()),
            ("average", self.average.to_string()),
            ("min", self.min.to_string()),
            ("max", self.max.to_string()),
        ]
    }
}

pub fn calculate_statistics(records: &[Record]) -> Statistics {
    let Some((first, rest)) = records.split_first() else {
        return Statistics::default();
    };

    let (total, min, max) = rest.iter().map(Record::value).fold(
        (first.value(), first.value(), first.value()),
        |(total, min, max), v| {
            (
                total + v,
                if v < min { v } else { min },
                if v > max { v } else { max },
            )
        },
    );

    Statistics {
        count: records.len(),
        total,
        average: Numeric::Float(total.as_f64() / records.len() as f64),
        min,
        max,
    }
}
