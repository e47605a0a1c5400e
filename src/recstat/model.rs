use crate::error::{ValidationError, ValidationReason};
use serde::Serialize;
use serde_json::{Map, Number, Value};
use std::cmp::Ordering;
use std::fmt;
use std::ops::Add;

pub const NAME_MAX_LEN: usize = 100;

/// The only keys a raw record may carry.
pub const RECORD_FIELDS: [&str; 4] = ["name", "value", "tags", "metadata"];

/// A JSON number that remembers whether it was written as an integer.
///
/// Arithmetic promotes to `Float` as soon as one side is a float (or an
/// integer sum overflows). Comparison is numeric, so `Int(42) == Float(42.0)`.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(untagged)]
pub enum Numeric {
    Int(i64),
    Float(f64),
}

impl Numeric {
    /// Integers outside the `i64` range become floats. Returns `None` only for
    /// numbers `f64` cannot hold, which serde_json produces solely under its
    /// `arbitrary_precision` feature.
    pub fn from_json(number: &Number) -> Option<Self> {
        number
            .as_i64()
            .map(Numeric::Int)
            .or_else(|| number.as_f64().map(Numeric::Float))
    }

    pub fn as_f64(&self) -> f64 {
        match *self {
            Numeric::Int(i) => i as f64,
            Numeric::Float(f) => f,
        }
    }

    pub fn is_finite(&self) -> bool {
        match *self {
            Numeric::Int(_) => true,
            Numeric::Float(f) => f.is_finite(),
        }
    }

    pub fn is_positive(&self) -> bool {
        match *self {
            Numeric::Int(i) => i > 0,
            Numeric::Float(f) => f > 0.0,
        }
    }

    pub fn to_json(&self) -> Value {
        match *self {
            Numeric::Int(i) => Value::from(i),
            Numeric::Float(f) => Number::from_f64(f).map_or(Value::Null, Value::Number),
        }
    }
}

impl Default for Numeric {
    fn default() -> Self {
        Numeric::Int(0)
    }
}

impl From<i64> for Numeric {
    fn from(value: i64) -> Self {
        Numeric::Int(value)
    }
}

impl From<i32> for Numeric {
    fn from(value: i32) -> Self {
        Numeric::Int(i64::from(value))
    }
}

impl From<f64> for Numeric {
    fn from(value: f64) -> Self {
        Numeric::Float(value)
    }
}

impl Add for Numeric {
    type Output = Numeric;

    fn add(self, rhs: Numeric) -> Numeric {
        match (self, rhs) {
            (Numeric::Int(a), Numeric::Int(b)) => a
                .checked_add(b)
                .map_or(Numeric::Float(a as f64 + b as f64), Numeric::Int),
            (a, b) => Numeric::Float(a.as_f64() + b.as_f64()),
        }
    }
}

impl PartialEq for Numeric {
    fn eq(&self, other: &Self) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

impl PartialOrd for Numeric {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (*self, *other) {
            (Numeric::Int(a), Numeric::Int(b)) => Some(a.cmp(&b)),
            (Numeric::Float(a), Numeric::Float(b)) => a.partial_cmp(&b),
            (Numeric::Int(a), Numeric::Float(b)) => cmp_int_float(a, b),
            (Numeric::Float(a), Numeric::Int(b)) => cmp_int_float(b, a).map(Ordering::reverse),
        }
    }
}

/// Exact comparison of an integer with a float, without rounding the integer
/// through `f64`.
fn cmp_int_float(i: i64, f: f64) -> Option<Ordering> {
    // 2^63, exactly representable
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;

    if f.is_nan() {
        return None;
    }
    if f >= LIMIT {
        return Some(Ordering::Less);
    }
    if f < -LIMIT {
        return Some(Ordering::Greater);
    }

    let whole = f.trunc();
    match i.cmp(&(whole as i64)) {
        Ordering::Equal => 0.0_f64.partial_cmp(&(f - whole)),
        unequal => Some(unequal),
    }
}

impl fmt::Display for Numeric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Numeric::Int(i) => write!(f, "{}", i),
            // Debug keeps the trailing ".0" on whole floats
            Numeric::Float(x) => write!(f, "{:?}", x),
        }
    }
}

/// A validated, immutable record.
///
/// The only ways to obtain one are [`Record::new`] and [`Record::from_value`] /
/// [`Record::from_map`], all of which check every invariant before returning.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    name: String,
    value: Numeric,
    tags: Vec<String>,
    metadata: Option<Map<String, Value>>,
}

impl Record {
    pub fn new(
        name: &str,
        value: impl Into<Numeric>,
        tags: Vec<String>,
        metadata: Option<Map<String, Value>>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            name: validate_name(name)?,
            value: validate_value(value.into())?,
            tags: tags.into_iter().map(|t| t.trim().to_string()).collect(),
            metadata: metadata.map(trim_keys),
        })
    }

    /// Builds a record from an untyped JSON value, which must be an object.
    pub fn from_value(raw: &Value) -> Result<Self, ValidationError> {
        match raw {
            Value::Object(map) => Self::from_map(map),
            other => Err(ValidationError::new(
                "record",
                ValidationReason::WrongType {
                    expected: "object",
                    found: json_type(other),
                },
            )),
        }
    }

    pub fn from_map(raw: &Map<String, Value>) -> Result<Self, ValidationError> {
        if let Some(unknown) = raw.keys().find(|k| !RECORD_FIELDS.contains(&k.as_str())) {
            return Err(ValidationError::new(
                unknown.as_str(),
                ValidationReason::Unrecognized,
            ));
        }

        let name = match raw.get("name") {
            None => return Err(ValidationError::new("name", ValidationReason::Missing)),
            Some(Value::String(s)) => validate_name(s)?,
            Some(other) => return Err(wrong_type("name", "string", other)),
        };

        let value = match raw.get("value") {
            None => return Err(ValidationError::new("value", ValidationReason::Missing)),
            Some(Value::Number(n)) => validate_value(
                Numeric::from_json(n)
                    .ok_or_else(|| ValidationError::new("value", ValidationReason::NotFinite))?,
            )?,
            Some(other) => return Err(wrong_type("value", "number", other)),
        };

        let tags = match raw.get("tags") {
            None => Vec::new(),
            Some(Value::Array(items)) => items
                .iter()
                .enumerate()
                .map(|(i, item)| match item {
                    Value::String(s) => Ok(s.trim().to_string()),
                    other => Err(wrong_type(format!("tags[{}]", i), "string", other)),
                })
                .collect::<Result<Vec<_>, _>>()?,
            Some(other) => return Err(wrong_type("tags", "array", other)),
        };

        let metadata = match raw.get("metadata") {
            None | Some(Value::Null) => None,
            Some(Value::Object(map)) => Some(trim_keys(map.clone())),
            Some(other) => return Err(wrong_type("metadata", "object", other)),
        };

        Ok(Self {
            name,
            value,
            tags,
            metadata,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> Numeric {
        self.value
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn metadata(&self) -> Option<&Map<String, Value>> {
        self.metadata.as_ref()
    }

    /// Flat `{name, value, tags, metadata}` projection. Feeding it back through
    /// [`Record::from_map`] yields an equal record.
    pub fn to_map(&self) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert("name".to_string(), Value::String(self.name.clone()));
        map.insert("value".to_string(), self.value.to_json());
        map.insert(
            "tags".to_string(),
            Value::Array(self.tags.iter().cloned().map(Value::String).collect()),
        );
        map.insert(
            "metadata".to_string(),
            self.metadata.clone().map_or(Value::Null, Value::Object),
        );
        map
    }
}

impl TryFrom<&Value> for Record {
    type Error = ValidationError;

    fn try_from(raw: &Value) -> Result<Self, Self::Error> {
        Record::from_value(raw)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Record(name='{}', value={})", self.name, self.value)
    }
}

fn validate_name(raw: &str) -> Result<String, ValidationError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(ValidationError::new("name", ValidationReason::Empty));
    }
    let len = name.chars().count();
    if len > NAME_MAX_LEN {
        return Err(ValidationError::new(
            "name",
            ValidationReason::TooLong {
                max: NAME_MAX_LEN,
                actual: len,
            },
        ));
    }
    Ok(name.to_string())
}

fn validate_value(value: Numeric) -> Result<Numeric, ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::new("value", ValidationReason::NotFinite));
    }
    if !value.is_positive() {
        return Err(ValidationError::new(
            "value",
            ValidationReason::NotPositive(value.to_string()),
        ));
    }
    Ok(value)
}

/// Trims metadata keys; values are kept as given. When two keys trim to the
/// same text, the one iterated last wins.
fn trim_keys(map: Map<String, Value>) -> Map<String, Value> {
    map.into_iter()
        .map(|(k, v)| (k.trim().to_string(), v))
        .collect()
}

fn wrong_type(field: impl Into<String>, expected: &'static str, found: &Value) -> ValidationError {
    ValidationError::new(
        field,
        ValidationReason::WrongType {
            expected,
            found: json_type(found),
        },
    )
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
