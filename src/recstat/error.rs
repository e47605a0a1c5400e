use thiserror::Error;

/// Why a single field was rejected.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationReason {
    #[error("field required")]
    Missing,

    #[error("expected {expected}, got {found}")]
    WrongType {
        expected: &'static str,
        found: &'static str,
    },

    #[error("must not be empty")]
    Empty,

    #[error("must be at most {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },

    #[error("must be greater than 0, got {0}")]
    NotPositive(String),

    #[error("must be a finite number")]
    NotFinite,

    #[error("unrecognized field")]
    Unrecognized,
}

/// A record failed validation. `field` names the offending key (`tags[2]` for
/// list elements, `record` when the item itself is not an object).
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{field}: {reason}")]
pub struct ValidationError {
    pub field: String,
    pub reason: ValidationReason,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, reason: ValidationReason) -> Self {
        Self {
            field: field.into(),
            reason,
        }
    }
}

#[derive(Error, Debug)]
pub enum RecstatError {
    #[error("Data cannot be empty")]
    EmptyInput,

    #[error("Invalid record at position {index}: {source}")]
    InvalidRecord {
        index: usize,
        #[source]
        source: ValidationError,
    },

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("{0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RecstatError>;
