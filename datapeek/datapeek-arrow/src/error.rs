use arrow::error::ArrowError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TableError {
    #[error("expected a record schema, got {0}")]
    NonRecordSchema(&'static str),
    #[error("value shape mismatch: expected {expected}, got {actual}")]
    ValueType {
        expected: String,
        actual: &'static str,
    },
    #[error("record has no field named '{name}'")]
    MissingField { name: String },
    #[error("unsupported Arrow data type: {0}")]
    UnsupportedType(String),
    #[error(transparent)]
    Arrow(#[from] ArrowError),
}

impl TableError {
    pub(crate) fn value_type(expected: impl Into<String>, actual: &'static str) -> Self {
        Self::ValueType {
            expected: expected.into(),
            actual,
        }
    }
}
