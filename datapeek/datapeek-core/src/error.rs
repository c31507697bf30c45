//! Error types for schema parsing and value generation.

/// Error returned when a JSON schema description cannot be turned into a
/// canonical [`SchemaNode`](crate::SchemaNode).
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// The description is not structurally valid Avro JSON schema syntax.
    #[error("failed to parse schema: {detail}")]
    Parse { detail: String },

    /// The description names a type outside the supported subset
    /// (e.g. a union, a logical type, or a named-type reference).
    #[error("unsupported type: {type_name}")]
    UnsupportedType { type_name: String },
}

impl SchemaError {
    pub fn parse(detail: impl Into<String>) -> Self {
        Self::Parse {
            detail: detail.into(),
        }
    }

    pub fn unsupported(type_name: impl Into<String>) -> Self {
        Self::UnsupportedType {
            type_name: type_name.into(),
        }
    }
}

/// Error returned by the random value generator.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    /// An enum schema declares no symbols, so no value can be chosen.
    #[error("enum '{name}' has no symbols to choose from")]
    EmptySymbols { name: String },

    /// Dataset generation requires a record-typed root schema.
    #[error("sample root schema must be a record, got {kind}")]
    NonRecordRoot { kind: &'static str },
}
