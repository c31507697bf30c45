//! Error type for the Avro adapter.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AvroFormatError {
    #[error("file not found: {path}")]
    FileNotFound { path: String },

    #[error("corrupt avro file '{path}': {detail}")]
    Corrupt { path: String, detail: String },

    #[error("unsupported avro codec: {codec} (expected null, deflate, or snappy)")]
    UnsupportedCodec { codec: String },

    /// A decoded value uses an Avro type outside the supported subset
    /// (e.g. a logical type).
    #[error("unsupported avro value kind: {kind}")]
    UnsupportedValue { kind: String },

    #[error(transparent)]
    Schema(#[from] datapeek_core::SchemaError),

    #[error(transparent)]
    Avro(#[from] apache_avro::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
