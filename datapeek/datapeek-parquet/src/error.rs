//! Error type for the Parquet adapter.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParquetFormatError {
    #[error("file not found: {path}")]
    FileNotFound { path: String },

    #[error("corrupt parquet file '{path}': {detail}")]
    Corrupt { path: String, detail: String },

    #[error("unsupported parquet codec: {codec} (expected uncompressed, snappy, gzip, or zstd)")]
    UnsupportedCodec { codec: String },

    #[error(transparent)]
    Schema(#[from] datapeek_core::SchemaError),

    #[error(transparent)]
    Table(#[from] datapeek_arrow::TableError),

    #[error(transparent)]
    Parquet(#[from] parquet::errors::ParquetError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
