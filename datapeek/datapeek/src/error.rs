//! Error type for the format facade.

use thiserror::Error;

/// Errors produced by [`adapter_for`](crate::adapter_for) and the
/// [`FormatAdapter`](crate::FormatAdapter) operations.
#[derive(Debug, Error)]
pub enum FormatError {
    /// The file extension is unknown, or maps to a format with no adapter
    /// wired up (csv, json).
    #[error("unsupported file format: {detail}")]
    UnsupportedFormat { detail: String },

    #[error(transparent)]
    Avro(#[from] datapeek_avro::AvroFormatError),

    #[error(transparent)]
    Parquet(#[from] datapeek_parquet::ParquetFormatError),

    #[error(transparent)]
    Table(#[from] datapeek_arrow::TableError),
}

impl FormatError {
    pub(crate) fn unsupported(detail: impl Into<String>) -> Self {
        Self::UnsupportedFormat {
            detail: detail.into(),
        }
    }
}
