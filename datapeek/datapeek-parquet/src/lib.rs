//! Parquet Format Adapter for `datapeek`, built on the `parquet` crate's
//! Arrow interface.
//!
//! Writes a generated dataset as a single record batch with a configurable
//! column compression, reads footer metadata without touching row data, and
//! iterates records by streaming record batches through `datapeek-arrow`.

mod error;
mod reader;
mod writer;

use datapeek_core::SchemaNode;

pub use error::ParquetFormatError;
pub use reader::{iter_records, read_batches, read_metadata};
pub use writer::{parse_codec, write};

/// Default column compression for generated Parquet files.
pub const DEFAULT_CODEC: &str = "snappy";

/// Parse a JSON schema description into the canonical model, additionally
/// checking that it maps onto an Arrow schema.
pub fn parse_schema(text: &str) -> Result<SchemaNode, ParquetFormatError> {
    let node = datapeek_core::parse_schema(text)?;
    datapeek_arrow::record_schema_to_arrow(&node)?;
    Ok(node)
}
