//! Avro Format Adapter for `datapeek`, built on `apache-avro`.
//!
//! Covers the full adapter capability set: schema parsing/validation,
//! container writes with a block codec and user metadata, header metadata
//! reads, and restartable record iteration. Columnar materialization happens
//! in the `datapeek` facade via `datapeek-arrow`, keeping this crate
//! Arrow-free.

mod convert;
mod error;
mod reader;
mod writer;

use apache_avro::Schema;
use datapeek_core::SchemaNode;

pub use convert::{from_avro, to_avro};
pub use error::AvroFormatError;
pub use reader::{iter_records, read_metadata, read_schema};
pub use writer::{parse_codec, write};

/// Default block codec for generated Avro files.
pub const DEFAULT_CODEC: &str = "null";

/// Parse a JSON schema description into the canonical model, additionally
/// validating it with `apache-avro` so that write-path failures surface at
/// parse time.
pub fn parse_schema(text: &str) -> Result<SchemaNode, AvroFormatError> {
    let node = datapeek_core::parse_schema(text)?;
    Schema::parse_str(text)?;
    Ok(node)
}
