//! Format-agnostic core for `datapeek`.
//!
//! This crate provides the canonical schema model ([`SchemaNode`]), the
//! dynamically-typed value representation ([`Value`]), the schema-driven
//! random value generator, the sample dataset builder, and column statistics
//! accumulation. It has no knowledge of any container format; the Avro and
//! Parquet adapters consume these types.

mod error;
mod generate;
mod metadata;
mod sample;
mod schema;
mod stats;
mod value;

pub use error::{GenerateError, SchemaError};
pub use generate::{DEFAULT_BYTES_LEN, DEFAULT_STRING_LEN, generate_value, random_string};
pub use metadata::FileMetadata;
pub use sample::build_dataset;
pub use schema::{FieldSchema, SchemaNode, parse_schema};
pub use stats::{ColumnStats, StatsAccumulator, natural_cmp};
pub use value::Value;
