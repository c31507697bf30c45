//! Avro and Parquet inspection and sample-data generation.
//!
//! The facade ties the format crates together: [`FileFormat`] identifies a
//! file by extension, [`adapter_for`] selects the matching [`FormatAdapter`],
//! and every inspection or generation operation goes through that one trait.

mod adapter;
mod error;
mod format;

pub use adapter::{AvroAdapter, FormatAdapter, ParquetAdapter, adapter_for};
pub use datapeek_arrow as table;
pub use datapeek_core as core;
pub use error::FormatError;
pub use format::FileFormat;
