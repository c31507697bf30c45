//! Arrow integration layer for `datapeek`.
//!
//! Three conversions live here:
//! 1. [`record_schema_to_arrow`] turns a canonical record schema into an
//!    Arrow `Schema`.
//! 2. [`records_to_batch`] turns record-shaped [`Value`](datapeek_core::Value)
//!    rows into a `RecordBatch` for Parquet serialization and SQL querying.
//! 3. [`batch_to_records`] turns a `RecordBatch` back into record values for
//!    console printing and statistics.

mod error;
mod from_batch;
mod schema_convert;
mod to_batch;

pub use error::TableError;
pub use from_batch::batch_to_records;
pub use schema_convert::{node_to_datatype, record_schema_to_arrow};
pub use to_batch::records_to_batch;
