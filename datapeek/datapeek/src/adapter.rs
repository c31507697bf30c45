//! The format adapter capability interface and its Avro/Parquet
//! implementations.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use arrow::datatypes::SchemaRef;
use arrow::record_batch::RecordBatch;
use datapeek_arrow::{record_schema_to_arrow, records_to_batch};
use datapeek_core::{ColumnStats, FileMetadata, SchemaNode, StatsAccumulator, Value};

use crate::error::FormatError;
use crate::format::FileFormat;

/// One file format's full capability set: schema parsing, dataset writes,
/// metadata reads, record iteration, and columnar loading.
///
/// Adapters are stateless; every operation takes the target path. Statistics
/// are a provided method so both formats share one scan implementation.
pub trait FormatAdapter {
    fn parse_schema(&self, text: &str) -> Result<SchemaNode, FormatError>;

    /// Codec used when the caller does not name one.
    fn default_codec(&self) -> &'static str;

    fn write(
        &self,
        path: &Path,
        schema: &SchemaNode,
        dataset: &[Value],
        codec: &str,
        metadata: &BTreeMap<String, String>,
    ) -> Result<(), FormatError>;

    fn read_metadata(&self, path: &Path) -> Result<FileMetadata, FormatError>;

    /// Lazy, restartable record iteration: each call opens the file afresh.
    fn iterate_records(
        &self,
        path: &Path,
    ) -> Result<Box<dyn Iterator<Item = Result<Value, FormatError>>>, FormatError>;

    /// Load the whole file as Arrow batches, for SQL execution.
    fn as_table(&self, path: &Path) -> Result<(SchemaRef, Vec<RecordBatch>), FormatError>;

    /// Full-scan column statistics: row count plus per-column count, null
    /// count, and min/max under the natural ordering.
    fn compute_stats(
        &self,
        path: &Path,
    ) -> Result<(u64, BTreeMap<String, ColumnStats>), FormatError> {
        let mut acc = StatsAccumulator::new();
        for record in self.iterate_records(path)? {
            if let Some(fields) = record?.as_record() {
                acc.push_row(fields);
            }
        }
        Ok(acc.finish())
    }
}

/// Select the adapter for a path by its extension.
pub fn adapter_for(path: &Path) -> Result<Box<dyn FormatAdapter>, FormatError> {
    match FileFormat::from_path(path)? {
        FileFormat::Avro => Ok(Box::new(AvroAdapter)),
        FileFormat::Parquet => Ok(Box::new(ParquetAdapter)),
        format @ (FileFormat::Csv | FileFormat::Json) => Err(FormatError::unsupported(format!(
            "no adapter for {format} files"
        ))),
    }
}

/// Avro object container files, via `datapeek-avro`.
pub struct AvroAdapter;

impl FormatAdapter for AvroAdapter {
    fn parse_schema(&self, text: &str) -> Result<SchemaNode, FormatError> {
        Ok(datapeek_avro::parse_schema(text)?)
    }

    fn default_codec(&self) -> &'static str {
        datapeek_avro::DEFAULT_CODEC
    }

    fn write(
        &self,
        path: &Path,
        schema: &SchemaNode,
        dataset: &[Value],
        codec: &str,
        metadata: &BTreeMap<String, String>,
    ) -> Result<(), FormatError> {
        Ok(datapeek_avro::write(path, schema, dataset, codec, metadata)?)
    }

    fn read_metadata(&self, path: &Path) -> Result<FileMetadata, FormatError> {
        Ok(datapeek_avro::read_metadata(path)?)
    }

    fn iterate_records(
        &self,
        path: &Path,
    ) -> Result<Box<dyn Iterator<Item = Result<Value, FormatError>>>, FormatError> {
        let records = datapeek_avro::iter_records(path)?;
        Ok(Box::new(records.map(|item| item.map_err(Into::into))))
    }

    /// Avro has no columnar layout of its own: decode every record, then
    /// build one batch from the writer schema.
    fn as_table(&self, path: &Path) -> Result<(SchemaRef, Vec<RecordBatch>), FormatError> {
        let schema = datapeek_avro::read_schema(path)?;
        let arrow_schema = Arc::new(record_schema_to_arrow(&schema)?);
        let records = datapeek_avro::iter_records(path)?
            .collect::<Result<Vec<_>, _>>()
            .map_err(FormatError::from)?;
        let batch = records_to_batch(arrow_schema.clone(), &records)?;
        Ok((arrow_schema, vec![batch]))
    }
}

/// Parquet files, via `datapeek-parquet`.
pub struct ParquetAdapter;

impl FormatAdapter for ParquetAdapter {
    fn parse_schema(&self, text: &str) -> Result<SchemaNode, FormatError> {
        Ok(datapeek_parquet::parse_schema(text)?)
    }

    fn default_codec(&self) -> &'static str {
        datapeek_parquet::DEFAULT_CODEC
    }

    fn write(
        &self,
        path: &Path,
        schema: &SchemaNode,
        dataset: &[Value],
        codec: &str,
        metadata: &BTreeMap<String, String>,
    ) -> Result<(), FormatError> {
        Ok(datapeek_parquet::write(
            path, schema, dataset, codec, metadata,
        )?)
    }

    fn read_metadata(&self, path: &Path) -> Result<FileMetadata, FormatError> {
        Ok(datapeek_parquet::read_metadata(path)?)
    }

    fn iterate_records(
        &self,
        path: &Path,
    ) -> Result<Box<dyn Iterator<Item = Result<Value, FormatError>>>, FormatError> {
        let records = datapeek_parquet::iter_records(path)?;
        Ok(Box::new(records.map(|item| item.map_err(Into::into))))
    }

    fn as_table(&self, path: &Path) -> Result<(SchemaRef, Vec<RecordBatch>), FormatError> {
        Ok(datapeek_parquet::read_batches(path)?)
    }
}
