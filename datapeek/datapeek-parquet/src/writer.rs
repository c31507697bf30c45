//! Parquet write path.

use std::collections::BTreeMap;
use std::fs::File;
use std::path::Path;
use std::sync::Arc;

use datapeek_arrow::{record_schema_to_arrow, records_to_batch};
use datapeek_core::{SchemaNode, Value};
use parquet::arrow::ArrowWriter;
use parquet::basic::{Compression, GzipLevel, ZstdLevel};
use parquet::file::metadata::KeyValue;
use parquet::file::properties::WriterProperties;

use crate::error::ParquetFormatError;

/// Map a codec name to a Parquet column compression.
pub fn parse_codec(name: &str) -> Result<Compression, ParquetFormatError> {
    match name {
        "uncompressed" => Ok(Compression::UNCOMPRESSED),
        "snappy" => Ok(Compression::SNAPPY),
        "gzip" => Ok(Compression::GZIP(GzipLevel::default())),
        "zstd" => Ok(Compression::ZSTD(ZstdLevel::default())),
        other => Err(ParquetFormatError::UnsupportedCodec {
            codec: other.to_string(),
        }),
    }
}

/// Serialize `dataset` to a Parquet file, as a single record batch.
pub fn write(
    path: &Path,
    schema: &SchemaNode,
    dataset: &[Value],
    codec: &str,
    metadata: &BTreeMap<String, String>,
) -> Result<(), ParquetFormatError> {
    let compression = parse_codec(codec)?;
    let arrow_schema = Arc::new(record_schema_to_arrow(schema)?);
    let batch = records_to_batch(arrow_schema.clone(), dataset)?;

    let key_values: Vec<KeyValue> = metadata
        .iter()
        .map(|(k, v)| KeyValue::new(k.clone(), v.clone()))
        .collect();
    let props = WriterProperties::builder()
        .set_compression(compression)
        .set_key_value_metadata((!key_values.is_empty()).then_some(key_values))
        .build();

    let file = File::create(path)?;
    let mut writer = ArrowWriter::try_new(file, arrow_schema, Some(props))?;
    writer.write(&batch)?;
    writer.close()?;
    Ok(())
}
