//! Parquet read path: footer metadata, record iteration, and batch loading.

use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::ErrorKind;
use std::path::Path;

use arrow::datatypes::SchemaRef;
use arrow::record_batch::RecordBatch;
use datapeek_arrow::batch_to_records;
use datapeek_core::{FileMetadata, Value};
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use parquet::basic::Compression;
use parquet::errors::ParquetError;
use parquet::file::reader::{FileReader, SerializedFileReader};
use parquet::schema::printer::print_schema;

use crate::error::ParquetFormatError;

fn open(path: &Path) -> Result<File, ParquetFormatError> {
    File::open(path).map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            ParquetFormatError::FileNotFound {
                path: path.display().to_string(),
            }
        } else {
            e.into()
        }
    })
}

fn corrupt(path: &Path, detail: impl ToString) -> ParquetFormatError {
    ParquetFormatError::Corrupt {
        path: path.display().to_string(),
        detail: detail.to_string(),
    }
}

fn codec_name(compression: Compression) -> String {
    match compression {
        Compression::UNCOMPRESSED => "uncompressed".to_string(),
        Compression::SNAPPY => "snappy".to_string(),
        Compression::GZIP(_) => "gzip".to_string(),
        Compression::ZSTD(_) => "zstd".to_string(),
        Compression::BROTLI(_) => "brotli".to_string(),
        Compression::LZO => "lzo".to_string(),
        Compression::LZ4 => "lz4".to_string(),
        Compression::LZ4_RAW => "lz4_raw".to_string(),
    }
}

/// Read schema text, key/value metadata, codec, and serialized size from the
/// file footer.
///
/// The codec is taken from the first column chunk of the first row group,
/// which is where the writer's compression setting lands for every file this
/// tool produces. Keys in the Arrow namespace (`ARROW:`) are writer-internal
/// and are not reported as user metadata.
pub fn read_metadata(path: &Path) -> Result<FileMetadata, ParquetFormatError> {
    let reader = SerializedFileReader::new(open(path)?).map_err(|e| corrupt(path, e))?;
    let meta = reader.metadata();
    let file_meta = meta.file_metadata();

    let mut schema_text = Vec::new();
    print_schema(&mut schema_text, file_meta.schema_descr().root_schema());
    let schema = String::from_utf8_lossy(&schema_text).trim_end().to_string();

    let mut metadata = BTreeMap::new();
    if let Some(entries) = file_meta.key_value_metadata() {
        for entry in entries {
            if entry.key.starts_with("ARROW:") {
                continue;
            }
            metadata.insert(entry.key.clone(), entry.value.clone().unwrap_or_default());
        }
    }

    let codec = if meta.num_row_groups() > 0 {
        codec_name(meta.row_group(0).column(0).compression())
    } else {
        "uncompressed".to_string()
    };

    Ok(FileMetadata {
        schema,
        metadata,
        codec,
        size_bytes: fs::metadata(path)?.len(),
    })
}

/// Iterate the file's records lazily. Each call opens a fresh reader, so the
/// iteration is restartable.
pub fn iter_records(
    path: &Path,
) -> Result<impl Iterator<Item = Result<Value, ParquetFormatError>> + use<>, ParquetFormatError> {
    let reader = ParquetRecordBatchReaderBuilder::try_new(open(path)?)
        .map_err(|e| corrupt(path, e))?
        .build()
        .map_err(|e| corrupt(path, e))?;
    Ok(reader.flat_map(|batch| match batch {
        Ok(batch) => match batch_to_records(&batch) {
            Ok(records) => records.into_iter().map(Ok).collect::<Vec<_>>(),
            Err(e) => vec![Err(e.into())],
        },
        Err(e) => vec![Err(ParquetError::from(e).into())],
    }))
}

/// Load the whole file as Arrow batches, for SQL execution.
pub fn read_batches(path: &Path) -> Result<(SchemaRef, Vec<RecordBatch>), ParquetFormatError> {
    let builder =
        ParquetRecordBatchReaderBuilder::try_new(open(path)?).map_err(|e| corrupt(path, e))?;
    let schema = builder.schema().clone();
    let reader = builder.build().map_err(|e| corrupt(path, e))?;
    let batches = reader
        .collect::<Result<Vec<_>, _>>()
        .map_err(ParquetError::from)?;
    Ok((schema, batches))
}
