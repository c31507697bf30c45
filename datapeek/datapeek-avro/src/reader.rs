//! Avro container read path: header metadata, schema, and record iteration.

use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{BufReader, ErrorKind};
use std::path::Path;

use apache_avro::types::Value as AvroValue;
use apache_avro::{Reader, Schema, from_avro_datum};
use datapeek_core::{FileMetadata, SchemaNode, Value};

use crate::convert::from_avro;
use crate::error::AvroFormatError;

/// The object container file header, as a record schema. Decoding the file
/// prefix against this schema with the library's datum reader yields the
/// magic, the metadata map, and the sync marker without any hand-rolled
/// byte parsing. This is the same schema `apache-avro` uses internally.
const HEADER_SCHEMA_JSON: &str = r#"
{
  "type": "record",
  "name": "org.apache.avro.file.Header",
  "fields": [
    {"name": "magic", "type": {"type": "fixed", "name": "Magic", "size": 4}},
    {"name": "meta", "type": {"type": "map", "values": "bytes"}},
    {"name": "sync", "type": {"type": "fixed", "name": "Sync", "size": 16}}
  ]
}"#;

const AVRO_MAGIC: &[u8] = b"Obj\x01";

fn open(path: &Path) -> Result<File, AvroFormatError> {
    File::open(path).map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            AvroFormatError::FileNotFound {
                path: path.display().to_string(),
            }
        } else {
            e.into()
        }
    })
}

fn corrupt(path: &Path, detail: impl ToString) -> AvroFormatError {
    AvroFormatError::Corrupt {
        path: path.display().to_string(),
        detail: detail.to_string(),
    }
}

/// Read schema, user metadata, codec, and serialized size from the header.
pub fn read_metadata(path: &Path) -> Result<FileMetadata, AvroFormatError> {
    let mut reader = BufReader::new(open(path)?);
    let header_schema = Schema::parse_str(HEADER_SCHEMA_JSON)?;
    let header =
        from_avro_datum(&header_schema, &mut reader, None).map_err(|e| corrupt(path, e))?;

    let AvroValue::Record(fields) = header else {
        return Err(corrupt(path, "header is not a record"));
    };
    let mut magic = None;
    let mut meta = None;
    for (name, value) in fields {
        match name.as_str() {
            "magic" => magic = Some(value),
            "meta" => meta = Some(value),
            _ => {}
        }
    }
    match magic {
        Some(AvroValue::Fixed(4, bytes)) if bytes == AVRO_MAGIC => {}
        _ => return Err(corrupt(path, "bad magic")),
    }
    let Some(AvroValue::Map(entries)) = meta else {
        return Err(corrupt(path, "header metadata is not a map"));
    };

    let mut schema = String::new();
    let mut codec = "null".to_string();
    let mut metadata = BTreeMap::new();
    for (key, value) in entries {
        let AvroValue::Bytes(bytes) = value else {
            return Err(corrupt(path, format!("metadata entry '{key}' is not bytes")));
        };
        let text = String::from_utf8_lossy(&bytes).into_owned();
        match key.as_str() {
            "avro.schema" => schema = text,
            "avro.codec" => codec = text,
            key if key.starts_with("avro.") => {}
            _ => {
                metadata.insert(key, text);
            }
        }
    }

    Ok(FileMetadata {
        schema,
        metadata,
        codec,
        size_bytes: fs::metadata(path)?.len(),
    })
}

/// Parse the file's writer schema into the canonical schema model.
pub fn read_schema(path: &Path) -> Result<SchemaNode, AvroFormatError> {
    let reader = Reader::new(BufReader::new(open(path)?)).map_err(|e| corrupt(path, e))?;
    let json = serde_json::to_value(reader.writer_schema())
        .map_err(|e| corrupt(path, format!("writer schema is not serializable: {e}")))?;
    Ok(datapeek_core::parse_schema(&json.to_string())?)
}

/// Iterate the file's records lazily. Each call opens a fresh reader, so the
/// iteration is restartable.
pub fn iter_records(
    path: &Path,
) -> Result<impl Iterator<Item = Result<Value, AvroFormatError>> + use<>, AvroFormatError> {
    let reader = Reader::new(BufReader::new(open(path)?)).map_err(|e| corrupt(path, e))?;
    Ok(reader.map(|item| from_avro(item?)))
}
