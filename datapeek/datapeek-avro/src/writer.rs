//! Avro container write path.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use apache_avro::{Codec, Schema, Writer};
use datapeek_core::{SchemaNode, Value};

use crate::convert::to_avro;
use crate::error::AvroFormatError;

/// Map a codec name to the Avro block compression codec.
pub fn parse_codec(name: &str) -> Result<Codec, AvroFormatError> {
    match name {
        "null" => Ok(Codec::Null),
        "deflate" => Ok(Codec::Deflate),
        "snappy" => Ok(Codec::Snappy),
        other => Err(AvroFormatError::UnsupportedCodec {
            codec: other.to_string(),
        }),
    }
}

/// Serialize `dataset` to an Avro object container file.
///
/// User metadata must be registered before the first record is appended;
/// `apache-avro` enforces this, so metadata goes in first.
pub fn write(
    path: &Path,
    schema: &SchemaNode,
    dataset: &[Value],
    codec: &str,
    metadata: &BTreeMap<String, String>,
) -> Result<(), AvroFormatError> {
    let codec = parse_codec(codec)?;
    let avro_schema = Schema::parse_str(&schema.to_json().to_string())?;

    let file = File::create(path)?;
    let mut writer = Writer::with_codec(&avro_schema, BufWriter::new(file), codec);
    for (key, value) in metadata {
        writer.add_user_metadata(key.clone(), value.as_str())?;
    }
    for record in dataset {
        writer.append(to_avro(record))?;
    }
    let mut inner = writer.into_inner()?;
    inner.flush()?;
    Ok(())
}
