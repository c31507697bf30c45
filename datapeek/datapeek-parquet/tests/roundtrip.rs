use std::collections::BTreeMap;

use datapeek_core::{Value, build_dataset};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tempfile::tempdir;

const USER_SCHEMA: &str = r#"
{
  "type": "record",
  "name": "Test",
  "fields": [
    {"name": "id", "type": "int"},
    {"name": "count", "type": "long"},
    {"name": "ratio", "type": "float"},
    {"name": "score", "type": "double"},
    {"name": "name", "type": "string"},
    {"name": "active", "type": "boolean"},
    {"name": "blob", "type": "bytes"},
    {"name": "digest", "type": {"type": "fixed", "name": "Digest", "size": 16}},
    {"name": "tags", "type": {"type": "array", "items": "string"}},
    {"name": "attrs", "type": {"type": "map", "values": "long"}},
    {"name": "inner", "type": {"type": "record", "name": "Inner", "fields": [
      {"name": "x", "type": "double"}
    ]}}
  ]
}"#;

fn sample_metadata() -> BTreeMap<String, String> {
    BTreeMap::from([("Name".to_string(), "Dummy data".to_string())])
}

#[test]
fn write_then_read_preserves_records() {
    let schema = datapeek_parquet::parse_schema(USER_SCHEMA).unwrap();
    let mut rng = StdRng::seed_from_u64(17);
    let dataset = build_dataset(&mut rng, &schema, 50).unwrap();

    let dir = tempdir().unwrap();
    let path = dir.path().join("sample.parquet");
    datapeek_parquet::write(&path, &schema, &dataset, "snappy", &sample_metadata()).unwrap();

    let read: Vec<Value> = datapeek_parquet::iter_records(&path)
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(read.len(), 50);
    assert_eq!(read, dataset);
}

#[test]
fn enum_columns_read_back_as_their_symbols() {
    let schema_text = r#"
    {
      "type": "record",
      "name": "WithEnum",
      "fields": [
        {"name": "color", "type": {"type": "enum", "name": "Color", "symbols": ["RED", "GREEN", "BLUE"]}}
      ]
    }"#;
    let schema = datapeek_parquet::parse_schema(schema_text).unwrap();
    let mut rng = StdRng::seed_from_u64(23);
    let dataset = build_dataset(&mut rng, &schema, 30).unwrap();

    let dir = tempdir().unwrap();
    let path = dir.path().join("enum.parquet");
    datapeek_parquet::write(&path, &schema, &dataset, "snappy", &BTreeMap::new()).unwrap();

    for record in datapeek_parquet::iter_records(&path).unwrap() {
        let Value::Record(fields) = record.unwrap() else {
            panic!("expected record");
        };
        let Value::String(symbol) = &fields[0].1 else {
            panic!("expected enum stored as string");
        };
        assert!(["RED", "GREEN", "BLUE"].contains(&symbol.as_str()));
    }
}

#[test]
fn metadata_reports_codec_user_entries_and_schema() {
    let schema = datapeek_parquet::parse_schema(USER_SCHEMA).unwrap();
    let mut rng = StdRng::seed_from_u64(29);
    let dataset = build_dataset(&mut rng, &schema, 10).unwrap();

    let dir = tempdir().unwrap();
    let path = dir.path().join("sample.parquet");
    datapeek_parquet::write(&path, &schema, &dataset, "zstd", &sample_metadata()).unwrap();

    let meta = datapeek_parquet::read_metadata(&path).unwrap();
    assert_eq!(meta.codec, "zstd");
    assert_eq!(meta.metadata, sample_metadata());
    assert!(meta.schema.contains("id"));
    assert!(meta.size_bytes > 0);
    assert!(!meta.metadata.keys().any(|k| k.starts_with("ARROW:")));
}

#[test]
fn empty_dataset_round_trips() {
    let schema = datapeek_parquet::parse_schema(USER_SCHEMA).unwrap();

    let dir = tempdir().unwrap();
    let path = dir.path().join("empty.parquet");
    datapeek_parquet::write(&path, &schema, &[], "uncompressed", &BTreeMap::new()).unwrap();

    let read: Vec<Value> = datapeek_parquet::iter_records(&path)
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();
    assert!(read.is_empty());
    datapeek_parquet::read_metadata(&path).unwrap();
}

#[test]
fn iteration_is_restartable() {
    let schema = datapeek_parquet::parse_schema(USER_SCHEMA).unwrap();
    let mut rng = StdRng::seed_from_u64(31);
    let dataset = build_dataset(&mut rng, &schema, 8).unwrap();

    let dir = tempdir().unwrap();
    let path = dir.path().join("restart.parquet");
    datapeek_parquet::write(&path, &schema, &dataset, "gzip", &BTreeMap::new()).unwrap();

    let first = datapeek_parquet::iter_records(&path).unwrap().count();
    let second = datapeek_parquet::iter_records(&path).unwrap().count();
    assert_eq!(first, 8);
    assert_eq!(second, 8);
}

#[test]
fn read_batches_exposes_arrow_schema_and_rows() {
    let schema = datapeek_parquet::parse_schema(USER_SCHEMA).unwrap();
    let mut rng = StdRng::seed_from_u64(37);
    let dataset = build_dataset(&mut rng, &schema, 6).unwrap();

    let dir = tempdir().unwrap();
    let path = dir.path().join("table.parquet");
    datapeek_parquet::write(&path, &schema, &dataset, "snappy", &BTreeMap::new()).unwrap();

    let (arrow_schema, batches) = datapeek_parquet::read_batches(&path).unwrap();
    assert_eq!(arrow_schema.fields().len(), 11);
    let rows: usize = batches.iter().map(|b| b.num_rows()).sum();
    assert_eq!(rows, 6);
}

#[test]
fn missing_file_maps_to_file_not_found() {
    let err = datapeek_parquet::read_metadata(std::path::Path::new("/nonexistent/file.parquet"))
        .unwrap_err();
    assert!(matches!(
        err,
        datapeek_parquet::ParquetFormatError::FileNotFound { .. }
    ));
}

#[test]
fn garbage_file_is_reported_as_corrupt() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("broken.parquet");
    std::fs::write(&path, b"not a parquet file").unwrap();

    let err = datapeek_parquet::read_metadata(&path).unwrap_err();
    assert!(matches!(
        err,
        datapeek_parquet::ParquetFormatError::Corrupt { .. }
    ));
}

#[test]
fn unknown_codec_is_rejected() {
    let err = datapeek_parquet::parse_codec("lzma").unwrap_err();
    assert!(matches!(
        err,
        datapeek_parquet::ParquetFormatError::UnsupportedCodec { .. }
    ));
}
