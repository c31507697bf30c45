use std::collections::BTreeMap;

use datapeek_core::{SchemaNode, Value, build_dataset};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tempfile::tempdir;

const USER_SCHEMA: &str = r#"
{
  "type": "record",
  "name": "Test",
  "fields": [
    {"name": "id", "type": "int"},
    {"name": "name", "type": "string"},
    {"name": "score", "type": "double"},
    {"name": "active", "type": "boolean"},
    {"name": "payload", "type": {"type": "fixed", "name": "Payload", "size": 8}},
    {"name": "color", "type": {"type": "enum", "name": "Color", "symbols": ["RED", "GREEN", "BLUE"]}},
    {"name": "tags", "type": {"type": "array", "items": "string"}}
  ]
}"#;

fn sample_metadata() -> BTreeMap<String, String> {
    BTreeMap::from([
        ("Name".to_string(), "Dummy data".to_string()),
        ("Description".to_string(), "Sample data file".to_string()),
    ])
}

#[test]
fn write_then_read_preserves_records() {
    let schema = datapeek_avro::parse_schema(USER_SCHEMA).unwrap();
    let mut rng = StdRng::seed_from_u64(7);
    let dataset = build_dataset(&mut rng, &schema, 100).unwrap();

    let dir = tempdir().unwrap();
    let path = dir.path().join("sample.avro");
    datapeek_avro::write(&path, &schema, &dataset, "deflate", &sample_metadata()).unwrap();

    let read: Vec<Value> = datapeek_avro::iter_records(&path)
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(read.len(), 100);
    assert_eq!(read, dataset);
}

#[test]
fn metadata_reports_codec_schema_and_user_entries() {
    let schema = datapeek_avro::parse_schema(USER_SCHEMA).unwrap();
    let mut rng = StdRng::seed_from_u64(11);
    let dataset = build_dataset(&mut rng, &schema, 10).unwrap();

    let dir = tempdir().unwrap();
    let path = dir.path().join("sample.avro");
    datapeek_avro::write(&path, &schema, &dataset, "deflate", &sample_metadata()).unwrap();

    let meta = datapeek_avro::read_metadata(&path).unwrap();
    assert_eq!(meta.codec, "deflate");
    assert_eq!(meta.metadata, sample_metadata());
    assert!(meta.schema.contains("\"Test\""));
    assert!(meta.size_bytes > 0);
}

#[test]
fn hundred_deflate_records_with_two_fields() {
    let schema_text = r#"
    {
      "type": "record",
      "name": "Test",
      "fields": [
        {"name": "stringField", "type": "string"},
        {"name": "longField", "type": "long"}
      ]
    }"#;
    let schema = datapeek_avro::parse_schema(schema_text).unwrap();
    let mut rng = StdRng::seed_from_u64(1);
    let dataset = build_dataset(&mut rng, &schema, 100).unwrap();

    let dir = tempdir().unwrap();
    let path = dir.path().join("two_fields.avro");
    datapeek_avro::write(&path, &schema, &dataset, "deflate", &BTreeMap::new()).unwrap();

    let meta = datapeek_avro::read_metadata(&path).unwrap();
    assert_eq!(meta.codec, "deflate");

    let mut count = 0;
    for record in datapeek_avro::iter_records(&path).unwrap() {
        let record = record.unwrap();
        let fields = record.as_record().unwrap();
        assert!(matches!(fields[0], (ref n, Value::String(_)) if n == "stringField"));
        assert!(matches!(fields[1], (ref n, Value::Long(_)) if n == "longField"));
        count += 1;
    }
    assert_eq!(count, 100);
}

#[test]
fn null_codec_is_the_default_in_metadata() {
    let schema = datapeek_avro::parse_schema(USER_SCHEMA).unwrap();
    let mut rng = StdRng::seed_from_u64(3);
    let dataset = build_dataset(&mut rng, &schema, 5).unwrap();

    let dir = tempdir().unwrap();
    let path = dir.path().join("plain.avro");
    datapeek_avro::write(&path, &schema, &dataset, "null", &BTreeMap::new()).unwrap();

    let meta = datapeek_avro::read_metadata(&path).unwrap();
    assert_eq!(meta.codec, "null");
    assert!(meta.metadata.is_empty());
}

#[test]
fn reader_schema_matches_writer_schema() {
    let schema = datapeek_avro::parse_schema(USER_SCHEMA).unwrap();
    let mut rng = StdRng::seed_from_u64(5);
    let dataset = build_dataset(&mut rng, &schema, 3).unwrap();

    let dir = tempdir().unwrap();
    let path = dir.path().join("schema.avro");
    datapeek_avro::write(&path, &schema, &dataset, "null", &BTreeMap::new()).unwrap();

    let read_back = datapeek_avro::read_schema(&path).unwrap();
    let SchemaNode::Record { name, fields } = &read_back else {
        panic!("expected record schema");
    };
    assert_eq!(name, "Test");
    let kinds: Vec<&str> = fields.iter().map(|f| f.schema.kind()).collect();
    assert_eq!(
        kinds,
        ["int", "string", "double", "boolean", "fixed", "enum", "array"]
    );
}

#[test]
fn map_entries_survive_as_a_subset_of_generated_keys() {
    let schema_text = r#"
    {
      "type": "record",
      "name": "WithMap",
      "fields": [
        {"name": "attrs", "type": {"type": "map", "values": "long"}}
      ]
    }"#;
    let schema = datapeek_avro::parse_schema(schema_text).unwrap();
    let mut rng = StdRng::seed_from_u64(21);
    let dataset = build_dataset(&mut rng, &schema, 20).unwrap();

    let dir = tempdir().unwrap();
    let path = dir.path().join("maps.avro");
    datapeek_avro::write(&path, &schema, &dataset, "snappy", &BTreeMap::new()).unwrap();

    let read: Vec<Value> = datapeek_avro::iter_records(&path)
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(read.len(), dataset.len());
    for (written, generated) in read.iter().zip(&dataset) {
        let Value::Record(read_fields) = written else {
            panic!("expected record");
        };
        let Value::Record(gen_fields) = generated else {
            panic!("expected record");
        };
        let Value::Map(read_map) = &read_fields[0].1 else {
            panic!("expected map");
        };
        let Value::Map(gen_map) = &gen_fields[0].1 else {
            panic!("expected map");
        };
        assert!(read_map.len() <= gen_map.len());
        for (key, value) in read_map {
            assert!(gen_map.iter().any(|(k, v)| k == key && v == value));
        }
    }
}

#[test]
fn iteration_is_restartable() {
    let schema = datapeek_avro::parse_schema(USER_SCHEMA).unwrap();
    let mut rng = StdRng::seed_from_u64(9);
    let dataset = build_dataset(&mut rng, &schema, 12).unwrap();

    let dir = tempdir().unwrap();
    let path = dir.path().join("restart.avro");
    datapeek_avro::write(&path, &schema, &dataset, "null", &BTreeMap::new()).unwrap();

    let first = datapeek_avro::iter_records(&path).unwrap().count();
    let second = datapeek_avro::iter_records(&path).unwrap().count();
    assert_eq!(first, 12);
    assert_eq!(second, 12);
}

#[test]
fn missing_file_maps_to_file_not_found() {
    let err = datapeek_avro::read_metadata(std::path::Path::new("/nonexistent/file.avro"))
        .unwrap_err();
    assert!(matches!(
        err,
        datapeek_avro::AvroFormatError::FileNotFound { .. }
    ));
}

#[test]
fn truncated_file_is_reported_as_corrupt() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("broken.avro");
    std::fs::write(&path, b"not an avro file").unwrap();

    let err = datapeek_avro::read_metadata(&path).unwrap_err();
    assert!(matches!(
        err,
        datapeek_avro::AvroFormatError::Corrupt { .. }
    ));
}

#[test]
fn unknown_codec_is_rejected() {
    let err = datapeek_avro::parse_codec("brotli").unwrap_err();
    assert!(matches!(
        err,
        datapeek_avro::AvroFormatError::UnsupportedCodec { .. }
    ));
}
