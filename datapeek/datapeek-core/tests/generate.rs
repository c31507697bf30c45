use datapeek_core::{
    DEFAULT_STRING_LEN, GenerateError, SchemaNode, Value, generate_value, parse_schema,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

#[test]
fn primitive_shapes_match_their_kind() {
    let mut rng = rng();
    assert_eq!(generate_value(&mut rng, &SchemaNode::Null).unwrap(), Value::Null);
    assert!(matches!(
        generate_value(&mut rng, &SchemaNode::Boolean).unwrap(),
        Value::Boolean(_)
    ));
    assert!(matches!(
        generate_value(&mut rng, &SchemaNode::Int).unwrap(),
        Value::Int(_)
    ));
    assert!(matches!(
        generate_value(&mut rng, &SchemaNode::Long).unwrap(),
        Value::Long(_)
    ));
}

#[test]
fn floats_stay_within_documented_ranges() {
    // Also guards against the sampler rejecting the range outright: a range
    // whose width overflows the float type makes every draw panic.
    let mut rng = rng();
    let mut outer_float = false;
    let mut outer_double = false;
    for _ in 0..1000 {
        let Value::Float(v) = generate_value(&mut rng, &SchemaNode::Float).unwrap() else {
            panic!("expected Float");
        };
        assert!(v.is_finite());
        assert!((-3.4e38..=3.4e38).contains(&v));
        outer_float |= v.abs() > 1.7e38;

        let Value::Double(v) = generate_value(&mut rng, &SchemaNode::Double).unwrap() else {
            panic!("expected Double");
        };
        assert!(v.is_finite());
        assert!((-1.7e308..=1.7e308).contains(&v));
        outer_double |= v.abs() > 8.5e307;
    }
    // The outer half of each range must stay reachable.
    assert!(outer_float && outer_double);
}

#[test]
fn int_extremes_are_reachable() {
    // Uniform over the full i32 range: over many draws both halves must
    // appear, and values near the bounds are not clamped away.
    let mut rng = rng();
    let mut saw_negative = false;
    let mut saw_positive = false;
    for _ in 0..10_000 {
        let Value::Int(v) = generate_value(&mut rng, &SchemaNode::Int).unwrap() else {
            panic!("expected Int");
        };
        saw_negative |= v < i32::MIN / 2;
        saw_positive |= v > i32::MAX / 2;
    }
    assert!(saw_negative && saw_positive);
}

#[test]
fn strings_are_ten_alphanumeric_chars() {
    let mut rng = rng();
    for _ in 0..100 {
        let Value::String(s) = generate_value(&mut rng, &SchemaNode::String).unwrap() else {
            panic!("expected String");
        };
        assert_eq!(s.len(), DEFAULT_STRING_LEN);
        assert!(s.chars().all(|c| c.is_ascii_alphanumeric()));
    }
}

#[test]
fn bytes_and_fixed_have_exact_lengths() {
    let mut rng = rng();
    let Value::Bytes(b) = generate_value(&mut rng, &SchemaNode::Bytes).unwrap() else {
        panic!("expected Bytes");
    };
    assert_eq!(b.len(), 10);

    let fixed = SchemaNode::Fixed {
        name: "F".to_string(),
        size: 16,
    };
    let Value::Fixed(b) = generate_value(&mut rng, &fixed).unwrap() else {
        panic!("expected Fixed");
    };
    assert_eq!(b.len(), 16);
}

#[test]
fn enum_draws_a_declared_symbol() {
    let mut rng = rng();
    let schema = SchemaNode::Enum {
        name: "Color".to_string(),
        symbols: vec!["RED".to_string(), "GREEN".to_string(), "BLUE".to_string()],
    };
    for _ in 0..100 {
        let Value::Enum(index, symbol) = generate_value(&mut rng, &schema).unwrap() else {
            panic!("expected Enum");
        };
        assert!(index < 3);
        assert!(["RED", "GREEN", "BLUE"].contains(&symbol.as_str()));
    }
}

#[test]
fn empty_enum_fails() {
    let mut rng = rng();
    let schema = SchemaNode::Enum {
        name: "Empty".to_string(),
        symbols: vec![],
    };
    assert!(matches!(
        generate_value(&mut rng, &schema),
        Err(GenerateError::EmptySymbols { .. })
    ));
}

#[test]
fn array_of_strings_has_one_to_five_valid_elements() {
    let mut rng = rng();
    let schema = SchemaNode::Array(Box::new(SchemaNode::String));
    for _ in 0..200 {
        let Value::Array(items) = generate_value(&mut rng, &schema).unwrap() else {
            panic!("expected Array");
        };
        assert!((1..=5).contains(&items.len()));
        for item in items {
            let Value::String(s) = item else {
                panic!("expected String element");
            };
            assert_eq!(s.len(), DEFAULT_STRING_LEN);
        }
    }
}

#[test]
fn array_of_ints_generates_ints() {
    // Compact item schemas resolve through normalization, so array("int")
    // yields ints rather than falling back to strings.
    let schema = parse_schema(r#"{"type": "array", "items": "int"}"#).unwrap();
    let mut rng = rng();
    let Value::Array(items) = generate_value(&mut rng, &schema).unwrap() else {
        panic!("expected Array");
    };
    assert!(items.iter().all(|v| matches!(v, Value::Int(_))));
}

#[test]
fn map_keys_are_random_ten_char_strings() {
    let mut rng = rng();
    let schema = SchemaNode::Map(Box::new(SchemaNode::Long));
    for _ in 0..100 {
        let Value::Map(entries) = generate_value(&mut rng, &schema).unwrap() else {
            panic!("expected Map");
        };
        assert!((1..=5).contains(&entries.len()));
        for (key, value) in entries {
            assert_eq!(key.len(), DEFAULT_STRING_LEN);
            assert!(matches!(value, Value::Long(_)));
        }
    }
}

#[test]
fn deeply_nested_schema_generates_matching_shape() {
    // record -> array -> record -> map -> array -> double
    let schema = parse_schema(
        r#"{"type": "record", "name": "Outer", "fields": [
            {"name": "rows", "type": {"type": "array", "items":
                {"type": "record", "name": "Inner", "fields": [
                    {"name": "series", "type": {"type": "map", "values":
                        {"type": "array", "items": "double"}}}
                ]}
            }}
        ]}"#,
    )
    .unwrap();

    let mut rng = rng();
    let Value::Record(fields) = generate_value(&mut rng, &schema).unwrap() else {
        panic!("expected Record");
    };
    assert_eq!(fields[0].0, "rows");
    let Value::Array(rows) = &fields[0].1 else {
        panic!("expected Array");
    };
    for row in rows {
        let Value::Record(inner) = row else {
            panic!("expected Record element");
        };
        let Value::Map(series) = &inner[0].1 else {
            panic!("expected Map field");
        };
        for (_, value) in series {
            let Value::Array(points) = value else {
                panic!("expected Array value");
            };
            assert!(points.iter().all(|p| matches!(p, Value::Double(_))));
        }
    }
}

#[test]
fn record_fields_come_back_in_declared_order() {
    let schema = parse_schema(
        r#"{"type": "record", "name": "Ordered", "fields": [
            {"name": "z", "type": "int"},
            {"name": "a", "type": "string"},
            {"name": "m", "type": "boolean"}
        ]}"#,
    )
    .unwrap();
    let mut rng = rng();
    let Value::Record(fields) = generate_value(&mut rng, &schema).unwrap() else {
        panic!("expected Record");
    };
    let names: Vec<&str> = fields.iter().map(|(n, _)| n.as_str()).collect();
    assert_eq!(names, ["z", "a", "m"]);
}

#[test]
fn seeded_rng_reproduces_the_same_value() {
    let schema = parse_schema(
        r#"{"type": "record", "name": "R", "fields": [
            {"name": "s", "type": "string"},
            {"name": "n", "type": "long"}
        ]}"#,
    )
    .unwrap();
    let a = generate_value(&mut StdRng::seed_from_u64(7), &schema).unwrap();
    let b = generate_value(&mut StdRng::seed_from_u64(7), &schema).unwrap();
    assert_eq!(a, b);
}
