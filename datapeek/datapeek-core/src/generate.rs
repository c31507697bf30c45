//! Schema-driven random value generation.
//!
//! Which rule applies is determined solely by the schema kind; randomness is
//! confined to value sampling. Passing a seeded rng therefore reproduces an
//! identical dataset structure and content.

use rand::Rng;
use rand::distr::Alphanumeric;

use crate::error::GenerateError;
use crate::schema::SchemaNode;
use crate::value::Value;

/// Default length of generated strings and map keys.
pub const DEFAULT_STRING_LEN: usize = 10;
/// Default length of generated byte sequences.
pub const DEFAULT_BYTES_LEN: usize = 10;

/// Generated arrays and maps have between 1 and 5 entries.
const MIN_ENTRIES: usize = 1;
const MAX_ENTRIES: usize = 5;

/// Generate one random value conforming to `schema`.
///
/// Recursion is bounded only by the depth of the input schema. Failures
/// (e.g. an enum with no symbols) propagate immediately; no partial value is
/// returned.
pub fn generate_value<R: Rng + ?Sized>(
    rng: &mut R,
    schema: &SchemaNode,
) -> Result<Value, GenerateError> {
    Ok(match schema {
        SchemaNode::Null => Value::Null,
        SchemaNode::Boolean => Value::Boolean(rng.random()),
        SchemaNode::Int => Value::Int(rng.random()),
        SchemaNode::Long => Value::Long(rng.random()),
        // Sampled at half width and doubled: the width of the full
        // [-3.4e38, 3.4e38] / [-1.7e308, 1.7e308] range is not representable
        // in the float type itself, which the uniform sampler rejects.
        SchemaNode::Float => Value::Float(rng.random_range(-1.7e38f32..=1.7e38f32) * 2.0),
        SchemaNode::Double => Value::Double(rng.random_range(-8.5e307f64..=8.5e307f64) * 2.0),
        SchemaNode::String => Value::String(random_string(rng, DEFAULT_STRING_LEN)),
        SchemaNode::Bytes => Value::Bytes(random_bytes(rng, DEFAULT_BYTES_LEN)),
        SchemaNode::Fixed { size, .. } => Value::Fixed(random_bytes(rng, *size)),
        SchemaNode::Enum { name, symbols } => {
            if symbols.is_empty() {
                return Err(GenerateError::EmptySymbols { name: name.clone() });
            }
            let index = rng.random_range(0..symbols.len());
            Value::Enum(index as u32, symbols[index].clone())
        }
        SchemaNode::Array(item) => {
            let len = rng.random_range(MIN_ENTRIES..=MAX_ENTRIES);
            let mut items = Vec::with_capacity(len);
            for _ in 0..len {
                items.push(generate_value(rng, item)?);
            }
            Value::Array(items)
        }
        SchemaNode::Map(value_schema) => {
            let len = rng.random_range(MIN_ENTRIES..=MAX_ENTRIES);
            let mut entries = Vec::with_capacity(len);
            for _ in 0..len {
                let key = random_string(rng, DEFAULT_STRING_LEN);
                entries.push((key, generate_value(rng, value_schema)?));
            }
            Value::Map(entries)
        }
        SchemaNode::Record { fields, .. } => {
            let mut entries = Vec::with_capacity(fields.len());
            for field in fields {
                entries.push((field.name.clone(), generate_value(rng, &field.schema)?));
            }
            Value::Record(entries)
        }
    })
}

/// Random string over A-Z, a-z, 0-9.
pub fn random_string<R: Rng + ?Sized>(rng: &mut R, len: usize) -> String {
    (0..len)
        .map(|_| char::from(rng.sample(Alphanumeric)))
        .collect()
}

fn random_bytes<R: Rng + ?Sized>(rng: &mut R, len: usize) -> Vec<u8> {
    (0..len).map(|_| rng.random()).collect()
}
