//! Conversion between `datapeek-core` values and `apache-avro` values.

use std::collections::HashMap;

use apache_avro::types::Value as AvroValue;
use datapeek_core::Value;

use crate::error::AvroFormatError;

/// Convert a core value into an `apache-avro` value for serialization.
///
/// Maps move into a `HashMap` here, which is where duplicate generated keys
/// collapse: the persisted map may hold fewer entries than were generated.
pub fn to_avro(value: &Value) -> AvroValue {
    match value {
        Value::Null => AvroValue::Null,
        Value::Boolean(v) => AvroValue::Boolean(*v),
        Value::Int(v) => AvroValue::Int(*v),
        Value::Long(v) => AvroValue::Long(*v),
        Value::Float(v) => AvroValue::Float(*v),
        Value::Double(v) => AvroValue::Double(*v),
        Value::String(v) => AvroValue::String(v.clone()),
        Value::Bytes(v) => AvroValue::Bytes(v.clone()),
        Value::Fixed(v) => AvroValue::Fixed(v.len(), v.clone()),
        Value::Enum(index, symbol) => AvroValue::Enum(*index, symbol.clone()),
        Value::Array(items) => AvroValue::Array(items.iter().map(to_avro).collect()),
        Value::Map(entries) => AvroValue::Map(
            entries
                .iter()
                .map(|(k, v)| (k.clone(), to_avro(v)))
                .collect::<HashMap<_, _>>(),
        ),
        Value::Record(fields) => AvroValue::Record(
            fields
                .iter()
                .map(|(name, v)| (name.clone(), to_avro(v)))
                .collect(),
        ),
    }
}

/// Convert a decoded `apache-avro` value into a core value.
///
/// Union wrappers are unwrapped to their inner value; logical and duration
/// types are outside the supported subset.
pub fn from_avro(value: AvroValue) -> Result<Value, AvroFormatError> {
    Ok(match value {
        AvroValue::Null => Value::Null,
        AvroValue::Boolean(v) => Value::Boolean(v),
        AvroValue::Int(v) => Value::Int(v),
        AvroValue::Long(v) => Value::Long(v),
        AvroValue::Float(v) => Value::Float(v),
        AvroValue::Double(v) => Value::Double(v),
        AvroValue::String(v) => Value::String(v),
        AvroValue::Bytes(v) => Value::Bytes(v),
        AvroValue::Fixed(_, v) => Value::Fixed(v),
        AvroValue::Enum(index, symbol) => Value::Enum(index, symbol),
        AvroValue::Union(_, inner) => from_avro(*inner)?,
        AvroValue::Array(items) => Value::Array(
            items
                .into_iter()
                .map(from_avro)
                .collect::<Result<_, _>>()?,
        ),
        AvroValue::Map(entries) => Value::Map(
            entries
                .into_iter()
                .map(|(k, v)| Ok((k, from_avro(v)?)))
                .collect::<Result<_, AvroFormatError>>()?,
        ),
        AvroValue::Record(fields) => Value::Record(
            fields
                .into_iter()
                .map(|(name, v)| Ok((name, from_avro(v)?)))
                .collect::<Result<_, AvroFormatError>>()?,
        ),
        other => {
            return Err(AvroFormatError::UnsupportedValue {
                kind: format!("{other:?}"),
            });
        }
    })
}
