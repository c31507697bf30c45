//! Convert record-shaped values to an Arrow `RecordBatch`.
//!
//! Arrays are built column-wise with dynamically-typed builders so that
//! arbitrarily nested list/map/struct columns work without code per shape.

use arrow::array::{
    ArrayBuilder, ArrayRef, BinaryBuilder, BooleanBuilder, FixedSizeBinaryBuilder, Float32Builder,
    Float64Builder, Int32Builder, Int64Builder, ListBuilder, MapBuilder, MapFieldNames,
    NullBuilder, StringBuilder, StructBuilder,
};
use arrow::datatypes::{DataType, Field, SchemaRef};
use arrow::record_batch::RecordBatch;
use datapeek_core::Value;

use crate::error::TableError;

macro_rules! cast_builder {
    ($b:expr, $T:ty) => {
        $b.as_any_mut()
            .downcast_mut::<$T>()
            .expect(concat!("expected builder type: ", stringify!($T)))
    };
}

/// Build one `RecordBatch` holding every record in `records`.
///
/// Each record must be a `Value::Record` whose fields cover the schema's
/// columns; lookup is by declared position first, falling back to name.
/// An empty slice produces a valid zero-row batch.
pub fn records_to_batch(schema: SchemaRef, records: &[Value]) -> Result<RecordBatch, TableError> {
    let mut arrays: Vec<ArrayRef> = Vec::with_capacity(schema.fields().len());
    for (index, field) in schema.fields().iter().enumerate() {
        let mut builder = make_builder(field.data_type(), records.len())?;
        for record in records {
            let value = field_value(record, index, field.name())?;
            append_value(&mut builder, field.data_type(), value)?;
        }
        arrays.push(builder.finish());
    }
    RecordBatch::try_new(schema, arrays).map_err(Into::into)
}

fn field_value<'a>(record: &'a Value, index: usize, name: &str) -> Result<&'a Value, TableError> {
    let Value::Record(fields) = record else {
        return Err(TableError::value_type("Record", record.variant_name()));
    };
    if let Some((field_name, value)) = fields.get(index)
        && field_name == name
    {
        return Ok(value);
    }
    fields
        .iter()
        .find(|(field_name, _)| field_name == name)
        .map(|(_, value)| value)
        .ok_or_else(|| TableError::MissingField {
            name: name.to_string(),
        })
}

fn make_builder(dt: &DataType, capacity: usize) -> Result<Box<dyn ArrayBuilder>, TableError> {
    Ok(match dt {
        DataType::Null => Box::new(NullBuilder::new()),
        DataType::Boolean => Box::new(BooleanBuilder::with_capacity(capacity)),
        DataType::Int32 => Box::new(Int32Builder::with_capacity(capacity)),
        DataType::Int64 => Box::new(Int64Builder::with_capacity(capacity)),
        DataType::Float32 => Box::new(Float32Builder::with_capacity(capacity)),
        DataType::Float64 => Box::new(Float64Builder::with_capacity(capacity)),
        DataType::Utf8 => Box::new(StringBuilder::with_capacity(capacity, 64)),
        DataType::Binary => Box::new(BinaryBuilder::with_capacity(capacity, 64)),
        DataType::FixedSizeBinary(size) => {
            Box::new(FixedSizeBinaryBuilder::with_capacity(capacity, *size))
        }
        DataType::List(field) => {
            let child = make_builder(field.data_type(), capacity)?;
            Box::new(ListBuilder::new(child).with_field(field.clone()))
        }
        DataType::Struct(fields) => {
            let child_builders: Vec<Box<dyn ArrayBuilder>> = fields
                .iter()
                .map(|f| make_builder(f.data_type(), capacity))
                .collect::<Result<_, _>>()?;
            let fields_vec: Vec<Field> = fields.iter().map(|f| f.as_ref().clone()).collect();
            Box::new(StructBuilder::new(fields_vec, child_builders))
        }
        DataType::Map(entry_field, _) => {
            let (key_field, value_field) = match entry_field.data_type() {
                DataType::Struct(fields) if fields.len() == 2 => {
                    (fields[0].clone(), fields[1].clone())
                }
                other => {
                    return Err(TableError::UnsupportedType(format!(
                        "map entry field must be a two-field struct, got {other}"
                    )));
                }
            };
            let key_builder = make_builder(key_field.data_type(), capacity)?;
            let value_builder = make_builder(value_field.data_type(), capacity)?;
            Box::new(
                MapBuilder::new(
                    Some(MapFieldNames {
                        entry: entry_field.name().to_string(),
                        key: key_field.name().to_string(),
                        value: value_field.name().to_string(),
                    }),
                    key_builder,
                    value_builder,
                )
                .with_keys_field(key_field)
                .with_values_field(value_field),
            )
        }
        other => return Err(TableError::UnsupportedType(other.to_string())),
    })
}

fn append_value(
    builder: &mut Box<dyn ArrayBuilder>,
    dt: &DataType,
    value: &Value,
) -> Result<(), TableError> {
    match dt {
        DataType::Null => match value {
            Value::Null => cast_builder!(builder, NullBuilder).append_null(),
            other => return Err(TableError::value_type("Null", other.variant_name())),
        },
        DataType::Boolean => {
            let b = cast_builder!(builder, BooleanBuilder);
            match value {
                Value::Boolean(v) => b.append_value(*v),
                Value::Null => b.append_null(),
                other => return Err(TableError::value_type("Boolean", other.variant_name())),
            }
        }
        DataType::Int32 => {
            let b = cast_builder!(builder, Int32Builder);
            match value {
                Value::Int(v) => b.append_value(*v),
                Value::Null => b.append_null(),
                other => return Err(TableError::value_type("Int", other.variant_name())),
            }
        }
        DataType::Int64 => {
            let b = cast_builder!(builder, Int64Builder);
            match value {
                Value::Long(v) => b.append_value(*v),
                Value::Null => b.append_null(),
                other => return Err(TableError::value_type("Long", other.variant_name())),
            }
        }
        DataType::Float32 => {
            let b = cast_builder!(builder, Float32Builder);
            match value {
                Value::Float(v) => b.append_value(*v),
                Value::Null => b.append_null(),
                other => return Err(TableError::value_type("Float", other.variant_name())),
            }
        }
        DataType::Float64 => {
            let b = cast_builder!(builder, Float64Builder);
            match value {
                Value::Double(v) => b.append_value(*v),
                Value::Null => b.append_null(),
                other => return Err(TableError::value_type("Double", other.variant_name())),
            }
        }
        DataType::Utf8 => {
            let b = cast_builder!(builder, StringBuilder);
            match value {
                Value::String(v) => b.append_value(v),
                Value::Enum(_, symbol) => b.append_value(symbol),
                Value::Null => b.append_null(),
                other => return Err(TableError::value_type("String", other.variant_name())),
            }
        }
        DataType::Binary => {
            let b = cast_builder!(builder, BinaryBuilder);
            match value {
                Value::Bytes(v) | Value::Fixed(v) => b.append_value(v),
                Value::Null => b.append_null(),
                other => return Err(TableError::value_type("Bytes", other.variant_name())),
            }
        }
        DataType::FixedSizeBinary(size) => {
            let b = cast_builder!(builder, FixedSizeBinaryBuilder);
            match value {
                Value::Fixed(v) | Value::Bytes(v) => {
                    if v.len() != *size as usize {
                        return Err(TableError::value_type(
                            format!("Fixed(size={size})"),
                            "Fixed",
                        ));
                    }
                    b.append_value(v)?;
                }
                Value::Null => b.append_null(),
                other => return Err(TableError::value_type("Fixed", other.variant_name())),
            }
        }
        DataType::List(field) => {
            let b = cast_builder!(builder, ListBuilder<Box<dyn ArrayBuilder>>);
            match value {
                Value::Array(items) => {
                    for item in items {
                        append_value(b.values(), field.data_type(), item)?;
                    }
                    b.append(true);
                }
                Value::Null => b.append(false),
                other => return Err(TableError::value_type("Array", other.variant_name())),
            }
        }
        DataType::Struct(fields) => {
            let b = cast_builder!(builder, StructBuilder);
            match value {
                Value::Record(_) => {
                    for (i, field) in fields.iter().enumerate() {
                        let child = field_value(value, i, field.name())?;
                        append_value(&mut b.field_builders_mut()[i], field.data_type(), child)?;
                    }
                    b.append(true);
                }
                Value::Null => {
                    for (i, field) in fields.iter().enumerate() {
                        append_value(&mut b.field_builders_mut()[i], field.data_type(), &Value::Null)?;
                    }
                    b.append(false);
                }
                other => return Err(TableError::value_type("Record", other.variant_name())),
            }
        }
        DataType::Map(entry_field, _) => {
            let b = cast_builder!(
                builder,
                MapBuilder<Box<dyn ArrayBuilder>, Box<dyn ArrayBuilder>>
            );
            let value_dt = match entry_field.data_type() {
                DataType::Struct(fields) if fields.len() == 2 => fields[1].data_type(),
                other => {
                    return Err(TableError::UnsupportedType(format!(
                        "map entry field must be a two-field struct, got {other}"
                    )));
                }
            };
            match value {
                Value::Map(entries) => {
                    for (key, entry_value) in entries {
                        cast_builder!(b.keys(), StringBuilder).append_value(key);
                        append_value(b.values(), value_dt, entry_value)?;
                    }
                    b.append(true)?;
                }
                Value::Null => b.append(false)?,
                other => return Err(TableError::value_type("Map", other.variant_name())),
            }
        }
        other => return Err(TableError::UnsupportedType(other.to_string())),
    }
    Ok(())
}
