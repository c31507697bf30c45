//! Convert Arrow record batches back into record-shaped values.
//!
//! Used on the read path: Parquet batches, and SQL result batches, are turned
//! into [`Value::Record`] rows for printing and statistics. The accepted type
//! set is wider than what `datapeek` itself writes so that query results
//! (aggregates, casts, view types) still print.

use arrow::array::{Array, AsArray};
use arrow::datatypes::{
    DataType, Float32Type, Float64Type, Int8Type, Int16Type, Int32Type, Int64Type, UInt8Type,
    UInt16Type, UInt32Type, UInt64Type,
};
use arrow::record_batch::RecordBatch;
use datapeek_core::Value;

use crate::error::TableError;

/// Convert every row of `batch` into a `Value::Record`.
pub fn batch_to_records(batch: &RecordBatch) -> Result<Vec<Value>, TableError> {
    let schema = batch.schema();
    let mut records = Vec::with_capacity(batch.num_rows());
    for row in 0..batch.num_rows() {
        let mut fields = Vec::with_capacity(batch.num_columns());
        for (col, field) in schema.fields().iter().enumerate() {
            fields.push((field.name().clone(), value_at(batch.column(col), row)?));
        }
        records.push(Value::Record(fields));
    }
    Ok(records)
}

fn value_at(array: &dyn Array, row: usize) -> Result<Value, TableError> {
    if array.is_null(row) {
        return Ok(Value::Null);
    }
    Ok(match array.data_type() {
        DataType::Null => Value::Null,
        DataType::Boolean => Value::Boolean(array.as_boolean().value(row)),
        DataType::Int8 => Value::Int(array.as_primitive::<Int8Type>().value(row) as i32),
        DataType::Int16 => Value::Int(array.as_primitive::<Int16Type>().value(row) as i32),
        DataType::Int32 => Value::Int(array.as_primitive::<Int32Type>().value(row)),
        DataType::Int64 => Value::Long(array.as_primitive::<Int64Type>().value(row)),
        DataType::UInt8 => Value::Int(array.as_primitive::<UInt8Type>().value(row) as i32),
        DataType::UInt16 => Value::Int(array.as_primitive::<UInt16Type>().value(row) as i32),
        DataType::UInt32 => Value::Long(array.as_primitive::<UInt32Type>().value(row) as i64),
        DataType::UInt64 => Value::Long(array.as_primitive::<UInt64Type>().value(row) as i64),
        DataType::Float32 => Value::Float(array.as_primitive::<Float32Type>().value(row)),
        DataType::Float64 => Value::Double(array.as_primitive::<Float64Type>().value(row)),
        DataType::Utf8 => Value::String(array.as_string::<i32>().value(row).to_string()),
        DataType::LargeUtf8 => Value::String(array.as_string::<i64>().value(row).to_string()),
        DataType::Utf8View => Value::String(array.as_string_view().value(row).to_string()),
        DataType::Binary => Value::Bytes(array.as_binary::<i32>().value(row).to_vec()),
        DataType::LargeBinary => Value::Bytes(array.as_binary::<i64>().value(row).to_vec()),
        DataType::BinaryView => Value::Bytes(array.as_binary_view().value(row).to_vec()),
        DataType::FixedSizeBinary(_) => {
            Value::Fixed(array.as_fixed_size_binary().value(row).to_vec())
        }
        DataType::List(_) => {
            let values = array.as_list::<i32>().value(row);
            collect_array(values.as_ref())?
        }
        DataType::LargeList(_) => {
            let values = array.as_list::<i64>().value(row);
            collect_array(values.as_ref())?
        }
        DataType::FixedSizeList(_, _) => {
            let values = array.as_fixed_size_list().value(row);
            collect_array(values.as_ref())?
        }
        DataType::Struct(fields) => {
            let struct_array = array.as_struct();
            let mut children = Vec::with_capacity(fields.len());
            for (i, field) in fields.iter().enumerate() {
                children.push((
                    field.name().clone(),
                    value_at(struct_array.column(i).as_ref(), row)?,
                ));
            }
            Value::Record(children)
        }
        DataType::Map(_, _) => {
            let entries = array.as_map().value(row);
            let keys = entries.column(0);
            let values = entries.column(1);
            let mut pairs = Vec::with_capacity(entries.len());
            for i in 0..entries.len() {
                let key = match value_at(keys.as_ref(), i)? {
                    Value::String(s) => s,
                    other => other.to_string(),
                };
                pairs.push((key, value_at(values.as_ref(), i)?));
            }
            Value::Map(pairs)
        }
        other => return Err(TableError::UnsupportedType(other.to_string())),
    })
}

fn collect_array(values: &dyn Array) -> Result<Value, TableError> {
    let mut items = Vec::with_capacity(values.len());
    for i in 0..values.len() {
        items.push(value_at(values, i)?);
    }
    Ok(Value::Array(items))
}
