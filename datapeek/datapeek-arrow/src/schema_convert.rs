//! Convert the canonical schema model into an Arrow schema.

use std::sync::Arc;

use arrow::datatypes::{DataType, Field, Schema};
use datapeek_core::{FieldSchema, SchemaNode};

use crate::error::TableError;

/// Convert a record-typed schema root into an Arrow `Schema`.
pub fn record_schema_to_arrow(schema: &SchemaNode) -> Result<Schema, TableError> {
    let SchemaNode::Record { fields, .. } = schema else {
        return Err(TableError::NonRecordSchema(schema.kind()));
    };
    Ok(Schema::new(
        fields.iter().map(field_to_arrow).collect::<Vec<_>>(),
    ))
}

fn field_to_arrow(field: &FieldSchema) -> Field {
    Field::new(&field.name, node_to_datatype(&field.schema), true)
}

/// Map one schema node to its Arrow data type.
///
/// Enums are stored as plain strings; fixed becomes `FixedSizeBinary`; maps
/// use the conventional `entries`/`key`/`value` child field names.
pub fn node_to_datatype(node: &SchemaNode) -> DataType {
    match node {
        SchemaNode::Null => DataType::Null,
        SchemaNode::Boolean => DataType::Boolean,
        SchemaNode::Int => DataType::Int32,
        SchemaNode::Long => DataType::Int64,
        SchemaNode::Float => DataType::Float32,
        SchemaNode::Double => DataType::Float64,
        SchemaNode::String | SchemaNode::Enum { .. } => DataType::Utf8,
        SchemaNode::Bytes => DataType::Binary,
        SchemaNode::Fixed { size, .. } => DataType::FixedSizeBinary(*size as i32),
        SchemaNode::Array(item) => {
            DataType::List(Arc::new(Field::new("item", node_to_datatype(item), true)))
        }
        SchemaNode::Map(value) => {
            let key_field = Field::new("key", DataType::Utf8, false);
            let value_field = Field::new("value", node_to_datatype(value), true);
            let entry_struct = DataType::Struct(vec![key_field, value_field].into());
            DataType::Map(Arc::new(Field::new("entries", entry_struct, false)), false)
        }
        SchemaNode::Record { fields, .. } => {
            let arrow_fields: Vec<Field> = fields.iter().map(field_to_arrow).collect();
            DataType::Struct(arrow_fields.into())
        }
    }
}
