//! Canonical in-memory schema model, parsed from Avro JSON schema syntax.
//!
//! Avro's JSON syntax spells the same type two ways: a compact primitive-name
//! string (`"int"`) or an expanded descriptor object
//! (`{"type": "array", "items": "int"}`). Both forms are normalized here, at
//! parse time, into a single [`SchemaNode`] tree so that downstream consumers
//! (the generator, the Arrow bridge) never re-derive which form they were
//! given.

use serde_json::{Map, Value as Json, json};

use crate::error::SchemaError;

/// One position in a schema tree.
///
/// The tree is acyclic and finite: named-type references (which would allow
/// recursion) are not part of the supported subset.
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaNode {
    Null,
    Boolean,
    Int,
    Long,
    Float,
    Double,
    String,
    Bytes,
    Fixed { name: String, size: usize },
    Enum { name: String, symbols: Vec<String> },
    Array(Box<SchemaNode>),
    Map(Box<SchemaNode>),
    Record { name: String, fields: Vec<FieldSchema> },
}

/// A named field within a record schema.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSchema {
    pub name: String,
    pub schema: SchemaNode,
}

impl SchemaNode {
    pub fn kind(&self) -> &'static str {
        match self {
            SchemaNode::Null => "null",
            SchemaNode::Boolean => "boolean",
            SchemaNode::Int => "int",
            SchemaNode::Long => "long",
            SchemaNode::Float => "float",
            SchemaNode::Double => "double",
            SchemaNode::String => "string",
            SchemaNode::Bytes => "bytes",
            SchemaNode::Fixed { .. } => "fixed",
            SchemaNode::Enum { .. } => "enum",
            SchemaNode::Array(_) => "array",
            SchemaNode::Map(_) => "map",
            SchemaNode::Record { .. } => "record",
        }
    }

    pub fn is_record(&self) -> bool {
        matches!(self, SchemaNode::Record { .. })
    }

    /// Render the node back into Avro JSON schema syntax.
    ///
    /// Adapters that need a format-library schema object (e.g.
    /// `apache_avro::Schema`) re-parse this rendering.
    pub fn to_json(&self) -> Json {
        match self {
            SchemaNode::Fixed { name, size } => {
                json!({"type": "fixed", "name": name, "size": size})
            }
            SchemaNode::Enum { name, symbols } => {
                json!({"type": "enum", "name": name, "symbols": symbols})
            }
            SchemaNode::Array(item) => json!({"type": "array", "items": item.to_json()}),
            SchemaNode::Map(value) => json!({"type": "map", "values": value.to_json()}),
            SchemaNode::Record { name, fields } => {
                let fields: Vec<Json> = fields
                    .iter()
                    .map(|f| json!({"name": f.name, "type": f.schema.to_json()}))
                    .collect();
                json!({"type": "record", "name": name, "fields": fields})
            }
            primitive => Json::String(primitive.kind().to_string()),
        }
    }
}

/// Parse a JSON-encoded Avro schema description into a canonical node tree.
pub fn parse_schema(text: &str) -> Result<SchemaNode, SchemaError> {
    let json: Json =
        serde_json::from_str(text).map_err(|e| SchemaError::parse(e.to_string()))?;
    from_json(&json)
}

fn from_json(json: &Json) -> Result<SchemaNode, SchemaError> {
    match json {
        Json::String(name) => primitive_from_name(name),
        Json::Object(obj) => from_descriptor(obj),
        Json::Array(_) => Err(SchemaError::unsupported("union")),
        other => Err(SchemaError::parse(format!(
            "expected type name or descriptor object, got {other}"
        ))),
    }
}

fn primitive_from_name(name: &str) -> Result<SchemaNode, SchemaError> {
    match name {
        "null" => Ok(SchemaNode::Null),
        "boolean" => Ok(SchemaNode::Boolean),
        "int" => Ok(SchemaNode::Int),
        "long" => Ok(SchemaNode::Long),
        "float" => Ok(SchemaNode::Float),
        "double" => Ok(SchemaNode::Double),
        "string" => Ok(SchemaNode::String),
        "bytes" => Ok(SchemaNode::Bytes),
        other => Err(SchemaError::unsupported(other)),
    }
}

/// Parse a descriptor object. The `type` attribute selects the kind; the
/// remaining attributes (`items`, `values`, `size`, `symbols`, `fields`) are
/// read from the same object, which also covers the legacy field spelling
/// where complex-type attributes sit directly on the field declaration.
fn from_descriptor(obj: &Map<String, Json>) -> Result<SchemaNode, SchemaError> {
    let type_attr = obj
        .get("type")
        .ok_or_else(|| SchemaError::parse("descriptor object is missing a 'type' attribute"))?;

    let type_name = match type_attr {
        Json::String(name) => name.as_str(),
        // A nested descriptor in type position, e.g. {"type": {"type": "array", ...}}.
        Json::Object(inner) => return from_descriptor(inner),
        Json::Array(_) => return Err(SchemaError::unsupported("union")),
        other => {
            return Err(SchemaError::parse(format!(
                "'type' attribute must be a string or descriptor, got {other}"
            )));
        }
    };

    match type_name {
        "array" => {
            let items = required_attr(obj, "items", "array")?;
            Ok(SchemaNode::Array(Box::new(from_json(items)?)))
        }
        "map" => {
            let values = required_attr(obj, "values", "map")?;
            Ok(SchemaNode::Map(Box::new(from_json(values)?)))
        }
        "fixed" => {
            let size = required_attr(obj, "size", "fixed")?
                .as_u64()
                .ok_or_else(|| SchemaError::parse("fixed 'size' must be a non-negative integer"))?;
            Ok(SchemaNode::Fixed {
                name: name_attr(obj, "fixed")?,
                size: size as usize,
            })
        }
        "enum" => {
            let symbols = required_attr(obj, "symbols", "enum")?
                .as_array()
                .ok_or_else(|| SchemaError::parse("enum 'symbols' must be an array"))?
                .iter()
                .map(|s| {
                    s.as_str()
                        .map(str::to_string)
                        .ok_or_else(|| SchemaError::parse("enum symbols must be strings"))
                })
                .collect::<Result<Vec<_>, _>>()?;
            Ok(SchemaNode::Enum {
                name: name_attr(obj, "enum")?,
                symbols,
            })
        }
        "record" => {
            let fields = required_attr(obj, "fields", "record")?
                .as_array()
                .ok_or_else(|| SchemaError::parse("record 'fields' must be an array"))?
                .iter()
                .map(parse_field)
                .collect::<Result<Vec<_>, _>>()?;
            for (i, field) in fields.iter().enumerate() {
                if fields[..i].iter().any(|f| f.name == field.name) {
                    return Err(SchemaError::parse(format!(
                        "duplicate field name '{}'",
                        field.name
                    )));
                }
            }
            Ok(SchemaNode::Record {
                name: name_attr(obj, "record")?,
                fields,
            })
        }
        primitive => primitive_from_name(primitive),
    }
}

fn parse_field(json: &Json) -> Result<FieldSchema, SchemaError> {
    let obj = json
        .as_object()
        .ok_or_else(|| SchemaError::parse("record field must be an object"))?;
    let name = obj
        .get("name")
        .and_then(Json::as_str)
        .ok_or_else(|| SchemaError::parse("record field is missing a 'name'"))?
        .to_string();
    // from_descriptor resolves both the canonical {"name": .., "type": {..}}
    // form and the legacy form with complex-type attributes on the field.
    let schema = match obj.get("type") {
        Some(Json::String(_)) => from_descriptor(obj),
        Some(other) => from_json(other),
        None => Err(SchemaError::parse(format!(
            "field '{name}' is missing a 'type'"
        ))),
    }?;
    Ok(FieldSchema { name, schema })
}

fn required_attr<'a>(
    obj: &'a Map<String, Json>,
    attr: &str,
    kind: &str,
) -> Result<&'a Json, SchemaError> {
    obj.get(attr)
        .ok_or_else(|| SchemaError::parse(format!("{kind} schema is missing '{attr}'")))
}

fn name_attr(obj: &Map<String, Json>, kind: &str) -> Result<String, SchemaError> {
    obj.get("name")
        .and_then(Json::as_str)
        .map(str::to_string)
        .ok_or_else(|| SchemaError::parse(format!("{kind} schema is missing a 'name'")))
}
