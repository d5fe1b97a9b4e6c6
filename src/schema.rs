//! Reduced JSON Schema model.
//!
//! A schema document is parsed once, up front, into a closed [`SchemaNode`]
//! tree; generation then dispatches by exhaustive match instead of re-reading
//! `type` strings. Unsupported node kinds and empty enums are rejected here,
//! before any value is drawn.
//!
//! Supported subset: `type` in {string, integer, number, boolean, array,
//! object, null}, plus `enum`, `format`, `minimum`/`maximum`,
//! `items`/`minItems`/`maxItems`, `properties`/`required`. Everything else
//! (descriptions, defaults, ...) is ignored. `minimum <= maximum` and
//! `minItems <= maxItems` are the caller's responsibility; inverted ranges
//! panic in the sampler.

use crate::error::SchemaError;
use serde_json::Value;

/// String `format` values the generator knows how to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StringFormat {
    Email,
    Date,
    Uri,
    Uuid,
}

impl StringFormat {
    fn parse(s: &str) -> Option<Self> {
        match s {
            "email" => Some(StringFormat::Email),
            "date" => Some(StringFormat::Date),
            "uri" => Some(StringFormat::Uri),
            "uuid" => Some(StringFormat::Uuid),
            // Unknown formats degrade to a plain string, matching the
            // free-text fallback rather than failing the schema.
            _ => None,
        }
    }
}

/// One node of the schema tree, read-only after parsing.
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaNode {
    String {
        /// Ordered candidate set; selection is uniform over it.
        enum_values: Option<Vec<String>>,
        format: Option<StringFormat>,
    },
    Integer {
        minimum: Option<i64>,
        maximum: Option<i64>,
    },
    Number {
        minimum: Option<f64>,
        maximum: Option<f64>,
    },
    Boolean,
    Array {
        items: Box<SchemaNode>,
        min_items: Option<usize>,
        max_items: Option<usize>,
    },
    Object {
        /// Declaration order is preserved for deterministic traversal.
        properties: Vec<(String, SchemaNode)>,
        required: Vec<String>,
    },
    Null,
}

impl SchemaNode {
    /// Parse a JSON Schema document (subset) into a node tree.
    pub fn parse(value: &Value) -> Result<Self, SchemaError> {
        Self::parse_at(value, "$")
    }

    fn parse_at(value: &Value, path: &str) -> Result<Self, SchemaError> {
        // A missing `type` means a plain string, as in tool-call parameter
        // schemas that only carry a description.
        let schema_type = value
            .get("type")
            .and_then(Value::as_str)
            .unwrap_or("string");

        match schema_type {
            "string" => {
                let enum_values = match value.get("enum").and_then(Value::as_array) {
                    Some(candidates) => {
                        let values: Vec<String> = candidates
                            .iter()
                            .filter_map(Value::as_str)
                            .map(str::to_string)
                            .collect();
                        if values.is_empty() {
                            return Err(SchemaError::EmptyEnum(path.to_string()));
                        }
                        Some(values)
                    }
                    None => None,
                };
                let format = value
                    .get("format")
                    .and_then(Value::as_str)
                    .and_then(StringFormat::parse);
                Ok(SchemaNode::String {
                    enum_values,
                    format,
                })
            }
            "integer" => Ok(SchemaNode::Integer {
                minimum: value.get("minimum").and_then(Value::as_i64),
                maximum: value.get("maximum").and_then(Value::as_i64),
            }),
            "number" => Ok(SchemaNode::Number {
                minimum: value.get("minimum").and_then(Value::as_f64),
                maximum: value.get("maximum").and_then(Value::as_f64),
            }),
            "boolean" => Ok(SchemaNode::Boolean),
            "array" => {
                let items = match value.get("items") {
                    Some(items) => Self::parse_at(items, &format!("{}[]", path))?,
                    // `"items": {}` and missing items both mean "strings"
                    None => SchemaNode::String {
                        enum_values: None,
                        format: None,
                    },
                };
                Ok(SchemaNode::Array {
                    items: Box::new(items),
                    min_items: value
                        .get("minItems")
                        .and_then(Value::as_u64)
                        .map(|n| n as usize),
                    max_items: value
                        .get("maxItems")
                        .and_then(Value::as_u64)
                        .map(|n| n as usize),
                })
            }
            "object" => {
                let mut properties = Vec::new();
                if let Some(props) = value.get("properties").and_then(Value::as_object) {
                    for (name, prop_schema) in props {
                        let child = Self::parse_at(prop_schema, &format!("{}.{}", path, name))?;
                        properties.push((name.clone(), child));
                    }
                }
                let required = value
                    .get("required")
                    .and_then(Value::as_array)
                    .map(|names| {
                        names
                            .iter()
                            .filter_map(Value::as_str)
                            .map(str::to_string)
                            .collect()
                    })
                    .unwrap_or_default();
                Ok(SchemaNode::Object {
                    properties,
                    required,
                })
            }
            "null" => Ok(SchemaNode::Null),
            other => Err(SchemaError::UnsupportedType(other.to_string())),
        }
    }

    /// Node kind name, for error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            SchemaNode::String { .. } => "string",
            SchemaNode::Integer { .. } => "integer",
            SchemaNode::Number { .. } => "number",
            SchemaNode::Boolean => "boolean",
            SchemaNode::Array { .. } => "array",
            SchemaNode::Object { .. } => "object",
            SchemaNode::Null => "null",
        }
    }
}
