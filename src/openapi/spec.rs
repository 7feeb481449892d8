//! OpenAPI document structs for serde deserialization.
//!
//! A minimal subset of the OpenAPI 3.x document shape: named component
//! schemas plus paths. Name-keyed maps use [`IndexMap`] because emitted
//! properties, parameters, and operations must follow declaration order.

use indexmap::IndexMap;
use serde::Deserialize;
use std::collections::HashMap;

/// Root OpenAPI document.
#[derive(Debug, Deserialize)]
pub struct OpenApiSpec {
    pub paths: IndexMap<String, PathItem>,
    pub components: Option<Components>,
}

/// Components section containing reusable schemas.
#[derive(Debug, Deserialize)]
pub struct Components {
    pub schemas: Option<IndexMap<String, Schema>>,
}

/// A path item containing operations for different HTTP methods.
#[derive(Debug, Deserialize)]
pub struct PathItem {
    pub get: Option<Operation>,
    pub post: Option<Operation>,
    pub put: Option<Operation>,
    pub patch: Option<Operation>,
    pub delete: Option<Operation>,
}

/// An API operation (endpoint).
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    pub operation_id: Option<String>,
    pub parameters: Option<Vec<Parameter>>,
    pub request_body: Option<RequestBody>,
    #[serde(default)]
    pub responses: HashMap<String, Response>,
}

/// A parameter (path, query, header, or cookie).
#[derive(Debug, Deserialize)]
pub struct Parameter {
    pub name: String,
    #[serde(rename = "in")]
    pub location: String,
}

/// A request body definition.
#[derive(Debug, Deserialize)]
pub struct RequestBody {
    pub content: Option<HashMap<String, MediaType>>,
}

/// A response definition.
#[derive(Debug, Deserialize)]
pub struct Response {
    pub content: Option<HashMap<String, MediaType>>,
}

/// Media type content (e.g., application/json).
#[derive(Debug, Deserialize)]
pub struct MediaType {
    pub schema: Option<Schema>,
}

/// JSON Schema definition used in OpenAPI.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schema {
    /// The type of the schema (string, number, integer, boolean, object, array).
    #[serde(rename = "type")]
    pub schema_type: Option<SchemaType>,

    /// Reference to another schema.
    #[serde(rename = "$ref")]
    pub ref_path: Option<String>,

    /// Properties for object types.
    pub properties: Option<IndexMap<String, Schema>>,

    /// Required property names for object types.
    pub required: Option<Vec<String>>,

    /// Item schema for array types.
    pub items: Option<Box<Schema>>,

    /// Enum values (can be strings, integers, floats, booleans, or null).
    #[serde(rename = "enum")]
    pub enum_values: Option<Vec<EnumValue>>,

    /// Union type (any of these schemas).
    pub any_of: Option<Vec<Schema>>,

    /// Union type (exactly one of these schemas).
    pub one_of: Option<Vec<Schema>>,

    /// Intersection type (all of these schemas combined).
    pub all_of: Option<Vec<Schema>>,

    /// Negation (must not match this schema).
    pub not: Option<Box<Schema>>,

    /// Additional properties for object types (for Record/dict types).
    pub additional_properties: Option<AdditionalProperties>,
}

/// Enum value can be string, integer, float, boolean, or null.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum EnumValue {
    String(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    Null,
}

/// Schema type can be a single type or an array of types.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SchemaType {
    Single(String),
    Multiple(Vec<String>),
}

/// Additional properties can be a boolean or a schema.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum AdditionalProperties {
    Bool(bool),
    Schema(Box<Schema>),
}

/// Closed classification of a schema node.
///
/// Dependency collection and type resolution both match on this
/// exhaustively, so a new kind forces every consumer to decide how to
/// handle it instead of silently falling through a string comparison.
#[derive(Debug)]
pub enum SchemaKind<'a> {
    String,
    Number,
    Boolean,
    /// Literal set; carries the declared values.
    Enum(&'a [EnumValue]),
    /// Array with an item schema. An array without `items` is malformed
    /// and classifies as `Unknown`.
    Array(&'a Schema),
    /// Object shape. `properties` takes precedence over `additional`
    /// when both are declared; with neither, consumers fall back to a
    /// permissive string-keyed record.
    Object {
        properties: Option<&'a IndexMap<String, Schema>>,
        required: &'a [String],
        additional: Option<&'a Schema>,
    },
    /// `$ref` to another named schema; carries the target name.
    Reference(&'a str),
    /// allOf/oneOf/anyOf/not members, tracked for dependencies only.
    Composite(Vec<&'a Schema>),
    /// Anything unrecognized or structurally incomplete.
    Unknown,
}

impl OpenApiSpec {
    /// Parse an OpenAPI document from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl Schema {
    /// Classify this node. Total: malformed nodes become [`SchemaKind::Unknown`].
    ///
    /// Precedence is `$ref` over `enum` over the declared type tag;
    /// composite keywords apply only when no recognized type tag is
    /// present.
    pub fn kind(&self) -> SchemaKind<'_> {
        if let Some(ref_path) = &self.ref_path {
            return SchemaKind::Reference(ref_target_name(ref_path));
        }
        if let Some(values) = &self.enum_values {
            return SchemaKind::Enum(values);
        }
        if let Some(SchemaType::Single(tag)) = &self.schema_type {
            match tag.as_str() {
                "string" => return SchemaKind::String,
                "number" | "integer" => return SchemaKind::Number,
                "boolean" => return SchemaKind::Boolean,
                "array" => {
                    if let Some(items) = &self.items {
                        return SchemaKind::Array(items);
                    }
                    return SchemaKind::Unknown;
                }
                "object" => {
                    return SchemaKind::Object {
                        properties: self.properties.as_ref(),
                        required: self.required.as_deref().unwrap_or_default(),
                        additional: match &self.additional_properties {
                            Some(AdditionalProperties::Schema(schema)) => Some(schema),
                            Some(AdditionalProperties::Bool(_)) | None => None,
                        },
                    };
                }
                _ => {}
            }
        }
        if let Some(members) = self.composite_members() {
            return SchemaKind::Composite(members);
        }
        SchemaKind::Unknown
    }

    /// Members of allOf/oneOf/anyOf/not, in that order, when any of the
    /// composite keywords is present.
    fn composite_members(&self) -> Option<Vec<&Schema>> {
        if self.all_of.is_none()
            && self.one_of.is_none()
            && self.any_of.is_none()
            && self.not.is_none()
        {
            return None;
        }
        let mut members = Vec::new();
        for list in [&self.all_of, &self.one_of, &self.any_of] {
            if let Some(list) = list {
                members.extend(list.iter());
            }
        }
        if let Some(not) = &self.not {
            members.push(not.as_ref());
        }
        Some(members)
    }
}

/// Last segment of a `$ref` path (`#/components/schemas/User` -> `User`).
fn ref_target_name(ref_path: &str) -> &str {
    ref_path.rsplit('/').next().unwrap_or(ref_path)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;

    fn schema_from(json: &str) -> Schema {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_reference_beats_other_facets() {
        let schema = schema_from(r##"{"$ref": "#/components/schemas/User", "type": "object"}"##);
        assert!(matches!(schema.kind(), SchemaKind::Reference("User")));
    }

    #[test]
    fn test_enum_beats_type_tag() {
        let schema = schema_from(r#"{"type": "string", "enum": ["a", "b"]}"#);
        assert!(matches!(schema.kind(), SchemaKind::Enum(values) if values.len() == 2));
    }

    #[test]
    fn test_integer_classifies_as_number() {
        let schema = schema_from(r#"{"type": "integer"}"#);
        assert!(matches!(schema.kind(), SchemaKind::Number));
    }

    #[test]
    fn test_array_without_items_is_unknown() {
        let schema = schema_from(r#"{"type": "array"}"#);
        assert!(matches!(schema.kind(), SchemaKind::Unknown));
    }

    #[test]
    fn test_type_array_is_unknown() {
        let schema = schema_from(r#"{"type": ["string", "null"]}"#);
        assert!(matches!(schema.kind(), SchemaKind::Unknown));
    }

    #[test]
    fn test_object_additional_properties_bool_is_dropped() {
        let schema = schema_from(r#"{"type": "object", "additionalProperties": true}"#);
        match schema.kind() {
            SchemaKind::Object {
                properties,
                additional,
                ..
            } => {
                assert!(properties.is_none());
                assert!(additional.is_none());
            }
            other => panic!("expected object kind, got {other:?}"),
        }
    }

    #[test]
    fn test_composite_requires_no_recognized_type() {
        let composite = schema_from(r##"{"anyOf": [{"$ref": "#/components/schemas/A"}]}"##);
        assert!(matches!(composite.kind(), SchemaKind::Composite(members) if members.len() == 1));

        // With a recognized type tag the composite keywords are ignored.
        let typed = schema_from(r##"{"type": "object", "allOf": [{"$ref": "#/components/schemas/A"}]}"##);
        assert!(matches!(typed.kind(), SchemaKind::Object { .. }));
    }

    #[test]
    fn test_properties_preserve_declaration_order() {
        let schema = schema_from(
            r#"{"type": "object", "properties": {"zeta": {"type": "string"}, "alpha": {"type": "number"}}}"#,
        );
        let properties = schema.properties.as_ref().map(|p| p.keys().collect::<Vec<_>>());
        assert_eq!(properties, Some(vec![&"zeta".to_string(), &"alpha".to_string()]));
    }
}
