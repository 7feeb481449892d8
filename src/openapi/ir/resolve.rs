//! Schema type resolution.
//!
//! Maps one schema node to a [`ResolvedType`]: the Zod validator
//! expression and the TypeScript type signature, produced together.
//! Resolution is total. Malformed or unrecognized nodes degrade to the
//! permissive pair (`z.unknown()` / `any`) instead of failing, and
//! references stay symbolic so recursion never expands a definition.

use indexmap::IndexMap;

use super::types::{ResolvedType, TsLiteral, TsPrimitive, TsProp, TsType, ZodExpr, ZodField};
use super::utils::enum_value_to_literal;
use crate::openapi::spec::{EnumValue, Schema, SchemaKind};

/// Resolve one schema node to its validator/type pair.
pub fn resolve(schema: &Schema) -> ResolvedType {
    match schema.kind() {
        SchemaKind::String => ResolvedType {
            validator: ZodExpr::String,
            ty: TsType::Primitive(TsPrimitive::String),
        },
        SchemaKind::Number => ResolvedType {
            validator: ZodExpr::Number,
            ty: TsType::Primitive(TsPrimitive::Number),
        },
        SchemaKind::Boolean => ResolvedType {
            validator: ZodExpr::Boolean,
            ty: TsType::Primitive(TsPrimitive::Boolean),
        },
        SchemaKind::Enum(values) => resolve_enum(values),
        SchemaKind::Array(items) => {
            let items = resolve(items);
            ResolvedType {
                validator: ZodExpr::Array(Box::new(items.validator)),
                ty: TsType::Array(Box::new(items.ty)),
            }
        }
        SchemaKind::Object {
            properties,
            required,
            additional,
        } => resolve_object(properties, required, additional),
        SchemaKind::Reference(name) => ResolvedType {
            validator: ZodExpr::Ref(name.to_string()),
            ty: TsType::Ref(name.to_string()),
        },
        SchemaKind::Composite(_) | SchemaKind::Unknown => permissive(),
    }
}

/// The maximally permissive pair.
fn permissive() -> ResolvedType {
    ResolvedType {
        validator: ZodExpr::Unknown,
        ty: TsType::Primitive(TsPrimitive::Any),
    }
}

fn resolve_object(
    properties: Option<&IndexMap<String, Schema>>,
    required: &[String],
    additional: Option<&Schema>,
) -> ResolvedType {
    if let Some(properties) = properties {
        let mut fields = Vec::with_capacity(properties.len());
        let mut props = Vec::with_capacity(properties.len());
        for (name, property) in properties {
            let resolved = resolve(property);
            let optional = !required.iter().any(|r| r == name);
            fields.push(ZodField {
                name: name.clone(),
                expr: resolved.validator,
                optional,
            });
            props.push(TsProp {
                name: name.clone(),
                ty: resolved.ty,
                optional,
            });
        }
        return ResolvedType {
            validator: ZodExpr::Object(fields),
            ty: TsType::Object(props),
        };
    }

    // No declared properties: a string-keyed record over the
    // additionalProperties schema, permissive when there is none.
    let value = match additional {
        Some(schema) => resolve(schema),
        None => permissive(),
    };
    ResolvedType {
        validator: ZodExpr::Record(Box::new(value.validator)),
        ty: TsType::Record(Box::new(value.ty)),
    }
}

fn resolve_enum(values: &[EnumValue]) -> ResolvedType {
    // An empty literal set validates nothing; degrade like any other
    // malformed node.
    if values.is_empty() {
        return permissive();
    }

    let literals: Vec<TsLiteral> = values.iter().map(enum_value_to_literal).collect();
    let ty = if let [single] = literals.as_slice() {
        TsType::Literal(single.clone())
    } else {
        TsType::Union(literals.iter().cloned().map(TsType::Literal).collect())
    };

    let strings: Vec<String> = values
        .iter()
        .filter_map(|v| match v {
            EnumValue::String(s) => Some(s.clone()),
            _ => None,
        })
        .collect();
    let validator = if strings.len() == values.len() {
        ZodExpr::Enum(strings)
    } else {
        ZodExpr::LiteralUnion(literals)
    };

    ResolvedType { validator, ty }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::super::emit::Emit;
    use super::*;

    fn resolve_json(json: &str) -> ResolvedType {
        let schema: Schema = serde_json::from_str(json).unwrap();
        resolve(&schema)
    }

    #[test]
    fn test_resolve_primitives() {
        for (json, validator, ty) in [
            (r#"{"type": "string"}"#, "z.string()", "string"),
            (r#"{"type": "number"}"#, "z.number()", "number"),
            (r#"{"type": "integer"}"#, "z.number()", "number"),
            (r#"{"type": "boolean"}"#, "z.boolean()", "boolean"),
        ] {
            let resolved = resolve_json(json);
            assert_eq!(resolved.validator.emit(), validator);
            assert_eq!(resolved.ty.emit(), ty);
        }
    }

    #[test]
    fn test_resolve_object_with_optional_properties() {
        let resolved = resolve_json(
            r#"{
                "type": "object",
                "properties": {
                    "id": {"type": "string"},
                    "tags": {"type": "array", "items": {"type": "string"}}
                },
                "required": ["id"]
            }"#,
        );
        assert_eq!(
            resolved.validator.emit(),
            "z.object({\n    id: z.string(),\n    tags: z.array(z.string()).optional()\n  })"
        );
        assert_eq!(resolved.ty.emit(), "{ id: string; tags?: string[] }");
    }

    #[test]
    fn test_resolve_reference_stays_symbolic() {
        let resolved = resolve_json(r##"{"$ref": "#/components/schemas/User"}"##);
        assert_eq!(resolved.validator.emit(), "UserSchema");
        assert_eq!(resolved.ty.emit(), "User");
    }

    #[test]
    fn test_resolve_array_of_references() {
        let resolved =
            resolve_json(r##"{"type": "array", "items": {"$ref": "#/components/schemas/Item"}}"##);
        assert_eq!(resolved.validator.emit(), "z.array(ItemSchema)");
        assert_eq!(resolved.ty.emit(), "Item[]");
    }

    #[test]
    fn test_resolve_record_from_additional_properties() {
        let resolved = resolve_json(
            r#"{"type": "object", "additionalProperties": {"type": "number"}}"#,
        );
        assert_eq!(resolved.validator.emit(), "z.record(z.number())");
        assert_eq!(resolved.ty.emit(), "Record<string, number>");
    }

    #[test]
    fn test_resolve_bare_object_is_permissive_record() {
        let resolved = resolve_json(r#"{"type": "object"}"#);
        assert_eq!(resolved.validator.emit(), "z.record(z.unknown())");
        assert_eq!(resolved.ty.emit(), "Record<string, any>");
    }

    #[test]
    fn test_resolve_string_enum() {
        let resolved = resolve_json(r#"{"type": "string", "enum": ["active", "archived"]}"#);
        assert_eq!(resolved.validator.emit(), "z.enum([\"active\", \"archived\"])");
        assert_eq!(resolved.ty.emit(), "\"active\" | \"archived\"");
    }

    #[test]
    fn test_resolve_mixed_enum() {
        let resolved = resolve_json(r#"{"enum": [1, 2, null]}"#);
        assert_eq!(
            resolved.validator.emit(),
            "z.union([z.literal(1), z.literal(2), z.literal(null)])"
        );
        assert_eq!(resolved.ty.emit(), "1 | 2 | null");
    }

    #[test]
    fn test_resolve_single_value_enum() {
        let resolved = resolve_json(r#"{"enum": ["only"]}"#);
        assert_eq!(resolved.validator.emit(), "z.enum([\"only\"])");
        assert_eq!(resolved.ty.emit(), "\"only\"");
    }

    #[test]
    fn test_resolve_degrades_to_permissive() {
        for json in [
            r#"{"type": "array"}"#,
            r#"{"type": "file"}"#,
            r#"{"type": ["string", "null"]}"#,
            r#"{"anyOf": [{"type": "string"}, {"type": "number"}]}"#,
            r#"{}"#,
        ] {
            let resolved = resolve_json(json);
            assert_eq!(resolved.validator.emit(), "z.unknown()", "validator for {json}");
            assert_eq!(resolved.ty.emit(), "any", "type for {json}");
        }
    }

    #[test]
    fn test_resolve_nested_object_indentation() {
        let resolved = resolve_json(
            r#"{
                "type": "object",
                "properties": {
                    "meta": {
                        "type": "object",
                        "properties": {"created": {"type": "string"}}
                    }
                }
            }"#,
        );
        assert_eq!(
            resolved.validator.emit(),
            "z.object({\n    meta: z.object({\n      created: z.string().optional()\n    }).optional()\n  })"
        );
    }

    #[test]
    fn test_resolve_is_deterministic() {
        let json = r#"{
            "type": "object",
            "properties": {
                "zeta": {"type": "string"},
                "alpha": {"type": "number"},
                "mid": {"type": "boolean"}
            }
        }"#;
        let first = resolve_json(json);
        let again = resolve_json(json);
        assert_eq!(first.validator.emit(), again.validator.emit());
        assert_eq!(first.ty.emit(), again.ty.emit());
        // Properties stay in declaration order, not alphabetical.
        assert!(first.validator.emit().find("zeta").unwrap() < first.validator.emit().find("alpha").unwrap());
    }
}
