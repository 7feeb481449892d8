//! Source text emission via the Emit trait.
//!
//! Each IR node converts itself to its TypeScript or Zod string form.
//! Zod object shapes render multi-line with depth-aware indentation;
//! TypeScript structural types render single-line.

use super::types::{SchemaDef, TsLiteral, TsPrimitive, TsProp, TsType, ZodExpr, ZodField};
use super::utils::{escape_js_string, quote_if_needed};

/// Trait for emitting source text from IR nodes.
pub trait Emit {
    /// Convert the node to its source string representation.
    fn emit(&self) -> String;
}

impl Emit for TsPrimitive {
    fn emit(&self) -> String {
        match self {
            TsPrimitive::String => "string".to_string(),
            TsPrimitive::Number => "number".to_string(),
            TsPrimitive::Boolean => "boolean".to_string(),
            TsPrimitive::Void => "void".to_string(),
            TsPrimitive::Any => "any".to_string(),
        }
    }
}

impl Emit for TsLiteral {
    fn emit(&self) -> String {
        match self {
            TsLiteral::String(s) => format!("\"{}\"", escape_js_string(s)),
            TsLiteral::Number(n) => n.to_string(),
            TsLiteral::Int(i) => i.to_string(),
            TsLiteral::Bool(b) => b.to_string(),
            TsLiteral::Null => "null".to_string(),
        }
    }
}

impl Emit for TsType {
    fn emit(&self) -> String {
        match self {
            TsType::Primitive(p) => p.emit(),
            TsType::Array(inner) => {
                let inner_str = inner.emit();
                // Union element types need parentheses: (A | B)[]
                if matches!(**inner, TsType::Union(_)) {
                    format!("({inner_str})[]")
                } else {
                    format!("{inner_str}[]")
                }
            }
            TsType::Union(types) => types.iter().map(Emit::emit).collect::<Vec<_>>().join(" | "),
            TsType::Object(props) => {
                if props.is_empty() {
                    "{}".to_string()
                } else {
                    let parts: Vec<_> = props.iter().map(Emit::emit).collect();
                    format!("{{ {} }}", parts.join("; "))
                }
            }
            TsType::Record(value) => format!("Record<string, {}>", value.emit()),
            TsType::Literal(lit) => lit.emit(),
            TsType::Ref(name) => name.clone(),
        }
    }
}

impl Emit for TsProp {
    fn emit(&self) -> String {
        let key = quote_if_needed(&self.name);
        let opt = if self.optional { "?" } else { "" };
        format!("{}{}: {}", key, opt, self.ty.emit())
    }
}

impl Emit for ZodExpr {
    fn emit(&self) -> String {
        self.emit_at(0)
    }
}

impl ZodExpr {
    fn emit_at(&self, depth: usize) -> String {
        match self {
            ZodExpr::String => "z.string()".to_string(),
            ZodExpr::Number => "z.number()".to_string(),
            ZodExpr::Boolean => "z.boolean()".to_string(),
            ZodExpr::Unknown => "z.unknown()".to_string(),
            ZodExpr::Enum(values) => {
                let members: Vec<String> = values
                    .iter()
                    .map(|v| format!("\"{}\"", escape_js_string(v)))
                    .collect();
                format!("z.enum([{}])", members.join(", "))
            }
            ZodExpr::LiteralUnion(literals) => {
                let members: Vec<String> = literals
                    .iter()
                    .map(|l| format!("z.literal({})", l.emit()))
                    .collect();
                if let [single] = members.as_slice() {
                    single.clone()
                } else {
                    format!("z.union([{}])", members.join(", "))
                }
            }
            ZodExpr::Array(inner) => format!("z.array({})", inner.emit_at(depth)),
            ZodExpr::Record(value) => format!("z.record({})", value.emit_at(depth)),
            ZodExpr::Ref(name) => format!("{name}Schema"),
            ZodExpr::Object(fields) => {
                if fields.is_empty() {
                    return "z.object({})".to_string();
                }
                let inner_pad = "  ".repeat(depth + 2);
                let close_pad = "  ".repeat(depth + 1);
                let shape: Vec<String> = fields
                    .iter()
                    .map(|f| format!("{inner_pad}{}", f.emit_at(depth + 1)))
                    .collect();
                format!("z.object({{\n{}\n{close_pad}}})", shape.join(",\n"))
            }
        }
    }
}

impl ZodField {
    fn emit_at(&self, depth: usize) -> String {
        let suffix = if self.optional { ".optional()" } else { "" };
        format!(
            "{}: {}{suffix}",
            quote_if_needed(&self.name),
            self.expr.emit_at(depth)
        )
    }
}

impl Emit for SchemaDef {
    fn emit(&self) -> String {
        format!(
            "export const {name}Schema = {validator};\n\nexport type {name} = z.infer<typeof {name}Schema>;",
            name = self.name,
            validator = self.validator.emit()
        )
    }
}
