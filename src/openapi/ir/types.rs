//! Intermediate representation of the emitted source text.
//!
//! Every schema node resolves to a pair of trees: a Zod validator
//! expression ([`ZodExpr`]) and a TypeScript type signature
//! ([`TsType`]). Named definitions and endpoint signatures are built
//! from these and rendered by the `Emit` trait in `emit`.

/// TypeScript primitive types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TsPrimitive {
    String,
    Number,
    Boolean,
    Void,
    Any,
}

/// TypeScript literal values (enum members).
#[derive(Debug, Clone)]
pub enum TsLiteral {
    String(String),
    Number(f64),
    Int(i64),
    Bool(bool),
    Null,
}

/// TypeScript type representation.
#[derive(Debug, Clone)]
pub enum TsType {
    /// Primitive types: string, number, boolean, void, any
    Primitive(TsPrimitive),
    /// Array type: T[]
    Array(Box<TsType>),
    /// Union type: A | B (literal unions for enums)
    Union(Vec<TsType>),
    /// Structural object type: { foo: string; bar?: number }
    Object(Vec<TsProp>),
    /// String-keyed map: Record<string, V>
    Record(Box<TsType>),
    /// Literal type: "foo", 42, true
    Literal(TsLiteral),
    /// Named type reference: "Item", "User"
    Ref(String),
}

/// Object property definition.
#[derive(Debug, Clone)]
pub struct TsProp {
    pub name: String,
    pub ty: TsType,
    pub optional: bool,
}

/// Zod validator expression.
#[derive(Debug, Clone)]
pub enum ZodExpr {
    /// z.string()
    String,
    /// z.number()
    Number,
    /// z.boolean()
    Boolean,
    /// z.unknown()
    Unknown,
    /// z.enum(["a", "b"]) for all-string literal sets
    Enum(Vec<String>),
    /// z.union([z.literal(1), z.literal(null)]) for mixed literal sets
    LiteralUnion(Vec<TsLiteral>),
    /// z.array(T)
    Array(Box<ZodExpr>),
    /// z.object({ ... })
    Object(Vec<ZodField>),
    /// z.record(V)
    Record(Box<ZodExpr>),
    /// Reference to another named validator: `{name}Schema`
    Ref(String),
}

/// Field of a z.object shape.
#[derive(Debug, Clone)]
pub struct ZodField {
    pub name: String,
    pub expr: ZodExpr,
    /// Appends `.optional()` when the property is not required.
    pub optional: bool,
}

/// The resolved form of one schema node: runtime validator plus static
/// type signature. Both trees are produced together so they cannot
/// drift apart.
#[derive(Debug, Clone)]
pub struct ResolvedType {
    pub validator: ZodExpr,
    pub ty: TsType,
}

/// A named schema definition in the emitted schema module: an exported
/// validator const plus the inferred type alias.
#[derive(Debug, Clone)]
pub struct SchemaDef {
    pub name: String,
    pub validator: ZodExpr,
}

impl TsType {
    /// Prefix every named reference with a namespace, recursively.
    ///
    /// The endpoints module imports the schema module as `Schemas`, so
    /// types crossing that boundary become `Schemas.Item`, including
    /// references nested in arrays, unions, objects, and records.
    pub fn qualify(self, namespace: &str) -> TsType {
        match self {
            TsType::Ref(name) => TsType::Ref(format!("{namespace}.{name}")),
            TsType::Array(inner) => TsType::Array(Box::new(inner.qualify(namespace))),
            TsType::Union(types) => {
                TsType::Union(types.into_iter().map(|t| t.qualify(namespace)).collect())
            }
            TsType::Object(props) => TsType::Object(
                props
                    .into_iter()
                    .map(|p| TsProp {
                        ty: p.ty.qualify(namespace),
                        ..p
                    })
                    .collect(),
            ),
            TsType::Record(value) => TsType::Record(Box::new(value.qualify(namespace))),
            TsType::Primitive(_) | TsType::Literal(_) => self,
        }
    }
}
