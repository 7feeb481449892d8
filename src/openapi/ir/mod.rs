//! Intermediate representation for the generated TypeScript.
//!
//! Three layers, crossed in one direction only:
//! 1. Operation IR: compiled operations (document-agnostic)
//! 2. Type IR: validator expressions paired with type signatures
//! 3. Emission: IR to source text via the `Emit` trait
//!
//! ## Module Structure
//!
//! - `types`: type IR (TsType, ZodExpr, ResolvedType, SchemaDef)
//! - `api`: operation IR (OperationIR, HttpMethod, UrlPart)
//! - `resolve`: schema node -> ResolvedType
//! - `normalize`: document -> operation IR
//! - `codegen`: IR -> the three generated module texts
//! - `emit`: type IR -> source fragments (via Emit trait)
//! - `utils`: common string helpers shared across modules

mod api;
mod codegen;
mod emit;
mod normalize;
mod resolve;
mod types;
pub mod utils;

pub use api::{HttpMethod, OperationIR, UrlPart};
pub use codegen::{codegen_client, codegen_endpoints, codegen_schemas};
pub use emit::Emit;
pub use normalize::compile_operations;
pub use resolve::resolve;
pub use types::{ResolvedType, SchemaDef};
