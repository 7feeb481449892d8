//! OpenAPI document to Zod + typed client generator.
//!
//! Parses an OpenAPI-shaped JSON document and renders three TypeScript
//! modules: runtime validators with inferred type aliases, a shared
//! transport client, and typed endpoint wrappers over that client.

mod emitter;
mod graph;
mod ir;
mod spec;

pub use emitter::{GeneratedFiles, generate};
pub use graph::CircularDependencyError;
pub use spec::OpenApiSpec;
