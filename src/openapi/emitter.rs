//! Pipeline entry for a parsed document.
//!
//! 1. Graph: component schemas -> dependency graph
//! 2. Order: topological sort (dependents first, reversed for emission)
//! 3. Resolve: each schema node -> validator + type pair
//! 4. Compile: paths -> operation records
//! 5. Render: the three module texts

use tracing::debug;

use crate::openapi::graph::{CircularDependencyError, build_dependency_graph, topological_sort};
use crate::openapi::ir::utils::extract_common_base_path;
use crate::openapi::ir::{
    SchemaDef, codegen_client, codegen_endpoints, codegen_schemas, compile_operations, resolve,
};
use crate::openapi::spec::OpenApiSpec;

/// The three generated module texts, ready to be written out.
#[derive(Debug, Clone)]
pub struct GeneratedFiles {
    pub schemas: String,
    pub client: String,
    pub endpoints: String,
}

/// Generate all three modules from a parsed document.
///
/// The only fatal condition is a cycle among component schemas; every
/// other anomaly degrades locally during resolution.
pub fn generate(spec: &OpenApiSpec) -> Result<GeneratedFiles, CircularDependencyError> {
    let schemas = spec.components.as_ref().and_then(|c| c.schemas.as_ref());

    let graph = schemas.map(build_dependency_graph).unwrap_or_default();
    let mut order = topological_sort(&graph)?;
    // Raw order is dependents-first; definitions must precede their users.
    order.reverse();
    debug!(schemas = order.len(), "schema order resolved");

    let mut defs = Vec::new();
    if let Some(schemas) = schemas {
        for name in &order {
            if let Some(schema) = schemas.get(name) {
                defs.push(SchemaDef {
                    name: name.clone(),
                    validator: resolve(schema).validator,
                });
            }
        }
    }

    let paths: Vec<&str> = spec.paths.keys().map(String::as_str).collect();
    let base_url = extract_common_base_path(&paths);
    let operations = compile_operations(spec, &base_url);
    debug!(operations = operations.len(), base_url = %base_url, "operations compiled");

    Ok(GeneratedFiles {
        schemas: codegen_schemas(&defs),
        client: codegen_client(&base_url),
        endpoints: codegen_endpoints(&operations, &base_url),
    })
}
