//! Schema dependency graph construction and topological ordering.
//!
//! Component schemas reference each other by name. The graph maps each
//! name to the set of names it references directly; Kahn's algorithm
//! orders the names so the emitter can lay definitions out with every
//! referenced schema defined before its dependents.

use std::collections::{BTreeMap, BTreeSet};

use indexmap::IndexMap;
use thiserror::Error;

use super::spec::{Schema, SchemaKind};

/// Name graph: each component schema name to the names it references.
///
/// Ordered maps keep iteration (and therefore sibling order in the
/// sort) stable across runs.
pub type DependencyGraph = BTreeMap<String, BTreeSet<String>>;

/// Raised when the schema graph cannot be ordered because at least one
/// reference cycle exists.
#[derive(Debug, Error)]
#[error("circular dependency detected among schemas: {}", cycle.join(", "))]
pub struct CircularDependencyError {
    /// Names that could not be ordered. Every cycle participant is
    /// included; so is anything only reachable through a cycle.
    pub cycle: Vec<String>,
}

/// Immediate (non-transitive) dependencies of one schema node.
///
/// Walks inline sub-structure (array items, property values, the
/// additionalProperties node, composite members) and collects `$ref`
/// target names. Referenced definitions are never chased, so
/// self-references terminate immediately.
pub fn immediate_dependencies(schema: &Schema) -> BTreeSet<String> {
    let mut deps = BTreeSet::new();
    collect_dependencies(schema, &mut deps);
    deps
}

fn collect_dependencies(schema: &Schema, deps: &mut BTreeSet<String>) {
    match schema.kind() {
        SchemaKind::Reference(name) => {
            deps.insert(name.to_string());
        }
        SchemaKind::Array(items) => collect_dependencies(items, deps),
        SchemaKind::Object { properties, additional, .. } => {
            if let Some(properties) = properties {
                for property in properties.values() {
                    collect_dependencies(property, deps);
                }
            }
            if let Some(additional) = additional {
                collect_dependencies(additional, deps);
            }
        }
        SchemaKind::Composite(members) => {
            for member in members {
                collect_dependencies(member, deps);
            }
        }
        SchemaKind::String
        | SchemaKind::Number
        | SchemaKind::Boolean
        | SchemaKind::Enum(_)
        | SchemaKind::Unknown => {}
    }
}

/// Build the name graph for a components map.
pub fn build_dependency_graph(schemas: &IndexMap<String, Schema>) -> DependencyGraph {
    schemas
        .iter()
        .map(|(name, schema)| (name.clone(), immediate_dependencies(schema)))
        .collect()
}

/// Order the graph with Kahn's algorithm.
///
/// In-degree of a name counts the graph keys that reference it, so the
/// result lists dependents before the schemas they reference. The
/// output contains exactly the graph keys: dependency names that are
/// not keys (dangling references) neither appear in the result nor
/// count toward cycle detection.
pub fn topological_sort(graph: &DependencyGraph) -> Result<Vec<String>, CircularDependencyError> {
    let mut in_degree: BTreeMap<&str, usize> = graph.keys().map(|name| (name.as_str(), 0)).collect();
    for deps in graph.values() {
        for dep in deps {
            if let Some(degree) = in_degree.get_mut(dep.as_str()) {
                *degree += 1;
            }
        }
    }

    let mut queue: Vec<&str> = in_degree
        .iter()
        .filter(|(_, degree)| **degree == 0)
        .map(|(name, _)| *name)
        .collect();
    let mut result = Vec::with_capacity(graph.len());

    while let Some(node) = queue.pop() {
        result.push(node.to_string());
        if let Some(deps) = graph.get(node) {
            for dep in deps {
                if let Some(degree) = in_degree.get_mut(dep.as_str()) {
                    *degree -= 1;
                    if *degree == 0 {
                        queue.push(dep.as_str());
                    }
                }
            }
        }
    }

    if result.len() != graph.len() {
        let cycle = in_degree
            .iter()
            .filter(|(_, degree)| **degree > 0)
            .map(|(name, _)| (*name).to_string())
            .collect();
        return Err(CircularDependencyError { cycle });
    }

    Ok(result)
}
