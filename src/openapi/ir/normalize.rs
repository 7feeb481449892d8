//! Operation compilation.
//!
//! Walks every (path, method) pair in document order, derives the
//! exported identifier, partitions declared parameters by location,
//! and resolves request and response types against fixed priority
//! lists so the output never depends on map iteration order.

use std::collections::HashMap;

use super::api::{HttpMethod, OperationIR, UrlPart};
use super::resolve::resolve;
use super::types::{TsPrimitive, TsType};
use super::utils::camel_case_segment;
use crate::openapi::spec::{OpenApiSpec, Operation, Response};

/// Success statuses, probed in priority order.
const SUCCESS_STATUS_PRIORITY: [&str; 3] = ["200", "201", "204"];

/// Content types the generated client understands, in priority order.
const CONTENT_TYPE_PRIORITY: [&str; 3] = [
    "application/pdf",
    "application/octet-stream",
    "application/json",
];

/// Compile every operation in the document.
///
/// Paths iterate in declaration order and methods in a fixed
/// get/post/put/patch/delete order within each path item. Path
/// templates are taken relative to the shared base URL.
pub fn compile_operations(spec: &OpenApiSpec, base_url: &str) -> Vec<OperationIR> {
    let mut operations = Vec::new();

    for (path, item) in &spec.paths {
        let relative = path.strip_prefix(base_url).unwrap_or(path);
        let methods = [
            (HttpMethod::Get, item.get.as_ref()),
            (HttpMethod::Post, item.post.as_ref()),
            (HttpMethod::Put, item.put.as_ref()),
            (HttpMethod::Patch, item.patch.as_ref()),
            (HttpMethod::Delete, item.delete.as_ref()),
        ];
        for (method, operation) in methods {
            if let Some(operation) = operation {
                operations.push(compile_operation(method, relative, operation));
            }
        }
    }

    operations
}

fn compile_operation(method: HttpMethod, path: &str, operation: &Operation) -> OperationIR {
    let name = operation
        .operation_id
        .clone()
        .unwrap_or_else(|| derive_operation_id(method.as_str(), path));

    let mut path_params = Vec::new();
    let mut query_params = Vec::new();
    if let Some(parameters) = &operation.parameters {
        for parameter in parameters {
            match parameter.location.as_str() {
                "path" => path_params.push(parameter.name.clone()),
                "query" => query_params.push(parameter.name.clone()),
                // Other locations never surface in the generated signature.
                _ => {}
            }
        }
    }

    let body = method.has_body().then(|| request_body_type(operation));
    let response = response_type(&operation.responses);

    OperationIR {
        name,
        method,
        url: parse_url_template(path),
        path_params,
        query_params,
        body,
        response,
    }
}

/// Derive a function identifier when the document declares no
/// operationId: lowercase method followed by camel-cased path
/// segments, with braced parameters contributing a `By` marker
/// (`get` + `/users/{id}` becomes `getUsersById`).
pub fn derive_operation_id(method: &str, path: &str) -> String {
    let mut id = method.to_string();
    for segment in path.split('/').filter(|s| !s.is_empty()) {
        if let Some(param) = segment.strip_prefix('{').and_then(|s| s.strip_suffix('}')) {
            id.push_str("By");
            id.push_str(&camel_case_segment(param));
        } else {
            id.push_str(&camel_case_segment(segment));
        }
    }
    id
}

/// Response type for an operation.
///
/// The first success status present in priority order decides the
/// outcome: no declared content means `void`, otherwise the first
/// matching content type's schema resolves and a miss falls back to
/// `any`.
fn response_type(responses: &HashMap<String, Response>) -> TsType {
    for status in SUCCESS_STATUS_PRIORITY {
        let Some(response) = responses.get(status) else {
            continue;
        };
        let Some(content) = &response.content else {
            return TsType::Primitive(TsPrimitive::Void);
        };
        for content_type in CONTENT_TYPE_PRIORITY {
            if let Some(media) = content.get(content_type) {
                if let Some(schema) = &media.schema {
                    return resolve(schema).ty;
                }
            }
        }
        return TsType::Primitive(TsPrimitive::Any);
    }
    TsType::Primitive(TsPrimitive::Any)
}

/// Request body type for body-carrying methods; `any` when the
/// operation declares no usable body.
fn request_body_type(operation: &Operation) -> TsType {
    if let Some(body) = &operation.request_body {
        if let Some(content) = &body.content {
            for content_type in CONTENT_TYPE_PRIORITY {
                if let Some(media) = content.get(content_type) {
                    if let Some(schema) = &media.schema {
                        return resolve(schema).ty;
                    }
                }
            }
        }
    }
    TsType::Primitive(TsPrimitive::Any)
}

/// Split a path template into static text and `{param}` slots.
fn parse_url_template(path: &str) -> Vec<UrlPart> {
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut in_param = false;
    let mut param_name = String::new();

    for c in path.chars() {
        if c == '{' {
            if !current.is_empty() {
                parts.push(UrlPart::Static(current.clone()));
                current.clear();
            }
            in_param = true;
            param_name.clear();
        } else if c == '}' {
            parts.push(UrlPart::Param(param_name.clone()));
            in_param = false;
        } else if in_param {
            param_name.push(c);
        } else {
            current.push(c);
        }
    }
    if !current.is_empty() {
        parts.push(UrlPart::Static(current));
    }

    parts
}
