//! Rendering of the three generated module texts.
//!
//! Purely textual assembly: ordering, naming, and typing decisions are
//! all made upstream, this module only formats them.

use super::api::{OperationIR, UrlPart};
use super::emit::Emit;
use super::types::{SchemaDef, TsPrimitive, TsProp, TsType};

/// Render the schema module: dependency-ordered validator definitions,
/// each paired with its inferred type alias.
pub fn codegen_schemas(defs: &[SchemaDef]) -> String {
    let mut out = String::from("import { z } from 'zod';\n\n");
    let definitions: Vec<String> = defs.iter().map(Emit::emit).collect();
    out.push_str(&definitions.join("\n\n"));
    out.push('\n');
    out
}

/// Render the endpoints module: one exported async wrapper per
/// operation, delegating to the shared transport client.
pub fn codegen_endpoints(operations: &[OperationIR], base_url: &str) -> String {
    let mut out = String::from(
        "import apiClient, { RequestOptions, ApiResponse } from './client.api';\n",
    );
    out.push_str("import * as Schemas from './schemas.api';\n\n");
    out.push_str(&format!("export const BASE_URL = '{base_url}';\n\n"));

    for operation in operations {
        out.push_str(&codegen_endpoint_function(operation));
    }

    out
}

fn codegen_endpoint_function(operation: &OperationIR) -> String {
    let response = operation.response.clone().qualify("Schemas").emit();

    // Required parameters first, the optional query bag last.
    let mut params: Vec<String> = operation
        .path_params
        .iter()
        .map(|name| format!("{name}: string"))
        .collect();
    if let Some(body) = &operation.body {
        params.push(format!("body: {}", body.clone().qualify("Schemas").emit()));
    }
    params.push("options: RequestOptions".to_string());
    if !operation.query_params.is_empty() {
        params.push(format!("params?: {}", query_bag_type(&operation.query_params)));
    }

    let mut out = format!(
        "export async function {}({}): Promise<ApiResponse<{}>> {{\n",
        operation.name,
        params.join(", "),
        response
    );

    if !operation.query_params.is_empty() {
        out.push_str("  if (params) {\n");
        out.push_str("    options.params = { ...options.params, ...params };\n");
        out.push_str("  }\n\n");
    }

    out.push_str(&format!(
        "  return apiClient.{}<{}>({}",
        operation.method.client_method(),
        response,
        url_template(&operation.url)
    ));
    if operation.body.is_some() {
        out.push_str(", body");
    }
    out.push_str(", options);\n}\n\n");

    out
}

/// Query parameters surface as one optional bag of string fields.
fn query_bag_type(names: &[String]) -> String {
    let props = names
        .iter()
        .map(|name| TsProp {
            name: name.clone(),
            ty: TsType::Primitive(TsPrimitive::String),
            optional: true,
        })
        .collect();
    TsType::Object(props).emit()
}

/// Backtick template literal with `${param}` interpolation slots.
fn url_template(parts: &[UrlPart]) -> String {
    let mut template = String::from("`");
    for part in parts {
        match part {
            UrlPart::Static(text) => template.push_str(text),
            UrlPart::Param(name) => {
                template.push_str("${");
                template.push_str(name);
                template.push('}');
            }
        }
    }
    template.push('`');
    template
}

/// Render the transport client module. A fixed contract shared by every
/// generated endpoint; only the base URL comes from the document.
pub fn codegen_client(base_url: &str) -> String {
    let mut out = format!("const API_BASE_URL = \"{base_url}\";\n\n");
    out.push_str(CLIENT_BODY);
    out
}

const CLIENT_BODY: &str = r#"type RequiredHeaders = {
  consumer: string;
};

export type RequestOptions = {
  params?: Record<string, string>;
  headers: RequiredHeaders & Record<string, string>;
  body?: any;
};

export type ApiResponse<T> = {
  data: T | null;
  status: number;
  headers: Headers;
};

// shared request function
async function request<T>(
  method: string,
  endpoint: string,
  options: RequestOptions
): Promise<ApiResponse<T>> {
  const url = new URL(API_BASE_URL + endpoint, window.location.origin);

  if (options.params) {
    Object.entries(options.params).forEach(([key, value]) => {
      url.searchParams.append(key, value);
    });
  }

  const headers: Record<string, string> = {
    "Content-Type": "application/json",
    correlationid: uuid(),
    ...options.headers,
  };

  const config: RequestInit = {
    method,
    headers,
  };

  if (options.body) {
    config.body =
      headers["Content-Type"] === "application/json"
        ? JSON.stringify(options.body)
        : options.body;
  }

  const response = await fetch(url.toString(), config);

  const apiResponse: ApiResponse<T> = {
    data: null,
    status: response.status,
    headers: response.headers,
  };

  if (response.status !== 204) {
    apiResponse.data = await response.json();
  }

  return apiResponse;
}

// exported interface
function get<T>(
  endpoint: string,
  options: RequestOptions
): Promise<ApiResponse<T>> {
  return request<T>("GET", endpoint, options);
}

function post<T>(
  endpoint: string,
  body: any,
  options: RequestOptions
): Promise<ApiResponse<T>> {
  return request<T>("POST", endpoint, { ...options, body });
}

function put<T>(
  endpoint: string,
  body: any,
  options: RequestOptions
): Promise<ApiResponse<T>> {
  return request<T>("PUT", endpoint, { ...options, body });
}

function patch<T>(
  endpoint: string,
  body: any,
  options: RequestOptions
): Promise<ApiResponse<T>> {
  return request<T>("PATCH", endpoint, { ...options, body });
}

function del<T>(
  endpoint: string,
  options: RequestOptions
): Promise<ApiResponse<T>> {
  return request<T>("DELETE", endpoint, options);
}

export default { get, post, put, patch, del };

function uuid(): string {
  return crypto.randomUUID();
}
"#;
