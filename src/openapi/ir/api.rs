//! API-level IR for compiled operations.
//!
//! One [`OperationIR`] per (path, method) pair, carrying everything the
//! endpoints module needs: identifier, partitioned parameters, body and
//! response types, and the URL template.

use super::types::TsType;

/// HTTP method
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    /// Lowercase method name, as used in derived operation identifiers.
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "get",
            HttpMethod::Post => "post",
            HttpMethod::Put => "put",
            HttpMethod::Patch => "patch",
            HttpMethod::Delete => "delete",
        }
    }

    /// Method property on the generated client object. `delete` is
    /// shortened to `del` there because `delete` is a reserved word in
    /// object shorthand position.
    pub fn client_method(&self) -> &'static str {
        match self {
            HttpMethod::Get => "get",
            HttpMethod::Post => "post",
            HttpMethod::Put => "put",
            HttpMethod::Patch => "patch",
            HttpMethod::Delete => "del",
        }
    }

    /// Whether operations with this method take a request body.
    pub fn has_body(&self) -> bool {
        matches!(self, HttpMethod::Post | HttpMethod::Put | HttpMethod::Patch)
    }
}

/// URL template part
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UrlPart {
    /// Static string
    Static(String),
    /// Parameter interpolation: `{id}` -> `${id}`
    Param(String),
}

/// One compiled operation.
#[derive(Debug, Clone)]
pub struct OperationIR {
    /// Exported function identifier (explicit operationId or derived)
    pub name: String,
    /// HTTP method
    pub method: HttpMethod,
    /// Path relative to the extracted base URL, split into template parts
    pub url: Vec<UrlPart>,
    /// Path parameter names, declaration order
    pub path_params: Vec<String>,
    /// Query parameter names, declaration order
    pub query_params: Vec<String>,
    /// Request body type; present only for body-carrying methods
    pub body: Option<TsType>,
    /// Response type carried inside `ApiResponse<...>`
    pub response: TsType,
}
