//! OpenAPI document loading.
//!
//! The generate command accepts either a URL or a local file path. URLs
//! are fetched over HTTP, paths are read from disk, and both feed the
//! same JSON parser.

use thiserror::Error;

use crate::openapi::OpenApiSpec;

/// Failure while acquiring or parsing an OpenAPI document.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read OpenAPI document: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to fetch OpenAPI document: {0}")]
    Http(#[from] reqwest::Error),
    #[error("failed to parse OpenAPI document: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Load an OpenAPI document from a URL or a local file path.
pub async fn load_spec(input: &str) -> Result<OpenApiSpec, LoadError> {
    let text = if is_url(input) {
        tracing::debug!("fetching OpenAPI document from {input}");
        reqwest::get(input).await?.error_for_status()?.text().await?
    } else {
        tracing::debug!("reading OpenAPI document from {input}");
        std::fs::read_to_string(input)?
    };
    Ok(OpenApiSpec::from_json(&text)?)
}

fn is_url(input: &str) -> bool {
    url::Url::parse(input).is_ok()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use std::io::Write as _;

    use super::*;

    #[test]
    fn test_is_url() {
        assert!(is_url("https://example.com/openapi.json"));
        assert!(is_url("http://localhost:8080/spec"));
        assert!(!is_url("./openapi.json"));
        assert!(!is_url("/tmp/openapi.json"));
        assert!(!is_url("openapi.json"));
    }

    #[tokio::test]
    async fn test_load_spec_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(br#"{"paths": {"/api/items": {"get": {"responses": {}}}}}"#)
            .unwrap();

        let spec = load_spec(file.path().to_str().unwrap()).await.unwrap();
        assert!(spec.paths.contains_key("/api/items"));
    }

    #[tokio::test]
    async fn test_load_spec_missing_file() {
        let err = load_spec("/nonexistent/openapi.json").await.unwrap_err();
        assert!(matches!(err, LoadError::Io(_)));
    }

    #[tokio::test]
    async fn test_load_spec_invalid_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"not json").unwrap();

        let err = load_spec(file.path().to_str().unwrap()).await.unwrap_err();
        assert!(matches!(err, LoadError::Parse(_)));
        assert!(err.to_string().contains("failed to parse"));
    }
}
