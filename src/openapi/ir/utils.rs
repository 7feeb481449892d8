//! Common utilities for code generation.
//!
//! Shared helpers for identifier casing, property-key quoting, and
//! base-path extraction.

use super::types::TsLiteral;
use crate::openapi::spec::EnumValue;

/// Check if a property name needs quoting in an object shape.
///
/// Returns true if the name:
/// - Is empty
/// - Doesn't start with a letter, underscore, or dollar sign
/// - Contains characters other than alphanumeric, underscore, or dollar sign
pub fn needs_quoting(name: &str) -> bool {
    name.is_empty()
        || !name
            .chars()
            .next()
            .map(|c| c.is_ascii_alphabetic() || c == '_' || c == '$')
            .unwrap_or(false)
        || !name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

/// Escape a string for use in JavaScript/TypeScript string literals.
/// Escapes backslashes and double quotes.
pub fn escape_js_string(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Quote a property key if it is not a valid bare identifier.
pub fn quote_if_needed(name: &str) -> String {
    if needs_quoting(name) {
        format!("\"{}\"", escape_js_string(name))
    } else {
        name.to_string()
    }
}

/// Capitalize the first letter of a string.
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}

/// Camel-case one path segment: split on non-alphanumeric separators
/// and capitalize each piece (`user-profiles` -> `UserProfiles`).
pub fn camel_case_segment(segment: &str) -> String {
    segment
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|piece| !piece.is_empty())
        .map(capitalize_first)
        .collect()
}

/// Longest common character prefix of a set of strings.
pub fn find_common_prefix(strings: &[&str]) -> String {
    let Some(first) = strings.first() else {
        return String::new();
    };
    let mut prefix: &str = first;
    for s in &strings[1..] {
        while !s.starts_with(prefix) {
            let mut chars = prefix.chars();
            chars.next_back();
            prefix = chars.as_str();
            if prefix.is_empty() {
                return String::new();
            }
        }
    }
    prefix.to_string()
}

/// Common base path shared by every path template, without a trailing
/// slash. Emitted as the BASE_URL of the generated client.
pub fn extract_common_base_path(paths: &[&str]) -> String {
    let prefix = find_common_prefix(paths);
    match prefix.strip_suffix('/') {
        Some(trimmed) => trimmed.to_string(),
        None => prefix,
    }
}

/// Convert an OpenAPI enum value to a TypeScript literal.
pub fn enum_value_to_literal(v: &EnumValue) -> TsLiteral {
    match v {
        EnumValue::String(s) => TsLiteral::String(s.clone()),
        EnumValue::Integer(n) => TsLiteral::Int(*n),
        EnumValue::Float(f) => TsLiteral::Number(*f),
        EnumValue::Bool(b) => TsLiteral::Bool(*b),
        EnumValue::Null => TsLiteral::Null,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_needs_quoting() {
        // Valid identifiers
        assert!(!needs_quoting("foo"));
        assert!(!needs_quoting("_foo"));
        assert!(!needs_quoting("$foo"));
        assert!(!needs_quoting("foo123"));
        assert!(!needs_quoting("camelCase"));

        // Need quoting
        assert!(needs_quoting(""));
        assert!(needs_quoting("123foo"));
        assert!(needs_quoting("foo-bar"));
        assert!(needs_quoting("foo.bar"));
        assert!(needs_quoting("foo bar"));
        assert!(needs_quoting("foo:bar"));
    }

    #[test]
    fn test_escape_js_string() {
        assert_eq!(escape_js_string("hello"), "hello");
        assert_eq!(escape_js_string("hel\"lo"), "hel\\\"lo");
        assert_eq!(escape_js_string("hel\\lo"), "hel\\\\lo");
    }

    #[test]
    fn test_quote_if_needed() {
        assert_eq!(quote_if_needed("foo"), "foo");
        assert_eq!(quote_if_needed("foo-bar"), "\"foo-bar\"");
        assert_eq!(quote_if_needed("123"), "\"123\"");
    }

    #[test]
    fn test_capitalize_first() {
        assert_eq!(capitalize_first("foo"), "Foo");
        assert_eq!(capitalize_first(""), "");
        assert_eq!(capitalize_first("a"), "A");
        assert_eq!(capitalize_first("ABC"), "ABC");
    }

    #[test]
    fn test_camel_case_segment() {
        assert_eq!(camel_case_segment("users"), "Users");
        assert_eq!(camel_case_segment("user-profiles"), "UserProfiles");
        assert_eq!(camel_case_segment("item_id"), "ItemId");
        assert_eq!(camel_case_segment("v2"), "V2");
        assert_eq!(camel_case_segment(""), "");
    }

    #[test]
    fn test_find_common_prefix() {
        assert_eq!(find_common_prefix(&[]), "");
        assert_eq!(find_common_prefix(&["/api/users"]), "/api/users");
        assert_eq!(find_common_prefix(&["/api/users", "/api/items"]), "/api/");
        assert_eq!(find_common_prefix(&["/a", "/b"]), "/");
        assert_eq!(find_common_prefix(&["/a", "xyz"]), "");
    }

    #[test]
    fn test_extract_common_base_path() {
        assert_eq!(extract_common_base_path(&[]), "");
        assert_eq!(
            extract_common_base_path(&["/api/users", "/api/items"]),
            "/api"
        );
        assert_eq!(
            extract_common_base_path(&["/api/v1/users", "/api/v1/users/{id}"]),
            "/api/v1/users"
        );
        assert_eq!(extract_common_base_path(&["/users", "/items"]), "");
    }
}
