//! Shared validation vocabulary for weather API responses.
//!
//! Every check expresses its success and error contracts through these
//! helpers instead of hand-rolled assertions, so a contract change lands in
//! one place. Each helper is all-or-nothing: the first failed expectation is
//! reported with expected-vs-actual detail and nothing after it runs.

use serde_json::Value;
use thiserror::Error;

use crate::response::{ApiResponse, lookup};

const JSON_CONTENT_TYPE: &str = "application/json";

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("expected status {expected}, got {actual}")]
    Status { expected: u16, actual: u16 },

    #[error("expected header '{name}' to contain {expected:?}, got {actual:?}")]
    Header { name: String, expected: String, actual: Option<String> },

    #[error("response body is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("expected field '{path}' to be present and non-null")]
    MissingField { path: String },

    #[error("expected field '{path}' to equal {expected}, got {actual}")]
    FieldValue { path: String, expected: Value, actual: Value },

    #[error("expected field '{path}' to contain {expected:?}, got {actual}")]
    FieldContains { path: String, expected: String, actual: Value },

    #[error("expected field '{path}' to be a non-empty array, got {actual}")]
    EmptyArray { path: String, actual: Value },
}

/// Fail unless the status code matches.
pub fn assert_status(response: &ApiResponse, expected: u16) -> Result<(), ValidationError> {
    if response.status() != expected {
        return Err(ValidationError::Status { expected, actual: response.status() });
    }
    Ok(())
}

/// Fail unless the named header is present and contains `expected` as a
/// substring.
pub fn assert_header_contains(
    response: &ApiResponse,
    name: &str,
    expected: &str,
) -> Result<(), ValidationError> {
    match response.header(name) {
        Some(value) if value.contains(expected) => Ok(()),
        actual => Err(ValidationError::Header {
            name: name.to_string(),
            expected: expected.to_string(),
            actual: actual.map(str::to_owned),
        }),
    }
}

/// The standard success contract: 200 and a JSON content type.
pub fn assert_success(response: &ApiResponse) -> Result<(), ValidationError> {
    assert_status(response, 200)?;
    assert_header_contains(response, "content-type", JSON_CONTENT_TYPE)
}

/// The standard error contract: the expected status, and a JSON `message`
/// field containing `message_contains`.
///
/// Assumes the upstream error schema (an object with a `message` field);
/// don't point this at responses shaped differently.
pub fn assert_error(
    response: &ApiResponse,
    expected_status: u16,
    message_contains: &str,
) -> Result<(), ValidationError> {
    assert_status(response, expected_status)?;
    let body = response.json()?;
    assert_path_contains(&body, "message", message_contains)
}

/// Full shape contract for a by-name success response.
pub fn assert_standard_weather(
    response: &ApiResponse,
    expected_city: &str,
) -> Result<(), ValidationError> {
    assert_success(response)?;

    let body = response.json()?;
    assert_path_eq(&body, "name", &Value::from(expected_city))?;
    assert_path_eq(&body, "cod", &Value::from(200))?;
    assert_path_present(&body, "main")?;
    assert_path_present(&body, "main.temp")?;
    assert_path_present(&body, "main.humidity")?;
    assert_non_empty_array(&body, "weather")?;
    assert_path_present(&body, "weather.0.main")?;
    assert_path_present(&body, "weather.0.description")
}

/// Shape contract for a by-coordinates success response.
///
/// Exact coordinate values are not asserted here: upstream may snap to the
/// nearest known station. Callers comparing coordinates should allow a
/// tolerance of about one degree.
pub fn assert_coordinate_weather(response: &ApiResponse) -> Result<(), ValidationError> {
    assert_success(response)?;

    let body = response.json()?;
    assert_path_present(&body, "coord")?;
    assert_path_present(&body, "name")?;
    assert_path_present(&body, "main.temp")
}

fn assert_path_present(body: &Value, path: &str) -> Result<(), ValidationError> {
    match lookup(body, path) {
        Some(value) if !value.is_null() => Ok(()),
        _ => Err(ValidationError::MissingField { path: path.to_string() }),
    }
}

fn assert_path_eq(body: &Value, path: &str, expected: &Value) -> Result<(), ValidationError> {
    let actual =
        lookup(body, path).ok_or_else(|| ValidationError::MissingField { path: path.to_string() })?;

    if actual != expected {
        return Err(ValidationError::FieldValue {
            path: path.to_string(),
            expected: expected.clone(),
            actual: actual.clone(),
        });
    }
    Ok(())
}

fn assert_path_contains(body: &Value, path: &str, expected: &str) -> Result<(), ValidationError> {
    let actual =
        lookup(body, path).ok_or_else(|| ValidationError::MissingField { path: path.to_string() })?;

    match actual.as_str() {
        Some(s) if s.contains(expected) => Ok(()),
        _ => Err(ValidationError::FieldContains {
            path: path.to_string(),
            expected: expected.to_string(),
            actual: actual.clone(),
        }),
    }
}

fn assert_non_empty_array(body: &Value, path: &str) -> Result<(), ValidationError> {
    let actual =
        lookup(body, path).ok_or_else(|| ValidationError::MissingField { path: path.to_string() })?;

    match actual.as_array() {
        Some(items) if !items.is_empty() => Ok(()),
        _ => Err(ValidationError::EmptyArray { path: path.to_string(), actual: actual.clone() }),
    }
}
