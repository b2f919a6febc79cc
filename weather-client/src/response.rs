use std::collections::HashMap;

use serde_json::Value;

/// Raw capture of one HTTP exchange with the weather API.
///
/// Error statuses are data here, not errors: a 404 or 401 comes back as a
/// normal `ApiResponse` so checks can assert against it. Instances live for
/// the duration of one check and are then discarded.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    status: u16,
    headers: HashMap<String, String>,
    body: String,
}

impl ApiResponse {
    /// Build a response from explicit parts. Header names are lowercased;
    /// duplicate names are last-write-wins.
    pub fn new(status: u16, headers: HashMap<String, String>, body: impl Into<String>) -> Self {
        let headers = headers
            .into_iter()
            .map(|(name, value)| (name.to_ascii_lowercase(), value))
            .collect();

        Self { status, headers, body: body.into() }
    }

    /// Consume a `reqwest` response into an owned capture.
    ///
    /// Fails only if the body cannot be read; non-UTF-8 header values are
    /// skipped and multi-valued headers collapse to the last value seen
    /// (the weather API emits neither).
    pub async fn from_reqwest(res: reqwest::Response) -> Result<Self, reqwest::Error> {
        let status = res.status().as_u16();

        let headers = res
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value.to_str().ok().map(|v| (name.as_str().to_ascii_lowercase(), v.to_string()))
            })
            .collect();

        let body = res.text().await?;

        Ok(Self { status, headers, body })
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    /// Header value by case-insensitive name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(&name.to_ascii_lowercase()).map(String::as_str)
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    /// Parse the body as JSON.
    pub fn json(&self) -> Result<Value, serde_json::Error> {
        serde_json::from_str(&self.body)
    }

    /// Look up a dot-separated path in the JSON body, e.g. `main.temp` or
    /// `weather.0.description` (numeric segments index into arrays).
    ///
    /// Returns `None` if the body is not JSON or the path misses.
    pub fn json_path(&self, path: &str) -> Option<Value> {
        let root = self.json().ok()?;
        lookup(&root, path).cloned()
    }
}

/// Walk `path` through `value`, treating numeric segments as array indices.
pub fn lookup<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = value;
    for segment in path.split('.') {
        current = match current {
            Value::Object(map) => map.get(segment)?,
            Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }
    Some(current)
}
