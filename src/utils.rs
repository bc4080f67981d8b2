// src/utils.rs
use serde_json::Value;
use url::Url;

/// Get file extension in lowercase
pub fn get_file_extension(filename: &str) -> Option<String> {
    std::path::Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
}

/// Trailing path segment of a URL, used as the downloaded document's name
pub fn file_name_from_url(raw_url: &str) -> String {
    match Url::parse(raw_url) {
        Ok(url) => url
            .path_segments()
            .and_then(|mut segments| segments.next_back())
            .unwrap_or_default()
            .to_string(),
        Err(_) => raw_url.rsplit('/').next().unwrap_or(raw_url).to_string(),
    }
}

/// Falsy JSON values (`null`, `false`, zero, empty string/array/object) count as absent
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(fields) => !fields.is_empty(),
    }
}
