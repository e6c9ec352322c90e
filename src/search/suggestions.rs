use serde_json::Value;
use tracing::{debug, warn};

/// Index of the suggestion list in an OpenSearch array response
const ARRAY_RESULT_INDEX: usize = 1;

/// Parse a suggestions response body.
///
/// Array responses look like `["query", ["s1", "s2"], ...]`. Object responses
/// are engine specific and yield nothing. Malformed bodies yield nothing.
pub fn parse_suggestions(body: &str) -> Vec<String> {
    match serde_json::from_str::<Value>(body) {
        Ok(value) => parse_suggestions_value(&value),
        Err(err) => {
            warn!("Failed to parse suggestions response: {}", err);
            Vec::new()
        }
    }
}

pub fn parse_suggestions_value(value: &Value) -> Vec<String> {
    match value {
        Value::Array(items) => items
            .get(ARRAY_RESULT_INDEX)
            .and_then(Value::as_array)
            .map(|suggestions| {
                suggestions
                    .iter()
                    .map(|item| match item {
                        Value::String(text) => text.clone(),
                        other => other.to_string(),
                    })
                    .collect()
            })
            .unwrap_or_default(),
        Value::Object(_) => {
            debug!("Object suggestion responses are not supported");
            Vec::new()
        }
        _ => Vec::new(),
    }
}
