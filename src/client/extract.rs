//! Trailing JSON extraction from free-form model output
//!
//! Models tend to put reasoning or chatter before their answer. Scanning from
//! the end for the last `{` and the last `}` isolates the final answer object
//! without requiring JSON-only output.

use serde_json::{Map, Value};

/// A parsed JSON object
pub type JsonObject = Map<String, Value>;

/// Parse the substring from the last `{` through the last `}`
///
/// Returns `None` if either brace is missing, the `}` precedes the `{`, the
/// substring does not parse, or it parses to something other than an object.
pub fn extract_json(raw: &str) -> Option<JsonObject> {
    let start = raw.rfind('{')?;
    let end = raw.rfind('}')?;
    if end < start {
        return None;
    }

    match serde_json::from_str::<Value>(&raw[start..=end]) {
        Ok(Value::Object(object)) => Some(object),
        Ok(other) => {
            tracing::debug!(value = %other, "trailing JSON is not an object");
            None
        }
        Err(e) => {
            tracing::debug!(error = %e, "trailing JSON failed to parse");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_prefers_trailing_object() {
        let raw = "chatter {\"a\":1} more chatter {\"card\":\"Foo\"}";
        let object = extract_json(raw).unwrap();
        assert_eq!(Value::Object(object), json!({"card": "Foo"}));
    }

    #[test]
    fn test_reasoning_prefix() {
        let raw = "<think>\nThe funniest is clearly #2.\n</think>\n\n{\"winner\": \"Glue\", \"quip\": \"Sticky!\"}\n";
        let object = extract_json(raw).unwrap();
        assert_eq!(object["winner"], "Glue");
        assert_eq!(object["quip"], "Sticky!");
    }

    #[test]
    fn test_none_for_empty() {
        assert!(extract_json("").is_none());
    }

    #[test]
    fn test_none_for_unbalanced_braces() {
        assert!(extract_json("{\"card\": \"Foo\"").is_none());
        assert!(extract_json("\"card\": \"Foo\"}").is_none());
    }

    #[test]
    fn test_stray_leading_brace_is_ignored() {
        let object = extract_json("{{\"card\": \"Foo\"}").unwrap();
        assert_eq!(object["card"], "Foo");
    }

    #[test]
    fn test_none_when_close_precedes_open() {
        assert!(extract_json("} then {").is_none());
        assert!(extract_json("{\"card\":\"Foo\"} trailing {").is_none());
    }

    #[test]
    fn test_nested_object_is_not_recovered() {
        // Last `{` is the inner one, so the slice is `{"x":1}}` and fails.
        assert!(extract_json("{\"card\": {\"x\":1}}").is_none());
    }

    #[test]
    fn test_non_ascii_text() {
        let raw = "Voilà — ma réponse : {\"card\":\"Crème brûlée\"}";
        assert_eq!(extract_json(raw).unwrap()["card"], "Crème brûlée");
    }
}
