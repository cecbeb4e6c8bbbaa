//! Helpers shared by the Alpha Vantage tools: argument extraction and
//! result construction.

use rmcp::model::{CallToolResult, Content, JsonObject};
use serde_json::Value;
use tracing::warn;

use crate::domains::tools::ToolError;

/// Prefix prepended to every relayed upstream body.
pub const DATA_PREFIX: &str = "Data: ";

/// Extract a required, non-empty string argument.
pub fn require_string<'a>(arguments: &'a JsonObject, name: &str) -> Result<&'a str, ToolError> {
    match arguments.get(name) {
        None | Some(Value::Null) => Err(ToolError::validation(format!(
            "required argument \"{}\" not found",
            name
        ))),
        Some(Value::String(s)) if s.is_empty() => Err(ToolError::validation(format!(
            "argument \"{}\" must not be empty",
            name
        ))),
        Some(Value::String(s)) => Ok(s.as_str()),
        Some(_) => Err(ToolError::validation(format!(
            "argument \"{}\" is not a string",
            name
        ))),
    }
}

/// Extract an optional string argument, falling back to `default` when it is
/// absent or not a string. The value is not checked against any enum.
pub fn string_or<'a>(arguments: &'a JsonObject, name: &str, default: &'a str) -> &'a str {
    arguments
        .get(name)
        .and_then(Value::as_str)
        .unwrap_or(default)
}

/// Wrap a relayed upstream body as a success result.
pub fn data_result(body: &str) -> CallToolResult {
    CallToolResult::success(vec![Content::text(format!("{}{}", DATA_PREFIX, body))])
}

/// Create an error result from a tool error.
pub fn error_result(err: &ToolError) -> CallToolResult {
    warn!("{}", err);
    CallToolResult::error(vec![Content::text(err.to_string())])
}

/// Map a fetch outcome to a call result.
pub fn into_call_result(outcome: Result<String, ToolError>) -> CallToolResult {
    match outcome {
        Ok(body) => data_result(&body),
        Err(e) => error_result(&e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::RawContent;
    use serde_json::json;

    fn args(value: Value) -> JsonObject {
        value.as_object().cloned().unwrap_or_default()
    }

    fn text_of(result: &CallToolResult) -> &str {
        match &result.content[0].raw {
            RawContent::Text(text) => &text.text,
            _ => panic!("expected text content"),
        }
    }

    #[test]
    fn test_require_string_present() {
        let arguments = args(json!({ "symbol": "IBM" }));
        assert_eq!(require_string(&arguments, "symbol"), Ok("IBM"));
    }

    #[test]
    fn test_require_string_missing() {
        let arguments = args(json!({}));
        assert_eq!(
            require_string(&arguments, "symbol"),
            Err(ToolError::Validation(
                "required argument \"symbol\" not found".to_string()
            ))
        );
    }

    #[test]
    fn test_require_string_null_counts_as_missing() {
        let arguments = args(json!({ "symbol": null }));
        assert!(matches!(
            require_string(&arguments, "symbol"),
            Err(ToolError::Validation(_))
        ));
    }

    #[test]
    fn test_require_string_rejects_empty_and_non_string() {
        let empty = args(json!({ "symbol": "" }));
        assert!(matches!(require_string(&empty, "symbol"), Err(ToolError::Validation(_))));

        let number = args(json!({ "symbol": 42 }));
        assert_eq!(
            require_string(&number, "symbol"),
            Err(ToolError::Validation(
                "argument \"symbol\" is not a string".to_string()
            ))
        );
    }

    #[test]
    fn test_string_or() {
        let arguments = args(json!({ "outputsize": "bogus", "other": 3 }));
        assert_eq!(string_or(&arguments, "outputsize", "compact"), "bogus");
        assert_eq!(string_or(&arguments, "other", "compact"), "compact");
        assert_eq!(string_or(&arguments, "missing", "compact"), "compact");
    }

    #[test]
    fn test_data_result_prefix() {
        let result = data_result(r#"{"a":1}"#);
        assert_eq!(result.is_error, Some(false));
        assert_eq!(text_of(&result), r#"Data: {"a":1}"#);
    }

    #[test]
    fn test_error_result_is_error() {
        let result = into_call_result(Err(ToolError::Io("eof".to_string())));
        assert_eq!(result.is_error, Some(true));
        assert_eq!(text_of(&result), "unable to read request response: eof");
    }
}
