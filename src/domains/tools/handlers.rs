//! The handler seam between tool definitions and the MCP host.
//!
//! Each tool implements [`ToolHandler`]; the registry and router only ever
//! talk to tools through this trait.

use std::panic::AssertUnwindSafe;

use futures::FutureExt;
use rmcp::model::{CallToolResult, Content, JsonObject, Tool};
use tracing::error;

/// A tool that can be advertised to and called by an MCP host.
#[async_trait::async_trait]
pub trait ToolHandler: Send + Sync {
    /// The immutable descriptor (name, description, input schema).
    fn descriptor(&self) -> Tool;

    /// Handle one call. Failures are reported in the result, never as `Err`.
    async fn call(&self, arguments: JsonObject) -> CallToolResult;
}

/// Run `handler`, turning a panic into an error call result.
pub async fn call_with_recovery(handler: &dyn ToolHandler, arguments: JsonObject) -> CallToolResult {
    match AssertUnwindSafe(handler.call(arguments)).catch_unwind().await {
        Ok(result) => result,
        Err(panic) => {
            let name = handler.descriptor().name;
            let reason = panic
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| panic.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "unknown panic".to_string());
            error!("Tool {} panicked: {}", name, reason);
            CallToolResult::error(vec![Content::text(format!(
                "panic recovered in {} tool handler: {}",
                name, reason
            ))])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::RawContent;
    use std::sync::Arc;

    struct PanickingTool;

    #[async_trait::async_trait]
    impl ToolHandler for PanickingTool {
        fn descriptor(&self) -> Tool {
            Tool {
                name: "explode".into(),
                description: Some("always panics".into()),
                input_schema: Arc::new(JsonObject::new()),
                annotations: None,
                output_schema: None,
                icons: None,
                meta: None,
                title: None,
            }
        }

        async fn call(&self, _arguments: JsonObject) -> CallToolResult {
            panic!("boom");
        }
    }

    #[tokio::test]
    async fn test_panic_becomes_error_result() {
        let result = call_with_recovery(&PanickingTool, JsonObject::new()).await;
        assert_eq!(result.is_error, Some(true));
        if let RawContent::Text(text) = &result.content[0].raw {
            assert_eq!(text.text, "panic recovered in explode tool handler: boom");
        } else {
            panic!("expected text content");
        }
    }
}
