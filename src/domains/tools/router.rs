//! Tool Router - builds the rmcp ToolRouter from the registry.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, ToolRouter},
};

use super::handlers::call_with_recovery;
use super::registry::ToolRegistry;

/// Build the tool router with one route per registered tool.
///
/// Every route recovers from handler panics, so a failing call never takes
/// the server down.
pub fn build_tool_router<S>(registry: &ToolRegistry) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    registry
        .handlers()
        .iter()
        .fold(ToolRouter::new(), |router, handler| {
            let handler = handler.clone();
            let route = ToolRoute::new_dyn(handler.descriptor(), move |ctx: ToolCallContext<'_, S>| {
                let args = ctx.arguments.clone().unwrap_or_default();
                let handler = handler.clone();
                async move { Ok::<_, McpError>(call_with_recovery(handler.as_ref(), args).await) }
                    .boxed()
            });
            router.with_route(route)
        })
}
