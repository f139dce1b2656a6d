//! Tool Router - builds the rmcp ToolRouter from the registry.
//!
//! Every registered definition becomes one route whose handler runs the
//! blocking Vault call on tokio's blocking pool.

use std::sync::Arc;

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, ToolRouter},
};
use serde_json::Value;

use super::definition::ToolDefinition;
use super::registry::all_tools;
use crate::core::config::Config;

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(config: Arc<Config>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    all_tools()
        .into_iter()
        .fold(ToolRouter::new(), |router, definition| {
            router.with_route(create_route(definition, config.clone()))
        })
}

/// Create a ToolRoute for STDIO transport.
fn create_route<S>(definition: ToolDefinition, config: Arc<Config>) -> ToolRoute<S>
where
    S: Send + Sync + 'static,
{
    ToolRoute::new_dyn(definition.tool.clone(), move |ctx: ToolCallContext<'_, S>| {
        let arguments = Value::Object(ctx.arguments.clone().unwrap_or_default());
        let definition = definition.clone();
        let config = config.clone();
        async move {
            definition
                .call(arguments, config)
                .await
                .map_err(|e| McpError::internal_error(e.to_string(), None))
        }
        .boxed()
    })
}

#[cfg(test)]
mod tests {
    use super::super::registry::ToolRegistry;
    use super::*;

    struct TestServer {}

    fn test_config() -> Arc<Config> {
        Arc::new(Config::default())
    }

    #[test]
    fn test_build_router() {
        let router: ToolRouter<TestServer> = build_tool_router(test_config());
        let tools = router.list_all();
        assert_eq!(tools.len(), 27);

        let names: Vec<_> = tools.iter().map(|t| t.name.as_ref()).collect();
        assert!(names.contains(&"get_vault_consumers"));
        assert!(names.contains(&"patch_vault_connections_unified_api_service_id"));
        assert!(names.contains(&"get_vault_logs"));
        assert!(names.contains(&"post_vault_sessions"));
    }

    #[test]
    fn test_registry_matches_router() {
        let config = test_config();
        let registry = ToolRegistry::new(config.clone());
        let registry_names = registry.tool_names();

        let router: ToolRouter<TestServer> = build_tool_router(config);
        let router_tools = router.list_all();
        let router_names: Vec<_> = router_tools.iter().map(|t| t.name.as_ref()).collect();

        assert_eq!(registry_names.len(), router_names.len());
        for name in registry_names {
            assert!(router_names.contains(&name));
        }
    }
}
