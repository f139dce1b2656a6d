//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - The flat list of every Vault tool, in registration order
//! - Name lookup and async dispatch (used by the HTTP transport)
//! - Tool metadata for listing

use std::sync::Arc;

use rmcp::model::{CallToolResult, Tool};
use serde_json::Value;
use tracing::{instrument, warn};

use super::definition::{ToolDefinition, VaultTool};
use super::definitions::{
    ConnectionSettingsAllTool, ConnectionSettingsUpdateTool, ConnectionsAddTool,
    ConnectionsAllTool, ConnectionsAuthorizeTool, ConnectionsCallbackTool, ConnectionsDeleteTool,
    ConnectionsExampleTool, ConnectionsImportTool, ConnectionsOneTool, ConnectionsRevokeTool,
    ConnectionsSchemaTool, ConnectionsTokenTool, ConnectionsUpdateTool, ConsumerRequestCountsAllTool,
    ConsumersAddTool, ConsumersAllTool, ConsumersDeleteTool, ConsumersOneTool, ConsumersUpdateTool,
    CustomFieldsAllTool, CustomMappingsAddTool, CustomMappingsDeleteTool, CustomMappingsOneTool,
    CustomMappingsUpdateTool, LogsAllTool, SessionsCreateTool,
};
use super::error::ToolError;
use crate::core::config::Config;

/// Every tool, in registration order.
///
/// This is the single source of truth for the available tools; the router
/// and the HTTP dispatch are both built from it. Names are not checked for
/// duplicates.
pub fn all_tools() -> Vec<ToolDefinition> {
    vec![
        ConnectionsImportTool::definition(),
        ConsumersAllTool::definition(),
        ConsumersAddTool::definition(),
        ConsumerRequestCountsAllTool::definition(),
        LogsAllTool::definition(),
        CustomMappingsDeleteTool::definition(),
        CustomMappingsOneTool::definition(),
        CustomMappingsUpdateTool::definition(),
        CustomMappingsAddTool::definition(),
        CustomFieldsAllTool::definition(),
        ConsumersUpdateTool::definition(),
        ConsumersDeleteTool::definition(),
        ConsumersOneTool::definition(),
        ConnectionsExampleTool::definition(),
        ConnectionsSchemaTool::definition(),
        ConnectionsTokenTool::definition(),
        ConnectionsRevokeTool::definition(),
        ConnectionsAddTool::definition(),
        ConnectionsDeleteTool::definition(),
        ConnectionsOneTool::definition(),
        ConnectionsUpdateTool::definition(),
        ConnectionSettingsAllTool::definition(),
        ConnectionSettingsUpdateTool::definition(),
        SessionsCreateTool::definition(),
        ConnectionsCallbackTool::definition(),
        ConnectionsAuthorizeTool::definition(),
        ConnectionsAllTool::definition(),
    ]
}

// ============================================================================
// Tool Registry
// ============================================================================

/// Tool registry - manages all available tools.
pub struct ToolRegistry {
    config: Arc<Config>,
    tools: Vec<ToolDefinition>,
}

impl ToolRegistry {
    /// Create a new tool registry.
    pub fn new(config: Arc<Config>) -> Self {
        Self {
            config,
            tools: all_tools(),
        }
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&str> {
        self.tools.iter().map(ToolDefinition::name).collect()
    }

    /// Get all tools as Tool models (metadata).
    pub fn get_all_tools() -> Vec<Tool> {
        all_tools().into_iter().map(|d| d.tool).collect()
    }

    /// First registered tool with the given name.
    pub fn find(&self, name: &str) -> Option<&ToolDefinition> {
        self.tools.iter().find(|d| d.name() == name)
    }

    /// Dispatch a tool call to the matching definition.
    ///
    /// Tool failures come back as error `CallToolResult`s; only an unknown
    /// name or a crashed blocking task is an `Err`.
    #[instrument(skip(self, arguments))]
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: Value,
    ) -> Result<CallToolResult, ToolError> {
        let Some(definition) = self.find(name) else {
            warn!("Unknown tool requested: {}", name);
            return Err(ToolError::not_found(name));
        };

        definition.call(arguments, self.config.clone()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::auth::AuthPlacement;
    use reqwest::Method;
    use std::collections::HashSet;

    fn test_config() -> Arc<Config> {
        Arc::new(Config::default())
    }

    #[test]
    fn test_registry_tool_names() {
        let registry = ToolRegistry::new(test_config());
        let names = registry.tool_names();
        assert_eq!(names.len(), 27);
        assert_eq!(names[0], "post_vault_connections_unified_api_service_id_import");
        assert_eq!(names[26], "get_vault_connections");
        assert!(names.contains(&"get_vault_consumers"));
        assert!(names.contains(&"post_vault_sessions"));
        assert!(names.contains(&"delete_vault_custom-mappings_unified_api_service_id_target_field_id"));

        let unique: HashSet<_> = names.iter().collect();
        assert_eq!(unique.len(), names.len());
    }

    #[test]
    fn test_find_definition() {
        let registry = ToolRegistry::new(test_config());
        let definition = registry.find("patch_vault_consumers_consumer_id").unwrap();
        assert_eq!(definition.method, Method::PATCH);
        assert_eq!(definition.path, "/vault/consumers/{consumer_id}");
        assert_eq!(definition.auth, AuthPlacement::Query);
        assert!(registry.find("unknown").is_none());
    }

    #[test]
    fn test_every_schema_lists_its_path_parameters() {
        for definition in all_tools() {
            let properties = definition.tool.input_schema["properties"]
                .as_object()
                .unwrap();
            let required = definition.tool.input_schema["required"].as_array().unwrap();
            for segment in definition.path.split('/') {
                if let Some(name) = segment.strip_prefix('{').and_then(|s| s.strip_suffix('}')) {
                    assert!(properties.contains_key(name), "{} lacks {}", definition.name(), name);
                    assert!(
                        required.iter().any(|r| r.as_str() == Some(name)),
                        "{} does not require {}",
                        definition.name(),
                        name
                    );
                }
            }
        }
    }

    #[tokio::test]
    async fn test_registry_call_unknown() {
        let registry = ToolRegistry::new(test_config());
        let result = registry.call_tool("unknown", serde_json::json!({})).await;
        assert!(matches!(result, Err(ToolError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_registry_call_reports_missing_parameter() {
        let registry = ToolRegistry::new(test_config());
        let result = registry
            .call_tool("get_vault_consumers_consumer_id", serde_json::json!({}))
            .await
            .unwrap();
        assert_eq!(result.is_error, Some(true));
    }
}
