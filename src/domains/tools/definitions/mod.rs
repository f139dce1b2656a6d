//! Tool definitions module.
//!
//! One file per Vault endpoint, grouped by API area. Each tool is a
//! zero-sized type implementing [`VaultTool`](super::VaultTool).

pub mod common;
pub mod connections;
pub mod consumers;
pub mod custom_mappings;
pub mod logs;
pub mod sessions;

pub use connections::{
    ConnectionSettingsAllTool, ConnectionSettingsUpdateTool, ConnectionsAddTool,
    ConnectionsAllTool, ConnectionsAuthorizeTool, ConnectionsCallbackTool, ConnectionsDeleteTool,
    ConnectionsExampleTool, ConnectionsImportTool, ConnectionsOneTool, ConnectionsRevokeTool,
    ConnectionsSchemaTool, ConnectionsTokenTool, ConnectionsUpdateTool, CustomFieldsAllTool,
};
pub use consumers::{
    ConsumerRequestCountsAllTool, ConsumersAddTool, ConsumersAllTool, ConsumersDeleteTool,
    ConsumersOneTool, ConsumersUpdateTool,
};
pub use custom_mappings::{
    CustomMappingsAddTool, CustomMappingsDeleteTool, CustomMappingsOneTool,
    CustomMappingsUpdateTool,
};
pub use logs::LogsAllTool;
pub use sessions::SessionsCreateTool;
