//! Connection endpoints: CRUD, resource settings, schemas and the OAuth
//! redirects.

mod add;
mod authorize;
mod callback;
mod custom_fields;
mod delete;
mod example;
mod get;
mod import;
mod list;
mod revoke;
mod schema;
mod settings_get;
mod settings_update;
mod token;
mod update;

pub use add::ConnectionsAddTool;
pub use authorize::ConnectionsAuthorizeTool;
pub use callback::ConnectionsCallbackTool;
pub use custom_fields::CustomFieldsAllTool;
pub use delete::ConnectionsDeleteTool;
pub use example::ConnectionsExampleTool;
pub use get::ConnectionsOneTool;
pub use import::ConnectionsImportTool;
pub use list::ConnectionsAllTool;
pub use revoke::ConnectionsRevokeTool;
pub use schema::ConnectionsSchemaTool;
pub use settings_get::ConnectionSettingsAllTool;
pub use settings_update::ConnectionSettingsUpdateTool;
pub use token::ConnectionsTokenTool;
pub use update::ConnectionsUpdateTool;
