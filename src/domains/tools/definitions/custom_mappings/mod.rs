//! Custom mapping endpoints, addressed by unified API, service and target
//! field.

mod add;
mod delete;
mod get;
mod update;

pub use add::CustomMappingsAddTool;
pub use delete::CustomMappingsDeleteTool;
pub use get::CustomMappingsOneTool;
pub use update::CustomMappingsUpdateTool;
