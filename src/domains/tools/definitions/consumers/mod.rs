//! Consumer endpoints.

mod add;
mod delete;
mod get;
mod list;
mod request_counts;
mod update;

pub use add::ConsumersAddTool;
pub use delete::ConsumersDeleteTool;
pub use get::ConsumersOneTool;
pub use list::ConsumersAllTool;
pub use request_counts::ConsumerRequestCountsAllTool;
pub use update::ConsumersUpdateTool;
