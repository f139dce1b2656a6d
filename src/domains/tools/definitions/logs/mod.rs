mod list;

pub use list::LogsAllTool;
