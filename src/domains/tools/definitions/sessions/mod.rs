mod create;

pub use create::SessionsCreateTool;
