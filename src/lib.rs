//! Vault MCP Server Library
//!
//! Exposes the Apideck Vault API (consumers, connections, custom mappings,
//! sessions and logs) as Model Context Protocol tools, one tool per REST
//! endpoint.
//!
//! # Architecture
//!
//! - **core**: Configuration, error handling, the MCP server handler and transports
//! - **domains**: Business logic organized by bounded contexts
//!   - **models**: Vault API request and response records
//!   - **tools**: Tool definitions, the invocation pipeline, registry and router
//!
//! # Example
//!
//! ```rust,no_run
//! use vault_mcp_server::{core::McpServer, core::Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     config.validate()?;
//!     let server = McpServer::new(config);
//!     // Start the server...
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
