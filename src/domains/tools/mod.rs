//! Tools domain module.
//!
//! Every tool wraps exactly one Vault REST endpoint.
//!
//! ## Architecture
//!
//! - `definitions/` - One file per endpoint, grouped by API area
//! - `definition.rs` - The `VaultTool` trait, parameter specs and body encoders
//! - `pipeline.rs` - Argument checks, request assembly, HTTP call, decoding
//! - `auth.rs` - Credential parameter names and placement
//! - `registry.rs` - Flat list of all tools, lookup and HTTP dispatch
//! - `router.rs` - rmcp ToolRouter for the STDIO transport
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in the matching `definitions/` group
//! 2. Implement `VaultTool` (name, method, path, params, auth, body, response)
//! 3. Export it from the group's `mod.rs` and `definitions/mod.rs`
//! 4. Add `MyTool::definition()` to `all_tools()` in `registry.rs`
//!
//! The router and the HTTP dispatch pick it up from the registry.

pub mod auth;
pub mod definition;
pub mod definitions;
mod error;
pub mod pipeline;
mod registry;
pub mod router;

pub use auth::AuthPlacement;
pub use definition::{ParamKind, ParamLocation, ParamSpec, ToolDefinition, VaultTool};
pub use error::ToolError;
pub use registry::{ToolRegistry, all_tools};
pub use router::build_tool_router;
