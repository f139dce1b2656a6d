//! Domains module containing business logic organized by bounded contexts.
//!
//! - `models`: plain records mirroring the Vault API schemas
//! - `tools`: one MCP tool per Vault endpoint

pub mod models;
pub mod tools;
