//! Vault API schema types.
//!
//! Plain data-transfer records mirroring the request and response bodies of
//! the Apideck Vault API. Optional fields are skipped when serializing, and
//! unknown fields are ignored when deserializing.
//!
//! Request records (and everything they embed) also derive [`JsonSchema`]
//! so that their fields can be advertised as tool parameters.
//!
//! [`JsonSchema`]: schemars::JsonSchema

mod common;
mod connections;
mod consumers;
mod custom_mappings;
mod logs;
mod sessions;

pub use common::*;
pub use connections::*;
pub use consumers::*;
pub use custom_mappings::*;
pub use logs::*;
pub use sessions::*;

/// A free-form JSON object.
pub type JsonMap = serde_json::Map<String, serde_json::Value>;
