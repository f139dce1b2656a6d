//! Custom mapping records: per-connection overrides of how a unified field
//! is read from the downstream payload.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CustomMapping {
    /// Target Field ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Target Field name to use as a label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// Target Field description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Target Field Mapping value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    /// Target Field Key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    /// Target Field Mapping is required.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,

    /// This mapping represents a finder for a custom field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_field: Option<bool>,

    /// Consumer ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consumer_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CreateCustomMappingRequest {
    /// Target Field Mapping value.
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct UpdateCustomMappingRequest {
    /// Target Field Mapping value.
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetCustomMappingResponse {
    pub status_code: i64,
    pub status: String,
    pub data: CustomMapping,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateCustomMappingResponse {
    pub status_code: i64,
    pub status: String,
    pub data: CustomMapping,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateCustomMappingResponse {
    pub status_code: i64,
    pub status: String,
    pub data: CustomMapping,
}
