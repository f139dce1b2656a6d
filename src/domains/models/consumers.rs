//! Consumer records: the end users or accounts of the application.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{JsonMap, Links, Meta};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Consumer {
    /// Unique consumer identifier. You can freely choose a consumer ID
    /// yourself. Most of the time, this is an ID of your internal data model
    /// that represents a user or account in your system (for example
    /// account:12345). If the consumer doesn't exist yet, Vault will upsert a
    /// consumer based on your ID.
    pub consumer_id: String,

    /// ID of your Apideck Application.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_id: Option<String>,

    /// The metadata of the consumer. This is used to display the consumer in
    /// the sidebar. This is optional, but recommended.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<ConsumerMetadata>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connections: Option<Vec<ConsumerConnection>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub services: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aggregated_request_count: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_counts: Option<RequestCountAllocation>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_count_updated: Option<String>,
}

/// How a consumer is displayed in the Vault sidebar.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ConsumerMetadata {
    /// The name of the account as shown in the sidebar.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_name: Option<String>,

    /// The name of the user as shown in the sidebar.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,

    /// The email of the user as shown in the sidebar.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// The avatar of the user in the sidebar. Must be a valid URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// A connection as listed on a consumer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ConsumerConnection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag_line: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unified_api: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consumer_id: Option<String>,

    /// Type of authorization used by the connector.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    /// Connection settings. Values will persist to `form_fields` with
    /// corresponding id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<JsonMap>,

    /// Attach your own consumer specific metadata.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<JsonMap>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RequestCountAllocation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unify: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proxy: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vault: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct UpdateConsumerRequest {
    /// The metadata of the consumer. This is used to display the consumer in
    /// the sidebar. This is optional, but recommended.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<ConsumerMetadata>,
}

// ============================================================================
// Response envelopes
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetConsumersResponse {
    pub status_code: i64,
    pub status: String,
    pub data: Vec<JsonMap>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Links>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetConsumerResponse {
    pub status_code: i64,
    pub status: String,
    pub data: Consumer,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateConsumerResponse {
    pub status_code: i64,
    pub status: String,
    pub data: Consumer,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateConsumerResponse {
    pub status_code: i64,
    pub status: String,
    pub data: Consumer,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteConsumerResponse {
    pub status_code: i64,
    pub status: String,
    pub data: serde_json::Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsumerRequestCountsInDateRangeResponse {
    pub status_code: i64,
    pub status: String,
    pub data: JsonMap,
}
