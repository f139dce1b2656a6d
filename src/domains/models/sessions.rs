//! Vault session records.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{ConsumerMetadata, JsonMap};

/// Options for a hosted Vault session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Session {
    /// The metadata of the consumer. This is used to display the consumer in
    /// the sidebar. This is optional, but recommended.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consumer_metadata: Option<ConsumerMetadata>,

    /// Custom consumer settings that are passed as part of the session.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_consumer_settings: Option<JsonMap>,

    /// The URL to redirect the user to after the session has been configured.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redirect_uri: Option<String>,

    /// Settings to change the way the Vault is displayed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<JsonMap>,

    /// Theming options to change the look and feel of Vault.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<JsonMap>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateSessionResponse {
    pub status_code: i64,
    pub status: String,
    pub data: JsonMap,
}
