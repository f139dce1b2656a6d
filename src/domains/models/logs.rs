//! Request log records.

use serde::{Deserialize, Serialize};

use super::{JsonMap, Links, Meta};

/// One request made through the Unified API on behalf of a consumer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Log {
    /// UUID acting as Request Identifier.
    pub id: String,

    /// When request is a child request, this UUID indicates its parent request.
    pub parent_id: Option<String>,

    /// The consumer Id associated with the request.
    pub consumer_id: String,

    /// Which Unified Api request was made to.
    pub unified_api: String,

    /// Apideck service provider associated with request.
    pub service: JsonMap,

    /// The request as defined in OpenApi Spec.
    pub operation: JsonMap,

    /// HTTP Method of request.
    pub http_method: String,

    /// The Apideck base URL the request was made to.
    pub base_url: String,

    /// The path component of the URI the request was made to.
    pub path: String,

    /// Indicates if the request was made via REST or Graphql endpoint.
    pub api_style: String,

    /// HTTP Status code that was returned.
    pub status_code: i64,

    /// Whether or not the request was successful.
    pub success: bool,

    /// If error occurred, this is brief explanation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,

    /// ISO Date and time when the request was made.
    pub timestamp: String,

    /// The entire execution time in milliseconds it took to make the request.
    pub execution: i64,

    /// The entire execution time in milliseconds it took to call the
    /// service provider.
    pub duration: serde_json::Number,

    /// Latency added by making this request via Unified Api.
    pub latency: serde_json::Number,

    /// Indicates whether or not this is a child or parent request.
    pub child_request: bool,

    /// When request is a parent request, this indicates if there are child
    /// requests associated.
    pub has_children: bool,

    /// Indicates whether the request was made using sandbox credentials.
    pub sandbox: bool,

    /// The IP address of the source of the request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_ip: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetLogsResponse {
    pub status_code: i64,
    pub status: String,
    pub data: Vec<Log>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Links>,
}
