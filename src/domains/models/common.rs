//! Records shared by several endpoints: pagination and error bodies.

use serde::{Deserialize, Serialize};

use super::JsonMap;

/// Links to navigate to previous or next pages through the API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Links {
    /// Link to navigate to the current page through the API.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current: Option<String>,

    /// Link to navigate to the next page through the API.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,

    /// Link to navigate to the previous page through the API.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous: Option<String>,
}

/// Response metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Meta {
    /// Number of items returned in the data property of the response.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items_on_page: Option<i64>,

    /// Cursors to navigate to previous or next pages through the API.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cursors: Option<JsonMap>,
}

/// Error body returned by the Vault API.
///
/// The API documents one schema per status (bad request, unauthorized,
/// payment required, not found, unprocessable, not implemented, unexpected)
/// but they all share this shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// HTTP status code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_code: Option<i64>,

    /// Explanation of the status code as defined in RFC 7231.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// The type of error returned.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_name: Option<String>,

    /// A human-readable message providing more details about the error.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Parameter or domain specific information about the error.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<serde_json::Value>,

    /// Link to documentation of the error type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub r#ref: Option<String>,
}

/// Body of endpoints whose only documented payload is an error
/// (deletes, redirects and OAuth callbacks).
pub type UnexpectedErrorResponse = ErrorResponse;

impl ErrorResponse {
    /// One-line summary for logs, e.g. `UnauthorizedError: Invalid API key`.
    pub fn summary(&self) -> String {
        match (self.type_name.as_deref(), self.message.as_deref()) {
            (Some(kind), Some(message)) => format!("{kind}: {message}"),
            (Some(kind), None) => kind.to_string(),
            (None, Some(message)) => message.to_string(),
            (None, None) => self.error.clone().unwrap_or_else(|| "unknown error".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_response_summary() {
        let err: ErrorResponse = serde_json::from_str(
            r#"{"status_code":401,"error":"Unauthorized","type_name":"UnauthorizedError","message":"Invalid API key","detail":{"x":1}}"#,
        )
        .unwrap();
        assert_eq!(err.summary(), "UnauthorizedError: Invalid API key");
        assert_eq!(err.status_code, Some(401));

        let bare = ErrorResponse {
            error: Some("Not Found".to_string()),
            ..Default::default()
        };
        assert_eq!(bare.summary(), "Not Found");
    }

    #[test]
    fn test_empty_fields_are_skipped() {
        let json = serde_json::to_value(Links::default()).unwrap();
        assert_eq!(json, serde_json::json!({}));
    }
}
