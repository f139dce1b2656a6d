//! Tool-specific error types.

use thiserror::Error;

use super::definition::ParamLocation;

/// Errors that can occur while invoking a Vault tool.
///
/// Every variant is reported to the MCP caller as an error result whose text
/// is the `Display` output below.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The requested tool was not found.
    #[error("Tool not found: {0}")]
    NotFound(String),

    /// The argument bag is unusable (not an object, or does not fit the
    /// request body).
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// A required parameter is absent or null.
    #[error("Missing required {location} parameter: {name}")]
    MissingParameter {
        name: &'static str,
        location: ParamLocation,
    },

    /// A parameter is present but has the wrong JSON type.
    #[error("Invalid {location} parameter: {name}")]
    InvalidParameter {
        name: &'static str,
        location: ParamLocation,
    },

    /// The typed request body could not be serialized.
    #[error("Failed to encode request body: {0}")]
    RequestBody(String),

    /// The request could not be built or sent.
    #[error("Request failed: {0}")]
    Request(String),

    /// The response body could not be read.
    #[error("Failed to read response body: {0}")]
    ReadBody(String),

    /// The Vault API answered with a status >= 400. The body is kept verbatim.
    #[error("API error: {body}")]
    Api { status: u16, body: String },

    /// A decoded response could not be pretty-printed.
    #[error("Failed to format JSON: {0}")]
    Format(String),

    /// The blocking task running the tool failed.
    #[error("Execution failed: {0}")]
    ExecutionFailed(String),
}

impl ToolError {
    /// Create a new "not found" error.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }

    /// Create a new "invalid arguments" error.
    pub fn invalid_arguments(msg: impl Into<String>) -> Self {
        Self::InvalidArguments(msg.into())
    }

    /// Create a new "request failed" error.
    pub fn request(msg: impl Into<String>) -> Self {
        Self::Request(msg.into())
    }

    /// Create a new "execution failed" error.
    pub fn execution_failed(msg: impl Into<String>) -> Self {
        Self::ExecutionFailed(msg.into())
    }

    /// True for errors detected before any HTTP request was attempted.
    pub fn is_caller_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidArguments(_)
                | Self::MissingParameter { .. }
                | Self::InvalidParameter { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parameter_error_messages() {
        let missing = ToolError::MissingParameter {
            name: "service_id",
            location: ParamLocation::Path,
        };
        assert_eq!(
            missing.to_string(),
            "Missing required path parameter: service_id"
        );

        let invalid = ToolError::InvalidParameter {
            name: "x-apideck-app-id",
            location: ParamLocation::Header,
        };
        assert_eq!(invalid.to_string(), "Invalid header parameter: x-apideck-app-id");
        assert!(invalid.is_caller_error());
    }

    #[test]
    fn test_api_error_surfaces_raw_body() {
        let err = ToolError::Api {
            status: 404,
            body: r#"{"message":"Not Found"}"#.to_string(),
        };
        assert_eq!(err.to_string(), r#"API error: {"message":"Not Found"}"#);
        assert!(!err.is_caller_error());
    }
}
