//! Invocation pipeline shared by every Vault tool.
//!
//! arguments -> parameter checks -> URL, headers and body -> blocking HTTP
//! call -> status check -> typed decode -> pretty-printed text.
//!
//! Request assembly ([`build_request`]) and response handling
//! ([`handle_response`]) are pure so that they can be tested without a
//! server; only [`send`] touches the network.

use std::time::Duration;

use reqwest::{Method, StatusCode, Url};
use rmcp::model::{CallToolResult, Content, JsonObject};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, instrument, warn};

use super::auth::{AuthPlacement, credential_pairs};
use super::definition::{ParamKind, ParamLocation, ParamSpec, RequestBody, VaultTool};
use super::error::ToolError;
use crate::core::config::ApiConfig;
use crate::domains::models::ErrorResponse;

/// A fully assembled request, ready to be sent.
#[derive(Debug, Clone)]
pub struct VaultRequest {
    pub method: Method,
    pub url: Url,
    /// Header name/value pairs in sending order.
    pub headers: Vec<(String, String)>,
    pub body: Option<Vec<u8>>,
}

/// Text handed back to the caller on success.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseText {
    /// The body matched the response record and was re-serialized.
    Formatted(String),
    /// The body did not match the response record and is passed through.
    Raw(String),
}

impl ResponseText {
    pub fn into_string(self) -> String {
        match self {
            Self::Formatted(text) | Self::Raw(text) => text,
        }
    }
}

/// Create an error result with a formatted message.
pub fn error_result(message: &str) -> CallToolResult {
    CallToolResult::error(vec![Content::text(message.to_string())])
}

/// Create a success result with text content.
pub fn success_result(content: String) -> CallToolResult {
    CallToolResult::success(vec![Content::text(content)])
}

/// Run tool `T` and wrap the outcome in a `CallToolResult`.
#[instrument(skip_all, fields(tool = T::NAME))]
pub fn execute<T: VaultTool>(arguments: Value, config: &ApiConfig) -> CallToolResult {
    match invoke::<T>(&arguments, config) {
        Ok(text) => success_result(text.into_string()),
        Err(e) => {
            if e.is_caller_error() {
                debug!("Rejected arguments: {}", e);
            } else {
                warn!("{}", e);
            }
            error_result(&e.to_string())
        }
    }
}

/// Run tool `T`, returning the response text or the first failure.
pub fn invoke<T: VaultTool>(
    arguments: &Value,
    config: &ApiConfig,
) -> Result<ResponseText, ToolError> {
    let request = build_request::<T>(arguments, config)?;
    debug!(method = %request.method, path = request.url.path(), "Calling Vault API");

    let (status, body) = send(request, config)?;
    debug!(status = status.as_u16(), bytes = body.len(), "Vault API responded");

    handle_response::<T::Response>(status, body)
}

/// Assemble the request for tool `T` from its arguments.
///
/// Fails before anything is sent when the arguments are not an object, a
/// required parameter is absent or null, a parameter has the wrong JSON
/// type, or the arguments do not fit the request body.
pub fn build_request<T: VaultTool>(
    arguments: &Value,
    config: &ApiConfig,
) -> Result<VaultRequest, ToolError> {
    let args = arguments
        .as_object()
        .ok_or_else(|| ToolError::invalid_arguments("expected a JSON object"))?;

    let mut present = Vec::with_capacity(T::PARAMS.len());
    for param in T::PARAMS {
        if let Some(value) = param_value(param, args)? {
            present.push((param, value));
        }
    }

    let url = build_url(T::PATH, &present, T::AUTH, config)?;
    let mut headers = build_headers(&present, T::AUTH, config);

    let body = <T::Body as RequestBody>::encode(args)?;
    if body.is_some() {
        headers.push(("Content-Type".to_string(), "application/json".to_string()));
    }

    Ok(VaultRequest {
        method: T::METHOD,
        url,
        headers,
        body,
    })
}

/// Send a request with a fresh blocking client and read the whole body.
pub fn send(request: VaultRequest, config: &ApiConfig) -> Result<(StatusCode, String), ToolError> {
    let client = reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(config.timeout_secs))
        .build()
        .map_err(|e| ToolError::request(format!("Failed to create HTTP client: {}", e)))?;

    let mut builder = client.request(request.method, request.url);
    for (name, value) in request.headers {
        builder = builder.header(name, value);
    }
    if let Some(body) = request.body {
        builder = builder.body(body);
    }

    let response = builder.send().map_err(|e| ToolError::request(e.to_string()))?;
    let status = response.status();
    let body = response
        .text()
        .map_err(|e| ToolError::ReadBody(e.to_string()))?;

    Ok((status, body))
}

/// Turn a status and body into the text returned to the caller.
///
/// Statuses >= 400 are errors carrying the body verbatim. Otherwise the body
/// is decoded strictly into `R` and pretty-printed; a body that does not
/// decode is returned unchanged.
pub fn handle_response<R>(status: StatusCode, body: String) -> Result<ResponseText, ToolError>
where
    R: DeserializeOwned + Serialize,
{
    if status.as_u16() >= 400 {
        match serde_json::from_str::<ErrorResponse>(&body) {
            Ok(error) => warn!(status = status.as_u16(), "Vault API error: {}", error.summary()),
            Err(_) => warn!(status = status.as_u16(), "Vault API error with non-JSON body"),
        }
        return Err(ToolError::Api {
            status: status.as_u16(),
            body,
        });
    }

    match serde_json::from_str::<R>(&body) {
        Ok(record) => serde_json::to_string_pretty(&record)
            .map(ResponseText::Formatted)
            .map_err(|e| ToolError::Format(e.to_string())),
        Err(e) => {
            debug!("Response does not match the expected record ({}), passing it through", e);
            Ok(ResponseText::Raw(body))
        }
    }
}

// ============================================================================
// Request assembly helpers
// ============================================================================

/// Look up and type-check one declared parameter. Null counts as absent.
fn param_value<'a>(param: &ParamSpec, args: &'a JsonObject) -> Result<Option<&'a Value>, ToolError> {
    let Some(value) = args.get(param.name).filter(|v| !v.is_null()) else {
        if param.required {
            return Err(ToolError::MissingParameter {
                name: param.name,
                location: param.location,
            });
        }
        return Ok(None);
    };

    let valid = match (param.location, param.kind) {
        (ParamLocation::Path, _) => value.is_string(),
        (ParamLocation::Header, _) => scalar_text(value).is_some(),
        (ParamLocation::Query, ParamKind::Object) => value.is_object(),
        (ParamLocation::Query, ParamKind::Array) => value.is_array(),
        (ParamLocation::Query, _) => scalar_text(value).is_some(),
    };

    if valid {
        Ok(Some(value))
    } else {
        Err(ToolError::InvalidParameter {
            name: param.name,
            location: param.location,
        })
    }
}

fn build_url(
    template: &str,
    present: &[(&ParamSpec, &Value)],
    auth: AuthPlacement,
    config: &ApiConfig,
) -> Result<Url, ToolError> {
    let mut url = Url::parse(&config.base_url)
        .map_err(|e| ToolError::request(format!("invalid base URL '{}': {}", config.base_url, e)))?;

    let mut segments = Vec::new();
    for segment in template.split('/').filter(|s| !s.is_empty()) {
        match segment.strip_prefix('{').and_then(|s| s.strip_suffix('}')) {
            Some(name) => {
                let value = present
                    .iter()
                    .find(|(p, _)| p.location == ParamLocation::Path && p.name == name)
                    .and_then(|(_, v)| v.as_str())
                    .ok_or_else(|| {
                        ToolError::request(format!("no value for path placeholder '{}'", name))
                    })?;
                segments.push(value);
            }
            None => segments.push(segment),
        }
    }

    url.path_segments_mut()
        .map_err(|_| ToolError::request(format!("base URL '{}' cannot carry a path", config.base_url)))?
        .pop_if_empty()
        .extend(segments);

    let mut pairs = Vec::new();
    for (param, value) in present.iter().filter(|(p, _)| p.location == ParamLocation::Query) {
        push_query_pairs(&mut pairs, param.name, value);
    }
    if auth == AuthPlacement::Query {
        pairs.extend(
            credential_pairs(config)
                .into_iter()
                .map(|(name, value)| (name.to_string(), value)),
        );
    }

    if !pairs.is_empty() {
        url.query_pairs_mut().extend_pairs(pairs);
    }

    Ok(url)
}

fn build_headers(
    present: &[(&ParamSpec, &Value)],
    auth: AuthPlacement,
    config: &ApiConfig,
) -> Vec<(String, String)> {
    let mut headers = Vec::new();

    if auth == AuthPlacement::Header {
        headers.extend(
            credential_pairs(config)
                .into_iter()
                .map(|(name, value)| (name.to_string(), value)),
        );
    }

    headers.push(("Accept".to_string(), "application/json".to_string()));

    for (param, value) in present.iter().filter(|(p, _)| p.location == ParamLocation::Header) {
        headers.push((param.name.to_string(), text(value)));
    }

    headers
}

/// Objects become deep-object pairs (`name[key]=value`), arrays repeat the
/// name, scalars are sent as-is.
fn push_query_pairs(pairs: &mut Vec<(String, String)>, name: &str, value: &Value) {
    match value {
        Value::Object(map) => {
            for (key, item) in map {
                pairs.push((format!("{}[{}]", name, key), text(item)));
            }
        }
        Value::Array(items) => {
            for item in items {
                pairs.push((name.to_string(), text(item)));
            }
        }
        other => pairs.push((name.to_string(), text(other))),
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn text(value: &Value) -> String {
    scalar_text(value).unwrap_or_else(|| value.to_string())
}
