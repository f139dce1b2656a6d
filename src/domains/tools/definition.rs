//! Static description of a Vault endpoint exposed as an MCP tool.
//!
//! Every tool is a zero-sized type implementing [`VaultTool`]: the endpoint's
//! method, path template, declared parameters, credential placement and the
//! records used for its request and response bodies. The shared invocation
//! pipeline in [`super::pipeline`] turns that description into an HTTP call.

use std::marker::PhantomData;
use std::sync::Arc;

use reqwest::Method;
use rmcp::handler::server::tool::cached_schema_for_type;
use rmcp::model::{CallToolResult, JsonObject, Tool};
use schemars::JsonSchema;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::auth::AuthPlacement;
use super::error::ToolError;
use super::pipeline;
use crate::core::config::{ApiConfig, Config};

/// Where a declared parameter is placed in the outgoing request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamLocation {
    Path,
    Query,
    Header,
}

impl std::fmt::Display for ParamLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Path => f.write_str("path"),
            Self::Query => f.write_str("query"),
            Self::Header => f.write_str("header"),
        }
    }
}

/// JSON type advertised for a declared parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    String,
    Number,
    Boolean,
    Object,
    Array,
}

impl ParamKind {
    fn json_type(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Object => "object",
            Self::Array => "array",
        }
    }
}

/// A path, query or header parameter of an endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamSpec {
    pub name: &'static str,
    pub location: ParamLocation,
    pub kind: ParamKind,
    pub required: bool,
    pub description: &'static str,
}

impl ParamSpec {
    /// A path segment. Path parameters are always required strings.
    pub const fn path(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            location: ParamLocation::Path,
            kind: ParamKind::String,
            required: true,
            description,
        }
    }

    /// An optional query parameter.
    pub const fn query(name: &'static str, kind: ParamKind, description: &'static str) -> Self {
        Self {
            name,
            location: ParamLocation::Query,
            kind,
            required: false,
            description,
        }
    }

    /// A required string header.
    pub const fn header(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            location: ParamLocation::Header,
            kind: ParamKind::String,
            required: true,
            description,
        }
    }

    /// Mark the parameter as required.
    pub const fn required(self) -> Self {
        Self {
            required: true,
            ..self
        }
    }

    fn schema(&self) -> Value {
        let mut schema = JsonObject::new();
        schema.insert("type".into(), self.kind.json_type().into());
        if !self.description.is_empty() {
            schema.insert("description".into(), self.description.into());
        }
        Value::Object(schema)
    }
}

/// How an endpoint's JSON request body is produced from the tool arguments.
pub trait RequestBody {
    /// Encode the body from the full argument object. `None` means the
    /// request carries no body.
    fn encode(arguments: &JsonObject) -> Result<Option<Vec<u8>>, ToolError>;

    /// JSON schema of the body record, merged into the tool's input schema.
    fn schema() -> Option<Arc<JsonObject>>;
}

/// Marker for endpoints without a request body.
#[derive(Debug, Clone, Copy)]
pub struct NoBody;

impl RequestBody for NoBody {
    fn encode(_arguments: &JsonObject) -> Result<Option<Vec<u8>>, ToolError> {
        Ok(None)
    }

    fn schema() -> Option<Arc<JsonObject>> {
        None
    }
}

/// A JSON body shaped like `T`.
///
/// The whole argument object is converted into `T` (fields `T` does not know
/// are dropped) and serialized again.
#[derive(Debug, Clone, Copy)]
pub struct JsonBody<T>(PhantomData<T>);

impl<T> RequestBody for JsonBody<T>
where
    T: DeserializeOwned + Serialize + JsonSchema + 'static,
{
    fn encode(arguments: &JsonObject) -> Result<Option<Vec<u8>>, ToolError> {
        let body: T = serde_json::from_value(Value::Object(arguments.clone())).map_err(|e| {
            ToolError::invalid_arguments(format!(
                "Failed to convert arguments to request type: {}",
                e
            ))
        })?;

        serde_json::to_vec(&body)
            .map(Some)
            .map_err(|e| ToolError::RequestBody(e.to_string()))
    }

    fn schema() -> Option<Arc<JsonObject>> {
        Some(cached_schema_for_type::<T>())
    }
}

/// A Vault endpoint exposed as an MCP tool.
pub trait VaultTool: Sized + 'static {
    /// Tool name as registered in MCP.
    const NAME: &'static str;

    /// Tool description shown to clients.
    const DESCRIPTION: &'static str;

    const METHOD: Method;

    /// Path template relative to the base URL, e.g.
    /// `/vault/consumers/{consumer_id}`.
    const PATH: &'static str;

    /// Declared path, query and header parameters, in sending order.
    const PARAMS: &'static [ParamSpec];

    /// Where the credential parameters go.
    const AUTH: AuthPlacement;

    type Body: RequestBody;

    /// Record the success body is decoded into before formatting.
    type Response: DeserializeOwned + Serialize;

    /// Input schema advertised to clients.
    fn input_schema() -> JsonObject {
        build_input_schema(Self::PARAMS, <Self::Body as RequestBody>::schema().as_deref())
    }

    /// Create a Tool model for this tool (metadata).
    fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: Arc::new(Self::input_schema()),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Run the endpoint with the given arguments. Blocks on network I/O.
    fn execute(arguments: Value, config: &ApiConfig) -> CallToolResult {
        pipeline::execute::<Self>(arguments, config)
    }

    fn definition() -> ToolDefinition {
        ToolDefinition {
            tool: Self::to_tool(),
            auth: Self::AUTH,
            method: Self::METHOD,
            path: Self::PATH,
            handler: Self::execute,
        }
    }
}

/// Blocking entry point of a tool.
pub type ToolHandler = fn(Value, &ApiConfig) -> CallToolResult;

/// Type-erased tool: metadata plus handler, as held by the registry.
#[derive(Debug, Clone)]
pub struct ToolDefinition {
    pub tool: Tool,
    pub auth: AuthPlacement,
    pub method: Method,
    pub path: &'static str,
    pub handler: ToolHandler,
}

impl ToolDefinition {
    pub fn name(&self) -> &str {
        &self.tool.name
    }

    /// Run the handler on the blocking pool.
    pub async fn call(
        &self,
        arguments: Value,
        config: Arc<Config>,
    ) -> Result<CallToolResult, ToolError> {
        let handler = self.handler;
        tokio::task::spawn_blocking(move || handler(arguments, &config.api))
            .await
            .map_err(|e| ToolError::execution_failed(e.to_string()))
    }
}

/// Build an object schema from declared parameters and an optional body
/// schema.
///
/// Body properties and their `required` list are merged in; a declared
/// parameter replaces a body property of the same name. Schema definitions
/// of the body are carried over so that its `$ref`s still resolve.
pub fn build_input_schema(params: &[ParamSpec], body: Option<&JsonObject>) -> JsonObject {
    let mut properties = JsonObject::new();
    let mut required: Vec<Value> = Vec::new();

    for param in params {
        properties.insert(param.name.to_string(), param.schema());
        if param.required {
            required.push(param.name.into());
        }
    }

    if let Some(body) = body {
        if let Some(Value::Object(body_properties)) = body.get("properties") {
            for (name, schema) in body_properties {
                if !properties.contains_key(name) {
                    properties.insert(name.clone(), schema.clone());
                }
            }
        }

        if let Some(Value::Array(names)) = body.get("required") {
            for name in names {
                let declared = name
                    .as_str()
                    .is_some_and(|n| params.iter().any(|p| p.name == n));
                if !declared && !required.contains(name) {
                    required.push(name.clone());
                }
            }
        }
    }

    let mut schema = JsonObject::new();
    schema.insert("type".into(), "object".into());
    schema.insert("properties".into(), Value::Object(properties));
    if !required.is_empty() {
        schema.insert("required".into(), Value::Array(required));
    }

    if let Some(body) = body {
        for key in ["$defs", "definitions"] {
            if let Some(defs) = body.get(key) {
                schema.insert(key.into(), defs.clone());
            }
        }
    }

    schema
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::models::{Consumer, UpdateCustomMappingRequest};
    use serde_json::json;

    const PARAMS: &[ParamSpec] = &[
        ParamSpec::header("x-apideck-app-id", "The ID of your Unify application"),
        ParamSpec::path("consumer_id", "ID of the consumer to return"),
        ParamSpec::query("limit", ParamKind::Number, "Number of results to return"),
    ];

    #[test]
    fn test_schema_from_params_only() {
        let schema = build_input_schema(PARAMS, None);
        assert_eq!(schema["type"], "object");
        assert_eq!(schema["properties"]["limit"]["type"], "number");
        assert_eq!(schema["properties"]["consumer_id"]["type"], "string");
        assert_eq!(schema["required"], json!(["x-apideck-app-id", "consumer_id"]));
        assert!(schema.get("$defs").is_none());
    }

    #[test]
    fn test_body_schema_is_merged() {
        let body = <JsonBody<Consumer> as RequestBody>::schema().unwrap();
        let schema = build_input_schema(PARAMS, Some(&body));

        let properties = schema["properties"].as_object().unwrap();
        assert!(properties.contains_key("metadata"));
        assert!(properties.contains_key("application_id"));
        // declared parameter wins over the body property
        assert_eq!(
            properties["consumer_id"]["description"],
            "ID of the consumer to return"
        );
        let required = schema["required"].as_array().unwrap();
        assert_eq!(
            required
                .iter()
                .filter(|r| r.as_str() == Some("consumer_id"))
                .count(),
            1
        );
    }

    #[test]
    fn test_optional_param_overrides_body_requirement() {
        let params = [ParamSpec::query("value", ParamKind::String, "")];
        let body = <JsonBody<UpdateCustomMappingRequest> as RequestBody>::schema().unwrap();
        let schema = build_input_schema(&params, Some(&body));
        assert!(schema.get("required").is_none());
        assert!(schema["properties"]["value"].get("description").is_none());
    }

    #[test]
    fn test_json_body_drops_unknown_arguments() {
        let args = json!({
            "x-apideck-app-id": "app",
            "unified_api": "crm",
            "value": "$.first_name"
        });
        let encoded =
            JsonBody::<UpdateCustomMappingRequest>::encode(args.as_object().unwrap()).unwrap();
        let body: Value = serde_json::from_slice(&encoded.unwrap()).unwrap();
        assert_eq!(body, json!({ "value": "$.first_name" }));
    }

    #[test]
    fn test_json_body_conversion_error() {
        let args = json!({ "value": 42 });
        let err =
            JsonBody::<UpdateCustomMappingRequest>::encode(args.as_object().unwrap()).unwrap_err();
        assert!(
            err.to_string()
                .starts_with("Invalid arguments: Failed to convert arguments to request type:")
        );
    }

    #[test]
    fn test_no_body() {
        assert!(NoBody::encode(&JsonObject::new()).unwrap().is_none());
        assert!(NoBody::schema().is_none());
    }
}
