//! End-to-end tool calls against a mock Vault API.

use rmcp::model::{CallToolResult, RawContent};
use serde_json::{Map, Value, json};
use wiremock::matchers::{any, header, method, path, query_param};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

use vault_mcp_server::core::config::ApiConfig;
use vault_mcp_server::domains::models::GetConsumersResponse;
use vault_mcp_server::domains::tools::{AuthPlacement, ToolDefinition, all_tools};

fn config(server: &MockServer) -> ApiConfig {
    ApiConfig::new(server.uri())
        .with_api_key("key")
        .with_bearer_token("tok")
}

/// Arguments giving every required parameter a string value.
fn required_arguments(definition: &ToolDefinition) -> Value {
    let mut args = Map::new();
    if let Some(Value::Array(required)) = definition.tool.input_schema.get("required") {
        for name in required.iter().filter_map(Value::as_str) {
            args.insert(name.to_string(), json!(format!("test-{}", name)));
        }
    }
    Value::Object(args)
}

/// Path each tool requests for `required_arguments`, and a response body
/// that decodes into its response record.
fn endpoint(name: &str) -> (&'static str, Value) {
    let connection = json!({
        "id": "crm+pipedrive",
        "service_id": "pipedrive",
        "enabled": true,
        "created_at": 1615563533390_i64
    });
    let consumer = json!({
        "consumer_id": "c1",
        "aggregated_request_count": 101,
        "request_counts": { "unify": 100, "proxy": 1 }
    });
    let mapping = json!({ "id": "crm+pipedrive+contacts+first_name", "value": "$.first_name" });
    let done = json!({ "status_code": 200, "error": "OK", "message": "done" });

    let (path, data) = match name {
        "post_vault_connections_unified_api_service_id_import"
        | "post_vault_connections_unified_api_service_id" => {
            ("/vault/connections/test-unified_api/test-service_id", connection)
        }
        "get_vault_consumers" => ("/vault/consumers", json!([{ "consumer_id": "c1" }])),
        "post_vault_consumers" => ("/vault/consumers", consumer),
        "get_vault_consumers_consumer_id_stats" => (
            "/vault/consumers/test-consumer_id/stats",
            json!({ "consumer_id": "c1", "aggregated_request_count": 3 }),
        ),
        "get_vault_logs" => ("/vault/logs", json!([])),
        "delete_vault_custom-mappings_unified_api_service_id_target_field_id" => {
            return (
                "/vault/custom-mappings/test-unified_api/test-service_id/test-target_field_id",
                done,
            );
        }
        "get_vault_custom-mappings_unified_api_service_id_target_field_id"
        | "patch_vault_custom-mappings_unified_api_service_id_target_field_id"
        | "post_vault_custom-mappings_unified_api_service_id_target_field_id" => (
            "/vault/custom-mappings/test-unified_api/test-service_id/test-target_field_id",
            mapping,
        ),
        "get_vault_connections_unified_api_service_id_resource_custom-fields" => (
            "/vault/connections/test-unified_api/test-service_id/test-resource/custom-fields",
            json!([{ "id": "2", "name": "Due date" }]),
        ),
        "patch_vault_consumers_consumer_id" | "get_vault_consumers_consumer_id" => {
            ("/vault/consumers/test-consumer_id", consumer)
        }
        "delete_vault_consumers_consumer_id" => {
            ("/vault/consumers/test-consumer_id", json!({ "consumer_id": "c1" }))
        }
        "get_vault_connections_unified_api_service_id_resource_example" => (
            "/vault/connections/test-unified_api/test-service_id/test-resource/example",
            json!({ "unified_api": "crm", "example_response": { "id": "1" } }),
        ),
        "get_vault_connections_unified_api_service_id_resource_schema" => (
            "/vault/connections/test-unified_api/test-service_id/test-resource/schema",
            json!({ "type": "object" }),
        ),
        "post_vault_connections_unified_api_service_id_token" => (
            "/vault/connections/test-unified_api/test-service_id/token",
            connection,
        ),
        "get_vault_revoke_service_id_application_id" => {
            return ("/vault/revoke/test-service_id/test-application_id", done);
        }
        "delete_vault_connections_unified_api_service_id" => {
            return ("/vault/connections/test-unified_api/test-service_id", done);
        }
        "get_vault_connections_unified_api_service_id"
        | "patch_vault_connections_unified_api_service_id" => {
            ("/vault/connections/test-unified_api/test-service_id", connection)
        }
        "get_vault_connections_unified_api_service_id_resource_config"
        | "patch_vault_connections_unified_api_service_id_resource_config" => (
            "/vault/connections/test-unified_api/test-service_id/test-resource/config",
            connection,
        ),
        "post_vault_sessions" => (
            "/vault/sessions",
            json!({ "session_uri": "https://vault.apideck.com/session/abc" }),
        ),
        "get_vault_callback" => return ("/vault/callback", done),
        "get_vault_authorize_service_id_application_id" => {
            return ("/vault/authorize/test-service_id/test-application_id", done);
        }
        "get_vault_connections" => ("/vault/connections", json!([connection])),
        other => panic!("no endpoint listed for {other}"),
    };

    (path, json!({ "status_code": 200, "status": "OK", "data": data }))
}

async fn call(definition: &ToolDefinition, args: Value, config: &ApiConfig) -> CallToolResult {
    let handler = definition.handler;
    let config = config.clone();
    tokio::task::spawn_blocking(move || handler(args, &config))
        .await
        .unwrap()
}

fn text(result: &CallToolResult) -> &str {
    match &result.content[0].raw {
        RawContent::Text(t) => &t.text,
        _ => panic!("expected text content"),
    }
}

async fn single_request(server: &MockServer) -> Request {
    let mut requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    requests.remove(0)
}

#[tokio::test(flavor = "multi_thread")]
async fn test_missing_required_parameters_send_nothing() {
    let server = MockServer::start().await;
    let config = config(&server);

    for definition in all_tools() {
        if definition.tool.input_schema.get("required").is_none() {
            continue;
        }

        let result = call(&definition, json!({}), &config).await;
        assert_eq!(result.is_error, Some(true), "{}", definition.name());
        assert!(
            text(&result).starts_with("Missing required"),
            "{}: {}",
            definition.name(),
            text(&result)
        );
    }

    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_every_tool_reaches_its_endpoint() {
    let server = MockServer::start().await;
    let config = config(&server);

    for definition in all_tools() {
        server.reset().await;
        Mock::given(any())
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let result = call(&definition, required_arguments(&definition), &config).await;
        assert_eq!(result.is_error, Some(false), "{}", definition.name());
        assert_eq!(text(&result), "not json");

        let request = single_request(&server).await;
        assert_eq!(request.method.as_str(), definition.method.as_str());
        assert_eq!(request.url.path(), endpoint(definition.name()).0);

        match definition.auth {
            AuthPlacement::Query => {
                let pairs: Vec<(String, String)> = request.url.query_pairs().into_owned().collect();
                assert!(pairs.contains(&("code".to_string(), "key".to_string())));
                assert!(pairs.contains(&(
                    "x-apideck-downstream-authorization".to_string(),
                    "tok".to_string()
                )));
            }
            AuthPlacement::Header => {
                assert_eq!(request.headers.get("scope").unwrap(), "key");
                assert_eq!(
                    request
                        .headers
                        .get("x-apideck-downstream-authorization")
                        .unwrap(),
                    "tok"
                );
            }
        }
        assert_eq!(request.headers.get("accept").unwrap(), "application/json");
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn test_matching_bodies_are_formatted() {
    let server = MockServer::start().await;
    let config = config(&server);

    for definition in all_tools() {
        let (path, body) = endpoint(definition.name());
        let raw = body.to_string();

        server.reset().await;
        Mock::given(method(definition.method.as_str()))
            .and(wiremock::matchers::path(path))
            .respond_with(ResponseTemplate::new(200).set_body_string(raw.clone()))
            .expect(1)
            .mount(&server)
            .await;

        let result = call(&definition, required_arguments(&definition), &config).await;
        assert_eq!(result.is_error, Some(false), "{}", definition.name());

        let formatted = text(&result);
        assert_ne!(formatted, raw, "{} was not decoded", definition.name());
        assert!(formatted.starts_with("{\n  \""), "{}", definition.name());
        let reparsed: Value = serde_json::from_str(formatted).unwrap();
        assert_eq!(reparsed, body, "{}", definition.name());
        server.verify().await;
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn test_api_errors_surface_raw_body() {
    let server = MockServer::start().await;
    let config = config(&server);

    for definition in all_tools() {
        server.reset().await;
        Mock::given(any())
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let result = call(&definition, required_arguments(&definition), &config).await;
        assert_eq!(result.is_error, Some(true), "{}", definition.name());
        assert_eq!(text(&result), "API error: boom");
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn test_list_consumers() {
    let server = MockServer::start().await;
    let body = json!({
        "status_code": 200,
        "status": "OK",
        "data": [{ "consumer_id": "test_consumer_id", "application_id": "app" }],
        "meta": { "items_on_page": 1 }
    });

    Mock::given(method("GET"))
        .and(path("/vault/consumers"))
        .and(query_param("cursor", "abc"))
        .and(query_param("limit", "10"))
        .and(header("x-apideck-app-id", "app"))
        .and(header("code", "key"))
        .and(header("x-apideck-downstream-authorization", "tok"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .expect(1)
        .mount(&server)
        .await;

    let definition = all_tools()
        .into_iter()
        .find(|d| d.name() == "get_vault_consumers")
        .unwrap();
    let args = json!({ "x-apideck-app-id": "app", "cursor": "abc", "limit": 10 });
    let result = call(&definition, args, &config(&server)).await;

    assert_eq!(result.is_error, Some(false));
    let decoded: GetConsumersResponse = serde_json::from_value(body).unwrap();
    assert_eq!(text(&result), serde_json::to_string_pretty(&decoded).unwrap());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_update_custom_mapping_sends_body() {
    let server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .mount(&server)
        .await;

    let definition = all_tools()
        .into_iter()
        .find(|d| d.name() == "patch_vault_custom-mappings_unified_api_service_id_target_field_id")
        .unwrap();
    let mut args = required_arguments(&definition);
    args["value"] = json!("$.first_name");
    let result = call(&definition, args, &config(&server)).await;
    // "{}" lacks the envelope fields, so it comes back verbatim
    assert_eq!(text(&result), "{}");

    let request = single_request(&server).await;
    assert_eq!(
        request.headers.get("content-type").unwrap(),
        "application/json"
    );
    let sent: Value = serde_json::from_slice(&request.body).unwrap();
    assert_eq!(sent, json!({ "value": "$.first_name" }));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_list_consumers_empty_page() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(r#"{"status":"ok","status_code":200,"data":[]}"#),
        )
        .mount(&server)
        .await;

    let definition = all_tools()
        .into_iter()
        .find(|d| d.name() == "get_vault_consumers")
        .unwrap();
    let args = json!({ "x-apideck-app-id": "app", "cursor": "abc", "limit": 10 });
    let result = call(&definition, args, &config(&server)).await;

    assert_eq!(result.is_error, Some(false));
    let formatted: Value = serde_json::from_str(text(&result)).unwrap();
    assert_eq!(formatted["data"], json!([]));
    assert!(text(&result).contains("\n  \"status\": \"ok\""));

    let request = single_request(&server).await;
    assert_eq!(request.url.path(), "/vault/consumers");
    assert_eq!(request.url.query(), Some("cursor=abc&limit=10"));
}
