//! Connection records: a consumer's configured integration with a
//! downstream service provider, and the resource metadata around it.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{CustomMapping, JsonMap};

/// A connection between a consumer and a downstream connector.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Connection {
    /// The unique identifier of the connection.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// The ID of the service this connection belongs to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_id: Option<String>,

    /// The name of the connection.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag_line: Option<String>,

    /// The unified API category where the connection belongs to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unified_api: Option<String>,

    /// [Connection state flow](#section/Connection-state).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,

    /// The current state of the Integration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub integration_state: Option<String>,

    /// Type of authorization used by the connector.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_type: Option<String>,

    /// OAuth grant type used by the connector. More info: https://oauth.net/2/grant-types
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub oauth_grant_type: Option<String>,

    /// Status of the connection.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Whether the connection is enabled or not. You can enable or disable a
    /// connection using the Update Connection API.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    /// The website URL of the connection.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,

    /// A visual icon of the connection, that will be shown in the Vault.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    /// The logo of the connection, that will be shown in the Vault.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,

    /// The OAuth redirect URI. Redirect your users to this URI to let them
    /// authorize your app in the connector's UI. Add `redirect_uri` as a
    /// (URL encoded) query parameter before using it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authorize_url: Option<String>,

    /// The OAuth revoke URI. Redirect your users to this URI to revoke this
    /// connection. Add `redirect_uri` as a query parameter before using it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revoke_url: Option<String>,

    /// Connection settings. Values will persist to `form_fields` with
    /// corresponding id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<JsonMap>,

    /// Attach your own consumer specific metadata.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<JsonMap>,

    /// The settings that are wanted to create a connection.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub form_fields: Option<Vec<FormField>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub configuration: Option<Vec<JsonMap>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub configurable_resources: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_schema_support: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_settings_support: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation_support: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema_support: Option<bool>,

    /// List of settings that are required to be configured on integration
    /// before authorization can occur.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings_required_for_authorization: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscriptions: Option<Vec<WebhookSubscription>>,

    /// Whether the connector has a guide available in the developer docs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_guide: Option<bool>,

    /// List of custom mappings configured for this connection.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_mappings: Option<Vec<CustomMapping>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<i64>,
}

/// A setting shown in the Vault when configuring a connection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FormField {
    /// The unique identifier of the form field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// The label of the field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// The placeholder for the form field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,

    /// The description of the form field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub r#type: Option<serde_json::Value>,

    /// Indicates if the form field is required, which means it must be filled
    /// in before the form can be submitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_field: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<FormFieldOption>>,

    /// Only applicable to select fields. Allow the user to add a custom value
    /// though the option select if the desired value is not in the list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_custom_values: Option<bool>,

    /// Indicates if the form field is displayed in a "read-only" mode.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,

    /// Indicates if the form field is not displayed but the value that is
    /// being stored on the connection.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hidden: Option<bool>,

    /// Indicates if the form field contains sensitive data, which will display
    /// the value as a masked input.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sensitive: Option<bool>,

    /// Prefix to display in front of the form field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,

    /// Suffix to display next to the form field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,
}

/// An option of a select form field: either a single value or a labelled
/// group of values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum FormFieldOption {
    Group(FormFieldOptionGroup),
    Simple(SimpleFormFieldOption),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SimpleFormFieldOption {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FormFieldOptionGroup {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    pub options: Vec<SimpleFormFieldOption>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct WebhookSubscription {
    /// The ID of the downstream service.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub downstream_id: Option<String>,

    /// The list of Unify Events this connection is subscribed to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unify_event_types: Option<Vec<String>>,

    /// The list of downstream Events this connection is subscribed to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub downstream_event_types: Option<Vec<String>>,

    /// The URL the downstream is sending to when the event is triggered.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub execute_url: Option<String>,

    /// The date and time the webhook subscription was created downstream.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Credentials and settings of a connection created outside the Vault.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ConnectionImportData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credentials: Option<JsonMap>,

    /// Connection settings. Values will persist to `form_fields` with
    /// corresponding id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<JsonMap>,

    /// Attach your own consumer specific metadata.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<JsonMap>,
}

/// A resource exposed by a connector.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LinkedConnectorResource {
    /// ID of the resource, typically a lowercased version of name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Name of the resource (plural).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// ID of the resource in the Connector's API (downstream).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub downstream_id: Option<String>,

    /// Name of the resource in the Connector's API (downstream).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub downstream_name: Option<String>,

    /// Status of the resource. Resources with status live or beta are callable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResourceExample {
    /// Service provider identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_id: Option<String>,

    /// Name of Apideck Unified API.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unified_api: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource: Option<LinkedConnectorResource>,

    /// Example response from the downstream API.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example_response: Option<JsonMap>,
}

/// JSON schema of a downstream resource. Its shape is connector specific.
pub type ResourceSchema = JsonMap;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomFieldFinder {
    /// Custom Field ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Custom Field name to use as a label if provided.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// More information about the custom field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Custom Field value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<serde_json::Value>,

    /// JSONPath finder for retrieving this value when mapping a response
    /// payload from downstream.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finder: Option<String>,
}

// ============================================================================
// Response envelopes
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetConnectionsResponse {
    pub status_code: i64,
    pub status: String,
    pub data: Vec<Connection>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetConnectionResponse {
    pub status_code: i64,
    pub status: String,
    pub data: Connection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateConnectionResponse {
    pub status_code: i64,
    pub status: String,
    pub data: Connection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateConnectionResponse {
    pub status_code: i64,
    pub status: String,
    pub data: Connection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetResourceSchemaResponse {
    pub status_code: i64,
    pub status: String,
    pub data: ResourceSchema,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetResourceExampleResponse {
    pub status_code: i64,
    pub status: String,
    pub data: ResourceExample,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetCustomFieldsResponse {
    pub status_code: i64,
    pub status: String,
    pub data: Vec<CustomFieldFinder>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_field_options_group_and_simple() {
        let field: FormField = serde_json::from_value(serde_json::json!({
            "id": "instance_url",
            "type": "select",
            "options": [
                {"label": "EU", "value": "eu"},
                {"id": "us", "label": "US", "options": [{"label": "East", "value": "us-east"}]}
            ]
        }))
        .unwrap();

        let options = field.options.unwrap();
        assert!(matches!(options[0], FormFieldOption::Simple(_)));
        match &options[1] {
            FormFieldOption::Group(group) => {
                assert_eq!(group.options.len(), 1);
                assert_eq!(group.label.as_deref(), Some("US"));
            }
            other => panic!("expected a group, got {other:?}"),
        }
    }

    #[test]
    fn test_connection_envelope_requires_data() {
        let missing = serde_json::from_str::<GetConnectionResponse>(
            r#"{"status_code":200,"status":"OK"}"#,
        );
        assert!(missing.is_err());

        let ok: GetConnectionResponse = serde_json::from_str(
            r#"{"status_code":200,"status":"OK","data":{"id":"crm+salesforce","enabled":true,"unknown":1}}"#,
        )
        .unwrap();
        assert_eq!(ok.data.id.as_deref(), Some("crm+salesforce"));
        assert_eq!(ok.data.enabled, Some(true));
    }
}
