//! Update the settings, metadata or enabled flag of a connection.

use reqwest::Method;

use crate::domains::models::{Connection, UpdateConnectionResponse};
use crate::domains::tools::auth::AuthPlacement;
use crate::domains::tools::definition::{JsonBody, ParamSpec, VaultTool};
use crate::domains::tools::definitions::common::{
    APP_ID_HEADER, CONSUMER_ID_HEADER, SERVICE_ID, UNIFIED_API,
};

#[derive(Debug, Clone)]
pub struct ConnectionsUpdateTool;

impl VaultTool for ConnectionsUpdateTool {
    const NAME: &'static str = "patch_vault_connections_unified_api_service_id";
    const DESCRIPTION: &'static str = "Update connection";
    const METHOD: Method = Method::PATCH;
    const PATH: &'static str = "/vault/connections/{unified_api}/{service_id}";
    const PARAMS: &'static [ParamSpec] = &[
        CONSUMER_ID_HEADER,
        APP_ID_HEADER,
        SERVICE_ID,
        UNIFIED_API,
    ];
    const AUTH: AuthPlacement = AuthPlacement::Query;

    type Body = JsonBody<Connection>;
    type Response = UpdateConnectionResponse;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::ApiConfig;
    use crate::domains::tools::pipeline::build_request;
    use serde_json::{Value, json};

    #[test]
    fn test_unified_api_precedes_service_id() {
        let args = json!({
            "x-apideck-consumer-id": "test-consumer",
            "x-apideck-app-id": "app",
            "unified_api": "crm",
            "service_id": "pipedrive",
            "enabled": false,
            "settings": { "instance_url": "https://eu28.salesforce.com" }
        });
        let config = ApiConfig::new("http://localhost:4010").with_api_key("key");
        let request = build_request::<ConnectionsUpdateTool>(&args, &config).unwrap();

        assert_eq!(request.url.path(), "/vault/connections/crm/pipedrive");
        assert_eq!(
            request.url.query(),
            Some("code=key&redirect_uri=key&scope=key&state=key")
        );

        let body: Value = serde_json::from_slice(request.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["enabled"], false);
        assert_eq!(body["unified_api"], "crm");
        assert!(body.get("x-apideck-app-id").is_none());
    }
}
