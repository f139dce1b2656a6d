//! OAuth callback of the Vault authorization flow.

use reqwest::Method;

use crate::domains::models::UnexpectedErrorResponse;
use crate::domains::tools::auth::AuthPlacement;
use crate::domains::tools::definition::{NoBody, ParamKind, ParamSpec, VaultTool};
use crate::domains::tools::definitions::common::STATE;

const CODE: ParamSpec = ParamSpec::query(
    "code",
    ParamKind::String,
    "An authorization code from the connector which Apideck Vault will later exchange for an access token.",
)
.required();

#[derive(Debug, Clone)]
pub struct ConnectionsCallbackTool;

impl VaultTool for ConnectionsCallbackTool {
    const NAME: &'static str = "get_vault_callback";
    const DESCRIPTION: &'static str = "Callback";
    const METHOD: Method = Method::GET;
    const PATH: &'static str = "/vault/callback";
    const PARAMS: &'static [ParamSpec] = &[STATE, CODE];
    const AUTH: AuthPlacement = AuthPlacement::Query;

    type Body = NoBody;
    type Response = UnexpectedErrorResponse;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::ApiConfig;
    use crate::domains::tools::pipeline::build_request;
    use serde_json::json;

    #[test]
    fn test_credentials_follow_callback_parameters() {
        let args = json!({ "state": "s1", "code": "c1" });
        let config = ApiConfig::default().with_api_key("key");
        let request = build_request::<ConnectionsCallbackTool>(&args, &config).unwrap();
        assert_eq!(
            request.url.query(),
            Some("state=s1&code=c1&code=key&redirect_uri=key&scope=key&state=key")
        );
        assert_eq!(request.headers.len(), 1);
    }
}
