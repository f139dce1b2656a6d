//! Authorize.

use reqwest::Method;

use crate::domains::models::UnexpectedErrorResponse;
use crate::domains::tools::auth::AuthPlacement;
use crate::domains::tools::definition::{NoBody, ParamSpec, VaultTool};
use crate::domains::tools::definitions::common::{APPLICATION_ID, REDIRECT_URI, SERVICE_ID, STATE};

/// Redirect endpoint starting the OAuth flow of a connector.
#[derive(Debug, Clone)]
pub struct ConnectionsAuthorizeTool;

impl VaultTool for ConnectionsAuthorizeTool {
    const NAME: &'static str = "get_vault_authorize_service_id_application_id";
    const DESCRIPTION: &'static str = "Authorize";
    const METHOD: Method = Method::GET;
    const PATH: &'static str = "/vault/authorize/{service_id}/{application_id}";
    const PARAMS: &'static [ParamSpec] = &[SERVICE_ID, APPLICATION_ID, STATE, REDIRECT_URI];
    const AUTH: AuthPlacement = AuthPlacement::Query;

    type Body = NoBody;
    type Response = UnexpectedErrorResponse;
}
