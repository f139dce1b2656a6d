//! Revoke connection.

use reqwest::Method;

use crate::domains::models::UnexpectedErrorResponse;
use crate::domains::tools::auth::AuthPlacement;
use crate::domains::tools::definition::{NoBody, ParamSpec, VaultTool};
use crate::domains::tools::definitions::common::{APPLICATION_ID, REDIRECT_URI, SERVICE_ID, STATE};

/// Redirect endpoint ending the OAuth grant of a connection.
#[derive(Debug, Clone)]
pub struct ConnectionsRevokeTool;

impl VaultTool for ConnectionsRevokeTool {
    const NAME: &'static str = "get_vault_revoke_service_id_application_id";
    const DESCRIPTION: &'static str = "Revoke connection";
    const METHOD: Method = Method::GET;
    const PATH: &'static str = "/vault/revoke/{service_id}/{application_id}";
    const PARAMS: &'static [ParamSpec] = &[SERVICE_ID, APPLICATION_ID, STATE, REDIRECT_URI];
    const AUTH: AuthPlacement = AuthPlacement::Query;

    type Body = NoBody;
    type Response = UnexpectedErrorResponse;
}
