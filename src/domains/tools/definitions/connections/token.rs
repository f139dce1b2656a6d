//! Exchange the stored credentials of a connection for an access token.

use reqwest::Method;

use crate::domains::models::GetConnectionResponse;
use crate::domains::tools::auth::AuthPlacement;
use crate::domains::tools::definition::{NoBody, ParamSpec, VaultTool};
use crate::domains::tools::definitions::common::{
    APP_ID_HEADER, CONSUMER_ID_HEADER, SERVICE_ID, UNIFIED_API,
};

/// Sends no body; the connection is identified by its path alone.
#[derive(Debug, Clone)]
pub struct ConnectionsTokenTool;

impl VaultTool for ConnectionsTokenTool {
    const NAME: &'static str = "post_vault_connections_unified_api_service_id_token";
    const DESCRIPTION: &'static str = "Create Access Token";
    const METHOD: Method = Method::POST;
    const PATH: &'static str = "/vault/connections/{unified_api}/{service_id}/token";
    const PARAMS: &'static [ParamSpec] = &[
        CONSUMER_ID_HEADER,
        APP_ID_HEADER,
        UNIFIED_API,
        SERVICE_ID,
    ];
    const AUTH: AuthPlacement = AuthPlacement::Query;

    type Body = NoBody;
    type Response = GetConnectionResponse;
}
