//! Connections of a consumer across every Unified API.

use reqwest::Method;

use crate::domains::models::GetConnectionsResponse;
use crate::domains::tools::auth::AuthPlacement;
use crate::domains::tools::definition::{NoBody, ParamKind, ParamSpec, VaultTool};
use crate::domains::tools::definitions::common::{APP_ID_HEADER, CONSUMER_ID_HEADER};

const API: ParamSpec = ParamSpec::query("api", ParamKind::String, "Scope results to Unified API");

const CONFIGURED: ParamSpec = ParamSpec::query(
    "configured",
    ParamKind::Boolean,
    "Scopes results to connections that have been configured or not",
);

#[derive(Debug, Clone)]
pub struct ConnectionsAllTool;

impl VaultTool for ConnectionsAllTool {
    const NAME: &'static str = "get_vault_connections";
    const DESCRIPTION: &'static str = "Get all connections";
    const METHOD: Method = Method::GET;
    const PATH: &'static str = "/vault/connections";
    const PARAMS: &'static [ParamSpec] = &[CONSUMER_ID_HEADER, APP_ID_HEADER, API, CONFIGURED];
    const AUTH: AuthPlacement = AuthPlacement::Header;

    type Body = NoBody;
    type Response = GetConnectionsResponse;
}
