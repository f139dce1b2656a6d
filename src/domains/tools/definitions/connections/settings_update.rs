//! Per-resource settings of a connection.

use reqwest::Method;

use crate::domains::models::{Connection, UpdateConnectionResponse};
use crate::domains::tools::auth::AuthPlacement;
use crate::domains::tools::definition::{JsonBody, ParamSpec, VaultTool};
use crate::domains::tools::definitions::common::{
    APP_ID_HEADER, CONSUMER_ID_HEADER, RESOURCE, SERVICE_ID, UNIFIED_API,
};

#[derive(Debug, Clone)]
pub struct ConnectionSettingsUpdateTool;

impl VaultTool for ConnectionSettingsUpdateTool {
    const NAME: &'static str = "patch_vault_connections_unified_api_service_id_resource_config";
    const DESCRIPTION: &'static str = "Change settings";
    const METHOD: Method = Method::PATCH;
    const PATH: &'static str = "/vault/connections/{unified_api}/{service_id}/{resource}/config";
    const PARAMS: &'static [ParamSpec] = &[
        CONSUMER_ID_HEADER,
        APP_ID_HEADER,
        UNIFIED_API,
        SERVICE_ID,
        RESOURCE,
    ];
    const AUTH: AuthPlacement = AuthPlacement::Query;

    type Body = JsonBody<Connection>;
    type Response = UpdateConnectionResponse;
}
