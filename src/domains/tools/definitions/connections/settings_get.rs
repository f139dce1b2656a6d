//! Get resource settings.

use reqwest::Method;

use crate::domains::models::GetConnectionResponse;
use crate::domains::tools::auth::AuthPlacement;
use crate::domains::tools::definition::{NoBody, ParamSpec, VaultTool};
use crate::domains::tools::definitions::common::{
    APP_ID_HEADER, CONSUMER_ID_HEADER, RESOURCE, SERVICE_ID, UNIFIED_API,
};

#[derive(Debug, Clone)]
pub struct ConnectionSettingsAllTool;

impl VaultTool for ConnectionSettingsAllTool {
    const NAME: &'static str = "get_vault_connections_unified_api_service_id_resource_config";
    const DESCRIPTION: &'static str = "Get resource settings";
    const METHOD: Method = Method::GET;
    const PATH: &'static str = "/vault/connections/{unified_api}/{service_id}/{resource}/config";
    const PARAMS: &'static [ParamSpec] = &[
        CONSUMER_ID_HEADER,
        APP_ID_HEADER,
        UNIFIED_API,
        SERVICE_ID,
        RESOURCE,
    ];
    const AUTH: AuthPlacement = AuthPlacement::Header;

    type Body = NoBody;
    type Response = GetConnectionResponse;
}
