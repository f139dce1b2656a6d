//! Get resource schema.

use reqwest::Method;

use crate::domains::models::GetResourceSchemaResponse;
use crate::domains::tools::auth::AuthPlacement;
use crate::domains::tools::definition::{NoBody, ParamSpec, VaultTool};
use crate::domains::tools::definitions::common::{
    APP_ID_HEADER, CONSUMER_ID_HEADER, RESOURCE, SERVICE_ID, UNIFIED_API,
};

/// The schema is an open JSON object; it is echoed as returned.
#[derive(Debug, Clone)]
pub struct ConnectionsSchemaTool;

impl VaultTool for ConnectionsSchemaTool {
    const NAME: &'static str = "get_vault_connections_unified_api_service_id_resource_schema";
    const DESCRIPTION: &'static str = "Get resource schema";
    const METHOD: Method = Method::GET;
    const PATH: &'static str = "/vault/connections/{unified_api}/{service_id}/{resource}/schema";
    const PARAMS: &'static [ParamSpec] = &[
        CONSUMER_ID_HEADER,
        APP_ID_HEADER,
        UNIFIED_API,
        SERVICE_ID,
        RESOURCE,
    ];
    const AUTH: AuthPlacement = AuthPlacement::Header;

    type Body = NoBody;
    type Response = GetResourceSchemaResponse;
}
