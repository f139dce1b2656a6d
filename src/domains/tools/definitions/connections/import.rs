//! Import an existing connection with its credentials.

use reqwest::Method;

use crate::domains::models::{ConnectionImportData, CreateConnectionResponse};
use crate::domains::tools::auth::AuthPlacement;
use crate::domains::tools::definition::{JsonBody, ParamSpec, VaultTool};
use crate::domains::tools::definitions::common::{
    APP_ID_HEADER, CONSUMER_ID_HEADER, SERVICE_ID, UNIFIED_API,
};

#[derive(Debug, Clone)]
pub struct ConnectionsImportTool;

impl VaultTool for ConnectionsImportTool {
    const NAME: &'static str = "post_vault_connections_unified_api_service_id_import";
    const DESCRIPTION: &'static str = "Import connection";
    const METHOD: Method = Method::POST;
    const PATH: &'static str = "/vault/connections/{unified_api}/{service_id}/import";
    const PARAMS: &'static [ParamSpec] = &[
        CONSUMER_ID_HEADER,
        APP_ID_HEADER,
        SERVICE_ID,
        UNIFIED_API,
    ];
    const AUTH: AuthPlacement = AuthPlacement::Header;

    type Body = JsonBody<ConnectionImportData>;
    type Response = CreateConnectionResponse;
}
