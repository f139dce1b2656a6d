//! Custom fields a connector exposes for one of its resources.

use reqwest::Method;

use crate::domains::models::GetCustomFieldsResponse;
use crate::domains::tools::auth::AuthPlacement;
use crate::domains::tools::definition::{NoBody, ParamKind, ParamSpec, VaultTool};
use crate::domains::tools::definitions::common::{
    APP_ID_HEADER, CONSUMER_ID_HEADER, RESOURCE, SERVICE_ID, UNIFIED_API,
};

const RESOURCE_ID: ParamSpec = ParamSpec::query(
    "resource_id",
    ParamKind::String,
    "This is the id of the resource you want to fetch when listing custom fields. For example, if you want to fetch custom fields for a specific contact in a contacts resource, set this to the id of the contact.",
);

#[derive(Debug, Clone)]
pub struct CustomFieldsAllTool;

impl VaultTool for CustomFieldsAllTool {
    const NAME: &'static str = "get_vault_connections_unified_api_service_id_resource_custom-fields";
    const DESCRIPTION: &'static str = "Get resource custom fields";
    const METHOD: Method = Method::GET;
    const PATH: &'static str = "/vault/connections/{unified_api}/{service_id}/{resource}/custom-fields";
    const PARAMS: &'static [ParamSpec] = &[
        CONSUMER_ID_HEADER,
        APP_ID_HEADER,
        UNIFIED_API,
        SERVICE_ID,
        RESOURCE,
        RESOURCE_ID,
    ];
    const AUTH: AuthPlacement = AuthPlacement::Header;

    type Body = NoBody;
    type Response = GetCustomFieldsResponse;
}
