//! Get custom mapping.

use reqwest::Method;

use crate::domains::models::GetCustomMappingResponse;
use crate::domains::tools::auth::AuthPlacement;
use crate::domains::tools::definition::{NoBody, ParamSpec, VaultTool};
use crate::domains::tools::definitions::common::{
    APP_ID_HEADER, CONSUMER_ID_HEADER, SERVICE_ID, TARGET_FIELD_ID, UNIFIED_API,
};

#[derive(Debug, Clone)]
pub struct CustomMappingsOneTool;

impl VaultTool for CustomMappingsOneTool {
    const NAME: &'static str = "get_vault_custom-mappings_unified_api_service_id_target_field_id";
    const DESCRIPTION: &'static str = "Get custom mapping";
    const METHOD: Method = Method::GET;
    const PATH: &'static str = "/vault/custom-mappings/{unified_api}/{service_id}/{target_field_id}";
    const PARAMS: &'static [ParamSpec] = &[
        CONSUMER_ID_HEADER,
        APP_ID_HEADER,
        UNIFIED_API,
        SERVICE_ID,
        TARGET_FIELD_ID,
    ];
    const AUTH: AuthPlacement = AuthPlacement::Header;

    type Body = NoBody;
    type Response = GetCustomMappingResponse;
}
