//! Create custom mapping.

use reqwest::Method;

use crate::domains::models::{CreateCustomMappingRequest, CreateCustomMappingResponse};
use crate::domains::tools::auth::AuthPlacement;
use crate::domains::tools::definition::{JsonBody, ParamSpec, VaultTool};
use crate::domains::tools::definitions::common::{
    APP_ID_HEADER, CONSUMER_ID_HEADER, SERVICE_ID, TARGET_FIELD_ID, UNIFIED_API,
};

#[derive(Debug, Clone)]
pub struct CustomMappingsAddTool;

impl VaultTool for CustomMappingsAddTool {
    const NAME: &'static str = "post_vault_custom-mappings_unified_api_service_id_target_field_id";
    const DESCRIPTION: &'static str = "Create custom mapping";
    const METHOD: Method = Method::POST;
    const PATH: &'static str = "/vault/custom-mappings/{unified_api}/{service_id}/{target_field_id}";
    const PARAMS: &'static [ParamSpec] = &[
        CONSUMER_ID_HEADER,
        APP_ID_HEADER,
        UNIFIED_API,
        SERVICE_ID,
        TARGET_FIELD_ID,
    ];
    const AUTH: AuthPlacement = AuthPlacement::Header;

    type Body = JsonBody<CreateCustomMappingRequest>;
    type Response = CreateCustomMappingResponse;
}
