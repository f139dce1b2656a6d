//! Update the metadata of a consumer.

use reqwest::Method;

use crate::domains::models::{UpdateConsumerRequest, UpdateConsumerResponse};
use crate::domains::tools::auth::AuthPlacement;
use crate::domains::tools::definition::{JsonBody, ParamSpec, VaultTool};
use crate::domains::tools::definitions::common::{APP_ID_HEADER, CONSUMER_ID_PATH};

#[derive(Debug, Clone)]
pub struct ConsumersUpdateTool;

impl VaultTool for ConsumersUpdateTool {
    const NAME: &'static str = "patch_vault_consumers_consumer_id";
    const DESCRIPTION: &'static str = "Update consumer";
    const METHOD: Method = Method::PATCH;
    const PATH: &'static str = "/vault/consumers/{consumer_id}";
    const PARAMS: &'static [ParamSpec] = &[APP_ID_HEADER, CONSUMER_ID_PATH];
    const AUTH: AuthPlacement = AuthPlacement::Query;

    type Body = JsonBody<UpdateConsumerRequest>;
    type Response = UpdateConsumerResponse;
}
