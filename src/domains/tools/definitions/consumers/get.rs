//! Get consumer.

use reqwest::Method;

use crate::domains::models::GetConsumerResponse;
use crate::domains::tools::auth::AuthPlacement;
use crate::domains::tools::definition::{NoBody, ParamSpec, VaultTool};
use crate::domains::tools::definitions::common::{APP_ID_HEADER, CONSUMER_ID_PATH};

#[derive(Debug, Clone)]
pub struct ConsumersOneTool;

impl VaultTool for ConsumersOneTool {
    const NAME: &'static str = "get_vault_consumers_consumer_id";
    const DESCRIPTION: &'static str = "Get consumer";
    const METHOD: Method = Method::GET;
    const PATH: &'static str = "/vault/consumers/{consumer_id}";
    const PARAMS: &'static [ParamSpec] = &[APP_ID_HEADER, CONSUMER_ID_PATH];
    const AUTH: AuthPlacement = AuthPlacement::Header;

    type Body = NoBody;
    type Response = GetConsumerResponse;
}
