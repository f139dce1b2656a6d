//! Create a consumer.

use reqwest::Method;

use crate::domains::models::{Consumer, CreateConsumerResponse};
use crate::domains::tools::auth::AuthPlacement;
use crate::domains::tools::definition::{JsonBody, ParamSpec, VaultTool};
use crate::domains::tools::definitions::common::APP_ID_HEADER;

#[derive(Debug, Clone)]
pub struct ConsumersAddTool;

impl VaultTool for ConsumersAddTool {
    const NAME: &'static str = "post_vault_consumers";
    const DESCRIPTION: &'static str = "Create consumer";
    const METHOD: Method = Method::POST;
    const PATH: &'static str = "/vault/consumers";
    const PARAMS: &'static [ParamSpec] = &[APP_ID_HEADER];
    const AUTH: AuthPlacement = AuthPlacement::Header;

    type Body = JsonBody<Consumer>;
    type Response = CreateConsumerResponse;
}
