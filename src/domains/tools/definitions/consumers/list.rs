//! List the consumers of the application, one page at a time.

use reqwest::Method;

use crate::domains::models::GetConsumersResponse;
use crate::domains::tools::auth::AuthPlacement;
use crate::domains::tools::definition::{NoBody, ParamSpec, VaultTool};
use crate::domains::tools::definitions::common::{APP_ID_HEADER, CURSOR, LIMIT};

#[derive(Debug, Clone)]
pub struct ConsumersAllTool;

impl VaultTool for ConsumersAllTool {
    const NAME: &'static str = "get_vault_consumers";
    const DESCRIPTION: &'static str = "Get all consumers";
    const METHOD: Method = Method::GET;
    const PATH: &'static str = "/vault/consumers";
    const PARAMS: &'static [ParamSpec] = &[APP_ID_HEADER, CURSOR, LIMIT];
    const AUTH: AuthPlacement = AuthPlacement::Header;

    type Body = NoBody;
    type Response = GetConsumersResponse;
}
