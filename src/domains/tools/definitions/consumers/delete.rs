//! Delete consumer.

use reqwest::Method;

use crate::domains::models::DeleteConsumerResponse;
use crate::domains::tools::auth::AuthPlacement;
use crate::domains::tools::definition::{NoBody, ParamSpec, VaultTool};
use crate::domains::tools::definitions::common::{APP_ID_HEADER, CONSUMER_ID_PATH};

/// Deleting a consumer also deletes its connections.
#[derive(Debug, Clone)]
pub struct ConsumersDeleteTool;

impl VaultTool for ConsumersDeleteTool {
    const NAME: &'static str = "delete_vault_consumers_consumer_id";
    const DESCRIPTION: &'static str = "Delete consumer";
    const METHOD: Method = Method::DELETE;
    const PATH: &'static str = "/vault/consumers/{consumer_id}";
    const PARAMS: &'static [ParamSpec] = &[APP_ID_HEADER, CONSUMER_ID_PATH];
    const AUTH: AuthPlacement = AuthPlacement::Query;

    type Body = NoBody;
    type Response = DeleteConsumerResponse;
}
