//! Request logs of a consumer.

use reqwest::Method;

use crate::domains::models::GetLogsResponse;
use crate::domains::tools::auth::AuthPlacement;
use crate::domains::tools::definition::{NoBody, ParamKind, ParamSpec, VaultTool};
use crate::domains::tools::definitions::common::{APP_ID_HEADER, CONSUMER_ID_HEADER, CURSOR, LIMIT};

const FILTER: ParamSpec = ParamSpec::query("filter", ParamKind::Object, "Filter results");

#[derive(Debug, Clone)]
pub struct LogsAllTool;

impl VaultTool for LogsAllTool {
    const NAME: &'static str = "get_vault_logs";
    const DESCRIPTION: &'static str = "Get all consumer request logs";
    const METHOD: Method = Method::GET;
    const PATH: &'static str = "/vault/logs";
    const PARAMS: &'static [ParamSpec] = &[
        APP_ID_HEADER,
        CONSUMER_ID_HEADER,
        FILTER,
        CURSOR,
        LIMIT,
    ];
    const AUTH: AuthPlacement = AuthPlacement::Header;

    type Body = NoBody;
    type Response = GetLogsResponse;
}
