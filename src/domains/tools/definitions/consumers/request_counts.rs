//! Request counts of a consumer within a date range.

use reqwest::Method;

use crate::domains::models::ConsumerRequestCountsInDateRangeResponse;
use crate::domains::tools::auth::AuthPlacement;
use crate::domains::tools::definition::{NoBody, ParamKind, ParamSpec, VaultTool};
use crate::domains::tools::definitions::common::{APP_ID_HEADER, CONSUMER_ID_PATH};

const START_DATETIME: ParamSpec = ParamSpec::query(
    "start_datetime",
    ParamKind::String,
    "Scopes results to requests that happened after datetime",
)
.required();

const END_DATETIME: ParamSpec = ParamSpec::query(
    "end_datetime",
    ParamKind::String,
    "Scopes results to requests that happened before datetime",
)
.required();

#[derive(Debug, Clone)]
pub struct ConsumerRequestCountsAllTool;

impl VaultTool for ConsumerRequestCountsAllTool {
    const NAME: &'static str = "get_vault_consumers_consumer_id_stats";
    const DESCRIPTION: &'static str = "Consumer request counts";
    const METHOD: Method = Method::GET;
    const PATH: &'static str = "/vault/consumers/{consumer_id}/stats";
    const PARAMS: &'static [ParamSpec] = &[
        APP_ID_HEADER,
        CONSUMER_ID_PATH,
        START_DATETIME,
        END_DATETIME,
    ];
    const AUTH: AuthPlacement = AuthPlacement::Query;

    type Body = NoBody;
    type Response = ConsumerRequestCountsInDateRangeResponse;
}
