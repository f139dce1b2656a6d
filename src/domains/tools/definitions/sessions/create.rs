//! Hosted Vault sessions.

use reqwest::Method;

use crate::domains::models::{CreateSessionResponse, Session};
use crate::domains::tools::auth::AuthPlacement;
use crate::domains::tools::definition::{JsonBody, ParamSpec, VaultTool};
use crate::domains::tools::definitions::common::{APP_ID_HEADER, CONSUMER_ID_HEADER};

#[derive(Debug, Clone)]
pub struct SessionsCreateTool;

impl VaultTool for SessionsCreateTool {
    const NAME: &'static str = "post_vault_sessions";
    const DESCRIPTION: &'static str = "Create Session";
    const METHOD: Method = Method::POST;
    const PATH: &'static str = "/vault/sessions";
    const PARAMS: &'static [ParamSpec] = &[CONSUMER_ID_HEADER, APP_ID_HEADER];
    const AUTH: AuthPlacement = AuthPlacement::Header;

    type Body = JsonBody<Session>;
    type Response = CreateSessionResponse;
}
