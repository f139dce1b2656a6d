//! Parameters shared by several Vault endpoints.

use crate::domains::tools::definition::{ParamKind, ParamSpec};

pub const APP_ID_HEADER: ParamSpec =
    ParamSpec::header("x-apideck-app-id", "The ID of your Unify application");

pub const CONSUMER_ID_HEADER: ParamSpec = ParamSpec::header(
    "x-apideck-consumer-id",
    "ID of the consumer which you want to get or push data from",
);

pub const UNIFIED_API: ParamSpec = ParamSpec::path("unified_api", "Unified API");

pub const SERVICE_ID: ParamSpec =
    ParamSpec::path("service_id", "Service ID of the resource to return");

pub const RESOURCE: ParamSpec = ParamSpec::path("resource", "Name of the resource (plural)");

pub const TARGET_FIELD_ID: ParamSpec = ParamSpec::path(
    "target_field_id",
    "ID of the target field to return as a custom mapping.",
);

pub const APPLICATION_ID: ParamSpec =
    ParamSpec::path("application_id", "Application ID of the resource to return");

pub const CONSUMER_ID_PATH: ParamSpec =
    ParamSpec::path("consumer_id", "ID of the consumer to return");

pub const CURSOR: ParamSpec = ParamSpec::query(
    "cursor",
    ParamKind::String,
    "Cursor to start from. You can find cursors for next/previous pages in the meta.cursors property of the response.",
);

pub const LIMIT: ParamSpec = ParamSpec::query(
    "limit",
    ParamKind::Number,
    "Number of results to return. Minimum 1, Maximum 200, Default 20",
);

/// OAuth `state`, required by the authorize, revoke and callback redirects.
pub const STATE: ParamSpec = ParamSpec::query(
    "state",
    ParamKind::String,
    "An opaque value the applications adds to the initial request that the authorization server includes when redirecting the back to the application. This value must be used by the application to prevent CSRF attacks.",
)
.required();

pub const REDIRECT_URI: ParamSpec = ParamSpec::query(
    "redirect_uri",
    ParamKind::String,
    "URL to redirect back to after authorization. When left empty the default configured redirect uri will be used.",
)
.required();
