use std::collections::HashMap;
use time::OffsetDateTime;

/// An api token
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
pub struct TokenResponse {
    /// The token id
    pub id: u64,

    /// The project this token belongs to
    pub project_label: Box<str>,

    /// The token itself.
    ///
    /// Only shown to admins and on creation.
    #[serde(default)]
    pub token: Option<Box<str>>,

    /// Whether the token may be used
    pub activated: bool,

    /// Whether request logging is off
    pub disabled_logs: bool,

    /// Whether this is a service token
    pub service: bool,

    /// Ips the token may be used from.
    ///
    /// Empty means any.
    pub allowed_ips: Vec<Box<str>>,

    /// When the subscription ends
    #[serde(default, with = "crate::util::datetime::option")]
    pub subscription_until: Option<OffsetDateTime>,

    /// When the token was made
    #[serde(with = "crate::util::datetime")]
    pub created_at: OffsetDateTime,

    /// When the token was last changed
    #[serde(with = "crate::util::datetime")]
    pub modified_at: OffsetDateTime,
}

/// A request to make a token
#[derive(Debug, Clone, Default, serde::Deserialize, serde::Serialize)]
pub struct CreateTokenRequest {
    /// The project the token is for
    pub project_label: String,

    /// Whether this is a service token
    #[serde(default)]
    pub service: bool,

    /// Whether request logging is off
    #[serde(default)]
    pub disabled_logs: bool,

    /// Ips the token may be used from
    #[serde(default)]
    pub allowed_ips: Vec<String>,

    /// When the subscription ends
    #[serde(
        default,
        with = "crate::util::datetime::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub subscription_until: Option<OffsetDateTime>,
}

/// A request to change a token.
///
/// Fields that are `None` are left unchanged.
#[derive(Debug, Clone, Default, serde::Deserialize, serde::Serialize)]
pub struct UpdateTokenRequest {
    /// The new project
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_label: Option<String>,

    /// Whether the token can be used
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activated: Option<bool>,

    /// Whether this is a service token
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service: Option<bool>,

    /// Whether request logging is off
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disabled_logs: Option<bool>,

    /// Ips the token may be used from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed_ips: Option<Vec<String>>,

    /// When the subscription ends
    #[serde(
        default,
        with = "crate::util::datetime::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub subscription_until: Option<OffsetDateTime>,
}

/// A logged api request
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
pub struct RequestLogEntry {
    /// The log id
    pub id: u64,

    /// The request id
    #[serde(default)]
    pub request_id: Option<Box<str>>,

    /// The api method
    #[serde(default)]
    pub api_method: Option<Box<str>>,

    /// The http method
    pub http_method: Box<str>,

    /// The request params
    pub params: HashMap<String, serde_json::Value>,

    /// The caller ip
    pub ip_address: Box<str>,

    /// When the request was made
    #[serde(with = "crate::util::datetime")]
    pub created_at: OffsetDateTime,
}

/// A page of logged requests
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
pub struct RequestLogResponse {
    /// The requests
    pub data: Vec<RequestLogEntry>,

    /// The id to start the next page at, none on the last page
    #[serde(default)]
    pub next_request_start_id: Option<u64>,
}

/// Request counts per api method
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
pub struct RequestStatsResponse {
    /// The total # of requests
    pub total_count: u64,

    /// The # of requests per api method
    pub methods: HashMap<String, u64>,
}

/// The result of a token stat request.
///
/// Which variant is returned depends on the requested response type.
#[derive(Debug, Clone, serde::Serialize)]
#[serde(untagged)]
pub enum TokenStat {
    /// Request counts
    Counts(RequestStatsResponse),

    /// Logged requests
    Requests(RequestLogResponse),
}
