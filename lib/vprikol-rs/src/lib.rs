//! A typed client for the vprikol gaming statistics api.
//!
//! Every api method lives on [`Client`].
//! Requests go through a single pipeline that turns non-2xx responses into [`ApiError`]s,
//! so callers only ever see the four kinds of [`Error`].

mod client;
mod error;
pub mod types;
mod util;

pub use crate::{
    client::{
        Client,
        ClientBuilder,
        EstateHistoryQuery,
        FormData,
        FormField,
        FormValue,
        InvalidQueryValue,
        ItemListQueryBuilder,
        Payload,
        PlayerQuery,
        PunishListQueryBuilder,
        QueryParams,
        QueryValue,
        Request,
        RequestBody,
        Screenshot,
        SessionListQueryBuilder,
        ShopListQueryBuilder,
        ToQueryValue,
        TokenStatQueryBuilder,
    },
    error::{
        ApiError,
        Error,
        ErrorDetail,
    },
    types::{
        EstateHistoryType,
        EstateType,
        PunishType,
        RatingType,
        SSFont,
    },
    util::{
        format_datetime,
        format_local_datetime,
        SERVICE_OFFSET,
    },
};
pub use bytes::Bytes;
pub use reqwest::{
    Method,
    StatusCode,
};
pub use time;
pub use url::Url;

/// The production api url
pub const DEFAULT_BASE_URL: &str = "https://api.szx.su/";

/// The default user agent
pub const DEFAULT_USER_AGENT: &str = concat!("vprikol-rs/", env!("CARGO_PKG_VERSION"));

/// The max page size the api accepts for list endpoints
pub const MAX_LIMIT: u32 = 1_000;

/// Library result type
pub type VprikolResult<T> = Result<T, Error>;
