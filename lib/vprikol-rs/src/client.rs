mod form;
mod fraction;
mod internal;
mod item_list_query_builder;
mod items;
mod media;
mod moderation;
mod player;
mod punish_list_query_builder;
mod query;
mod request;
mod server;
mod session_list_query_builder;
mod shop_list_query_builder;
mod token;
mod token_stat_query_builder;

pub use self::{
    form::{
        FormData,
        FormField,
        FormValue,
    },
    item_list_query_builder::ItemListQueryBuilder,
    media::Screenshot,
    player::PlayerQuery,
    punish_list_query_builder::PunishListQueryBuilder,
    query::{
        InvalidQueryValue,
        QueryParams,
        QueryValue,
        ToQueryValue,
    },
    request::{
        Payload,
        Request,
        RequestBody,
    },
    server::EstateHistoryQuery,
    session_list_query_builder::SessionListQueryBuilder,
    shop_list_query_builder::ShopListQueryBuilder,
    token_stat_query_builder::TokenStatQueryBuilder,
};
use crate::{
    ApiError,
    Error,
};
use reqwest::{
    header::{
        HeaderName,
        HeaderValue,
        AUTHORIZATION,
        CONTENT_TYPE,
        USER_AGENT,
    },
    StatusCode,
};
use std::{
    sync::Arc,
    time::Duration,
};
use url::Url;

/// Check a page size against [`crate::MAX_LIMIT`].
pub(crate) fn check_limit(name: &'static str, limit: Option<u32>) -> Result<(), Error> {
    match limit {
        Some(limit) if limit > crate::MAX_LIMIT => Err(Error::invalid_arguments(format!(
            "`{name}` must be at most {}, got {limit}",
            crate::MAX_LIMIT
        ))),
        _ => Ok(()),
    }
}

/// Returns true if a content type names json.
fn is_json_content_type(content_type: &str) -> bool {
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or("")
        .trim()
        .to_ascii_lowercase();

    essence == "application/json" || essence.ends_with("+json")
}

#[derive(Debug)]
struct ClientConfig {
    base_url: Url,
    auth: Option<(HeaderName, HeaderValue)>,
    user_agent: HeaderValue,
    timeout: Option<Duration>,
}

/// A vprikol api client.
///
/// This is cheap to clone, clones share configuration and connections.
#[derive(Debug, Clone)]
pub struct Client {
    /// The inner http client.
    ///
    /// This probably shouldn't be used by you.
    pub client: reqwest::Client,

    config: Arc<ClientConfig>,
}

impl Client {
    /// Make a new [`Client`] for the production api with the given token.
    pub fn new(token: &str) -> Result<Self, Error> {
        Self::builder().token(token).build()
    }

    /// Get a [`ClientBuilder`].
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Get the base url.
    pub fn base_url(&self) -> &Url {
        &self.config.base_url
    }

    /// Get the full url of a request.
    pub fn request_url(&self, request: &Request) -> Result<Url, Error> {
        let mut url = self
            .config
            .base_url
            .join(request.path.trim_start_matches('/'))?;
        request.query.apply_to(&mut url)?;
        Ok(url)
    }

    /// Send a request and classify the response.
    ///
    /// # Errors
    /// Non-2xx responses become [`Error::Api`].
    /// If the error body is not json, the detail is `Unhandled exception #<status>`.
    pub async fn execute(&self, request: Request) -> Result<Payload, Error> {
        let url = self.request_url(&request)?;

        let mut builder = self
            .client
            .request(request.method, url)
            .header(USER_AGENT, self.config.user_agent.clone());
        if let Some((name, value)) = self.config.auth.as_ref() {
            builder = builder.header(name.clone(), value.clone());
        }
        if let Some(timeout) = self.config.timeout {
            builder = builder.timeout(timeout);
        }
        builder = match request.body {
            Some(RequestBody::Json(body)) => builder.json(&body),
            Some(RequestBody::Form(form)) => builder.multipart(form.into_multipart()?),
            None => builder,
        };

        let response = builder.send().await?;
        let status = response.status();
        let is_json = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map_or(false, is_json_content_type);

        if status == StatusCode::NO_CONTENT {
            return Ok(Payload::Empty);
        }

        let body = response.bytes().await?;

        if !status.is_success() {
            let error = if is_json {
                serde_json::from_slice(&body)
                    .map(|data| ApiError::new(status, data))
                    .unwrap_or_else(|_| ApiError::unhandled(status))
            } else {
                ApiError::unhandled(status)
            };
            return Err(error.into());
        }

        if body.is_empty() {
            return Ok(Payload::Empty);
        }

        if is_json {
            let mut deserializer = serde_json::Deserializer::from_slice(&body);
            let value = serde_path_to_error::deserialize(&mut deserializer)?;
            Ok(Payload::Json(value))
        } else {
            Ok(Payload::Bytes(body))
        }
    }

    /// Send a request and deserialize the json response.
    pub(crate) async fn execute_json<T>(&self, request: Request) -> Result<T, Error>
    where
        T: serde::de::DeserializeOwned,
    {
        self.execute(request).await?.into_json()
    }

    /// Send a request, ignoring the response body.
    pub(crate) async fn execute_unit(&self, request: Request) -> Result<(), Error> {
        self.execute(request).await?.into_unit();
        Ok(())
    }
}

/// A builder for a [`Client`]
#[derive(Debug, Clone)]
pub struct ClientBuilder {
    base_url: Option<String>,
    token: Option<String>,
    auth_header: Option<String>,
    auth_scheme: Option<String>,
    user_agent: Option<String>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    http_client: Option<reqwest::Client>,
}

impl ClientBuilder {
    /// Make a new [`ClientBuilder`].
    pub fn new() -> Self {
        Self {
            base_url: None,
            token: None,
            auth_header: None,
            auth_scheme: None,
            user_agent: None,
            timeout: None,
            connect_timeout: None,
            http_client: None,
        }
    }

    /// Set the base url.
    ///
    /// Defaults to [`crate::DEFAULT_BASE_URL`].
    pub fn base_url(&mut self, base_url: impl Into<String>) -> &mut Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set the api token.
    ///
    /// Without one, no auth header is sent.
    pub fn token(&mut self, token: impl Into<String>) -> &mut Self {
        self.token = Some(token.into());
        self
    }

    /// Set the name of the auth header.
    ///
    /// Defaults to `Authorization`.
    pub fn auth_header(&mut self, auth_header: impl Into<String>) -> &mut Self {
        self.auth_header = Some(auth_header.into());
        self
    }

    /// Set the prefix put before the token in the auth header.
    ///
    /// Defaults to `Bearer`. An empty scheme sends the bare token.
    pub fn auth_scheme(&mut self, auth_scheme: impl Into<String>) -> &mut Self {
        self.auth_scheme = Some(auth_scheme.into());
        self
    }

    /// Set the user agent.
    ///
    /// Defaults to [`crate::DEFAULT_USER_AGENT`].
    pub fn user_agent(&mut self, user_agent: impl Into<String>) -> &mut Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Set the timeout of a whole request.
    ///
    /// There is no timeout by default.
    pub fn timeout(&mut self, timeout: Duration) -> &mut Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the connect timeout.
    ///
    /// This is ignored if an http client is provided.
    pub fn connect_timeout(&mut self, connect_timeout: Duration) -> &mut Self {
        self.connect_timeout = Some(connect_timeout);
        self
    }

    /// Use an existing http client.
    pub fn http_client(&mut self, http_client: reqwest::Client) -> &mut Self {
        self.http_client = Some(http_client);
        self
    }

    /// Build the [`Client`].
    ///
    /// # Errors
    /// Fails if the base url, auth header, or user agent are invalid,
    /// or if the http client could not be made.
    pub fn build(&self) -> Result<Client, Error> {
        let mut base_url = Url::parse(
            self.base_url
                .as_deref()
                .unwrap_or(crate::DEFAULT_BASE_URL),
        )?;
        if base_url.cannot_be_a_base() {
            return Err(Error::invalid_arguments(format!(
                "\"{base_url}\" cannot be a base url"
            )));
        }
        // Without a trailing slash, joining would replace the last segment.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let auth = match self.token.as_deref() {
            Some(token) => {
                let name = match self.auth_header.as_deref() {
                    Some(name) => HeaderName::from_bytes(name.as_bytes()).map_err(|_| {
                        Error::invalid_arguments(format!("\"{name}\" is not a valid header name"))
                    })?,
                    None => AUTHORIZATION,
                };
                let scheme = self.auth_scheme.as_deref().unwrap_or("Bearer");
                let value = if scheme.is_empty() {
                    token.to_string()
                } else {
                    format!("{scheme} {token}")
                };
                let mut value = HeaderValue::from_str(&value)?;
                value.set_sensitive(true);

                Some((name, value))
            }
            None => None,
        };

        let user_agent = HeaderValue::from_str(
            self.user_agent
                .as_deref()
                .unwrap_or(crate::DEFAULT_USER_AGENT),
        )?;

        let client = match self.http_client.clone() {
            Some(client) => client,
            None => {
                let mut builder = reqwest::Client::builder();
                if let Some(connect_timeout) = self.connect_timeout {
                    builder = builder.connect_timeout(connect_timeout);
                }
                builder.build()?
            }
        };

        Ok(Client {
            client,
            config: Arc::new(ClientConfig {
                base_url,
                auth,
                user_agent,
                timeout: self.timeout,
            }),
        })
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
