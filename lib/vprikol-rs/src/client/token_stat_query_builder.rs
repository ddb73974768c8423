use crate::{
    client::check_limit,
    types::{
        StatResponseType,
        TokenStat,
    },
    Client,
    Error,
    Request,
};
use time::OffsetDateTime;

/// A builder for token stat api queries
#[derive(Debug, Clone)]
pub struct TokenStatQueryBuilder<'a> {
    /// The kind of stats
    pub response_type: StatResponseType,

    /// Only count these api methods
    pub methods: Option<&'a [&'a str]>,

    /// The earliest request time
    pub start: Option<OffsetDateTime>,

    /// The latest request time
    pub end: Option<OffsetDateTime>,

    /// The # of logged requests to return
    pub requests_limit: Option<u32>,

    /// The id of the first logged request to return
    pub requests_start_id: Option<u64>,

    client: &'a Client,
}

impl<'a> TokenStatQueryBuilder<'a> {
    /// Make a new [`TokenStatQueryBuilder`].
    pub fn new(client: &'a Client, response_type: StatResponseType) -> Self {
        Self {
            response_type,
            methods: None,
            start: None,
            end: None,
            requests_limit: None,
            requests_start_id: None,

            client,
        }
    }

    /// Only count these api methods.
    pub fn methods(&mut self, methods: Option<&'a [&'a str]>) -> &mut Self {
        self.methods = methods;
        self
    }

    /// Set the earliest request time.
    pub fn start(&mut self, start: Option<OffsetDateTime>) -> &mut Self {
        self.start = start;
        self
    }

    /// Set the latest request time.
    pub fn end(&mut self, end: Option<OffsetDateTime>) -> &mut Self {
        self.end = end;
        self
    }

    /// Set the # of logged requests to return.
    ///
    /// This has a hard upper limit of [`crate::MAX_LIMIT`].
    pub fn requests_limit(&mut self, requests_limit: Option<u32>) -> &mut Self {
        self.requests_limit = requests_limit;
        self
    }

    /// Set the id of the first logged request to return.
    ///
    /// Use the `next_request_start_id` of the previous page.
    pub fn requests_start_id(&mut self, requests_start_id: Option<u64>) -> &mut Self {
        self.requests_start_id = requests_start_id;
        self
    }

    /// Get the api request.
    ///
    /// # Errors
    /// This fails if `requests_limit` is greater than [`crate::MAX_LIMIT`].
    pub fn get_request(&self) -> Result<Request, Error> {
        check_limit("requests_limit", self.requests_limit)?;

        let mut request = Request::get("stat");
        request
            .query
            .append("response_type", self.response_type)
            .append_opt("methods", self.methods)
            .append_opt("start_datetime", self.start)
            .append_opt("end_datetime", self.end)
            .append_opt("requests_limit", self.requests_limit)
            .append_opt("requests_start_id", self.requests_start_id);

        Ok(request)
    }

    /// Execute the api query and get the results.
    ///
    /// The variant of the result matches the requested response type.
    pub async fn execute(&self) -> Result<TokenStat, Error> {
        let request = self.get_request()?;
        let payload = self.client.execute(request).await?;

        match self.response_type {
            StatResponseType::Counts => Ok(TokenStat::Counts(payload.into_json()?)),
            StatResponseType::Requests => Ok(TokenStat::Requests(payload.into_json()?)),
        }
    }
}
