use crate::{
    client::check_limit,
    types::PlayerSessionsResponse,
    Client,
    Error,
    PlayerQuery,
    Request,
};
use time::OffsetDateTime;

/// A builder for play session list api queries
#[derive(Debug, Clone)]
pub struct SessionListQueryBuilder<'a> {
    /// The player
    pub player: PlayerQuery<'a>,

    /// The earliest login time
    pub start: Option<OffsetDateTime>,

    /// The latest login time
    pub end: Option<OffsetDateTime>,

    /// The page size
    pub limit: Option<u32>,

    /// The page offset
    pub offset: Option<u64>,

    client: &'a Client,
}

impl<'a> SessionListQueryBuilder<'a> {
    /// Make a new [`SessionListQueryBuilder`].
    pub fn new(client: &'a Client, player: PlayerQuery<'a>) -> Self {
        Self {
            player,
            start: None,
            end: None,
            limit: None,
            offset: None,

            client,
        }
    }

    /// Set the earliest login time.
    pub fn start(&mut self, start: Option<OffsetDateTime>) -> &mut Self {
        self.start = start;
        self
    }

    /// Set the latest login time.
    pub fn end(&mut self, end: Option<OffsetDateTime>) -> &mut Self {
        self.end = end;
        self
    }

    /// Set the page size.
    ///
    /// This has a hard upper limit of [`crate::MAX_LIMIT`].
    pub fn limit(&mut self, limit: Option<u32>) -> &mut Self {
        self.limit = limit;
        self
    }

    /// Set the page offset.
    pub fn offset(&mut self, offset: Option<u64>) -> &mut Self {
        self.offset = offset;
        self
    }

    /// Get the api request.
    ///
    /// # Errors
    /// This fails if:
    /// 1. Neither a nickname nor an account id is set
    /// 2. `limit` is greater than [`crate::MAX_LIMIT`]
    pub fn get_request(&self) -> Result<Request, Error> {
        check_limit("limit", self.limit)?;

        let mut request = Request::get("find/sessions");
        self.player.append_to(&mut request.query)?;
        request
            .query
            .append_opt("start_datetime", self.start)
            .append_opt("end_datetime", self.end)
            .append_opt("limit", self.limit)
            .append_opt("offset", self.offset);

        Ok(request)
    }

    /// Execute the api query and get the results.
    pub async fn execute(&self) -> Result<PlayerSessionsResponse, Error> {
        let request = self.get_request()?;
        self.client.execute_json(request).await
    }
}
