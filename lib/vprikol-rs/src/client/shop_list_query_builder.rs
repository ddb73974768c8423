use crate::{
    client::check_limit,
    types::ShopsResponse,
    Client,
    Error,
    Request,
};

/// A builder for shop list api queries
#[derive(Debug, Clone)]
pub struct ShopListQueryBuilder<'a> {
    /// The server id
    pub server_id: Option<u32>,

    /// Only shops dealing in this item
    pub item_id: Option<u64>,

    /// The owner nickname
    pub nickname: Option<&'a str>,

    /// The page size
    pub limit: Option<u32>,

    /// The page offset
    pub offset: Option<u64>,

    client: &'a Client,
}

impl<'a> ShopListQueryBuilder<'a> {
    /// Make a new [`ShopListQueryBuilder`].
    pub fn new(client: &'a Client) -> Self {
        Self {
            server_id: None,
            item_id: None,
            nickname: None,
            limit: None,
            offset: None,

            client,
        }
    }

    /// Only list shops on this server.
    pub fn server_id(&mut self, server_id: Option<u32>) -> &mut Self {
        self.server_id = server_id;
        self
    }

    /// Only list shops dealing in this item.
    pub fn item_id(&mut self, item_id: Option<u64>) -> &mut Self {
        self.item_id = item_id;
        self
    }

    /// Only list shops of this owner.
    pub fn nickname(&mut self, nickname: Option<&'a str>) -> &mut Self {
        self.nickname = nickname;
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
    /// This fails if `limit` is greater than [`crate::MAX_LIMIT`].
    pub fn get_request(&self) -> Result<Request, Error> {
        check_limit("limit", self.limit)?;

        let mut request = Request::get("items/shops");
        request
            .query
            .append_opt("server_id", self.server_id)
            .append_opt("item_id", self.item_id)
            .append_opt("nickname", self.nickname)
            .append_opt("limit", self.limit)
            .append_opt("offset", self.offset);

        Ok(request)
    }

    /// Execute the api query and get the results.
    pub async fn execute(&self) -> Result<ShopsResponse, Error> {
        let request = self.get_request()?;
        self.client.execute_json(request).await
    }
}
