use crate::{
    client::check_limit,
    types::ItemsResponse,
    Client,
    Error,
    Request,
};

/// A builder for item list api queries
#[derive(Debug, Clone)]
pub struct ItemListQueryBuilder<'a> {
    /// A name search
    pub search: Option<&'a str>,

    /// The item type
    pub item_type: Option<i64>,

    /// Whether to include market summaries
    pub with_market_stats: Option<bool>,

    /// The page size
    pub limit: Option<u32>,

    /// The page offset
    pub offset: Option<u64>,

    client: &'a Client,
}

impl<'a> ItemListQueryBuilder<'a> {
    /// Make a new [`ItemListQueryBuilder`].
    pub fn new(client: &'a Client) -> Self {
        Self {
            search: None,
            item_type: None,
            with_market_stats: None,
            limit: None,
            offset: None,

            client,
        }
    }

    /// Set the name search.
    pub fn search(&mut self, search: Option<&'a str>) -> &mut Self {
        self.search = search;
        self
    }

    /// Only list items of this type.
    pub fn item_type(&mut self, item_type: Option<i64>) -> &mut Self {
        self.item_type = item_type;
        self
    }

    /// Set whether to include market summaries.
    pub fn with_market_stats(&mut self, with_market_stats: Option<bool>) -> &mut Self {
        self.with_market_stats = with_market_stats;
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

        let mut request = Request::get("items");
        request
            .query
            .append_opt("search", self.search)
            .append_opt("item_type", self.item_type)
            .append_opt("with_market_stats", self.with_market_stats)
            .append_opt("limit", self.limit)
            .append_opt("offset", self.offset);

        Ok(request)
    }

    /// Execute the api query and get the results.
    pub async fn execute(&self) -> Result<ItemsResponse, Error> {
        let request = self.get_request()?;
        self.client.execute_json(request).await
    }
}
