use crate::{
    client::check_limit,
    types::{
        ItemEntry,
        ItemMarketStatsResponse,
        ItemsHistoryResponse,
    },
    Client,
    Error,
    ItemListQueryBuilder,
    Request,
    ShopListQueryBuilder,
};

impl Client {
    /// Get a builder to list items.
    pub fn list_items(&self) -> ItemListQueryBuilder<'_> {
        ItemListQueryBuilder::new(self)
    }

    /// Get an item by id.
    pub async fn item(&self, item_id: u64) -> Result<ItemEntry, Error> {
        self.execute_json(Request::get(format!("items/{item_id}")))
            .await
    }

    /// Get item changes, newest first.
    ///
    /// `item_id` limits the changes to one item.
    pub async fn items_history(
        &self,
        item_id: Option<u64>,
        limit: Option<u32>,
        offset: Option<u64>,
    ) -> Result<ItemsHistoryResponse, Error> {
        check_limit("limit", limit)?;

        let mut request = Request::get("items/history");
        request
            .query
            .append_opt("item_id", item_id)
            .append_opt("limit", limit)
            .append_opt("offset", offset);

        self.execute_json(request).await
    }

    /// Get a builder to list player shops.
    pub fn list_shops(&self) -> ShopListQueryBuilder<'_> {
        ShopListQueryBuilder::new(self)
    }

    /// Get the market stats of an item.
    ///
    /// `server_id` limits the stats to one server.
    pub async fn item_market_stats(
        &self,
        item_id: u64,
        server_id: Option<u32>,
    ) -> Result<ItemMarketStatsResponse, Error> {
        let mut request = Request::get(format!("items/{item_id}/market"));
        request.query.append_opt("server_id", server_id);

        self.execute_json(request).await
    }
}
