use time::{
    Date,
    OffsetDateTime,
};

/// The market price of an item on one day
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
pub struct MarketHistoryPoint {
    /// The day
    #[serde(with = "crate::util::iso_date")]
    pub date: Date,

    /// The price
    pub price: i64,

    /// The # of listings
    pub count: u64,
}

/// Market summary of an item
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
pub struct MarketItemStats {
    /// The lowest listed price
    pub min_price: i64,

    /// The highest listed price
    pub max_price: i64,

    /// The # of listed units
    pub total_count: u64,

    /// The # of listings
    pub listings_count: u64,

    /// Average selling price
    #[serde(default)]
    pub avg_sell_price: Option<i64>,

    /// Average buying price
    #[serde(default)]
    pub avg_buy_price: Option<i64>,
}

/// An item
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
pub struct ItemEntry {
    /// The item id
    pub item_id: u64,

    /// The item name
    pub name: Box<str>,

    /// The icon
    pub icon: Box<str>,

    /// The accessory slot
    #[serde(default)]
    pub acs_slot: Option<i64>,

    /// The item type
    #[serde(rename = "type")]
    pub kind: i64,

    /// Whether the item is in use, as an integer flag
    pub active: i64,

    /// The skin id, for skin items
    #[serde(default)]
    pub skin_id: Option<u32>,

    /// When the item was last changed
    #[serde(with = "crate::util::datetime")]
    pub updated_at: OffsetDateTime,

    /// Market summary, when requested
    #[serde(default)]
    pub market_stats: Option<MarketItemStats>,
}

/// A page of items
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
pub struct ItemsResponse {
    /// The total # of items
    pub total: u64,

    /// The page size
    pub limit: u32,

    /// The page offset
    pub offset: u64,

    /// The items
    pub items: Vec<ItemEntry>,
}

/// A change to an item
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
pub struct ItemHistoryEntry {
    /// The item id
    pub item_id: u64,

    /// What happened
    pub action: Box<str>,

    /// The changed field
    #[serde(default)]
    pub field_name: Option<Box<str>>,

    /// The value before
    #[serde(default)]
    pub old_value: Option<Box<str>>,

    /// The value after
    #[serde(default)]
    pub new_value: Option<Box<str>>,

    /// When the change happened
    #[serde(with = "crate::util::datetime")]
    pub created_at: OffsetDateTime,
}

/// A page of item changes
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
pub struct ItemsHistoryResponse {
    /// The total # of changes
    pub total: u64,

    /// The changes
    pub changes: Vec<ItemHistoryEntry>,
}

/// A shop listing
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
pub struct ShopItem {
    /// The item id
    pub item_id: u64,

    /// The item name
    pub name: Box<str>,

    /// The price per unit
    pub price: i64,

    /// The # of units
    pub count: u64,

    /// The upgrade level
    pub mod_level: u32,

    /// The icon
    #[serde(default)]
    pub icon: Option<Box<str>>,

    /// The accessory slot
    #[serde(default)]
    pub acs_slot: Option<i64>,

    /// The item type
    #[serde(default)]
    pub item_type: Option<i64>,
}

/// A player shop
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
pub struct ShopEntry {
    /// The server id
    pub server_id: u32,

    /// The server name
    pub server_label: Box<str>,

    /// The shop id
    pub shop_id: u32,

    /// The owner nickname
    pub nickname: Box<str>,

    /// When the shop was collected
    #[serde(with = "crate::util::datetime")]
    pub updated_at: OffsetDateTime,

    /// Items the shop sells
    pub items_sell: Vec<ShopItem>,

    /// Items the shop buys
    pub items_buy: Vec<ShopItem>,
}

/// A page of shops
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
pub struct ShopsResponse {
    /// The total # of shops
    pub total: u64,

    /// The page size
    pub limit: u32,

    /// The page offset
    pub offset: u64,

    /// The shops
    pub shops: Vec<ShopEntry>,
}

/// Market stats of one item
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
pub struct ItemMarketStatsResponse {
    /// The item id
    pub item_id: u64,

    /// The item name
    pub name: Box<str>,

    /// Daily selling prices
    pub history_sell: Vec<MarketHistoryPoint>,

    /// Daily buying prices
    pub history_buy: Vec<MarketHistoryPoint>,

    /// Shops dealing in the item
    pub shops: Vec<ShopEntry>,

    /// The lowest selling price
    #[serde(default)]
    pub min_sell_price: Option<i64>,

    /// The highest buying price
    #[serde(default)]
    pub max_buy_price: Option<i64>,
}

#[cfg(test)]
mod test {
    use super::*;
    use time::macros::date;

    const ITEMS: &str = include_str!("../../test_data/items.json");
    const MARKET: &str = include_str!("../../test_data/item_market.json");

    #[test]
    fn parse_items() {
        let items: ItemsResponse = serde_json::from_str(ITEMS).expect("failed to parse");
        assert!(items.total == 2);
        assert!(items.items[0].kind == 3);
        assert!(items.items[0].market_stats.is_some());
        assert!(items.items[1].market_stats.is_none());
    }

    #[test]
    fn parse_market() {
        let market: ItemMarketStatsResponse =
            serde_json::from_str(MARKET).expect("failed to parse");
        assert!(market.history_sell[0].date == date!(2024 - 02 - 28));
        assert!(market.shops[0].items_sell.len() == 1);
        assert!(market.max_buy_price.is_none());
    }
}
