use crate::types::{
    EstateHistoryType,
    PunishType,
    RatingType,
};
use time::OffsetDateTime;

/// The status of one server
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
pub struct ServerStatusResponse {
    /// The server id
    pub server_id: u32,

    /// The server ip
    pub server_ip: Box<str>,

    /// The server port
    pub server_port: u16,

    /// The display name of the server
    pub server_label: Box<str>,

    /// The # of players online
    pub online_players: u32,

    /// The # of players waiting to join
    pub queue_players: u32,

    /// The player cap
    pub max_players: u32,

    /// Whether the server is closed
    pub is_closed: bool,

    /// The payday multiplier
    pub payday_boost: i64,

    /// The donation multiplier
    pub multiplier_donate: i64,

    /// The server vk group
    #[serde(default)]
    pub server_vk: Option<Box<str>>,

    /// The server discord
    #[serde(default)]
    pub server_discord: Option<Box<str>>,

    /// The vk of the main admin
    #[serde(default)]
    pub main_admin_vk: Option<Box<str>>,

    /// The vk of the deputy main admin
    #[serde(default)]
    pub deputy_main_admin_vk: Option<Box<str>>,

    /// When this status was collected
    #[serde(with = "crate::util::datetime")]
    pub updated_at: OffsetDateTime,
}

/// The result of a status request.
///
/// Which variant is returned depends on whether a server id was requested.
#[derive(Debug, Clone, serde::Serialize)]
#[serde(untagged)]
pub enum ServerStatus {
    /// The status of the requested server
    Single(ServerStatusResponse),

    /// The status of every server
    All(Vec<ServerStatusResponse>),
}

impl ServerStatus {
    /// Get the status of every returned server.
    pub fn servers(&self) -> &[ServerStatusResponse] {
        match self {
            Self::Single(status) => std::slice::from_ref(status),
            Self::All(statuses) => statuses,
        }
    }
}

/// A rating entry
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
pub struct RatingPlayer {
    /// The place in the rating, starting at 1
    pub position: u32,

    /// The player nickname
    pub nickname: Box<str>,

    /// The rated value.
    ///
    /// The shape depends on the rating type.
    pub value: serde_json::Value,

    /// The server of the player, for cross-server ratings
    #[serde(default)]
    pub server_id: Option<u32>,

    /// The server name of the player, for cross-server ratings
    #[serde(default)]
    pub server_label: Option<Box<str>>,

    /// A secondary value
    #[serde(default)]
    pub additional_value: Option<serde_json::Value>,

    /// Az coins
    #[serde(default)]
    pub az_coins: Option<i64>,

    /// The family name
    #[serde(default)]
    pub family: Option<Box<str>>,
}

/// A rating of one server
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
pub struct RatingResponse {
    /// The server id
    pub server_id: u32,

    /// The server name
    pub server_label: Box<str>,

    /// The rating
    pub rating_type: RatingType,

    /// When this rating was collected
    #[serde(with = "crate::util::datetime")]
    pub updated_at: OffsetDateTime,

    /// The players, best first
    pub players: Vec<RatingPlayer>,
}

/// A rating across every server
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
pub struct CrossServerRatingResponse {
    /// The rating
    pub rating_type: RatingType,

    /// When this rating was collected
    #[serde(with = "crate::util::datetime")]
    pub updated_at: OffsetDateTime,

    /// The players, best first.
    ///
    /// Each player carries its own server.
    pub players: Vec<RatingPlayer>,
}

/// The result of a rating request.
///
/// Which variant is returned depends on whether a server id was requested.
#[derive(Debug, Clone, serde::Serialize)]
#[serde(untagged)]
pub enum Rating {
    /// The rating of the requested server
    Server(RatingResponse),

    /// The rating across every server
    CrossServer(CrossServerRatingResponse),
}

impl Rating {
    /// Get the rated players.
    pub fn players(&self) -> &[RatingPlayer] {
        match self {
            Self::Server(rating) => &rating.players,
            Self::CrossServer(rating) => &rating.players,
        }
    }
}

/// Estate auction state
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
pub struct AuctionInfo {
    /// Whether an auction is running
    pub active: bool,

    /// The smallest accepted bet
    pub minimal_bet: i64,

    /// When the auction ends
    #[serde(default, with = "crate::util::datetime::option")]
    pub time_end: Option<OffsetDateTime>,

    /// The starting price
    pub start_price: i64,
}

/// A position on the map
#[derive(Debug, Clone, Copy, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Coordinates {
    /// x
    pub x: f64,

    /// y
    pub y: f64,
}

/// A house
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
pub struct HouseEntry {
    /// The house id
    pub id: u32,

    /// The owner nickname, if owned
    #[serde(default)]
    pub owner: Option<Box<str>>,

    /// The house name
    #[serde(default)]
    pub name: Option<Box<str>>,

    /// Auction state
    pub auction: AuctionInfo,

    /// Where the house is
    pub coordinates: Coordinates,
}

/// A business
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
pub struct BusinessEntry {
    /// The business id
    pub id: u32,

    /// The owner nickname, if owned
    #[serde(default)]
    pub owner: Option<Box<str>>,

    /// The business name
    pub name: Box<str>,

    /// Auction state
    pub auction: AuctionInfo,

    /// Where the business is
    pub coordinates: Coordinates,
}

/// The estate of a server
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
pub struct EstateResponse {
    /// The server id
    pub server_id: u32,

    /// The server name
    pub server_label: Box<str>,

    /// When this listing was collected
    #[serde(with = "crate::util::datetime")]
    pub updated_at: OffsetDateTime,

    /// Houses
    pub houses: Vec<HouseEntry>,

    /// Businesses
    pub businesses: Vec<BusinessEntry>,
}

/// An ownership change
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
pub struct EstateHistoryEntry {
    /// The owner before the change
    #[serde(default)]
    pub previous_owner: Option<Box<str>>,

    /// The owner after the change
    #[serde(default)]
    pub new_owner: Option<Box<str>>,

    /// The estate name at the time
    #[serde(default)]
    pub estate_name: Option<Box<str>>,

    /// When the change happened
    #[serde(with = "crate::util::datetime")]
    pub action_at: OffsetDateTime,
}

/// A page of the ownership history of one estate
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
pub struct EstateHistoryResponse {
    /// The server id
    pub server_id: u32,

    /// The server name
    pub server_label: Box<str>,

    /// The estate kind
    pub estate_type: EstateHistoryType,

    /// The estate id
    pub estate_id: u32,

    /// The current estate name
    #[serde(default)]
    pub estate_name: Option<Box<str>>,

    /// The total # of entries
    pub total: u64,

    /// The page size
    pub limit: u32,

    /// The page offset
    pub offset: u64,

    /// The entries
    pub data: Vec<EstateHistoryEntry>,
}

/// The # of territories held by each gang
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct TerritoriesCount {
    #[serde(default)]
    pub grove: u32,
    #[serde(default)]
    pub ballas: u32,
    #[serde(default)]
    pub vagos: u32,
    #[serde(default)]
    pub rifa: u32,
    #[serde(default)]
    pub aztec: u32,
    #[serde(default)]
    pub nw: u32,
}

/// The gang map of a server
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
pub struct MapResponse {
    /// The server id
    pub server_id: u32,

    /// The server name
    pub server_label: Box<str>,

    /// When this map was collected
    #[serde(with = "crate::util::datetime")]
    pub updated_at: OffsetDateTime,

    /// The rendered map, base64 encoded
    pub image: String,

    /// Territory counts
    pub territories_count: TerritoriesCount,
}

/// A point on the online graph
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
pub struct GraphPoint {
    /// The sample time
    #[serde(with = "crate::util::datetime")]
    pub time: OffsetDateTime,

    /// Players online
    pub online: u32,

    /// Players in queue
    pub queue: u32,

    /// The average online of the whole project
    pub project_avg: u32,
}

/// The online history of a server
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
pub struct ServerOnlineHistoryResponse {
    /// The server id
    pub server_id: u32,

    /// The samples, oldest first
    pub data: Vec<GraphPoint>,
}

/// A punishment
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
pub struct PunishEntry {
    /// The punishment kind
    pub punish_type: PunishType,

    /// The punished player
    pub player_nickname: Box<str>,

    /// The admin
    pub admin_nickname: Box<str>,

    /// The given reason
    pub reason: Box<str>,

    /// The raw log line
    pub full_string: Box<str>,

    /// Whether the punishment is still in effect
    pub active: bool,

    /// When it was issued
    #[serde(with = "crate::util::datetime")]
    pub created_at: OffsetDateTime,

    /// When it ends
    #[serde(default, with = "crate::util::datetime::option")]
    pub expires_at: Option<OffsetDateTime>,
}

/// The punishment log of a server
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
pub struct PunishesResponse {
    /// The server id
    pub server_id: u32,

    /// The server name
    pub server_label: Box<str>,

    /// The punishments, newest first
    pub data: Vec<PunishEntry>,
}
