use crate::types::{
    BusinessEntry,
    DeputyEntry,
    HouseEntry,
    InterviewEntry,
    LeaderEntry,
    MembersPlayer,
    OverrideKind,
    OverrideStatus,
    PlayerEntry,
    RatingPlayer,
    RatingType,
    ShopItem,
    TerritoriesCount,
};
use time::OffsetDateTime;

/// A manual verdict for an rp name half
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct CheckRpManualOverrideEntry {
    /// The name or surname
    pub value: Box<str>,

    /// The verdict
    pub status: OverrideStatus,
}

/// Every manual rp name verdict
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
pub struct CheckRpManualOverridesListResponse {
    /// First name verdicts
    pub names: Vec<CheckRpManualOverrideEntry>,

    /// Last name verdicts
    pub surnames: Vec<CheckRpManualOverrideEntry>,
}

impl CheckRpManualOverridesListResponse {
    /// Get the verdicts for one half of a nickname.
    pub fn get(&self, kind: OverrideKind) -> &[CheckRpManualOverrideEntry] {
        match kind {
            OverrideKind::Name => &self.names,
            OverrideKind::Surname => &self.surnames,
        }
    }
}

/// A request to set a manual rp name verdict
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
pub struct CheckRpOverrideRequest {
    /// Which half of the nickname
    pub kind: OverrideKind,

    /// The name or surname
    pub value: String,

    /// The verdict
    pub status: OverrideStatus,
}

/// An account that looks automated
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
pub struct BotAccount {
    /// The nickname
    pub nickname: Box<str>,

    /// Average sessions per day
    pub avg_sessions_per_day: f64,

    /// Average session length in seconds
    pub avg_session_duration_seconds: f64,
}

/// Accounts that look automated
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
pub struct BotDetectionResponse {
    /// The accounts, most suspicious first
    pub accounts: Vec<BotAccount>,
}

/// A server admin
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
pub struct AdminEntry {
    /// The nickname
    pub nickname: Box<str>,

    /// The vk id
    #[serde(default)]
    pub vk_id: Option<Box<str>>,

    /// The admin post
    #[serde(default)]
    pub post: Option<Box<str>>,
}

/// The admins of a server
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
pub struct AdminsResponse {
    /// The server id
    pub server_id: u32,

    /// The server name
    pub server_label: Box<str>,

    /// When this list was collected
    #[serde(with = "crate::util::datetime")]
    pub updated_at: OffsetDateTime,

    /// The admins
    pub admins: Vec<AdminEntry>,
}

/// Collected server status
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
pub struct ServerStatusReport {
    pub server_id: u32,
    pub online_players: u32,
    pub queue_players: u32,
    pub max_players: u32,
    pub is_closed: bool,
    pub payday_boost: i64,
    pub multiplier_donate: i64,
}

/// Collected online players
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
pub struct PlayersReport {
    pub server_id: u32,
    pub players: Vec<PlayerEntry>,
}

/// Collected fraction members
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
pub struct MembersReport {
    pub server_id: u32,
    pub fraction_id: u32,
    pub players: Vec<MembersPlayer>,
}

/// Collected fraction leaders
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
pub struct LeadersReport {
    pub server_id: u32,
    pub data: Vec<LeaderEntry>,
}

/// Collected deputies
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
pub struct DeputiesReport {
    pub server_id: u32,
    pub data: Vec<DeputyEntry>,
}

/// Collected interviews
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
pub struct InterviewsReport {
    pub server_id: u32,
    pub data: Vec<InterviewEntry>,
}

/// A collected rating
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
pub struct RatingReport {
    pub server_id: u32,
    pub rating_type: RatingType,
    pub players: Vec<RatingPlayer>,
}

/// Collected estate
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
pub struct EstateReport {
    pub server_id: u32,
    pub houses: Vec<HouseEntry>,
    pub businesses: Vec<BusinessEntry>,
}

/// Collected admins
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
pub struct AdminsReport {
    pub server_id: u32,
    pub admins: Vec<AdminEntry>,
}

/// One collected shop
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
pub struct ShopReport {
    /// The shop id
    pub shop_id: u32,

    /// The owner nickname
    pub nickname: String,

    /// Items the shop sells
    pub items_sell: Vec<ShopItem>,

    /// Items the shop buys
    pub items_buy: Vec<ShopItem>,
}

/// Collected shops
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
pub struct ShopsReport {
    pub server_id: u32,
    pub shops: Vec<ShopReport>,
}

/// A collected gang map
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
pub struct MapReport {
    pub server_id: u32,

    /// The rendered map, base64 encoded
    pub image: String,

    pub territories_count: TerritoriesCount,
}
