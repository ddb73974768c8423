use crate::types::{
    PrivacyPlatform,
    RatingType,
};
use time::{
    Date,
    OffsetDateTime,
};

/// The check result of one half of an rp name
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
pub struct CheckRpNameData {
    /// The checked value
    #[serde(default)]
    pub value: Option<Box<str>>,

    /// Whether this is a real name
    pub is_existing: bool,

    /// Whether the name was confirmed manually
    pub is_confirmed: bool,

    /// A chart of likely nationalities
    #[serde(default)]
    pub nationalities_chart: Option<Box<str>>,
}

/// The check result of an rp name
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
pub struct CheckRpResponse {
    /// The first name
    pub first_name: CheckRpNameData,

    /// The last name
    pub last_name: CheckRpNameData,

    /// The combined nickname
    pub nickname: Box<str>,
}

/// A generated rp name
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
pub struct RpNickResponse {
    /// The first name
    pub name: Box<str>,

    /// The last name
    pub surname: Box<str>,

    /// The combined nickname, `Name_Surname`
    pub nickname: Box<str>,
}

/// A server id and name
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
pub struct ServerInfo {
    /// The server id
    pub server_id: u32,

    /// The server name
    pub server_label: Box<str>,
}

/// General player info
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
pub struct PlayerGeneral {
    /// The account id
    pub account_id: u64,

    /// The skin id
    pub skin_id: u32,

    /// The nickname
    pub nickname: Box<str>,

    /// The character gender, as shown in game
    pub gender: Box<str>,

    /// Total hours played
    pub played_hours: u64,

    /// The in game phone number
    #[serde(default)]
    pub phone_number: Option<u64>,

    /// Health
    pub health: i64,

    /// Hunger
    pub hunger: i64,

    /// The hunger cap
    pub max_hunger: i64,

    /// Drug addiction level
    pub drug_addict_lvl: i64,

    /// The spouse nickname
    #[serde(default)]
    pub marriage: Option<Box<str>>,

    /// The job name
    #[serde(default)]
    pub job_label: Option<Box<str>>,
}

/// The fraction of a player
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
pub struct PlayerFraction {
    /// The fraction id
    #[serde(default)]
    pub fraction_id: Option<u32>,

    /// The fraction name
    #[serde(default)]
    pub fraction_label: Option<Box<str>>,

    /// The rank
    #[serde(default)]
    pub rank_number: Option<u32>,

    /// The rank name
    #[serde(default)]
    pub rank_label: Option<Box<str>>,
}

/// Balances of the individual bank accounts
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct IndividualAccounts {
    #[serde(rename = "1", default)]
    pub account_1: Option<i64>,
    #[serde(rename = "2", default)]
    pub account_2: Option<i64>,
    #[serde(rename = "3", default)]
    pub account_3: Option<i64>,
    #[serde(rename = "4", default)]
    pub account_4: Option<i64>,
    #[serde(rename = "5", default)]
    pub account_5: Option<i64>,
    #[serde(rename = "6", default)]
    pub account_6: Option<i64>,
}

impl IndividualAccounts {
    /// Iterate over the balances of the accounts, in order.
    pub fn iter(&self) -> impl Iterator<Item = Option<i64>> {
        [
            self.account_1,
            self.account_2,
            self.account_3,
            self.account_4,
            self.account_5,
            self.account_6,
        ]
        .into_iter()
    }
}

/// Player money
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
pub struct PlayerMoney {
    /// Az coins
    pub az_coins: i64,

    /// The sum of every balance
    pub total_money: i64,

    /// Cash on hand
    pub cash: i64,

    /// The bank balance
    pub bank_balance: i64,

    /// The deposit balance
    pub deposit: i64,

    /// Whether the player has a bank card
    pub have_bank_card: bool,

    /// Money given to charity
    pub charity_money: i64,

    /// The phone balance
    #[serde(default)]
    pub phone_balance: Option<i64>,

    /// Individual accounts
    pub individual_accounts: IndividualAccounts,
}

/// Player level
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
pub struct PlayerLvl {
    /// The level
    pub lvl: u32,

    /// The xp in this level
    pub current_xp: u32,

    /// The xp needed for the next level
    pub max_xp: u32,
}

/// Player law standing
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
pub struct PlayerPunishes {
    /// Law abidance
    pub law_count: i64,

    /// The wanted level
    pub wanted_lvl: u32,

    /// The # of warns
    pub warns_count: u32,
}

/// Player vip status
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
pub struct PlayerVip {
    /// The vip level
    #[serde(default)]
    pub vip_lvl: Option<u32>,

    /// The vip name
    #[serde(default)]
    pub vip_label: Option<Box<str>>,

    /// When the vip ends
    #[serde(default, with = "crate::util::datetime::option")]
    pub vip_expiration_date: Option<OffsetDateTime>,

    /// Whether the player has the addition vip
    pub have_addition_vip: bool,

    /// When the addition vip ends
    #[serde(default, with = "crate::util::datetime::option")]
    pub addition_vip_expiration_date: Option<OffsetDateTime>,
}

/// The place of a player in one rating
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
pub struct PlayerRatingEntry {
    /// The rating
    pub rating_type: RatingType,

    /// The place, starting at 1
    pub position: u32,

    /// The rated value
    pub value: serde_json::Value,
}

/// Admin info of a player
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
pub struct AdminInfo {
    /// Whether the player is an admin
    #[serde(default)]
    pub is_admin: Option<bool>,

    /// The admin post
    #[serde(default)]
    pub post: Option<Box<str>>,

    /// The vk tag
    #[serde(default)]
    pub vk_tag: Option<Box<str>>,
}

/// A player profile
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
pub struct FindPlayerResponse {
    /// The server
    pub server: ServerInfo,

    /// General info
    pub general: PlayerGeneral,

    /// Admin info
    pub admin_info: AdminInfo,

    /// Fraction
    pub fraction: PlayerFraction,

    /// Money
    pub money: PlayerMoney,

    /// Level
    pub lvl: PlayerLvl,

    /// Law standing
    pub punishes: PlayerPunishes,

    /// Vip status
    pub vip_info: PlayerVip,

    /// Rating places
    #[serde(default)]
    pub ratings: Vec<PlayerRatingEntry>,

    /// Profile views today
    #[serde(default)]
    pub views_today: u64,

    /// Profile views in total
    #[serde(default)]
    pub views_total: u64,

    /// Whether the player is premium
    #[serde(default)]
    pub is_premium: bool,

    /// Whether this profile came from the cache
    #[serde(default)]
    pub is_cached: bool,

    /// Whether the player hid the profile
    #[serde(default)]
    pub is_hidden: bool,

    /// When this profile was collected
    #[serde(with = "crate::util::datetime")]
    pub updated_at: OffsetDateTime,
}

/// Time played on one day
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
pub struct OnlineEntry {
    /// The day
    #[serde(with = "crate::util::iso_date")]
    pub date: Date,

    /// Hours
    pub hours: u32,

    /// Minutes
    pub minutes: u32,

    /// Seconds
    pub seconds: u32,
}

/// Player online info
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
pub struct OnlineResponse {
    /// Daily online
    pub online: Vec<OnlineEntry>,

    /// Whether the player is playing now
    pub have_active_session: bool,

    /// When the current session started
    #[serde(default, with = "crate::util::datetime::option")]
    pub active_session_login_at: Option<OffsetDateTime>,

    /// The last login
    #[serde(default, with = "crate::util::datetime::option")]
    pub last_login_at: Option<OffsetDateTime>,

    /// The last logout
    #[serde(default, with = "crate::util::datetime::option")]
    pub last_logout_at: Option<OffsetDateTime>,
}

/// A play session
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
pub struct PlayerSessionEntry {
    /// Login time
    #[serde(with = "crate::util::datetime")]
    pub login_at: OffsetDateTime,

    /// Logout time, none if the session is still running
    #[serde(default, with = "crate::util::datetime::option")]
    pub logout_at: Option<OffsetDateTime>,
}

/// A page of play sessions
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
pub struct PlayerSessionsResponse {
    /// The total # of sessions
    pub total: u64,

    /// The page size
    pub limit: u32,

    /// The page offset
    pub offset: u64,

    /// The sessions
    pub sessions: Vec<PlayerSessionEntry>,
}

/// One day of a play calendar
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
pub struct CalendarDayEntry {
    /// The day
    #[serde(with = "crate::util::iso_date")]
    pub date: Date,

    /// The # of sessions
    pub count: u32,

    /// Session lengths in minutes
    pub durations: Vec<u32>,

    /// Total minutes played
    pub total_played_minutes: u32,
}

/// A month of play activity
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
pub struct PlayerCalendarResponse {
    /// The server id
    pub server_id: u32,

    /// The nickname
    pub nickname: Box<str>,

    /// The year
    pub year: i32,

    /// The month, 1 to 12
    pub month: u8,

    /// The days
    pub days: Vec<CalendarDayEntry>,
}

/// A nickname change
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
pub struct NicknameHistoryEntry {
    /// The nickname before
    #[serde(default)]
    pub old_value: Option<Box<str>>,

    /// The nickname after
    #[serde(default)]
    pub new_value: Option<Box<str>>,

    /// When the change happened
    #[serde(with = "crate::util::datetime")]
    pub created_at: OffsetDateTime,
}

/// The money of a player on one day
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
pub struct MoneyHistoryEntry {
    /// The day
    #[serde(with = "crate::util::iso_date")]
    pub date: Date,

    /// The total money
    pub value: i64,
}

/// A profile view
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
pub struct PlayerViewEntry {
    /// Where the view came from
    #[serde(default)]
    pub platform: Option<Box<str>>,

    /// The user that looked
    #[serde(default)]
    pub executor_id: Option<u64>,

    /// When the view happened
    #[serde(with = "crate::util::datetime")]
    pub created_at: OffsetDateTime,
}

/// Profile views
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
pub struct PlayerViewsResponse {
    /// The views
    pub views: Vec<PlayerViewEntry>,
}

/// A request to hide or show a profile
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
pub struct PrivacyToggleRequest {
    /// The platform of the requesting user
    pub platform: PrivacyPlatform,

    /// The requesting user
    pub user_id: u64,

    /// The server id
    pub server_id: u32,

    /// The nickname
    pub nickname: String,

    /// Whether the requesting user may toggle any profile
    #[serde(default)]
    pub is_superadmin: bool,
}

#[cfg(test)]
mod test {
    use super::*;
    use time::macros::date;

    const FIND: &str = include_str!("../../test_data/find.json");
    const ONLINE: &str = include_str!("../../test_data/online.json");

    #[test]
    fn parse_find() {
        let player: FindPlayerResponse = serde_json::from_str(FIND).expect("failed to parse");
        assert!(&*player.general.nickname == "Bob_Smith");
        assert!(player.money.individual_accounts.account_2 == Some(5000));
        assert!(player.money.individual_accounts.account_6.is_none());
        assert!(player.vip_info.vip_expiration_date.is_some());
        assert!(player.ratings.is_empty());
        assert!(player.views_today == 0);
        assert!(!player.is_hidden);
    }

    #[test]
    fn parse_online() {
        let online: OnlineResponse = serde_json::from_str(ONLINE).expect("failed to parse");
        assert!(online.online[0].date == date!(2024 - 02 - 29));
        assert!(online.have_active_session);
        assert!(online.last_logout_at.is_none());
    }

    #[test]
    fn privacy_request_body() {
        let request = PrivacyToggleRequest {
            platform: PrivacyPlatform::Tg,
            user_id: 42,
            server_id: 5,
            nickname: "Bob_Smith".into(),
            is_superadmin: false,
        };
        let value = serde_json::to_value(&request).expect("failed to serialize");
        assert!(value["platform"] == "tg");
        assert!(value["is_superadmin"] == false);
    }
}
