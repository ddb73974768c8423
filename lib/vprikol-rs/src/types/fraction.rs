use crate::types::ModifiedBy;
use time::OffsetDateTime;

/// A fraction member
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
pub struct MembersPlayer {
    /// The account id
    #[serde(default)]
    pub account_id: Option<u64>,

    /// The nickname
    pub nickname: Box<str>,

    /// Whether the member is online
    pub is_online: bool,

    /// Whether the member leads the fraction
    pub is_leader: bool,

    /// The rank
    pub rank_number: u32,

    /// The rank name
    #[serde(default)]
    pub rank_label: Option<Box<str>>,

    /// The in game id, if online
    #[serde(default)]
    pub ingame_id: Option<u32>,

    /// The nickname color as an rgb integer
    #[serde(default)]
    pub nickname_color: Option<u32>,
}

/// The online record of a fraction
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
pub struct MembersRecord {
    /// The most members ever online at once
    pub online_players: u32,

    /// The leader at the time
    #[serde(default)]
    pub leader_nickname: Option<Box<str>>,

    /// When the record was set
    #[serde(default, with = "crate::util::datetime::option")]
    pub modified_at: Option<OffsetDateTime>,

    /// Who set the record
    pub modified_by: ModifiedBy,
}

/// The members of a fraction
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
pub struct MembersResponse {
    /// The server id
    pub server_id: u32,

    /// The fraction id
    pub fraction_id: u32,

    /// The server name
    pub server_label: Box<str>,

    /// The fraction name
    pub fraction_label: Box<str>,

    /// The # of members
    pub total_players: u32,

    /// The # of members online
    pub total_online: u32,

    /// The leader nickname
    #[serde(default)]
    pub leader_nickname: Option<Box<str>>,

    /// Whether the leader is online
    pub is_leader_online: bool,

    /// When the online list was collected
    #[serde(with = "crate::util::datetime")]
    pub online_updated_at: OffsetDateTime,

    /// When the member list was collected
    #[serde(with = "crate::util::datetime")]
    pub members_updated_at: OffsetDateTime,

    /// The online record
    pub online_record: MembersRecord,

    /// The members
    pub players: Vec<MembersPlayer>,
}

/// A fraction leader
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
pub struct LeaderEntry {
    /// The fraction id
    pub fraction_id: u32,

    /// The fraction name
    pub fraction_label: Box<str>,

    /// The nickname
    pub nickname: Box<str>,

    /// The in game id
    pub ingame_id: u32,

    /// The in game phone number
    #[serde(default)]
    pub phone_number: Option<u64>,

    /// Seconds spent afk
    #[serde(default)]
    pub afk: Option<u32>,
}

/// The online fraction leaders of a server
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
pub struct LeadersResponse {
    /// The leaders
    pub data: Vec<LeaderEntry>,

    /// The server id
    pub server_id: u32,

    /// The server name
    pub server_label: Box<str>,

    /// When this list was collected
    #[serde(with = "crate::util::datetime")]
    pub updated_at: OffsetDateTime,
}

/// A deputy fraction leader
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
pub struct DeputyEntry {
    /// The fraction id
    pub fraction_id: u32,

    /// The fraction name
    pub fraction_label: Box<str>,

    /// The nickname
    pub nickname: Box<str>,

    /// The in game id
    pub ingame_id: u32,

    /// The in game phone number
    #[serde(default)]
    pub phone_number: Option<u64>,

    /// Seconds spent afk
    #[serde(default)]
    pub afk: Option<u32>,
}

/// The online deputies of a server
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
pub struct DeputiesResponse {
    /// The deputies
    pub data: Vec<DeputyEntry>,

    /// The server id
    pub server_id: u32,

    /// The server name
    pub server_label: Box<str>,

    /// When this list was collected
    #[serde(with = "crate::util::datetime")]
    pub updated_at: OffsetDateTime,
}

/// A scheduled fraction interview
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
pub struct InterviewEntry {
    /// The fraction id
    pub fraction_id: u32,

    /// The fraction name
    pub fraction_label: Box<str>,

    /// Where it is held
    #[serde(default)]
    pub place: Option<Box<str>>,

    /// When it is held, as announced in game
    #[serde(default)]
    pub time: Option<Box<str>>,
}

/// The interviews of a server
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
pub struct InterviewsResponse {
    /// The server id
    pub server_id: u32,

    /// The server name
    pub server_label: Box<str>,

    /// The interviews
    pub data: Vec<InterviewEntry>,

    /// When this list was collected
    #[serde(with = "crate::util::datetime")]
    pub updated_at: OffsetDateTime,
}

/// An online player
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
pub struct PlayerEntry {
    /// The nickname color as an rgb integer
    pub color: u32,

    /// The ping
    pub ping: u32,

    /// The in game id
    pub id: u32,

    /// The level
    pub lvl: u32,

    /// The nickname
    pub nickname: Box<str>,
}

/// The online players of a server
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
pub struct PlayersResponse {
    /// The server id
    pub server_id: u32,

    /// The server name
    pub server_label: Box<str>,

    /// The players
    pub players: Vec<PlayerEntry>,

    /// When this list was collected
    #[serde(with = "crate::util::datetime")]
    pub updated_at: OffsetDateTime,
}

#[cfg(test)]
mod test {
    use super::*;

    const MEMBERS: &str = include_str!("../../test_data/members.json");

    #[test]
    fn parse_members() {
        let members: MembersResponse = serde_json::from_str(MEMBERS).expect("failed to parse");
        assert!(members.players.len() == 2);
        assert!(members.players[0].is_leader);
        assert!(members.players[1].rank_label.is_none());
        assert!(members.online_record.modified_by == ModifiedBy::System);
    }

    #[test]
    fn unknown_modified_by() {
        let result = serde_json::from_str::<MembersRecord>(
            r#"{"online_players": 3, "modified_by": "robot"}"#,
        );
        assert!(result.is_err());
    }
}
