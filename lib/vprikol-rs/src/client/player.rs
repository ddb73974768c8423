use crate::{
    types::{
        CheckRpResponse,
        FindPlayerResponse,
        Gender,
        MoneyHistoryEntry,
        Nation,
        NicknameHistoryEntry,
        OnlineResponse,
        PlayerCalendarResponse,
        PlayerViewsResponse,
        PlayersResponse,
        PrivacyToggleRequest,
        RpNickResponse,
    },
    Client,
    Error,
    QueryParams,
    Request,
    SessionListQueryBuilder,
};
use time::Date;

/// Identifies a player on a server.
///
/// At least one of `nickname` and `account_id` must be set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerQuery<'a> {
    /// The server id
    pub server_id: u32,

    /// The nickname
    pub nickname: Option<&'a str>,

    /// The account id
    pub account_id: Option<u64>,
}

impl<'a> PlayerQuery<'a> {
    /// Look up a player by nickname.
    pub fn by_nickname(server_id: u32, nickname: &'a str) -> Self {
        Self {
            server_id,
            nickname: Some(nickname),
            account_id: None,
        }
    }

    /// Look up a player by account id.
    pub fn by_account_id(server_id: u32, account_id: u64) -> Self {
        Self {
            server_id,
            nickname: None,
            account_id: Some(account_id),
        }
    }

    /// Check the query and add it to query parameters.
    pub(crate) fn append_to(&self, query: &mut QueryParams) -> Result<(), Error> {
        if self.nickname.is_none() && self.account_id.is_none() {
            return Err(Error::invalid_arguments(
                "either a nickname or an account id is required",
            ));
        }

        query
            .append("server_id", self.server_id)
            .append_opt("nickname", self.nickname)
            .append_opt("account_id", self.account_id);

        Ok(())
    }
}

impl Client {
    /// Find a player.
    ///
    /// # Errors
    /// Fails without sending anything if neither a nickname nor an account id is given.
    pub async fn find_player(&self, player: PlayerQuery<'_>) -> Result<FindPlayerResponse, Error> {
        let mut request = Request::get("find");
        player.append_to(&mut request.query)?;

        self.execute_json(request).await
    }

    /// Get the online info of a player.
    pub async fn player_online(&self, player: PlayerQuery<'_>) -> Result<OnlineResponse, Error> {
        let mut request = Request::get("find/online");
        player.append_to(&mut request.query)?;

        self.execute_json(request).await
    }

    /// Get a builder to list the play sessions of a player.
    pub fn list_sessions<'a>(&'a self, player: PlayerQuery<'a>) -> SessionListQueryBuilder<'a> {
        SessionListQueryBuilder::new(self, player)
    }

    /// Get the play activity of a player for one month.
    ///
    /// # Errors
    /// Fails without sending anything if `month` is not in `1..=12`.
    pub async fn player_calendar(
        &self,
        server_id: u32,
        nickname: &str,
        year: i32,
        month: u8,
    ) -> Result<PlayerCalendarResponse, Error> {
        if !(1..=12).contains(&month) {
            return Err(Error::invalid_arguments(format!(
                "`month` must be in 1..=12, got {month}"
            )));
        }

        let mut request = Request::get("find/calendar");
        request
            .query
            .append("server_id", server_id)
            .append("nickname", nickname)
            .append("year", year)
            .append("month", month);

        self.execute_json(request).await
    }

    /// Get the nickname changes of an account.
    pub async fn nickname_history(
        &self,
        server_id: u32,
        account_id: u64,
    ) -> Result<Vec<NicknameHistoryEntry>, Error> {
        let mut request = Request::get("find/nickname_history");
        request
            .query
            .append("server_id", server_id)
            .append("account_id", account_id);

        self.execute_json(request).await
    }

    /// Get the daily money of an account.
    pub async fn money_history(
        &self,
        server_id: u32,
        account_id: u64,
        start: Option<Date>,
        end: Option<Date>,
    ) -> Result<Vec<MoneyHistoryEntry>, Error> {
        let mut request = Request::get("find/money_history");
        request
            .query
            .append("server_id", server_id)
            .append("account_id", account_id)
            .append_opt("start_date", start)
            .append_opt("end_date", end);

        self.execute_json(request).await
    }

    /// Get the profile views of a player.
    pub async fn player_views(
        &self,
        server_id: u32,
        nickname: &str,
    ) -> Result<PlayerViewsResponse, Error> {
        let mut request = Request::get("find/views");
        request
            .query
            .append("server_id", server_id)
            .append("nickname", nickname);

        self.execute_json(request).await
    }

    /// Hide or show a player profile.
    pub async fn toggle_privacy(&self, request: &PrivacyToggleRequest) -> Result<(), Error> {
        let request = Request::post("find/privacy").json(request)?;
        self.execute_unit(request).await
    }

    /// Get the online players of a server.
    pub async fn players(&self, server_id: u32) -> Result<PlayersResponse, Error> {
        let mut request = Request::get("players");
        request.query.append("server_id", server_id);

        self.execute_json(request).await
    }

    /// Check whether a name is a valid rp name.
    ///
    /// # Errors
    /// Fails without sending anything if neither name is given.
    pub async fn check_rp(
        &self,
        first_name: Option<&str>,
        last_name: Option<&str>,
    ) -> Result<CheckRpResponse, Error> {
        if first_name.is_none() && last_name.is_none() {
            return Err(Error::invalid_arguments(
                "either a first name or a last name is required",
            ));
        }

        let mut request = Request::get("checkrp");
        request
            .query
            .append_opt("first_name", first_name)
            .append_opt("last_name", last_name);

        self.execute_json(request).await
    }

    /// Generate an rp name.
    pub async fn rp_nick(&self, gender: Gender, nation: Nation) -> Result<RpNickResponse, Error> {
        let mut request = Request::get("rpnick");
        request
            .query
            .append("gender", gender)
            .append("nation", nation);

        self.execute_json(request).await
    }
}
