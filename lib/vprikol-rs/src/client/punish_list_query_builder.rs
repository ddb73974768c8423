use crate::{
    client::check_limit,
    types::PunishesResponse,
    Client,
    Error,
    PunishType,
    Request,
};
use time::OffsetDateTime;

/// A builder for punishment list api queries
#[derive(Debug, Clone)]
pub struct PunishListQueryBuilder<'a> {
    /// The server id
    pub server_id: u32,

    /// The punished player
    pub player_nickname: Option<&'a str>,

    /// The admin
    pub admin_nickname: Option<&'a str>,

    /// The punishment kind
    pub punish_type: Option<PunishType>,

    /// The earliest punishment time
    pub start: Option<OffsetDateTime>,

    /// The latest punishment time
    pub end: Option<OffsetDateTime>,

    /// The page size
    pub limit: Option<u32>,

    /// The page offset
    pub offset: Option<u64>,

    client: &'a Client,
}

impl<'a> PunishListQueryBuilder<'a> {
    /// Make a new [`PunishListQueryBuilder`].
    pub fn new(client: &'a Client, server_id: u32) -> Self {
        Self {
            server_id,
            player_nickname: None,
            admin_nickname: None,
            punish_type: None,
            start: None,
            end: None,
            limit: None,
            offset: None,

            client,
        }
    }

    /// Only list punishments of this player.
    pub fn player_nickname(&mut self, player_nickname: Option<&'a str>) -> &mut Self {
        self.player_nickname = player_nickname;
        self
    }

    /// Only list punishments issued by this admin.
    pub fn admin_nickname(&mut self, admin_nickname: Option<&'a str>) -> &mut Self {
        self.admin_nickname = admin_nickname;
        self
    }

    /// Only list punishments of this kind.
    pub fn punish_type(&mut self, punish_type: Option<PunishType>) -> &mut Self {
        self.punish_type = punish_type;
        self
    }

    /// Set the earliest punishment time.
    pub fn start(&mut self, start: Option<OffsetDateTime>) -> &mut Self {
        self.start = start;
        self
    }

    /// Set the latest punishment time.
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
    /// This fails if `limit` is greater than [`crate::MAX_LIMIT`].
    pub fn get_request(&self) -> Result<Request, Error> {
        check_limit("limit", self.limit)?;

        let mut request = Request::get("punishes");
        request
            .query
            .append("server_id", self.server_id)
            .append_opt("player_nickname", self.player_nickname)
            .append_opt("admin_nickname", self.admin_nickname)
            .append_opt("punish_type", self.punish_type)
            .append_opt("start_datetime", self.start)
            .append_opt("end_datetime", self.end)
            .append_opt("limit", self.limit)
            .append_opt("offset", self.offset);

        Ok(request)
    }

    /// Execute the api query and get the results.
    pub async fn execute(&self) -> Result<PunishesResponse, Error> {
        let request = self.get_request()?;
        self.client.execute_json(request).await
    }
}
