use crate::{
    client::check_limit,
    types::{
        AdminsResponse,
        CrossServerRatingResponse,
        EstateHistoryResponse,
        EstateResponse,
        MapResponse,
        Rating,
        RatingResponse,
        ServerOnlineHistoryResponse,
        ServerStatus,
        ServerStatusResponse,
    },
    Client,
    EstateHistoryType,
    EstateType,
    Error,
    Payload,
    PunishListQueryBuilder,
    RatingType,
    Request,
};
use time::OffsetDateTime;

/// The ownership history query of one estate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EstateHistoryQuery {
    /// The server id
    pub server_id: u32,

    /// The estate kind
    pub estate_type: EstateHistoryType,

    /// The estate id
    pub estate_id: u32,

    /// The page size, at most [`crate::MAX_LIMIT`]
    pub limit: Option<u32>,

    /// The page offset
    pub offset: Option<u64>,
}

impl EstateHistoryQuery {
    /// Make a new [`EstateHistoryQuery`] for the first page.
    pub fn new(server_id: u32, estate_type: EstateHistoryType, estate_id: u32) -> Self {
        Self {
            server_id,
            estate_type,
            estate_id,
            limit: None,
            offset: None,
        }
    }
}

impl Client {
    /// Get the status of one server, or of every server if `server_id` is `None`.
    ///
    /// The status of one server may come back as a list holding only that server.
    pub async fn status(&self, server_id: Option<u32>) -> Result<ServerStatus, Error> {
        let mut request = Request::get("status");
        request.query.append_opt("server_id", server_id);

        let payload = self.execute(request).await?;
        match (server_id, payload) {
            (Some(_), Payload::Json(value)) if value.is_array() => {
                let [status]: [ServerStatusResponse; 1] = Payload::Json(value).into_json()?;
                Ok(ServerStatus::Single(status))
            }
            (Some(_), payload) => Ok(ServerStatus::Single(payload.into_json()?)),
            (None, payload) => Ok(ServerStatus::All(
                payload.into_json::<Vec<ServerStatusResponse>>()?,
            )),
        }
    }

    /// Get the online history of a server.
    pub async fn online_history(
        &self,
        server_id: u32,
        start: Option<OffsetDateTime>,
        end: Option<OffsetDateTime>,
    ) -> Result<ServerOnlineHistoryResponse, Error> {
        let mut request = Request::get("status/history");
        request
            .query
            .append("server_id", server_id)
            .append_opt("start_datetime", start)
            .append_opt("end_datetime", end);

        self.execute_json(request).await
    }

    /// Get a rating of one server, or across every server if `server_id` is `None`.
    pub async fn rating(
        &self,
        rating_type: RatingType,
        server_id: Option<u32>,
    ) -> Result<Rating, Error> {
        let mut request = Request::get("rating");
        request
            .query
            .append("rating_type", rating_type)
            .append_opt("server_id", server_id);

        let payload = self.execute(request).await?;
        match server_id {
            Some(_) => Ok(Rating::Server(payload.into_json::<RatingResponse>()?)),
            None => Ok(Rating::CrossServer(
                payload.into_json::<CrossServerRatingResponse>()?,
            )),
        }
    }

    /// Get the estate of a server.
    ///
    /// `owner` limits the listing to one owner.
    pub async fn estate(
        &self,
        server_id: u32,
        estate_type: Option<EstateType>,
        owner: Option<&str>,
    ) -> Result<EstateResponse, Error> {
        let mut request = Request::get("estate");
        request
            .query
            .append("server_id", server_id)
            .append_opt("estate_type", estate_type)
            .append_opt("owner", owner);

        self.execute_json(request).await
    }

    /// Get the ownership history of one estate.
    pub async fn estate_history(
        &self,
        query: &EstateHistoryQuery,
    ) -> Result<EstateHistoryResponse, Error> {
        check_limit("limit", query.limit)?;

        let mut request = Request::get("estate/history");
        request
            .query
            .append("server_id", query.server_id)
            .append("estate_type", query.estate_type)
            .append("estate_id", query.estate_id)
            .append_opt("limit", query.limit)
            .append_opt("offset", query.offset);

        self.execute_json(request).await
    }

    /// Get the gang map of a server.
    pub async fn map(&self, server_id: u32) -> Result<MapResponse, Error> {
        let mut request = Request::get("map");
        request.query.append("server_id", server_id);

        self.execute_json(request).await
    }

    /// Get the admins of a server.
    pub async fn admins(&self, server_id: u32) -> Result<AdminsResponse, Error> {
        let mut request = Request::get("admins");
        request.query.append("server_id", server_id);

        self.execute_json(request).await
    }

    /// Get a builder to list the punishments of a server.
    pub fn list_punishes(&self, server_id: u32) -> PunishListQueryBuilder<'_> {
        PunishListQueryBuilder::new(self, server_id)
    }
}
