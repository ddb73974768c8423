use crate::{
    client::check_limit,
    types::{
        BotDetectionResponse,
        CheckRpManualOverridesListResponse,
        CheckRpOverrideRequest,
        OverrideKind,
    },
    Client,
    Error,
    Request,
};

impl Client {
    /// List the manual rp name verdicts.
    ///
    /// This needs an admin token.
    pub async fn check_rp_overrides(&self) -> Result<CheckRpManualOverridesListResponse, Error> {
        self.execute_json(Request::get("admin/checkrp/overrides"))
            .await
    }

    /// Set a manual rp name verdict.
    ///
    /// This needs an admin token.
    pub async fn set_check_rp_override(
        &self,
        request: &CheckRpOverrideRequest,
    ) -> Result<(), Error> {
        let request = Request::put("admin/checkrp/overrides").json(request)?;
        self.execute_unit(request).await
    }

    /// Remove a manual rp name verdict.
    ///
    /// This needs an admin token.
    pub async fn delete_check_rp_override(
        &self,
        kind: OverrideKind,
        value: &str,
    ) -> Result<(), Error> {
        let mut request = Request::delete("admin/checkrp/overrides");
        request.query.append("kind", kind).append("value", value);

        self.execute_unit(request).await
    }

    /// Find accounts that look automated.
    ///
    /// This needs an admin token.
    pub async fn detect_bots(
        &self,
        server_id: u32,
        min_sessions_per_day: Option<f64>,
        limit: Option<u32>,
    ) -> Result<BotDetectionResponse, Error> {
        check_limit("limit", limit)?;

        let mut request = Request::get("admin/bots");
        request
            .query
            .append("server_id", server_id)
            .append_opt("min_sessions_per_day", min_sessions_per_day)
            .append_opt("limit", limit);

        self.execute_json(request).await
    }
}
