use crate::{
    types::{
        CreateTokenRequest,
        StatResponseType,
        TokenResponse,
        UpdateTokenRequest,
    },
    Client,
    Error,
    Request,
    TokenStatQueryBuilder,
};

impl Client {
    /// Get the token this client uses.
    pub async fn token(&self) -> Result<TokenResponse, Error> {
        self.execute_json(Request::get("token")).await
    }

    /// Get a builder to query the usage stats of this client's token.
    pub fn token_stat(&self, response_type: StatResponseType) -> TokenStatQueryBuilder<'_> {
        TokenStatQueryBuilder::new(self, response_type)
    }

    /// List every token.
    ///
    /// This needs an admin token.
    pub async fn list_tokens(&self) -> Result<Vec<TokenResponse>, Error> {
        self.execute_json(Request::get("admin/tokens")).await
    }

    /// Make a token.
    ///
    /// This needs an admin token.
    pub async fn create_token(&self, request: &CreateTokenRequest) -> Result<TokenResponse, Error> {
        let request = Request::post("admin/tokens").json(request)?;
        self.execute_json(request).await
    }

    /// Change a token.
    ///
    /// This needs an admin token.
    pub async fn update_token(
        &self,
        token_id: u64,
        request: &UpdateTokenRequest,
    ) -> Result<TokenResponse, Error> {
        let request = Request::put(format!("admin/tokens/{token_id}")).json(request)?;
        self.execute_json(request).await
    }

    /// Replace the secret of a token.
    ///
    /// This needs an admin token.
    pub async fn regenerate_token(&self, token_id: u64) -> Result<TokenResponse, Error> {
        self.execute_json(Request::post(format!("admin/tokens/{token_id}/regenerate")))
            .await
    }

    /// Delete a token.
    ///
    /// This needs an admin token.
    pub async fn delete_token(&self, token_id: u64) -> Result<(), Error> {
        self.execute_unit(Request::delete(format!("admin/tokens/{token_id}")))
            .await
    }
}
