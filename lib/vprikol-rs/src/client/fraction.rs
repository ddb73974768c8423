use crate::{
    types::{
        DeputiesResponse,
        InterviewsResponse,
        LeadersResponse,
        MembersResponse,
    },
    Client,
    Error,
    Request,
};

impl Client {
    /// Get the members of a fraction.
    pub async fn members(&self, server_id: u32, fraction_id: u32) -> Result<MembersResponse, Error> {
        let mut request = Request::get("members");
        request
            .query
            .append("server_id", server_id)
            .append("fraction_id", fraction_id);

        self.execute_json(request).await
    }

    /// Get the online fraction leaders of a server.
    pub async fn leaders(&self, server_id: u32) -> Result<LeadersResponse, Error> {
        let mut request = Request::get("leaders");
        request.query.append("server_id", server_id);

        self.execute_json(request).await
    }

    /// Get the online deputies of a server.
    pub async fn deputies(&self, server_id: u32) -> Result<DeputiesResponse, Error> {
        let mut request = Request::get("deputies");
        request.query.append("server_id", server_id);

        self.execute_json(request).await
    }

    /// Get the scheduled fraction interviews of a server.
    pub async fn interviews(&self, server_id: u32) -> Result<InterviewsResponse, Error> {
        let mut request = Request::get("interviews");
        request.query.append("server_id", server_id);

        self.execute_json(request).await
    }
}
