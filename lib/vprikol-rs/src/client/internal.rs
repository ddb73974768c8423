use crate::{
    types::{
        AdminsReport,
        DeputiesReport,
        EstateReport,
        InterviewsReport,
        LeadersReport,
        MapReport,
        MembersReport,
        PlayersReport,
        RatingReport,
        ServerStatusReport,
        ShopsReport,
    },
    Client,
    Error,
    Request,
};

/// Define a method that posts a collected report.
macro_rules! report_method {
    ($(#[$meta:meta])* $name:ident, $report:ty, $path:literal) => {
        $(#[$meta])*
        ///
        /// This needs a service token.
        pub async fn $name(&self, report: &$report) -> Result<(), Error> {
            let request = Request::post($path).json(report)?;
            self.execute_unit(request).await
        }
    };
}

impl Client {
    report_method!(
        /// Report the status of a server.
        report_status,
        ServerStatusReport,
        "internal/status"
    );

    report_method!(
        /// Report the online players of a server.
        report_players,
        PlayersReport,
        "internal/players"
    );

    report_method!(
        /// Report the members of a fraction.
        report_members,
        MembersReport,
        "internal/members"
    );

    report_method!(
        /// Report the online fraction leaders of a server.
        report_leaders,
        LeadersReport,
        "internal/leaders"
    );

    report_method!(
        /// Report the online deputies of a server.
        report_deputies,
        DeputiesReport,
        "internal/deputies"
    );

    report_method!(
        /// Report the scheduled interviews of a server.
        report_interviews,
        InterviewsReport,
        "internal/interviews"
    );

    report_method!(
        /// Report a rating.
        report_rating,
        RatingReport,
        "internal/rating"
    );

    report_method!(
        /// Report the estate of a server.
        report_estate,
        EstateReport,
        "internal/estate"
    );

    report_method!(
        /// Report the admins of a server.
        report_admins,
        AdminsReport,
        "internal/admins"
    );

    report_method!(
        /// Report the player shops of a server.
        report_shops,
        ShopsReport,
        "internal/shops"
    );

    report_method!(
        /// Report the gang map of a server.
        report_map,
        MapReport,
        "internal/map"
    );
}
