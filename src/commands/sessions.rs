#[derive(Debug, argh::FromArgs)]
#[argh(subcommand, name = "sessions", description = "list the play sessions of a player")]
pub struct Options {
    #[argh(positional, description = "the server id")]
    server_id: u32,

    #[argh(option, long = "nickname", short = 'n', description = "the nickname")]
    nickname: Option<String>,

    #[argh(option, long = "account-id", description = "the account id")]
    account_id: Option<u64>,

    #[argh(option, long = "start", description = "the earliest login, as rfc 3339")]
    start: Option<String>,

    #[argh(option, long = "end", description = "the latest login, as rfc 3339")]
    end: Option<String>,

    #[argh(option, long = "limit", short = 'l', description = "the page size")]
    limit: Option<u32>,

    #[argh(option, long = "offset", description = "the page offset")]
    offset: Option<u64>,
}

pub async fn exec(client: &vprikol::Client, options: Options) -> anyhow::Result<()> {
    let player = super::player_query(
        options.server_id,
        options.nickname.as_deref(),
        options.account_id,
    )?;
    let start = super::parse_datetime("start", options.start.as_deref())?;
    let end = super::parse_datetime("end", options.end.as_deref())?;

    let sessions = client
        .list_sessions(player)
        .start(start)
        .end(end)
        .limit(options.limit)
        .offset(options.offset)
        .execute()
        .await?;

    if sessions.sessions.is_empty() {
        tracing::info!("no sessions");
    }
    super::print_json(&sessions)
}
