use vprikol::PunishType;

#[derive(Debug, argh::FromArgs)]
#[argh(subcommand, name = "punishes", description = "list the punishments of a server")]
pub struct Options {
    #[argh(positional, description = "the server id")]
    server_id: u32,

    #[argh(option, long = "player", short = 'p', description = "only this player")]
    player_nickname: Option<String>,

    #[argh(option, long = "admin", short = 'a', description = "only this admin")]
    admin_nickname: Option<String>,

    #[argh(option, long = "punish-type", short = 't', description = "only this punishment type")]
    punish_type: Option<PunishType>,

    #[argh(option, long = "start", description = "the earliest punishment, as rfc 3339")]
    start: Option<String>,

    #[argh(option, long = "end", description = "the latest punishment, as rfc 3339")]
    end: Option<String>,

    #[argh(option, long = "limit", short = 'l', description = "the page size")]
    limit: Option<u32>,

    #[argh(option, long = "offset", description = "the page offset")]
    offset: Option<u64>,
}

pub async fn exec(client: &vprikol::Client, options: Options) -> anyhow::Result<()> {
    let start = super::parse_datetime("start", options.start.as_deref())?;
    let end = super::parse_datetime("end", options.end.as_deref())?;

    let punishes = client
        .list_punishes(options.server_id)
        .player_nickname(options.player_nickname.as_deref())
        .admin_nickname(options.admin_nickname.as_deref())
        .punish_type(options.punish_type)
        .start(start)
        .end(end)
        .limit(options.limit)
        .offset(options.offset)
        .execute()
        .await?;
    super::print_json(&punishes)
}
