#[derive(Debug, argh::FromArgs)]
#[argh(subcommand, name = "find", description = "look up a player")]
pub struct Options {
    #[argh(positional, description = "the server id")]
    server_id: u32,

    #[argh(option, long = "nickname", short = 'n', description = "the nickname")]
    nickname: Option<String>,

    #[argh(option, long = "account-id", description = "the account id")]
    account_id: Option<u64>,

    #[argh(switch, long = "online", description = "get online info instead of the profile")]
    online: bool,
}

pub async fn exec(client: &vprikol::Client, options: Options) -> anyhow::Result<()> {
    let player = super::player_query(
        options.server_id,
        options.nickname.as_deref(),
        options.account_id,
    )?;

    if options.online {
        let online = client.player_online(player).await?;
        super::print_json(&online)
    } else {
        let profile = client.find_player(player).await?;
        super::print_json(&profile)
    }
}
