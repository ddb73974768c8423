#[derive(Debug, argh::FromArgs)]
#[argh(subcommand, name = "members", description = "list the members of a fraction")]
pub struct Options {
    #[argh(positional, description = "the server id")]
    server_id: u32,

    #[argh(positional, description = "the fraction id")]
    fraction_id: u32,
}

pub async fn exec(client: &vprikol::Client, options: Options) -> anyhow::Result<()> {
    let members = client
        .members(options.server_id, options.fraction_id)
        .await?;

    tracing::debug!(
        total = members.total_players,
        online = members.total_online,
        "got members"
    );
    super::print_json(&members)
}
