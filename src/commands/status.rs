#[derive(Debug, argh::FromArgs)]
#[argh(subcommand, name = "status", description = "get the status of servers")]
pub struct Options {
    #[argh(
        option,
        long = "server-id",
        short = 's',
        description = "only this server"
    )]
    server_id: Option<u32>,
}

pub async fn exec(client: &vprikol::Client, options: Options) -> anyhow::Result<()> {
    let status = client.status(options.server_id).await?;
    super::print_json(&status)
}
