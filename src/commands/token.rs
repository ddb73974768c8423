#[derive(Debug, argh::FromArgs)]
#[argh(subcommand, name = "token", description = "show the configured token")]
pub struct Options {}

pub async fn exec(client: &vprikol::Client, _options: Options) -> anyhow::Result<()> {
    let token = client.token().await?;
    super::print_json(&token)
}
