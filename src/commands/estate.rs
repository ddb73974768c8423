use vprikol::EstateType;

#[derive(Debug, argh::FromArgs)]
#[argh(subcommand, name = "estate", description = "list the houses and businesses of a server")]
pub struct Options {
    #[argh(positional, description = "the server id")]
    server_id: u32,

    #[argh(option, long = "estate-type", short = 't', description = "only this estate type")]
    estate_type: Option<EstateType>,

    #[argh(option, long = "owner", short = 'o', description = "only this owner")]
    owner: Option<String>,
}

pub async fn exec(client: &vprikol::Client, options: Options) -> anyhow::Result<()> {
    let estate = client
        .estate(options.server_id, options.estate_type, options.owner.as_deref())
        .await?;
    super::print_json(&estate)
}
