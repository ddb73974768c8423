use vprikol::RatingType;

#[derive(Debug, argh::FromArgs)]
#[argh(subcommand, name = "rating", description = "get a rating")]
pub struct Options {
    #[argh(positional, description = "the rating type, like `richest`")]
    rating_type: RatingType,

    #[argh(
        option,
        long = "server-id",
        short = 's',
        description = "the server, or every server if missing"
    )]
    server_id: Option<u32>,
}

pub async fn exec(client: &vprikol::Client, options: Options) -> anyhow::Result<()> {
    let rating = client
        .rating(options.rating_type, options.server_id)
        .await?;
    super::print_json(&rating)
}
