#[derive(Debug, argh::FromArgs)]
#[argh(subcommand, name = "items", description = "list market items")]
pub struct Options {
    #[argh(option, long = "search", short = 'q', description = "a name search")]
    search: Option<String>,

    #[argh(option, long = "item-type", short = 't', description = "only this item type")]
    item_type: Option<i64>,

    #[argh(switch, long = "market-stats", description = "include market summaries")]
    market_stats: bool,

    #[argh(option, long = "limit", short = 'l', description = "the page size")]
    limit: Option<u32>,

    #[argh(option, long = "offset", description = "the page offset")]
    offset: Option<u64>,
}

pub async fn exec(client: &vprikol::Client, options: Options) -> anyhow::Result<()> {
    let items = client
        .list_items()
        .search(options.search.as_deref())
        .item_type(options.item_type)
        .with_market_stats(options.market_stats.then_some(true))
        .limit(options.limit)
        .offset(options.offset)
        .execute()
        .await?;

    tracing::debug!(total = items.total, "got items");
    super::print_json(&items)
}
