use vprikol::types::StatResponseType;

#[derive(Debug, argh::FromArgs)]
#[argh(subcommand, name = "stat", description = "get usage stats of the configured token")]
pub struct Options {
    #[argh(
        option,
        long = "response-type",
        short = 't',
        default = "StatResponseType::Counts",
        description = "either counts or requests"
    )]
    response_type: StatResponseType,

    #[argh(option, long = "method", short = 'm', description = "only this api method")]
    methods: Vec<String>,

    #[argh(option, long = "start", description = "the earliest request, as rfc 3339")]
    start: Option<String>,

    #[argh(option, long = "end", description = "the latest request, as rfc 3339")]
    end: Option<String>,

    #[argh(option, long = "requests-limit", description = "the # of logged requests")]
    requests_limit: Option<u32>,

    #[argh(option, long = "requests-start-id", description = "the first logged request id")]
    requests_start_id: Option<u64>,
}

pub async fn exec(client: &vprikol::Client, options: Options) -> anyhow::Result<()> {
    let start = super::parse_datetime("start", options.start.as_deref())?;
    let end = super::parse_datetime("end", options.end.as_deref())?;
    let methods: Vec<&str> = options.methods.iter().map(String::as_str).collect();

    let stat = client
        .token_stat(options.response_type)
        .methods((!methods.is_empty()).then_some(methods.as_slice()))
        .start(start)
        .end(end)
        .requests_limit(options.requests_limit)
        .requests_start_id(options.requests_start_id)
        .execute()
        .await?;
    super::print_json(&stat)
}

#[cfg(test)]
mod test {
    use super::*;
    use argh::FromArgs;

    #[test]
    fn parse_options() {
        let options = Options::from_args(
            &["stat"],
            &["--response-type", "requests", "-m", "find", "-m", "status"],
        )
        .expect("failed to parse options");
        assert!(options.response_type == StatResponseType::Requests);
        assert!(options.methods == ["find", "status"]);

        let options = Options::from_args(&["stat"], &[]).expect("failed to parse options");
        assert!(options.response_type == StatResponseType::Counts);
        assert!(options.methods.is_empty());
    }
}
