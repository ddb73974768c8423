mod estate;
mod find;
mod items;
mod members;
mod punishes;
mod rating;
mod raw;
mod screenshot;
mod sessions;
mod stat;
mod status;
mod token;

use anyhow::Context;
use time::{
    format_description::well_known::Rfc3339,
    OffsetDateTime,
};

#[derive(Debug, argh::FromArgs)]
#[argh(subcommand)]
pub enum SubCommand {
    Status(self::status::Options),
    Find(self::find::Options),
    Rating(self::rating::Options),
    Estate(self::estate::Options),
    Members(self::members::Options),
    Sessions(self::sessions::Options),
    Punishes(self::punishes::Options),
    Token(self::token::Options),
    Stat(self::stat::Options),
    Items(self::items::Options),
    Screenshot(self::screenshot::Options),
    Raw(self::raw::Options),
}

impl SubCommand {
    /// The name of this command, for logging
    pub fn name(&self) -> &'static str {
        match self {
            Self::Status(_) => "status",
            Self::Find(_) => "find",
            Self::Rating(_) => "rating",
            Self::Estate(_) => "estate",
            Self::Members(_) => "members",
            Self::Sessions(_) => "sessions",
            Self::Punishes(_) => "punishes",
            Self::Token(_) => "token",
            Self::Stat(_) => "stat",
            Self::Items(_) => "items",
            Self::Screenshot(_) => "screenshot",
            Self::Raw(_) => "raw",
        }
    }
}

/// Run a command.
pub async fn exec(client: &vprikol::Client, subcommand: SubCommand) -> anyhow::Result<()> {
    match subcommand {
        SubCommand::Status(options) => self::status::exec(client, options).await,
        SubCommand::Find(options) => self::find::exec(client, options).await,
        SubCommand::Rating(options) => self::rating::exec(client, options).await,
        SubCommand::Estate(options) => self::estate::exec(client, options).await,
        SubCommand::Members(options) => self::members::exec(client, options).await,
        SubCommand::Sessions(options) => self::sessions::exec(client, options).await,
        SubCommand::Punishes(options) => self::punishes::exec(client, options).await,
        SubCommand::Token(options) => self::token::exec(client, options).await,
        SubCommand::Stat(options) => self::stat::exec(client, options).await,
        SubCommand::Items(options) => self::items::exec(client, options).await,
        SubCommand::Screenshot(options) => self::screenshot::exec(client, options).await,
        SubCommand::Raw(options) => self::raw::exec(client, options).await,
    }
}

/// Print a value as pretty json to the stdout.
fn print_json<T>(value: &T) -> anyhow::Result<()>
where
    T: serde::Serialize,
{
    let json = serde_json::to_string_pretty(value).context("failed to serialize output")?;
    println!("{json}");
    Ok(())
}

/// Parse an rfc 3339 timestamp argument.
fn parse_datetime(name: &str, value: Option<&str>) -> anyhow::Result<Option<OffsetDateTime>> {
    value
        .map(|value| {
            OffsetDateTime::parse(value, &Rfc3339)
                .with_context(|| format!("`--{name}` is not an rfc 3339 timestamp: `{value}`"))
        })
        .transpose()
}

/// Make a player lookup from `--nickname` or `--account-id`.
fn player_query(
    server_id: u32,
    nickname: Option<&str>,
    account_id: Option<u64>,
) -> anyhow::Result<vprikol::PlayerQuery<'_>> {
    match (nickname, account_id) {
        (Some(nickname), None) => Ok(vprikol::PlayerQuery::by_nickname(server_id, nickname)),
        (None, Some(account_id)) => Ok(vprikol::PlayerQuery::by_account_id(server_id, account_id)),
        (Some(_), Some(_)) => anyhow::bail!("`--nickname` and `--account-id` conflict"),
        (None, None) => anyhow::bail!("either `--nickname` or `--account-id` is required"),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn datetime_argument() {
        let parsed = parse_datetime("start", Some("2024-03-01T03:00:00+03:00"))
            .expect("failed to parse")
            .expect("missing datetime");
        assert!(parsed.unix_timestamp() == 1_709_251_200);

        assert!(parse_datetime("start", None).expect("failed to parse").is_none());
        assert!(parse_datetime("start", Some("yesterday")).is_err());
    }

    #[test]
    fn player_argument() {
        let query = player_query(5, Some("Bob_Smith"), None).expect("invalid player");
        assert!(query.nickname == Some("Bob_Smith"));

        assert!(player_query(5, None, None).is_err());
        assert!(player_query(5, Some("Bob_Smith"), Some(1)).is_err());
    }
}
