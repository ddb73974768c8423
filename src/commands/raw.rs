use anyhow::Context;
use camino::Utf8PathBuf;
use vprikol::{
    Payload,
    Request,
};

#[derive(Debug, argh::FromArgs)]
#[argh(subcommand, name = "raw", description = "send a GET request to any api path")]
pub struct Options {
    #[argh(positional, description = "the api path, like `status`")]
    path: String,

    #[argh(option, long = "query", short = 'q', description = "a query parameter, as `name=value`")]
    query: Vec<String>,

    #[argh(option, long = "output", short = 'o', description = "where to save a binary response")]
    output: Option<Utf8PathBuf>,
}

pub async fn exec(client: &vprikol::Client, options: Options) -> anyhow::Result<()> {
    let mut request = Request::get(options.path);
    for pair in options.query {
        let (name, value) = pair
            .split_once('=')
            .with_context(|| format!("`--query {pair}` is not `name=value`"))?;
        request.query.append(name.to_string(), value.to_string());
    }

    let url = client.request_url(&request)?;
    tracing::debug!(%url, "sending request");

    match client.execute(request).await? {
        Payload::Empty => {
            tracing::info!("empty response");
        }
        Payload::Json(value) => {
            super::print_json(&value)?;
        }
        Payload::Bytes(bytes) => match options.output {
            Some(output) => {
                tokio::fs::write(&output, &bytes)
                    .await
                    .with_context(|| format!("failed to write `{output}`"))?;
                tracing::info!("saved {} bytes to `{output}`", bytes.len());
            }
            None => {
                tracing::info!("got {} bytes, use `--output` to save them", bytes.len());
            }
        },
    }

    Ok(())
}
