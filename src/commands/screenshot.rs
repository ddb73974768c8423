use anyhow::{
    ensure,
    Context,
};
use camino::Utf8PathBuf;
use std::collections::BTreeMap;
use vprikol::{
    Screenshot,
    SSFont,
};

#[derive(Debug, argh::FromArgs)]
#[argh(subcommand, name = "screenshot", description = "draw chat lines on a screenshot")]
pub struct Options {
    #[argh(positional, description = "the source image")]
    input: Utf8PathBuf,

    #[argh(positional, description = "where to save the result")]
    output: Utf8PathBuf,

    #[argh(option, long = "line", short = 'c', description = "a chat line, top to bottom")]
    lines: Vec<String>,

    #[argh(
        option,
        long = "font",
        short = 'f',
        default = "SSFont::default()",
        description = "the font file name, like `arialbd.ttf`"
    )]
    font: SSFont,

    #[argh(option, long = "text-size", description = "the text scale")]
    text_size: Option<f32>,

    #[argh(switch, long = "text-bottom", description = "draw the text at the bottom")]
    text_bottom: bool,

    #[argh(
        option,
        long = "color",
        description = "a line color, as `prefix=color`"
    )]
    colors: Vec<String>,
}

pub async fn exec(client: &vprikol::Client, options: Options) -> anyhow::Result<()> {
    ensure!(!options.lines.is_empty(), "at least one `--line` is required");

    let mut colors = BTreeMap::new();
    for color in options.colors.iter() {
        let (prefix, color) = color
            .split_once('=')
            .with_context(|| format!("`--color {color}` is not `prefix=color`"))?;
        colors.insert(prefix.to_string(), color.to_string());
    }

    let screen = tokio::fs::read(&options.input)
        .await
        .with_context(|| format!("failed to read `{}`", options.input))?;

    let mut screenshot = Screenshot::new(screen, options.lines);
    screenshot.font = options.font;
    screenshot.text_top = !options.text_bottom;
    if let Some(text_size) = options.text_size {
        screenshot.text_size = text_size;
    }
    if !colors.is_empty() {
        screenshot.commands_colors = Some(colors);
    }

    let image = client.generate_ss(&screenshot).await?;
    tokio::fs::write(&options.output, &image)
        .await
        .with_context(|| format!("failed to write `{}`", options.output))?;

    tracing::info!("saved {} bytes to `{}`", image.len(), options.output);

    Ok(())
}
