use crate::config::{
    Config,
    Severity,
    ValidationMessage,
};
use anyhow::{
    ensure,
    Context,
};
use camino::Utf8Path;

/// Load and validate a config.
///
/// Validation messages go to the stderr directly,
/// as this runs BEFORE the loggers are set up.
pub(crate) fn load_config(path: &Utf8Path) -> anyhow::Result<Config> {
    eprintln!("loading `{path}`...");
    let config = Config::load_from_path(path).with_context(|| format!("failed to load `{path}`"))?;

    let error_count = report_validation(&config.validate());
    ensure!(
        error_count == 0,
        "config validation failed with {error_count} error(s)"
    );

    Ok(config)
}

/// Print validation messages, returning the # of errors.
fn report_validation(messages: &[ValidationMessage]) -> usize {
    messages
        .iter()
        .filter(|message| {
            let is_error = message.severity() == Severity::Error;
            let label = if is_error { "error" } else { "warning" };
            eprintln!("config {label}: {}", message.error());
            is_error
        })
        .count()
}
