use crate::config::Config;
use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    filter::EnvFilter,
    layer::SubscriberExt,
    Layer,
};

/// Try to setup a logger.
///
/// Logs go to the stderr, so they never mix with command output.
/// If the config names a log file, logs are also appended to it.
/// The returned guard flushes the file writer when dropped.
pub fn setup(config: &Config) -> anyhow::Result<Option<WorkerGuard>> {
    let env_filter = EnvFilter::builder()
        .with_default_directive(config.log_level().into())
        .from_env_lossy();
    let stderr_formatting_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    let (file_formatting_layer, worker_guard) = match config.log_file.as_deref() {
        Some(log_file) => {
            let file_name = log_file
                .file_name()
                .with_context(|| format!("log file `{log_file}` has no file name"))?;
            let dir = match log_file.parent() {
                Some(dir) if !dir.as_str().is_empty() => dir,
                _ => camino::Utf8Path::new("."),
            };
            std::fs::create_dir_all(dir)
                .with_context(|| format!("failed to create log file dir `{dir}`"))?;

            let file_appender = tracing_appender::rolling::never(dir, file_name);
            let (non_blocking, worker_guard) = tracing_appender::non_blocking(file_appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(non_blocking)
                .boxed();

            (Some(layer), Some(worker_guard))
        }
        None => (None, None),
    };

    let subscriber = tracing_subscriber::Registry::default()
        .with(env_filter)
        .with(file_formatting_layer)
        .with(stderr_formatting_layer);

    tracing::subscriber::set_global_default(subscriber).context("failed to set subscriber")?;

    Ok(worker_guard)
}
