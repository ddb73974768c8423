#![deny(
    unused_import_braces,
    unused_lifetimes,
    trivial_numeric_casts,
    missing_debug_implementations,
    deprecated_in_future,
    meta_variable_misuse,
    non_ascii_idents,
    rust_2018_compatibility,
    rust_2018_idioms,
    future_incompatible,
    nonstandard_style,
    clippy::all
)]
#![warn(variant_size_differences, let_underscore_drop)]

//! # vprikol
//!
//! A command line client for the vprikol api.

mod cli_options;
mod commands;
mod config;
mod logger;
mod setup;

use crate::{
    cli_options::CliOptions,
    commands::SubCommand,
    config::Config,
};
use anyhow::Context;
use std::time::{
    Duration,
    Instant,
};
use tokio::runtime::Builder as RuntimeBuilder;
use tracing::{
    debug,
    info,
};
use tracing_appender::non_blocking::WorkerGuard;

const TOKIO_RT_SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(10);

/// Data from the setup function
struct SetupData {
    tokio_rt: tokio::runtime::Runtime,
    config: Config,
    subcommand: SubCommand,
    worker_guard: Option<WorkerGuard>,
}

/// Pre-main setup
fn setup(cli_options: CliOptions) -> anyhow::Result<SetupData> {
    let tokio_rt = RuntimeBuilder::new_multi_thread()
        .enable_all()
        .thread_name("vprikol-tokio-worker")
        .build()
        .context("failed to start tokio runtime")?;

    let config = setup::load_config(&cli_options.config).context("failed to load config")?;

    // The non-blocking log writer needs a runtime context
    let _enter_guard = tokio_rt.handle().enter();
    let worker_guard = logger::setup(&config).context("failed to initialize logger")?;

    Ok(SetupData {
        tokio_rt,
        config,
        subcommand: cli_options.subcommand,
        worker_guard,
    })
}

/// The main entry.
///
/// Sets up the program and calls `real_main`.
/// Setup errors are printed to the stderr, as the loggers are not initialized yet.
fn main() -> anyhow::Result<()> {
    // This line MUST run first.
    // It exits early if the options are invalid, and will NOT run destructors if it does so.
    let cli_options: CliOptions = argh::from_env();

    let setup_data = setup(cli_options)?;
    real_main(setup_data)
}

/// The actual entry point
fn real_main(setup_data: SetupData) -> anyhow::Result<()> {
    let ret = setup_data
        .tokio_rt
        .block_on(async_main(setup_data.config, setup_data.subcommand));

    let shutdown_start = Instant::now();
    setup_data
        .tokio_rt
        .shutdown_timeout(TOKIO_RT_SHUTDOWN_TIMEOUT);
    debug!("shutdown tokio runtime in {:?}", shutdown_start.elapsed());

    // Logging no longer reliable past this point
    drop(setup_data.worker_guard);

    ret
}

/// The async entry
async fn async_main(config: Config, subcommand: SubCommand) -> anyhow::Result<()> {
    let client = config.build_client()?;
    debug!(base_url = %client.base_url(), "built client");

    let name = subcommand.name();
    let start = Instant::now();
    commands::exec(&client, subcommand)
        .await
        .with_context(|| format!("`{name}` failed"))?;
    info!("`{name}` finished in {:?}", start.elapsed());

    Ok(())
}
