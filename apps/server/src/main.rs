use anyhow::Context;
use clap::Parser;
use rhub::domain::config::{ApiConfig, LogConfig};
use rhub::kernel::config::load_config;
use rhub_logger::{LevelFilter, Logger};
use rhub_server::Server;
use std::path::PathBuf;

/// Sheet backend for the Reward Hub landing page.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// TOML configuration file (defaults to ./rhub.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Overrides `server.port`
    #[arg(short, long)]
    port: Option<u16>,
}

fn init_logger(log: &LogConfig) -> anyhow::Result<Logger> {
    let level = log.level.parse::<LevelFilter>().unwrap_or(LevelFilter::INFO);
    let builder = Logger::builder().name(env!("CARGO_PKG_NAME")).level(level);

    let logger = match &log.dir {
        Some(dir) if log.json => builder.path(dir).json().init()?,
        Some(dir) => builder.path(dir).init()?,
        None => builder.init()?,
    };
    Ok(logger)
}

#[rhub_runtime::main(high_performance)]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut cfg: ApiConfig =
        load_config(args.config.as_ref()).context("Critical: Configuration is malformed")?;
    if let Some(port) = args.port {
        cfg.server.port = port;
    }

    let _log = init_logger(&cfg.log)?;

    Server::builder().config(cfg).build().await?.run().await
}
