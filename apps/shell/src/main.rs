use anyhow::Context;
use chrono::Utc;
use clap::Parser;
use rhub::domain::config::{ApiConfig, LogConfig};
use rhub::kernel::config::load_config;
use rhub_logger::{ConsoleTarget, LevelFilter, Logger};
use rhub_shell::Shell;
use rhub_shell::cli::Cli;

fn init_logger(log: &LogConfig) -> anyhow::Result<Logger> {
    let level = log.level.parse::<LevelFilter>().unwrap_or(LevelFilter::INFO);
    let builder =
        Logger::builder().name(env!("CARGO_PKG_NAME")).level(level).console(ConsoleTarget::Stderr);

    let logger = match &log.dir {
        Some(dir) if log.json => builder.path(dir).json().init()?,
        Some(dir) => builder.path(dir).init()?,
        None => builder.init()?,
    };
    Ok(logger)
}

#[rhub_runtime::main(memory_efficient)]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config: ApiConfig =
        load_config(cli.config.as_ref()).context("Configuration is malformed")?;
    let _log = init_logger(&config.log)?;

    let shell = Shell::open(config).await?;
    let mut out = std::io::stdout().lock();
    shell.run(cli.command, &mut out, Utc::now()).await
}
