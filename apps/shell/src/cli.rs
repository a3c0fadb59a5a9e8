use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Reward Hub campaign shell.
#[derive(Debug, Parser)]
#[command(name = "rhub", version, about)]
pub struct Cli {
    /// TOML configuration file (defaults to ./rhub.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Reward breakdown for a price, in KRW
    Quote {
        /// Price; `₩` and thousands separators are accepted
        price: String,
        /// Instant reward share in [0, 1] (defaults to campaign.instant_rate)
        #[arg(long, value_parser = parse_rate)]
        rate: Option<f64>,
    },
    /// Time left until the campaign deadline
    Countdown,
    /// Reserve and issue a partner code
    Submit(SubmitArgs),
    /// Find issued codes by name, phone or email
    Lookup(LookupArgs),
    /// Every locally stored record, newest first
    Records,
}

#[derive(Debug, Args)]
pub struct SubmitArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub phone: String,
    #[arg(long)]
    pub email: String,
    /// When the deposit was made, e.g. 2025-11-01T10:00
    #[arg(long)]
    pub deposit_at: String,
    #[arg(long)]
    pub depositor_name: String,
    /// Code of the partner who referred you
    #[arg(long)]
    pub partner_ref: Option<String>,
    /// Landing-page link carrying `?pc=` or `?partner=`
    #[arg(long)]
    pub link: Option<String>,
}

#[derive(Debug, Args)]
pub struct LookupArgs {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
}

fn parse_rate(value: &str) -> Result<f64, String> {
    let rate = value.trim().parse::<f64>().map_err(|e| e.to_string())?;
    if (0.0..=1.0).contains(&rate) {
        Ok(rate)
    } else {
        Err(format!("{rate} is outside [0, 1]"))
    }
}
