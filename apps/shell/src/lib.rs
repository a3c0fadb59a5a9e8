//! # Reward Hub Shell
//!
//! Command-line front end for the campaign: reward quotes, the enrolment
//! countdown, code submission and lookup. All state lives in an explicit
//! [`Shell`] context built once by `main`.

pub mod cli;
mod render;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use cli::{Command, LookupArgs, SubmitArgs};
use rhub::domain::config::ApiConfig;
use rhub::domain::partner::{LookupQuery, Submission};
use rhub::features::campaign::{Campaign, compute_distribution, parse_amount};
use rhub::features::partners::referral::partner_ref_from_url;
use rhub::features::partners::{CodeRegistry, FileStore, HttpMirror, MirrorSink, RecordStore};
use std::io::Write;
use std::time::Duration;
use tracing::debug;

/// Shell context: configuration, campaign clock and the code registry.
#[derive(Debug)]
pub struct Shell<S = FileStore, M = HttpMirror> {
    config: ApiConfig,
    campaign: Campaign,
    registry: CodeRegistry<S, M>,
}

impl Shell {
    /// Opens the file-backed registry under `storage.data_dir` with the
    /// configured HTTP mirror.
    ///
    /// # Errors
    /// Returns an error if the data directory cannot be prepared or the
    /// mirror URL is invalid.
    pub async fn open(config: ApiConfig) -> Result<Self> {
        let store = FileStore::open(&config.storage.data_dir)
            .await
            .context("Failed to open the partner code store")?;
        let mirror =
            HttpMirror::from_config(&config.mirror).context("Failed to configure the sheet mirror")?;
        let timeout = Duration::from_millis(config.mirror.timeout_ms);

        let registry = CodeRegistry::open(store, mirror, timeout).await;
        Ok(Self::new(config, registry))
    }
}

impl<S: RecordStore, M: MirrorSink> Shell<S, M> {
    #[must_use]
    pub fn new(config: ApiConfig, registry: CodeRegistry<S, M>) -> Self {
        let campaign = Campaign::from(&config.campaign);
        Self { config, campaign, registry }
    }

    #[must_use]
    pub const fn campaign(&self) -> &Campaign {
        &self.campaign
    }

    #[must_use]
    pub const fn registry(&self) -> &CodeRegistry<S, M> {
        &self.registry
    }

    #[must_use]
    pub const fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Executes `command`, writing its report to `out`.
    ///
    /// # Errors
    /// Validation failures from the registry and write errors on `out`.
    pub async fn run(&self, command: Command, out: &mut impl Write, now: DateTime<Utc>) -> Result<()> {
        debug!(?command, "Running shell command");

        match command {
            Command::Quote { price, rate } => {
                let rate = rate.unwrap_or(self.campaign.instant_rate);
                let result = compute_distribution(parse_amount(&price), rate);
                render::quote(out, &result, rate)?;
            },
            Command::Countdown => {
                let parts = self.campaign.remaining(now);
                render::countdown(out, &parts, self.campaign.deadline, self.campaign.is_open(now))?;
            },
            Command::Submit(args) => {
                let issued = self.registry.submit(&submission(args)).await?;
                render::issued(out, &issued)?;
            },
            Command::Lookup(args) => {
                let found = self.registry.lookup(&lookup_query(args)).await?;
                render::records(out, &found)?;
            },
            Command::Records => {
                render::records(out, &self.registry.records().await)?;
            },
        }
        Ok(())
    }
}

/// An explicit `--partner-ref` wins over one carried by `--link`.
fn submission(args: SubmitArgs) -> Submission {
    let partner_ref = args
        .partner_ref
        .filter(|code| !code.trim().is_empty())
        .or_else(|| args.link.as_deref().and_then(partner_ref_from_url))
        .unwrap_or_default();

    Submission {
        name: args.name,
        phone: args.phone,
        email: args.email,
        deposit_at: args.deposit_at,
        depositor_name: args.depositor_name,
        partner_ref,
    }
}

fn lookup_query(args: LookupArgs) -> LookupQuery {
    LookupQuery { name: args.name, phone: args.phone, email: args.email }
}
