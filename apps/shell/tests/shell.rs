use chrono::{TimeZone, Utc};
use clap::Parser;
use rhub::domain::config::ApiConfig;
use rhub::features::partners::{
    CodeRegistry, DEFAULT_MIRROR_TIMEOUT, MemoryStore, NoopMirror, PartnerError,
};
use rhub_shell::Shell;
use rhub_shell::cli::Cli;

async fn shell() -> Shell<MemoryStore, NoopMirror> {
    let registry = CodeRegistry::open(MemoryStore::new(), NoopMirror, DEFAULT_MIRROR_TIMEOUT).await;
    Shell::new(ApiConfig::default(), registry)
}

async fn run(shell: &Shell<MemoryStore, NoopMirror>, args: &[&str]) -> anyhow::Result<String> {
    let cli = Cli::try_parse_from(std::iter::once("rhub").chain(args.iter().copied()))?;
    let now = Utc.with_ymd_and_hms(2025, 12, 30, 14, 59, 0).unwrap();
    let mut out = Vec::new();
    shell.run(cli.command, &mut out, now).await?;
    Ok(String::from_utf8(out)?)
}

const SUBMIT: [&str; 11] = [
    "submit",
    "--name",
    "Kim Minji",
    "--phone",
    "010-1234-5678",
    "--email",
    "minji@example.com",
    "--deposit-at",
    "2025-11-01T10:00",
    "--depositor-name",
    "Kim Minji",
];

#[tokio::test]
async fn quote_prints_the_breakdown_in_won() {
    let shell = shell().await;

    let text = run(&shell, &["quote", "₩100,000"]).await.unwrap();

    assert!(text.contains("₩100,000"));
    assert!(text.contains("₩130,000"));
    assert!(text.contains("₩120,000"));

    let text = run(&shell, &["quote", "500000", "--rate", "0.2"]).await.unwrap();
    assert!(text.contains("Instant (20%)"));
    assert!(text.contains("₩550,000"));
}

#[tokio::test]
async fn countdown_reports_time_left() {
    let shell = shell().await;

    let text = run(&shell, &["countdown"]).await.unwrap();

    assert!(text.contains("01 days 00:00:00"));
    assert!(text.contains("is open"));
}

#[tokio::test]
async fn submit_then_lookup_finds_the_code() {
    let shell = shell().await;

    let text = run(&shell, &SUBMIT).await.unwrap();
    assert!(text.contains("Your code: P"));
    assert!(text.contains("not configured"));

    let code = shell.registry().records().await[0].code.clone();
    let found = run(&shell, &["lookup", "--phone", "01012345678"]).await.unwrap();
    assert!(found.contains(&code));
    assert!(found.contains("1 record(s)"));
}

#[tokio::test]
async fn link_prefills_the_partner_reference() {
    let shell = shell().await;
    let mut args = SUBMIT.to_vec();
    args.extend(["--link", "https://landing.example/?pc=pabcd234"]);

    let text = run(&shell, &args).await.unwrap();

    assert!(text.contains("Referred by: PABCD234"));
}

#[tokio::test]
async fn blank_lookup_is_a_validation_error() {
    let shell = shell().await;

    let err = run(&shell, &["lookup", "--name", "  "]).await.unwrap_err();

    assert!(matches!(err.downcast_ref::<PartnerError>(), Some(PartnerError::Validation { .. })));
}

#[tokio::test]
async fn records_lists_newest_first() {
    let shell = shell().await;
    assert!(run(&shell, &["records"]).await.unwrap().contains("No records found."));

    run(&shell, &SUBMIT).await.unwrap();
    run(&shell, &SUBMIT).await.unwrap();

    let records = shell.registry().records().await;
    let text = run(&shell, &["records"]).await.unwrap();
    let first = text.find(&records[0].code).unwrap();
    let second = text.find(&records[1].code).unwrap();
    assert!(first < second);
}
