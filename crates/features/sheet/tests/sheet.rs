use chrono::{TimeZone, Utc};
use rhub_domain::config::ApiConfig;
use rhub_domain::constants::SHEET_HEADER;
use rhub_domain::partner::LookupQuery;
use rhub_sheet::{Sheet, SheetError, SheetPayload, connect};
use rhub_storage::Storage;
use std::path::Path;

fn config_for(dir: &Path) -> ApiConfig {
    let mut config = ApiConfig::default();
    config.storage.data_dir = dir.to_path_buf();
    config
}

fn payload(name: &str, phone: &str, email: &str, code: &str) -> SheetPayload {
    SheetPayload {
        name: name.to_owned(),
        phone: phone.to_owned(),
        email: email.to_owned(),
        deposit_at: "2025-11-01T10:00".to_owned(),
        depositor_name: name.to_owned(),
        partner_ref: String::new(),
        code: code.to_owned(),
    }
}

async fn storage(dir: &Path) -> Storage {
    Storage::builder().root(dir).connect().await.unwrap()
}

#[tokio::test]
async fn header_is_written_once() {
    let dir = tempfile::tempdir().unwrap();
    let sheet = connect(&config_for(dir.path())).await.unwrap();

    assert!(!sheet.initialize().await.unwrap());
    sheet.append(payload("Kim", "010", "kim@example.com", "PAAAA234")).await.unwrap();

    let reopened = connect(&config_for(dir.path())).await.unwrap();
    let rows = reopened.rows().await;
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].cells(), SHEET_HEADER.map(str::to_owned).as_slice());
}

#[tokio::test]
async fn rows_are_stamped_in_the_configured_offset() {
    let dir = tempfile::tempdir().unwrap();
    let sheet = Sheet::open(storage(dir.path()).await, 9).await.unwrap();
    sheet.initialize().await.unwrap();

    let now = Utc.with_ymd_and_hms(2025, 11, 1, 15, 30, 5).unwrap();
    let stamp = sheet.append_at(payload("Kim", "010", "k@x", "PAAAA234"), now).await.unwrap();

    assert_eq!(stamp, "2025-11-02 00:30:05");
    assert_eq!(sheet.rows().await[1].timestamp(), stamp);
}

#[tokio::test]
async fn search_uses_or_substring_matching() {
    let dir = tempfile::tempdir().unwrap();
    let sheet = connect(&config_for(dir.path())).await.unwrap();
    sheet.append(payload("Kim Minji", "010-1234-5678", "minji@example.com", "PAAAA234")).await.unwrap();
    sheet.append(payload("Lee", "(010) 9999 0000", "lee@sample.org", "PBBBB234")).await.unwrap();

    let by_phone = LookupQuery { phone: Some("0109999".into()), ..LookupQuery::default() };
    let found = sheet.search(&by_phone).await;
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].code, "PBBBB234");

    let either = LookupQuery {
        name: Some("minji".into()),
        email: Some("SAMPLE".into()),
        ..LookupQuery::default()
    };
    assert_eq!(sheet.search(&either).await.len(), 2);

    let header_only = LookupQuery { name: Some("이름".into()), ..LookupQuery::default() };
    assert!(sheet.search(&header_only).await.is_empty());
}

#[tokio::test]
async fn empty_search_returns_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let sheet = connect(&config_for(dir.path())).await.unwrap();
    sheet.append(payload("Kim", "010", "kim@example.com", "PAAAA234")).await.unwrap();

    assert!(sheet.search(&LookupQuery::default()).await.is_empty());
    let blank = LookupQuery { phone: Some("--".into()), ..LookupQuery::default() };
    assert!(sheet.search(&blank).await.is_empty());
}

#[tokio::test]
async fn rows_without_timestamp_are_skipped() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("sheet.json"),
        r#"[["타임스탬프"],["","Kim"],["2025-11-01 10:00:00","Kim","010"]]"#,
    )
    .unwrap();

    let sheet = connect(&config_for(dir.path())).await.unwrap();
    let query = LookupQuery { name: Some("kim".into()), ..LookupQuery::default() };
    let found = sheet.search(&query).await;

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].phone, "010");
    assert_eq!(found[0].code, "");
}

#[tokio::test]
async fn blank_first_cell_gets_the_header() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("sheet.json"), r#"[[""]]"#).unwrap();

    let sheet = Sheet::open(storage(dir.path()).await, 9).await.unwrap();
    assert!(sheet.initialize().await.unwrap());
    assert_eq!(sheet.rows().await.len(), 1);
    assert_eq!(sheet.rows().await[0].timestamp(), SHEET_HEADER[0]);
}

#[tokio::test]
async fn corrupt_sheet_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("sheet.json"), b"{").unwrap();

    let err = Sheet::open(storage(dir.path()).await, 9).await.unwrap_err();
    assert!(matches!(err, SheetError::Serialization { .. }));
}

#[tokio::test]
async fn out_of_range_offset_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let err = Sheet::open(storage(dir.path()).await, 30).await.unwrap_err();
    assert!(matches!(err, SheetError::Internal { .. }));
}
