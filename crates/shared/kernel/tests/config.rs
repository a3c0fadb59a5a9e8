use rhub_kernel::config::{ConfigError, load_config};
use rhub_kernel::domain::config::ApiConfig;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn explicit_file_overrides_defaults() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
[server]
port = 9090

[mirror]
url = "http://127.0.0.1:9090/"
timeout_ms = 2500

[sheet]
utc_offset_hours = 0
"#
    )
    .unwrap();

    let cfg: ApiConfig = load_config(Some(file.path())).unwrap();
    assert_eq!(cfg.server.port, 9090);
    assert_eq!(cfg.mirror.url.as_deref(), Some("http://127.0.0.1:9090/"));
    assert_eq!(cfg.mirror.timeout_ms, 2500);
    assert_eq!(cfg.sheet.utc_offset_hours, 0);
    assert!((cfg.campaign.instant_rate - 0.1).abs() < f64::EPSILON);
}

#[test]
fn missing_explicit_file_is_an_error() {
    let err = load_config::<ApiConfig>(Some("definitely/not/here.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Config { .. }));
    assert!(err.to_string().contains("Failed to build config"));
}

#[test]
fn malformed_values_fail_deserialization() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "[server]\nport = \"not a port\"").unwrap();

    let err = load_config::<ApiConfig>(Some(file.path())).unwrap_err();
    assert!(err.to_string().contains("Failed to deserialize config"));
}

#[test]
fn absent_default_file_falls_back_to_defaults() {
    let cfg: ApiConfig = load_config(None::<&str>).unwrap();
    assert_eq!(cfg.server.port, 4583);
    assert_eq!(cfg.sheet.utc_offset_hours, 9);
}
