use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::Deserialize;
use std::net::{IpAddr, Ipv4Addr};
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Seoul, the campaign's home time zone.
pub const KST_OFFSET_HOURS: i32 = 9;

/// Top-level configuration shared by the server and the shell.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfigInner {
    pub server: ServerConfig,
    pub storage: StorageConfig,
    pub campaign: CampaignConfig,
    pub mirror: MirrorConfig,
    pub sheet: SheetConfig,
    pub log: LogConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into subsystems.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(flatten, default)]
    inner: Arc<ApiConfigInner>,
}

impl Deref for ApiConfig {
    type Target = ApiConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for ApiConfig {
    fn deref_mut(&mut self) -> &mut ApiConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub address: IpAddr,
    pub port: u16,
    pub ssl: Option<SslConfig>,
}

/// TLS certificate/key paths.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SslConfig {
    pub cert: PathBuf,
    pub key: PathBuf,
}

/// Root of the storage sandbox used by file-backed stores.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub data_dir: PathBuf,
}

/// Campaign window and reward split.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CampaignConfig {
    /// Partner enrolment closes at this instant.
    pub deadline: DateTime<FixedOffset>,
    /// Share of the price paid out immediately, in `[0, 1]`.
    pub instant_rate: f64,
}

/// Remote mirror sink. No `url` means mirroring is skipped.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MirrorConfig {
    pub url: Option<String>,
    pub timeout_ms: u64,
    /// Treat non-2xx responses as failures.
    pub verify_status: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SheetConfig {
    /// Offset used when stamping appended rows.
    pub utc_offset_hours: i32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
    /// Rolling log files are written here when set.
    pub dir: Option<PathBuf>,
    pub json: bool,
}

// --- Default ---

impl Default for ServerConfig {
    fn default() -> Self {
        Self { address: IpAddr::V4(Ipv4Addr::UNSPECIFIED), port: 4583, ssl: None }
    }
}

impl Default for SslConfig {
    fn default() -> Self {
        Self { cert: PathBuf::from("cert.pem"), key: PathBuf::from("key.pem") }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self { data_dir: PathBuf::from(".") }
    }
}

impl Default for CampaignConfig {
    fn default() -> Self {
        Self { deadline: default_deadline(), instant_rate: 0.1 }
    }
}

impl Default for MirrorConfig {
    fn default() -> Self {
        Self { url: None, timeout_ms: 10_000, verify_status: false }
    }
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self { utc_offset_hours: KST_OFFSET_HOURS }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self { level: "info".to_owned(), dir: None, json: false }
    }
}

/// 2025-12-31 23:59 KST.
fn default_deadline() -> DateTime<FixedOffset> {
    FixedOffset::east_opt(KST_OFFSET_HOURS * 3600)
        .zip(NaiveDate::from_ymd_opt(2025, 12, 31).and_then(|d| d.and_hms_opt(23, 59, 0)))
        .and_then(|(tz, naive)| naive.and_local_timezone(tz).single())
        .unwrap_or_default()
}
