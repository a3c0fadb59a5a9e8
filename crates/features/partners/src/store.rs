//! Persistence providers for the partner record list.
//!
//! The registry always hands over the full sequence (newest first); a store
//! replaces whatever it held before.

use crate::error::{PartnerError, PartnerErrorExt};
use parking_lot::Mutex;
use rhub_domain::constants::PARTNER_CODES_FILE;
use rhub_domain::partner::PartnerRecord;
use rhub_storage::Storage;
use std::future::Future;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::debug;

pub trait RecordStore: Send + Sync {
    /// Full record list; an empty list when nothing was saved yet.
    fn load(&self) -> impl Future<Output = Result<Vec<PartnerRecord>, PartnerError>> + Send;

    /// Overwrites the stored list with `records`.
    fn save(&self, records: &[PartnerRecord]) -> impl Future<Output = Result<(), PartnerError>> + Send;
}

/// In-process store for tests and throwaway shells.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: Mutex<Vec<PartnerRecord>>,
    saves: AtomicUsize,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_records(records: Vec<PartnerRecord>) -> Self {
        Self { records: Mutex::new(records), saves: AtomicUsize::new(0) }
    }

    /// Copy of the last saved list.
    #[must_use]
    pub fn snapshot(&self) -> Vec<PartnerRecord> {
        self.records.lock().clone()
    }

    /// Number of completed saves.
    #[must_use]
    pub fn saves(&self) -> usize {
        self.saves.load(Ordering::Acquire)
    }
}

impl RecordStore for MemoryStore {
    async fn load(&self) -> Result<Vec<PartnerRecord>, PartnerError> {
        Ok(self.snapshot())
    }

    async fn save(&self, records: &[PartnerRecord]) -> Result<(), PartnerError> {
        *self.records.lock() = records.to_vec();
        self.saves.fetch_add(1, Ordering::AcqRel);
        Ok(())
    }
}

/// JSON document inside a storage sandbox, replaced atomically on save.
#[derive(Debug, Clone)]
pub struct FileStore {
    storage: Storage,
    file: String,
}

impl FileStore {
    /// Store backed by [`PARTNER_CODES_FILE`] in `storage`.
    #[must_use]
    pub fn new(storage: Storage) -> Self {
        Self { storage, file: PARTNER_CODES_FILE.to_owned() }
    }

    /// Connects a sandbox at `data_dir`, creating it if needed.
    ///
    /// # Errors
    /// [`PartnerError::Persistence`] when the directory cannot be prepared.
    pub async fn open(data_dir: impl Into<PathBuf>) -> Result<Self, PartnerError> {
        let data_dir = data_dir.into();
        let storage = Storage::builder()
            .root(&data_dir)
            .connect()
            .await
            .context(format!("opening {}", data_dir.display()))?;
        Ok(Self::new(storage))
    }

    #[must_use]
    pub fn with_file_name(mut self, file: impl Into<String>) -> Self {
        self.file = file.into();
        self
    }

    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file
    }
}

impl RecordStore for FileStore {
    async fn load(&self) -> Result<Vec<PartnerRecord>, PartnerError> {
        let Some(bytes) =
            self.storage.read_optional(&self.file).await.context("reading partner codes")?
        else {
            return Ok(Vec::new());
        };
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Vec::new());
        }
        serde_json::from_slice::<Vec<PartnerRecord>>(&bytes).context("parsing partner codes")
    }

    async fn save(&self, records: &[PartnerRecord]) -> Result<(), PartnerError> {
        let bytes = serde_json::to_vec_pretty(records).context("encoding partner codes")?;
        self.storage.write(&self.file, &bytes).await.context("writing partner codes")?;
        debug!(file = %self.file, count = records.len(), "Partner codes saved");
        Ok(())
    }
}
