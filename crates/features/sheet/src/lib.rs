//! # Sheet
//!
//! Server-side counterpart of the partner mirror: an append-only row store
//! kept as one JSON document (`sheet.json`) in a storage sandbox.
//!
//! Row 0 is the header row. Appends are stamped with the configured UTC
//! offset and serialized under a single writer lock. Search applies the
//! registry's OR/substring matching but answers an empty query with no rows
//! instead of an error.
//!
//! With the `server` feature the slice also provides its HTTP routes
//! (`POST /`, `GET /?action=search`, `GET /`).

mod error;
mod row;
#[cfg(feature = "server")]
mod server;

pub use crate::error::{SheetError, SheetErrorExt};
pub use row::{SheetPayload, SheetRecord, SheetRow};
#[cfg(feature = "server")]
pub use server::{ResponseStatus, SheetResponse, router};

use chrono::{DateTime, FixedOffset, Utc};
use rhub_domain::config::ApiConfig;
use rhub_domain::constants::{SHEET_FILE, SHEET_TIMESTAMP_FORMAT};
use rhub_domain::partner::LookupQuery;
use rhub_domain::registry::InitializedSlice;
use rhub_partners::NormalizedQuery;
use rhub_storage::Storage;
use tokio::sync::Mutex;
use tracing::{debug, info};

/// Sheet backend state.
#[rhub_derive::rhub_slice]
pub struct Sheet {
    rows: Mutex<Vec<SheetRow>>,
    storage: Storage,
    offset: FixedOffset,
}

impl Sheet {
    /// Loads the rows kept in `storage`. No document means an empty sheet.
    ///
    /// # Errors
    /// [`SheetError::Internal`] for an offset beyond ±23 hours,
    /// [`SheetError::Storage`] / [`SheetError::Serialization`] when the
    /// document cannot be read back.
    pub async fn open(storage: Storage, utc_offset_hours: i32) -> Result<Self, SheetError> {
        let offset = utc_offset_hours
            .checked_mul(3600)
            .and_then(FixedOffset::east_opt)
            .ok_or_else(|| SheetError::Internal {
                message: format!("UTC offset of {utc_offset_hours} hours is out of range").into(),
                context: None,
            })?;

        let rows = match storage.read_optional(SHEET_FILE).await.context("reading sheet")? {
            Some(bytes) if !bytes.iter().all(u8::is_ascii_whitespace) => {
                serde_json::from_slice::<Vec<SheetRow>>(&bytes).context("parsing sheet")?
            },
            _ => Vec::new(),
        };
        debug!(rows = rows.len(), %offset, "Sheet loaded");

        Ok(Self::new(SheetInner { rows: Mutex::new(rows), storage, offset }))
    }

    /// Writes the header row when the first cell of the sheet is empty.
    /// Returns whether anything was written.
    ///
    /// # Errors
    /// Storage or serialization failure; the rows are left unchanged.
    pub async fn initialize(&self) -> Result<bool, SheetError> {
        let mut rows = self.rows.lock().await;
        if rows.first().is_some_and(|first| !first.timestamp().is_empty()) {
            debug!("Sheet already has a header");
            return Ok(false);
        }

        let previous = rows.clone();
        match rows.first_mut() {
            Some(first) => *first = SheetRow::header(),
            None => rows.push(SheetRow::header()),
        }
        if let Err(err) = self.persist(&rows).await {
            *rows = previous;
            return Err(err);
        }

        info!("Sheet header written");
        Ok(true)
    }

    /// Appends `payload` stamped with the current time.
    ///
    /// # Errors
    /// See [`Sheet::append_at`].
    pub async fn append(&self, payload: SheetPayload) -> Result<String, SheetError> {
        self.append_at(payload, Utc::now()).await
    }

    /// Appends `payload` stamped with `now` and returns the stamp.
    ///
    /// # Errors
    /// Storage or serialization failure; the row is not kept in that case.
    pub async fn append_at(
        &self,
        payload: SheetPayload,
        now: DateTime<Utc>,
    ) -> Result<String, SheetError> {
        let timestamp = self.timestamp(now);
        let code = payload.code.clone();

        let mut rows = self.rows.lock().await;
        rows.push(payload.into_row(timestamp.clone()));
        if let Err(err) = self.persist(&rows).await {
            rows.pop();
            return Err(err);
        }

        info!(code = %code, %timestamp, rows = rows.len(), "Sheet row appended");
        Ok(timestamp)
    }

    /// Data rows matching any query term, in sheet order.
    pub async fn search(&self, query: &LookupQuery) -> Vec<SheetRecord> {
        let query = NormalizedQuery::from(query);
        if query.is_empty() {
            return Vec::new();
        }

        let rows = self.rows.lock().await;
        rows.iter()
            .skip(1)
            .filter(|row| !row.timestamp().is_empty())
            .filter(|row| query.matches(row.cell(1), row.cell(2), row.cell(3)))
            .map(SheetRecord::from)
            .collect()
    }

    /// Every stored row, header included.
    pub async fn rows(&self) -> Vec<SheetRow> {
        self.rows.lock().await.clone()
    }

    /// `now` in the sheet's offset, formatted `yyyy-MM-dd HH:mm:ss`.
    #[must_use]
    pub fn timestamp(&self, now: DateTime<Utc>) -> String {
        now.with_timezone(&self.offset).format(SHEET_TIMESTAMP_FORMAT).to_string()
    }

    #[must_use]
    pub fn offset(&self) -> FixedOffset {
        self.offset
    }

    async fn persist(&self, rows: &[SheetRow]) -> Result<(), SheetError> {
        let bytes = serde_json::to_vec_pretty(rows).context("encoding sheet")?;
        self.storage.write(SHEET_FILE, &bytes).await.context("writing sheet")?;
        Ok(())
    }
}

/// Opens the sheet under `storage.data_dir` and writes its header if needed.
///
/// # Errors
/// Any [`SheetError`] raised while opening or initializing the sheet.
pub async fn connect(config: &ApiConfig) -> Result<Sheet, SheetError> {
    let storage = Storage::builder()
        .root(&config.storage.data_dir)
        .connect()
        .await
        .context("opening sheet storage")?;

    let sheet = Sheet::open(storage, config.sheet.utc_offset_hours).await?;
    sheet.initialize().await?;
    Ok(sheet)
}

/// Initialize the sheet feature.
///
/// # Errors
/// See [`connect`].
pub async fn init(config: &ApiConfig) -> Result<InitializedSlice, SheetError> {
    let sheet = connect(config).await?;
    info!(data_dir = %config.storage.data_dir.display(), "Sheet slice initialized");
    Ok(InitializedSlice::new(sheet))
}
