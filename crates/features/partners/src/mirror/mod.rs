//! Remote mirror sinks receiving a best-effort copy of each issued record.
//!
//! The local store stays authoritative: a mirror result is reported as a
//! [`MirrorOutcome`] next to the committed record and never undoes it.

mod error;
mod http;

pub use error::{MirrorError, MirrorErrorExt};
pub use http::HttpMirror;

use rhub_domain::partner::PartnerRecord;
use serde::Serialize;
use std::fmt;
use std::future::Future;

pub trait MirrorSink: Send + Sync {
    /// Sends one record.
    ///
    /// [`MirrorError::NotConfigured`] means "nothing to send to" and is
    /// reported as [`MirrorOutcome::Skipped`].
    fn mirror(&self, record: &PartnerRecord) -> impl Future<Output = Result<(), MirrorError>> + Send;
}

/// What happened to the remote copy of a committed record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "reason", rename_all = "camelCase")]
pub enum MirrorOutcome {
    Delivered,
    Skipped,
    Failed(String),
}

impl MirrorOutcome {
    #[must_use]
    pub const fn is_delivered(&self) -> bool {
        matches!(self, Self::Delivered)
    }
}

impl fmt::Display for MirrorOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Delivered => f.write_str("sent to the sheet"),
            Self::Skipped => f.write_str("sheet not configured, saved locally only"),
            Self::Failed(reason) => write!(f, "sheet sync failed ({reason}), saved locally"),
        }
    }
}

/// Sink used when mirroring is switched off.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopMirror;

impl MirrorSink for NoopMirror {
    async fn mirror(&self, _record: &PartnerRecord) -> Result<(), MirrorError> {
        Err(MirrorError::NotConfigured { message: "mirroring disabled".into(), context: None })
    }
}
