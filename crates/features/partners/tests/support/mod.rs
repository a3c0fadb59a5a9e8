#![allow(dead_code, unreachable_pub)]

use rhub_domain::partner::{PartnerRecord, Submission};
use rhub_partners::{MirrorError, MirrorSink, PartnerError, RecordStore};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

pub fn submission(name: &str, phone: &str, email: &str) -> Submission {
    Submission {
        name: name.to_owned(),
        phone: phone.to_owned(),
        email: email.to_owned(),
        deposit_at: "2025-11-01T10:00".to_owned(),
        depositor_name: name.to_owned(),
        partner_ref: String::new(),
    }
}

/// Mirror that counts calls and answers with a fixed behaviour.
#[derive(Debug, Default)]
pub struct ScriptedMirror {
    pub calls: AtomicUsize,
    pub fail: bool,
    pub delay: Option<Duration>,
}

impl ScriptedMirror {
    pub fn failing() -> Self {
        Self { fail: true, ..Self::default() }
    }

    pub fn slow(delay: Duration) -> Self {
        Self { delay: Some(delay), ..Self::default() }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl MirrorSink for ScriptedMirror {
    async fn mirror(&self, _record: &PartnerRecord) -> Result<(), MirrorError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if self.fail {
            return Err(MirrorError::Rejected { message: "sheet offline".into(), context: None });
        }
        Ok(())
    }
}

/// Store that can neither load nor save.
#[derive(Debug, Default)]
pub struct BrokenStore;

impl RecordStore for BrokenStore {
    async fn load(&self) -> Result<Vec<PartnerRecord>, PartnerError> {
        Err(PartnerError::Internal { message: "disk gone".into(), context: None })
    }

    async fn save(&self, _records: &[PartnerRecord]) -> Result<(), PartnerError> {
        Err("disk gone".into())
    }
}
