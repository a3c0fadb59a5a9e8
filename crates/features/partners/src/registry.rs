//! The code registry: issues partner codes and answers lookups.
//!
//! `generate → prepend → save` runs under one write guard so concurrent
//! submitters cannot overwrite each other's full-list saves. The mirror call
//! happens after the guard is released and is bounded by a timeout.

use crate::code::generate_unique_code;
use crate::error::PartnerError;
use crate::lookup::NormalizedQuery;
use crate::mirror::{MirrorError, MirrorOutcome, MirrorSink};
use crate::store::RecordStore;
use chrono::{SubsecRound, Utc};
use rhub_domain::partner::{LookupQuery, PartnerRecord, Submission};
use serde::Serialize;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::{info, warn};

/// Default bound on a single mirror call.
pub const DEFAULT_MIRROR_TIMEOUT: Duration = Duration::from_secs(10);

/// A committed record plus what happened to its remote copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IssuedCode {
    pub record: PartnerRecord,
    pub mirror: MirrorOutcome,
}

#[derive(Debug)]
pub struct CodeRegistry<S, M> {
    records: RwLock<Vec<PartnerRecord>>,
    store: S,
    mirror: M,
    mirror_timeout: Duration,
}

impl<S: RecordStore, M: MirrorSink> CodeRegistry<S, M> {
    /// Loads the persisted list. A failing load starts empty with a warning.
    pub async fn open(store: S, mirror: M, mirror_timeout: Duration) -> Self {
        let records = match store.load().await {
            Ok(records) => records,
            Err(err) => {
                warn!(error = %err, "Partner codes unreadable, starting with an empty list");
                Vec::new()
            },
        };
        info!(count = records.len(), "Code registry ready");

        Self { records: RwLock::new(records), store, mirror, mirror_timeout }
    }

    /// Validates `fields`, issues a unique code, commits the record locally
    /// (newest first) and then mirrors it.
    ///
    /// # Errors
    /// [`PartnerError::Validation`] naming blank required fields; nothing is
    /// stored or mirrored in that case. [`PartnerError::CodeSpaceExhausted`]
    /// if no free code was found. Persistence and mirror failures are logged,
    /// not returned.
    pub async fn submit(&self, fields: &Submission) -> Result<IssuedCode, PartnerError> {
        let fields = fields.normalized();
        let missing = fields.missing_fields();
        if !missing.is_empty() {
            return Err(PartnerError::Validation {
                message: format!("required fields are empty: {}", missing.join(", ")).into(),
                context: None,
            });
        }

        let record = {
            let mut records = self.records.write().await;
            let code = generate_unique_code(records.iter().map(|r| r.code.as_str()))?;
            let record = PartnerRecord {
                code,
                partner_ref: fields.partner_ref(),
                name: fields.name,
                phone: fields.phone,
                email: fields.email,
                deposit_at: fields.deposit_at,
                depositor_name: fields.depositor_name,
                created_at: Utc::now().trunc_subsecs(3),
            };
            records.insert(0, record.clone());

            if let Err(err) = self.store.save(&records).await {
                warn!(code = %record.code, error = %err, "Partner codes not persisted");
            }
            record
        };
        info!(code = %record.code, partner_ref = ?record.partner_ref, "Partner code issued");

        let mirror = self.mirror_record(&record).await;
        Ok(IssuedCode { record, mirror })
    }

    /// Records matching any of the query terms, newest first.
    ///
    /// # Errors
    /// [`PartnerError::Validation`] when the query has no usable term.
    pub async fn lookup(&self, query: &LookupQuery) -> Result<Vec<PartnerRecord>, PartnerError> {
        let query = NormalizedQuery::from(query);
        if query.is_empty() {
            return Err(PartnerError::Validation {
                message: "enter a name, phone number or email".into(),
                context: None,
            });
        }

        let records = self.records.read().await;
        Ok(records.iter().filter(|record| query.matches_record(record)).cloned().collect())
    }

    /// Snapshot of every record, newest first.
    pub async fn records(&self) -> Vec<PartnerRecord> {
        self.records.read().await.clone()
    }

    pub const fn store(&self) -> &S {
        &self.store
    }

    pub const fn mirror(&self) -> &M {
        &self.mirror
    }

    async fn mirror_record(&self, record: &PartnerRecord) -> MirrorOutcome {
        let result = tokio::time::timeout(self.mirror_timeout, self.mirror.mirror(record))
            .await
            .unwrap_or_else(|_| {
                Err(MirrorError::Timeout {
                    message: format!("no answer within {} ms", self.mirror_timeout.as_millis())
                        .into(),
                    context: None,
                })
            });

        match result {
            Ok(()) => MirrorOutcome::Delivered,
            Err(MirrorError::NotConfigured { message, .. }) => {
                warn!(code = %record.code, reason = %message, "Mirror skipped, record kept locally");
                MirrorOutcome::Skipped
            },
            Err(err) => {
                warn!(code = %record.code, error = %err, "Mirror failed, record kept locally");
                MirrorOutcome::Failed(err.to_string())
            },
        }
    }
}
