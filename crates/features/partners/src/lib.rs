//! # Partners
//!
//! Partner code issuance for the pre-order campaign.
//!
//! * [`code`]: `P` + seven unambiguous symbols, unique by rejection sampling.
//! * [`registry`]: validates submissions, commits them through a
//!   [`RecordStore`] and mirrors them through a [`MirrorSink`].
//! * [`lookup`]: OR/substring matching shared with the sheet backend.
//! * [`referral`]: partner reference pre-fill from `?pc=` links.

pub mod code;
mod error;
pub mod lookup;
pub mod mirror;
pub mod referral;
pub mod registry;
pub mod store;

pub use crate::error::{PartnerError, PartnerErrorExt};
pub use code::{MAX_CODE_ATTEMPTS, generate_code, generate_unique_code, generate_unique_code_with};
pub use lookup::NormalizedQuery;
pub use mirror::{HttpMirror, MirrorError, MirrorOutcome, MirrorSink, NoopMirror};
pub use registry::{CodeRegistry, DEFAULT_MIRROR_TIMEOUT, IssuedCode};
pub use store::{FileStore, MemoryStore, RecordStore};
