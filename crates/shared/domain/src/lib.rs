//! # Domain Models
//!
//! Pure Reward Hub types with minimal dependencies (`serde`, `chrono`).
//! No I/O, networking, or heavy logic: data plus small normalisation helpers.

pub mod config;
pub mod constants;
pub mod partner;
pub mod registry;
