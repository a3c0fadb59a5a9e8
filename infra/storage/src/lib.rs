//! Sandboxed file storage backing the file-based partner registry and the
//! sheet row store.
//!
//! Every path is resolved relative to a canonical root and rejected if it
//! would escape it. Writes go through a unique temp file, `fsync` and a
//! rename, so a reader never observes a half-written document. Orphaned temp
//! files from a crashed writer are purged when the storage connects.
//!
//! ```rust
//! use rhub_storage::{Storage, StorageError};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), StorageError> {
//! # let tmp = tempfile::tempdir().unwrap();
//! let storage = Storage::builder().root(tmp.path().join("data")).connect().await?;
//!
//! storage.write("rm_partner_codes.json", b"[]").await?;
//! assert_eq!(storage.read("rm_partner_codes.json").await?, b"[]");
//! assert!(storage.read_optional("sheet.json").await?.is_none());
//! # Ok(())
//! # }
//! ```

mod builder;
mod engine;
mod error;
mod maintenance;
mod security;

pub use builder::StorageBuilder;
pub use engine::Storage;
pub use error::{StorageError, StorageErrorExt};
