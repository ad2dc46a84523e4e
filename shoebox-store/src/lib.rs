//! Encrypted per-owner tax record storage.
//!
//! The store owns the create-or-replace semantics keyed by
//! (owner, tax year): at most one record per key, replaced whole on every
//! write. Records cross this boundary only as ciphertext produced by
//! `shoebox-crypto`; the store never sees or logs plaintext.
//!
//! Backed by SQLite through rusqlite, with `:memory:` support for tests.
//! The contract is on the key uniqueness and replace semantics, not on
//! the storage engine.

mod error;
mod record_store;

pub use error::{StorageError, StorageResult};
pub use record_store::{RecordStore, RowOutcome, StoredRecordHandle, StoredRecordSummary};
