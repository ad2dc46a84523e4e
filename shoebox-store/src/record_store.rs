//! The record store: encrypted tax records keyed by (owner, tax year).

use crate::error::{StorageError, StorageResult};
use chrono::Utc;
use rusqlite::{params, Connection};
use shoebox_crypto::FieldCipher;
use shoebox_types::{OwnerId, TaxYearRecord};
use std::path::Path;
use std::sync::Mutex;
use tracing::{debug, warn};

/// Reference to a stored row, returned by [`RecordStore::upsert`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredRecordHandle {
    pub owner: OwnerId,
    pub tax_year: i32,
    /// Epoch milliseconds of the write.
    pub updated_at: i64,
}

/// The decrypted payload of one listed row, or why it could not be read.
#[derive(Debug, Clone, PartialEq)]
pub enum RowOutcome {
    Record(TaxYearRecord),
    /// Decryption or deserialization failed for this row only; the rest
    /// of the listing is unaffected.
    Unreadable(String),
}

/// One row of a per-owner listing: the queryable plaintext columns plus
/// the per-row decrypt outcome.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredRecordSummary {
    pub tax_year: i32,
    pub province: String,
    /// Epoch milliseconds of the last write.
    pub updated_at: i64,
    pub payload: RowOutcome,
}

/// Encrypted at-rest storage of tax-year records.
///
/// At most one row exists per (owner, tax year); a repeated upsert for the
/// same key replaces the whole encrypted payload in a single statement, so
/// a concurrent reader never observes a partial write. Only the tax year,
/// province and update timestamp are stored in plaintext, for
/// queryability; everything else lives inside the ciphertext.
pub struct RecordStore {
    conn: Mutex<Connection>,
    cipher: FieldCipher,
}

impl RecordStore {
    /// Opens (creating if needed) a file-backed store.
    pub fn open(path: &Path, cipher: FieldCipher) -> StorageResult<Self> {
        Self::from_connection(Connection::open(path)?, cipher)
    }

    /// Opens an in-memory store, for tests and previews.
    pub fn open_in_memory(cipher: FieldCipher) -> StorageResult<Self> {
        Self::from_connection(Connection::open_in_memory()?, cipher)
    }

    fn from_connection(conn: Connection, cipher: FieldCipher) -> StorageResult<Self> {
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS returns (
                owner_id          TEXT NOT NULL,
                tax_year          INTEGER NOT NULL,
                province          TEXT NOT NULL,
                updated_at        INTEGER NOT NULL,
                encrypted_payload TEXT NOT NULL,
                PRIMARY KEY (owner_id, tax_year)
            );",
        )?;
        Ok(Self {
            conn: Mutex::new(conn),
            cipher,
        })
    }

    /// Creates or replaces the record for `(owner, record.tax_year)`.
    ///
    /// The record is assumed already validated by the caller. Encryption
    /// happens before the row is touched; a crypto failure therefore never
    /// leaves partial state behind. Whole-record replace: no field-level
    /// merge semantics.
    pub fn upsert(
        &self,
        owner: &OwnerId,
        record: &TaxYearRecord,
    ) -> StorageResult<StoredRecordHandle> {
        if owner.is_empty() {
            return Err(StorageError::NotPermitted);
        }

        let payload = self.cipher.encrypt_record(record)?;
        let updated_at = Utc::now().timestamp_millis();

        let conn = self.conn.lock().expect("store mutex poisoned");
        conn.execute(
            "INSERT INTO returns (owner_id, tax_year, province, updated_at, encrypted_payload)
             VALUES (?1, ?2, ?3, ?4, ?5)
             ON CONFLICT (owner_id, tax_year) DO UPDATE SET
                 province = excluded.province,
                 updated_at = excluded.updated_at,
                 encrypted_payload = excluded.encrypted_payload",
            params![
                owner.as_str(),
                record.tax_year,
                record.profile.province.as_str(),
                updated_at,
                payload,
            ],
        )?;
        debug!(owner = %owner, tax_year = record.tax_year, "record upserted");

        Ok(StoredRecordHandle {
            owner: owner.clone(),
            tax_year: record.tax_year,
            updated_at,
        })
    }

    /// Lists all stored records for an owner, newest tax year first.
    ///
    /// A row whose payload fails to decrypt (or no longer parses as a
    /// record) is reported as [`RowOutcome::Unreadable`] instead of
    /// aborting the whole listing. An empty owner identity yields an
    /// empty listing.
    pub fn list_for_owner(&self, owner: &OwnerId) -> StorageResult<Vec<StoredRecordSummary>> {
        if owner.is_empty() {
            return Ok(Vec::new());
        }

        // Fetch under the lock, decrypt after releasing it: one listing's
        // decryption work must not block another's.
        let raw_rows: Vec<(i32, String, i64, String)> = {
            let conn = self.conn.lock().expect("store mutex poisoned");
            let mut stmt = conn.prepare(
                "SELECT tax_year, province, updated_at, encrypted_payload
                 FROM returns WHERE owner_id = ?1
                 ORDER BY tax_year DESC",
            )?;
            let rows = stmt.query_map(params![owner.as_str()], |row| {
                Ok((
                    row.get::<_, i32>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, i64>(2)?,
                    row.get::<_, String>(3)?,
                ))
            })?;
            rows.collect::<Result<_, _>>()?
        };

        let mut summaries = Vec::new();
        for (tax_year, province, updated_at, payload) in raw_rows {
            let payload = match self.cipher.decrypt_record(&payload) {
                Ok(record) => RowOutcome::Record(record),
                Err(e) => {
                    // Error text only: never the payload or key material.
                    warn!(owner = %owner, tax_year, error = %e, "skipping unreadable row");
                    RowOutcome::Unreadable(e.to_string())
                }
            };
            summaries.push(StoredRecordSummary {
                tax_year,
                province,
                updated_at,
                payload,
            });
        }
        Ok(summaries)
    }

    /// Deletes every record belonging to an owner. Irreversible and
    /// synchronous. Returns the number of rows removed; an unknown or
    /// empty owner is not an error and deletes nothing.
    pub fn delete_all_for_owner(&self, owner: &OwnerId) -> StorageResult<usize> {
        if owner.is_empty() {
            return Ok(0);
        }

        let conn = self.conn.lock().expect("store mutex poisoned");
        let deleted = conn.execute(
            "DELETE FROM returns WHERE owner_id = ?1",
            params![owner.as_str()],
        )?;
        debug!(owner = %owner, deleted, "owner data deleted");
        Ok(deleted)
    }
}
