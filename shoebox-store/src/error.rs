//! Error types for the storage layer.

use thiserror::Error;

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Errors that can occur in storage operations.
///
/// Database failures and cryptographic failures stay distinct: a storage
/// problem is never reported as a crypto problem or vice versa.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Database error from SQLite, propagated unchanged.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Encryption failed while preparing a record for persistence.
    #[error("crypto error: {0}")]
    Crypto(#[from] shoebox_crypto::CryptoError),

    /// No owner identity was supplied for a write.
    #[error("operation not permitted without an owner identity")]
    NotPermitted,
}
