//! Error types for the encryption layer.

use thiserror::Error;

/// Result type for crypto operations.
pub type CryptoResult<T> = Result<T, CryptoError>;

/// Errors that can occur in cryptographic operations.
#[derive(Debug, Error)]
pub enum CryptoError {
    /// The field key environment variable is not set. Fatal configuration
    /// error: the cipher must not become usable without a key.
    #[error("field key not configured: {0} is unset")]
    MissingKey(String),

    /// The configured key has the wrong length. Never truncated or padded.
    #[error("invalid key length: expected {expected} bytes, got {actual}")]
    InvalidKeyLength { expected: usize, actual: usize },

    /// Encryption failed.
    #[error("encryption failed: {0}")]
    Encryption(String),

    /// Decryption failed (wrong key, tampered or truncated data). No
    /// partial plaintext is ever returned.
    #[error("decryption failed: {0}")]
    Decryption(String),

    /// Decryption succeeded but the plaintext does not parse as a tax
    /// record (e.g. written by an incompatible future schema).
    #[error("malformed record: {0}")]
    MalformedRecord(String),
}
