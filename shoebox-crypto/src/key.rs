//! Field key handling.
//!
//! One long-lived process-wide secret, loaded once at startup and injected
//! into the cipher at construction time. Never read from ambient
//! environment state inside the encryption path, never logged,
//! zeroized on drop.

use crate::error::{CryptoError, CryptoResult};
use rand::RngCore;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

/// Size of the field key in bytes (256 bits for AES-256-GCM).
pub const KEY_SIZE: usize = 32;

/// Environment variable the key is conventionally loaded from.
pub const KEY_ENV_VAR: &str = "SHOEBOX_FIELD_KEY";

/// The symmetric field-encryption key, zeroized on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct FieldKey {
    bytes: [u8; KEY_SIZE],
}

impl FieldKey {
    /// Creates a key from exactly `KEY_SIZE` raw bytes.
    #[must_use]
    pub fn from_bytes(bytes: [u8; KEY_SIZE]) -> Self {
        Self { bytes }
    }

    /// Creates a key from a byte slice, rejecting any length other than
    /// `KEY_SIZE`.
    pub fn from_slice(bytes: &[u8]) -> CryptoResult<Self> {
        if bytes.len() != KEY_SIZE {
            return Err(CryptoError::InvalidKeyLength {
                expected: KEY_SIZE,
                actual: bytes.len(),
            });
        }
        let mut key = [0u8; KEY_SIZE];
        key.copy_from_slice(bytes);
        Ok(Self { bytes: key })
    }

    /// Loads the key from an environment variable holding exactly 32 raw
    /// bytes. Absence or wrong length is a fatal configuration error.
    pub fn from_env(var: &str) -> CryptoResult<Self> {
        // Zeroizing so the intermediate copy of the key material is wiped
        // when this scope ends.
        let raw = Zeroizing::new(
            std::env::var(var).map_err(|_| CryptoError::MissingKey(var.to_string()))?,
        );
        Self::from_slice(raw.as_bytes())
    }

    /// Generates a random key. Primarily for tests.
    #[must_use]
    pub fn random() -> Self {
        let mut bytes = [0u8; KEY_SIZE];
        rand::rngs::OsRng.fill_bytes(&mut bytes);
        Self { bytes }
    }

    /// Returns the key bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8; KEY_SIZE] {
        &self.bytes
    }
}

impl std::fmt::Debug for FieldKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldKey")
            .field("bytes", &"[REDACTED]")
            .finish()
    }
}
