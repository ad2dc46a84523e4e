//! Field-level encryption for Shoebox tax records.
//!
//! Tax records never touch disk in plaintext: the record store hands every
//! validated record through this crate before persisting it. The cipher is
//! AES-256-GCM under a single process-wide 32-byte key, with the stored
//! layout `nonce(16) ‖ tag(16) ‖ ciphertext` base64-encoded as one opaque
//! string.
//!
//! Deliberate omissions: no compression, no key rotation, no per-record
//! key derivation. All three are possible extensions on top of the
//! versioned blob layout.

mod cipher;
mod error;
mod key;

pub use cipher::{EncryptedBlob, FieldCipher, NONCE_SIZE, TAG_SIZE};
pub use error::{CryptoError, CryptoResult};
pub use key::{FieldKey, KEY_ENV_VAR, KEY_SIZE};
