//! Record encryption using AES-256-GCM.
//!
//! Provides authenticated encryption (AEAD) with a fresh random nonce per
//! call. The stored layout is `nonce(16) ‖ tag(16) ‖ ciphertext`,
//! base64-encoded. This layout is load-bearing: previously stored blobs
//! use it, so nonce/tag sizes and ordering must not change without a
//! versioned migration.

use crate::error::{CryptoError, CryptoResult};
use crate::key::FieldKey;
use aes_gcm::aead::generic_array::typenum::U16;
use aes_gcm::aead::generic_array::GenericArray;
use aes_gcm::aead::AeadInPlace;
use aes_gcm::aes::Aes256;
use aes_gcm::{AesGcm, Key, KeyInit};
use rand::RngCore;

/// AES-256-GCM with a 16-byte nonce, matching the stored blob layout.
type Aes256Gcm16 = AesGcm<Aes256, U16>;

/// Size of the nonce in bytes.
pub const NONCE_SIZE: usize = 16;

/// Size of the authentication tag in bytes.
pub const TAG_SIZE: usize = 16;

/// An encrypted record blob, split into its wire components.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncryptedBlob {
    /// The nonce used for encryption (unique per encryption).
    pub nonce: [u8; NONCE_SIZE],
    /// The authentication tag, verified before any plaintext is returned.
    pub tag: [u8; TAG_SIZE],
    /// The ciphertext body.
    pub ciphertext: Vec<u8>,
}

impl EncryptedBlob {
    /// Encodes to the opaque storage string: base64 of
    /// `nonce ‖ tag ‖ ciphertext`.
    #[must_use]
    pub fn to_base64(&self) -> String {
        use base64::{engine::general_purpose::STANDARD, Engine};
        let mut bytes = Vec::with_capacity(NONCE_SIZE + TAG_SIZE + self.ciphertext.len());
        bytes.extend_from_slice(&self.nonce);
        bytes.extend_from_slice(&self.tag);
        bytes.extend_from_slice(&self.ciphertext);
        STANDARD.encode(&bytes)
    }

    /// Decodes from the opaque storage string. Non-base64 or truncated
    /// input is a decryption error.
    pub fn from_base64(encoded: &str) -> CryptoResult<Self> {
        use base64::{engine::general_purpose::STANDARD, Engine};
        let bytes = STANDARD
            .decode(encoded)
            .map_err(|e| CryptoError::Decryption(format!("invalid base64: {}", e)))?;

        if bytes.len() < NONCE_SIZE + TAG_SIZE {
            return Err(CryptoError::Decryption("blob too short".to_string()));
        }

        let mut nonce = [0u8; NONCE_SIZE];
        nonce.copy_from_slice(&bytes[..NONCE_SIZE]);
        let mut tag = [0u8; TAG_SIZE];
        tag.copy_from_slice(&bytes[NONCE_SIZE..NONCE_SIZE + TAG_SIZE]);
        let ciphertext = bytes[NONCE_SIZE + TAG_SIZE..].to_vec();

        Ok(Self {
            nonce,
            tag,
            ciphertext,
        })
    }
}

/// Authenticated encryption of serialized tax records.
///
/// Constructed once at startup with an injected [`FieldKey`]; the key is
/// read-only for the process lifetime.
pub struct FieldCipher {
    key: FieldKey,
}

impl FieldCipher {
    /// Creates a cipher over the given key.
    #[must_use]
    pub fn new(key: FieldKey) -> Self {
        Self { key }
    }

    /// Encrypts raw plaintext bytes under a fresh random nonce.
    pub fn encrypt_bytes(&self, plaintext: &[u8]) -> CryptoResult<EncryptedBlob> {
        let cipher = Aes256Gcm16::new(Key::<Aes256Gcm16>::from_slice(self.key.as_bytes()));

        let mut nonce = [0u8; NONCE_SIZE];
        rand::rngs::OsRng.fill_bytes(&mut nonce);

        let mut buffer = plaintext.to_vec();
        let tag = cipher
            .encrypt_in_place_detached(GenericArray::from_slice(&nonce), b"", &mut buffer)
            .map_err(|e| CryptoError::Encryption(e.to_string()))?;

        let mut tag_bytes = [0u8; TAG_SIZE];
        tag_bytes.copy_from_slice(&tag);

        Ok(EncryptedBlob {
            nonce,
            tag: tag_bytes,
            ciphertext: buffer,
        })
    }

    /// Decrypts a blob, verifying the authentication tag first. Tag
    /// mismatch (flipped bit, truncation, wrong key) fails without
    /// returning any plaintext.
    pub fn decrypt_bytes(&self, blob: &EncryptedBlob) -> CryptoResult<Vec<u8>> {
        let cipher = Aes256Gcm16::new(Key::<Aes256Gcm16>::from_slice(self.key.as_bytes()));

        let mut buffer = blob.ciphertext.clone();
        cipher
            .decrypt_in_place_detached(
                GenericArray::from_slice(&blob.nonce),
                b"",
                &mut buffer,
                GenericArray::from_slice(&blob.tag),
            )
            .map_err(|_| {
                CryptoError::Decryption("authentication failed (wrong key or tampered data)".into())
            })?;
        Ok(buffer)
    }

    /// Serializes and encrypts a record, returning the opaque storage
    /// string.
    pub fn encrypt_record(&self, record: &shoebox_types::TaxYearRecord) -> CryptoResult<String> {
        let plaintext =
            serde_json::to_vec(record).map_err(|e| CryptoError::Encryption(e.to_string()))?;
        Ok(self.encrypt_bytes(&plaintext)?.to_base64())
    }

    /// Decrypts and deserializes a stored blob back into a record.
    ///
    /// Cryptographic failures are [`CryptoError::Decryption`]; plaintext
    /// that authenticated but no longer parses as a record is
    /// [`CryptoError::MalformedRecord`]. The result is not re-validated:
    /// records are schema-validated at write time.
    pub fn decrypt_record(&self, encoded: &str) -> CryptoResult<shoebox_types::TaxYearRecord> {
        let blob = EncryptedBlob::from_base64(encoded)?;
        let plaintext = self.decrypt_bytes(&blob)?;
        serde_json::from_slice(&plaintext).map_err(|e| CryptoError::MalformedRecord(e.to_string()))
    }
}
