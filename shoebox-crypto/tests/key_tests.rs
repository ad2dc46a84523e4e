use shoebox_crypto::{CryptoError, FieldKey, KEY_SIZE};

#[test]
fn from_bytes_accepts_exact_size() {
    let key = FieldKey::from_bytes([7u8; KEY_SIZE]);
    assert_eq!(key.as_bytes(), &[7u8; KEY_SIZE]);
}

#[test]
fn from_slice_accepts_exact_size() {
    let key = FieldKey::from_slice(&[1u8; 32]).unwrap();
    assert_eq!(key.as_bytes().len(), 32);
}

#[test]
fn from_slice_rejects_every_wrong_length() {
    for len in [0usize, 1, 16, 31, 33, 64] {
        let bytes = vec![0u8; len];
        match FieldKey::from_slice(&bytes) {
            Err(CryptoError::InvalidKeyLength { expected, actual }) => {
                assert_eq!(expected, 32);
                assert_eq!(actual, len);
            }
            other => panic!("length {} should be rejected, got {:?}", len, other.is_ok()),
        }
    }
}

#[test]
fn from_env_missing_is_configuration_error() {
    let result = FieldKey::from_env("SHOEBOX_TEST_KEY_DEFINITELY_UNSET");
    assert!(matches!(result, Err(CryptoError::MissingKey(_))));
}

#[test]
fn from_env_wrong_length_is_configuration_error() {
    std::env::set_var("SHOEBOX_TEST_KEY_SHORT", "too-short");
    let result = FieldKey::from_env("SHOEBOX_TEST_KEY_SHORT");
    assert!(matches!(
        result,
        Err(CryptoError::InvalidKeyLength { expected: 32, .. })
    ));
    std::env::remove_var("SHOEBOX_TEST_KEY_SHORT");
}

#[test]
fn from_env_exact_length_succeeds() {
    std::env::set_var("SHOEBOX_TEST_KEY_OK", "0123456789abcdef0123456789abcdef");
    let key = FieldKey::from_env("SHOEBOX_TEST_KEY_OK").unwrap();
    assert_eq!(key.as_bytes(), b"0123456789abcdef0123456789abcdef");
    std::env::remove_var("SHOEBOX_TEST_KEY_OK");
}

#[test]
fn random_keys_differ() {
    let a = FieldKey::random();
    let b = FieldKey::random();
    assert_ne!(a.as_bytes(), b.as_bytes());
}

#[test]
fn debug_never_prints_key_material() {
    let key = FieldKey::from_bytes([0xAB; KEY_SIZE]);
    let debug = format!("{:?}", key);
    assert!(debug.contains("REDACTED"));
    assert!(!debug.contains("171")); // 0xAB
}
