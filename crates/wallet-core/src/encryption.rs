//! Age passphrase encryption for wallet files.
//!
//! Age uses scrypt internally for passphrase-based encryption, so wallet
//! files carry their own KDF parameters and need no side-car salt.

use std::io::{Read, Write};
use std::iter;

use age::secrecy::SecretString;

use crate::error::{Result, WalletCoreError};

/// Encrypt `data` under `password`.
pub fn encrypt(data: &[u8], password: &str) -> Result<Vec<u8>> {
    let encryptor = age::Encryptor::with_user_passphrase(SecretString::from(password.to_string()));

    let mut encrypted = Vec::new();
    let mut writer = encryptor
        .wrap_output(&mut encrypted)
        .map_err(|e| WalletCoreError::Crypto(format!("Failed to create encryptor: {}", e)))?;

    writer
        .write_all(data)
        .map_err(|e| WalletCoreError::Crypto(format!("Encryption write failed: {}", e)))?;

    writer
        .finish()
        .map_err(|e| WalletCoreError::Crypto(format!("Encryption finish failed: {}", e)))?;

    Ok(encrypted)
}

/// Decrypt `encrypted_data` with `password`.
///
/// # Errors
///
/// Returns `WalletCoreError::IncorrectPassword` when the password does not
/// unlock the file, `WalletCoreError::Crypto` for malformed input.
pub fn decrypt(encrypted_data: &[u8], password: &str) -> Result<Vec<u8>> {
    let decryptor = age::Decryptor::new(encrypted_data)
        .map_err(|e| WalletCoreError::Crypto(format!("Failed to create decryptor: {}", e)))?;

    let identity = age::scrypt::Identity::new(SecretString::from(password.to_string()));
    let mut reader = decryptor
        .decrypt(iter::once(&identity as &dyn age::Identity))
        .map_err(|e| match e {
            age::DecryptError::NoMatchingKeys
            | age::DecryptError::DecryptionFailed
            | age::DecryptError::KeyDecryptionFailed => WalletCoreError::IncorrectPassword,
            _ => WalletCoreError::Crypto(format!("Decryption failed: {}", e)),
        })?;

    let mut decrypted = Vec::new();
    reader
        .read_to_end(&mut decrypted)
        .map_err(|e| WalletCoreError::Crypto(format!("Failed to read decrypted data: {}", e)))?;

    Ok(decrypted)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ciphertext_differs_from_plaintext() {
        let plaintext = b"{\"seed\":\"...\"}";
        let encrypted = encrypt(plaintext, "correct horse battery").unwrap();
        assert!(!encrypted.is_empty());
        assert_ne!(encrypted.as_slice(), plaintext);
    }

    #[test]
    fn test_wrong_password_is_reported_as_incorrect_password() {
        let encrypted = encrypt(b"wallet body", "correct-password-1").unwrap();
        let result = decrypt(&encrypted, "wrong-password-2");
        assert!(matches!(result, Err(WalletCoreError::IncorrectPassword)));
    }

    #[test]
    fn test_garbage_input_is_crypto_error() {
        let result = decrypt(b"definitely not an age file", "whatever-password");
        assert!(matches!(result, Err(WalletCoreError::Crypto(_))));
    }
}
