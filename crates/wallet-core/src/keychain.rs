//! Credential stores backing the keyring manager.
//!
//! The `CredentialStore` trait is the seam between the keyring manager and
//! wherever secrets actually live: the platform keychain in production, an
//! in-memory map in tests or when the keychain is disabled.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::error::{Result, WalletCoreError};

/// Secret storage keyed by account name.
///
/// Implementations must treat a missing entry as `Ok(None)` on read and as
/// success on delete.
pub trait CredentialStore: Send + Sync {
    /// Fetch the secret stored for `account`, if any.
    fn get(&self, account: &str) -> Result<Option<String>>;

    /// Store `secret` for `account`, replacing any previous value.
    fn set(&self, account: &str, secret: &str) -> Result<()>;

    /// Remove the secret stored for `account`.
    fn delete(&self, account: &str) -> Result<()>;
}

/// Platform keychain (Secret Service, macOS Keychain, Windows Credential Manager).
///
/// Entries are created lazily per call, so constructing the store never
/// touches the platform service.
pub struct OsKeychain {
    service: String,
}

impl OsKeychain {
    pub fn new(service: impl Into<String>) -> Self {
        Self {
            service: service.into(),
        }
    }

    pub fn service(&self) -> &str {
        &self.service
    }

    fn entry(&self, account: &str) -> Result<::keyring::Entry> {
        ::keyring::Entry::new(&self.service, account)
            .map_err(|e| WalletCoreError::Keychain(format!("Keychain entry failed: {}", e)))
    }
}

impl CredentialStore for OsKeychain {
    fn get(&self, account: &str) -> Result<Option<String>> {
        match self.entry(account)?.get_password() {
            Ok(value) => Ok(Some(value)),
            Err(::keyring::Error::NoEntry) => Ok(None),
            Err(err) => Err(WalletCoreError::Keychain(format!(
                "Keychain read failed: {}",
                err
            ))),
        }
    }

    fn set(&self, account: &str, secret: &str) -> Result<()> {
        self.entry(account)?
            .set_password(secret)
            .map_err(|e| WalletCoreError::Keychain(format!("Keychain write failed: {}", e)))
    }

    fn delete(&self, account: &str) -> Result<()> {
        match self.entry(account)?.delete_password() {
            Ok(()) | Err(::keyring::Error::NoEntry) => Ok(()),
            Err(err) => Err(WalletCoreError::Keychain(format!(
                "Keychain delete failed: {}",
                err
            ))),
        }
    }
}

/// Process-local credential store.
#[derive(Default)]
pub struct MemoryCredentialStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>> {
        self.entries
            .lock()
            .map_err(|_| WalletCoreError::Keychain("credential store lock poisoned".to_string()))
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn get(&self, account: &str) -> Result<Option<String>> {
        Ok(self.lock()?.get(account).cloned())
    }

    fn set(&self, account: &str, secret: &str) -> Result<()> {
        self.lock()?.insert(account.to_string(), secret.to_string());
        Ok(())
    }

    fn delete(&self, account: &str) -> Result<()> {
        self.lock()?.remove(account);
        Ok(())
    }
}
