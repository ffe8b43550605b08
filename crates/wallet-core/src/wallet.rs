//! Wallet files and authenticated wallet sessions.
//!
//! A wallet file is an age-encrypted JSON document holding the wallet seed
//! and the network it belongs to. Opening one with the right password yields
//! a `Wallet` session; dropping or closing the session deregisters it.

use std::path::{Path, PathBuf};

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use zeroize::Zeroizing;

use crate::config::WalletConfig;
use crate::encryption::{decrypt, encrypt};
use crate::error::{Result, WalletCoreError};
use crate::fs::write_new_file;
use crate::keys::{Keyring, KeyringManager};
use crate::network::Network;

/// Current wallet file format version.
const WALLET_FORMAT_VERSION: u32 = 1;

/// Minimum wallet password length in characters.
const MIN_PASSWORD_LENGTH: usize = 8;

#[derive(Serialize, Deserialize)]
struct WalletFile {
    version: u32,
    network: Network,
    seed: String,
    created_at: DateTime<Utc>,
}

/// An open wallet session.
#[derive(Debug)]
pub struct Wallet {
    path: PathBuf,
    keyring: Keyring,
    config: WalletConfig,
    created_at: DateTime<Utc>,
    opened_at: DateTime<Utc>,
    running: bool,
}

impl Wallet {
    /// Write a new wallet file for `keyring` and open it.
    ///
    /// # Errors
    ///
    /// - `WalletCoreError::InvalidInput` if the password is too weak
    /// - `WalletCoreError::WalletExists` if `path` is already taken
    /// - `WalletCoreError::Crypto` / `Io` if encryption or writing fails
    pub fn create(
        path: &Path,
        password: &str,
        keyring: Keyring,
        config: &WalletConfig,
    ) -> Result<Self> {
        validate_password(password)?;
        if path.exists() {
            return Err(WalletCoreError::WalletExists(path.to_path_buf()));
        }

        let created_at = Utc::now();
        let body = Zeroizing::new(serde_json::to_vec(&WalletFile {
            version: WALLET_FORMAT_VERSION,
            network: keyring.network(),
            seed: STANDARD.encode(keyring.seed()),
            created_at,
        })?);
        let encrypted = encrypt(&body, password)?;
        write_new_file(path, &encrypted).map_err(|err| match err.kind() {
            std::io::ErrorKind::AlreadyExists => WalletCoreError::WalletExists(path.to_path_buf()),
            _ => WalletCoreError::from(err),
        })?;

        tracing::info!(
            path = %path.display(),
            network = %keyring.network(),
            "created wallet file"
        );
        Ok(Self::start(path, keyring, config, created_at))
    }

    /// Open an existing wallet file.
    ///
    /// The wallet must belong to the network `manager` is scoped to.
    ///
    /// # Errors
    ///
    /// - `WalletCoreError::WalletNotFound` if `path` does not exist
    /// - `WalletCoreError::IncorrectPassword` if `password` is wrong
    /// - `WalletCoreError::NetworkMismatch` if the file is for another network
    pub fn open(
        path: &Path,
        password: &str,
        manager: &KeyringManager,
        config: &WalletConfig,
    ) -> Result<Self> {
        if !path.exists() {
            return Err(WalletCoreError::WalletNotFound(path.to_path_buf()));
        }
        let encrypted = std::fs::read(path)?;
        let body = Zeroizing::new(decrypt(&encrypted, password)?);
        let file: WalletFile = serde_json::from_slice(&body)?;

        if file.version != WALLET_FORMAT_VERSION {
            return Err(WalletCoreError::InvalidInput(format!(
                "unsupported wallet format version {}",
                file.version
            )));
        }
        if file.network != manager.network() {
            return Err(WalletCoreError::NetworkMismatch {
                expected: manager.network(),
                found: file.network,
            });
        }

        let seed = Zeroizing::new(
            STANDARD
                .decode(file.seed.as_bytes())
                .map_err(|e| WalletCoreError::Crypto(format!("Corrupt wallet seed: {}", e)))?,
        );
        let keyring = manager.keyring_from_seed(&seed)?;

        tracing::info!(
            path = %path.display(),
            network = %file.network,
            "opened wallet"
        );
        Ok(Self::start(path, keyring, config, file.created_at))
    }

    fn start(
        path: &Path,
        keyring: Keyring,
        config: &WalletConfig,
        created_at: DateTime<Utc>,
    ) -> Self {
        tracing::debug!(daemon = %config.daemon.address, "registering wallet with daemon comms");
        Self {
            path: path.to_path_buf(),
            keyring,
            config: config.clone(),
            created_at,
            opened_at: Utc::now(),
            running: true,
        }
    }

    pub fn address(&self) -> &str {
        self.keyring.address()
    }

    pub fn network(&self) -> Network {
        self.keyring.network()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn daemon_address(&self) -> &str {
        &self.config.daemon.address
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn opened_at(&self) -> DateTime<Utc> {
        self.opened_at
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// End the session and release engine resources.
    pub fn close(mut self) {
        self.deregister();
    }

    fn deregister(&mut self) {
        if self.running {
            self.running = false;
            tracing::debug!(path = %self.path.display(), "wallet deregistered");
        }
    }
}

impl Drop for Wallet {
    fn drop(&mut self) {
        self.deregister();
    }
}

/// Check that a wallet password meets minimum requirements.
pub fn validate_password(password: &str) -> Result<()> {
    if password.trim().is_empty() {
        return Err(WalletCoreError::InvalidInput(
            "Password cannot be empty".to_string(),
        ));
    }
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(WalletCoreError::InvalidInput(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LENGTH
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_password() {
        assert!(validate_password("long-enough").is_ok());
        assert!(validate_password("short").is_err());
        assert!(validate_password("        ").is_err());
        assert!(validate_password("").is_err());
    }

    #[test]
    fn test_weak_password_rejected_before_touching_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("weak.wallet");
        let keyring = Keyring::from_seed(Network::Testnet, &[3u8; 32]);

        let err = Wallet::create(&path, "short", keyring, &WalletConfig::default()).unwrap_err();

        assert!(matches!(err, WalletCoreError::InvalidInput(_)));
        assert!(!path.exists());
    }

    #[test]
    fn test_close_stops_session() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("main.wallet");
        let keyring = Keyring::from_seed(Network::Testnet, &[4u8; 32]);
        let wallet =
            Wallet::create(&path, "password-123", keyring, &WalletConfig::default()).unwrap();
        assert!(wallet.is_running());
        wallet.close();
    }
}
