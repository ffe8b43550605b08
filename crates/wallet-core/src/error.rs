//! Error types for wallet engine operations.
//!
//! Errors are descriptive at the engine level; the CLI layer maps these
//! to session errors and user-facing messages.

use std::path::PathBuf;

use thiserror::Error;

use crate::network::Network;

/// Result type alias for wallet engine operations.
pub type Result<T> = std::result::Result<T, WalletCoreError>;

/// Core error type for wallet engine operations.
#[derive(Debug, Error)]
pub enum WalletCoreError {
    /// Network identifier not recognised by the engine
    #[error("Unknown network '{0}' (expected mainnet, testnet, devnet or fakechain)")]
    UnknownNetwork(String),

    /// Daemon endpoint rejected
    #[error("Invalid daemon address '{address}': {reason}")]
    InvalidDaemonAddress { address: String, reason: String },

    /// Incorrect password while decrypting a wallet file
    #[error("Incorrect wallet password")]
    IncorrectPassword,

    /// Wallet file does not exist
    #[error("Wallet not found: {}", .0.display())]
    WalletNotFound(PathBuf),

    /// Wallet file already exists
    #[error("Wallet already exists: {}", .0.display())]
    WalletExists(PathBuf),

    /// Wallet was created for another network
    #[error("Wallet belongs to {found}, but the session is configured for {expected}")]
    NetworkMismatch { expected: Network, found: Network },

    /// Encryption or decryption error
    #[error("Encryption error: {0}")]
    Crypto(String),

    /// Credential store failure
    #[error("Keychain error: {0}")]
    Keychain(String),

    /// Invalid user input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// I/O error
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// JSON serialization/deserialization error
    #[error("JSON error: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },
}
