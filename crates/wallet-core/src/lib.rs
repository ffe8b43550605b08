//! # Oxen Wallet Core
//!
//! The wallet-engine pieces a command-line front-end needs to establish a
//! session: network selection, wallet configuration, network-scoped keyring
//! management and encrypted wallet files.
//!
//! ## Architecture
//!
//! - **network**: supported network identifiers and their defaults
//! - **config**: `WalletConfig` (daemon endpoint, local RPC socket)
//! - **keychain**: credential stores (OS keychain, in-memory)
//! - **keys**: key material and the network-scoped `KeyringManager`
//! - **encryption**: age passphrase encryption for wallet files
//! - **wallet**: wallet file creation and authenticated wallet sessions
//!
//! Nothing here talks to a daemon; building a config or a keyring manager is
//! purely structural.

pub mod config;
pub mod encryption;
pub mod error;
pub mod fs;
pub mod keychain;
pub mod keys;
pub mod network;
pub mod wallet;

pub use config::{DaemonCommsConfig, RpcConfig, WalletConfig};
pub use error::{Result, WalletCoreError};
pub use keychain::{CredentialStore, MemoryCredentialStore, OsKeychain};
pub use keys::{Keyring, KeyringManager};
pub use network::Network;
pub use wallet::Wallet;

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
