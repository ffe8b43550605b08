//! Supported network identifiers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::WalletCoreError;

/// Network a wallet and its keyring belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Network {
    Mainnet,
    Testnet,
    Devnet,
    Fakechain,
}

impl Network {
    pub fn as_str(&self) -> &'static str {
        match self {
            Network::Mainnet => "mainnet",
            Network::Testnet => "testnet",
            Network::Devnet => "devnet",
            Network::Fakechain => "fakechain",
        }
    }

    /// Default oxend RPC endpoint on the local machine.
    pub fn default_daemon_url(&self) -> &'static str {
        match self {
            Network::Mainnet | Network::Fakechain => "http://127.0.0.1:22023",
            Network::Testnet => "http://127.0.0.1:38157",
            Network::Devnet => "http://127.0.0.1:38857",
        }
    }

    /// Leading characters of addresses on this network.
    pub fn address_prefix(&self) -> &'static str {
        match self {
            Network::Mainnet | Network::Fakechain => "L",
            Network::Testnet => "T",
            Network::Devnet => "dV",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Network {
    type Err = WalletCoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mainnet" | "main" => Ok(Network::Mainnet),
            "testnet" | "test" => Ok(Network::Testnet),
            "devnet" | "dev" => Ok(Network::Devnet),
            "fakechain" => Ok(Network::Fakechain),
            _ => Err(WalletCoreError::UnknownNetwork(s.to_string())),
        }
    }
}
