//! Wallet engine configuration.
//!
//! `WalletConfig` mirrors what the engine needs before a wallet can be
//! opened: where the daemon lives and where the wallet's local RPC socket
//! would listen. Building or mutating it never performs I/O.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{Result, WalletCoreError};

/// URL schemes accepted for the daemon endpoint.
const DAEMON_SCHEMES: &[&str] = &["http", "https", "tcp", "ipc"];

/// Top-level engine configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletConfig {
    pub daemon: DaemonCommsConfig,
    pub omq_rpc: RpcConfig,
}

impl WalletConfig {
    /// Build a config pointing at the given daemon.
    pub fn with_daemon_address(address: &str) -> Result<Self> {
        let mut config = Self::default();
        config.daemon.set_address(address)?;
        Ok(config)
    }
}

/// Daemon communication settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaemonCommsConfig {
    pub address: String,
    pub request_timeout_seconds: u64,
}

impl Default for DaemonCommsConfig {
    fn default() -> Self {
        Self {
            address: String::new(),
            request_timeout_seconds: 30,
        }
    }
}

impl DaemonCommsConfig {
    /// Set the daemon address after validating it.
    ///
    /// The stored value is the address exactly as given, not the normalised
    /// URL, so callers can read back what they configured.
    pub fn set_address(&mut self, address: &str) -> Result<()> {
        validate_daemon_address(address)?;
        self.address = address.to_string();
        Ok(())
    }
}

/// Local RPC listener settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RpcConfig {
    pub sockname: String,
}

impl Default for RpcConfig {
    fn default() -> Self {
        Self {
            sockname: "wallet.sock".to_string(),
        }
    }
}

fn validate_daemon_address(address: &str) -> Result<()> {
    let invalid = |reason: String| WalletCoreError::InvalidDaemonAddress {
        address: address.to_string(),
        reason,
    };

    if address.trim().is_empty() {
        return Err(invalid("address is empty".to_string()));
    }
    let url = Url::parse(address).map_err(|e| invalid(e.to_string()))?;
    if !DAEMON_SCHEMES.contains(&url.scheme()) {
        return Err(invalid(format!(
            "unsupported scheme '{}' (expected one of {})",
            url.scheme(),
            DAEMON_SCHEMES.join(", ")
        )));
    }
    if url.scheme() != "ipc" && url.host_str().is_none() {
        return Err(invalid("missing host".to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_address_keeps_value_verbatim() {
        let mut daemon = DaemonCommsConfig::default();
        daemon.set_address("http://127.0.0.1:22023").unwrap();
        assert_eq!(daemon.address, "http://127.0.0.1:22023");
    }

    #[test]
    fn test_accepts_supported_schemes() {
        for address in [
            "https://node.example.org",
            "tcp://10.0.0.2:22025",
            "ipc:///var/lib/oxen/oxend.sock",
        ] {
            assert!(WalletConfig::with_daemon_address(address).is_ok(), "{address}");
        }
    }

    #[test]
    fn test_rejects_bad_addresses() {
        for address in ["", "   ", "not a url", "ftp://example.org", "http://"] {
            let err = WalletConfig::with_daemon_address(address).unwrap_err();
            assert!(
                matches!(err, WalletCoreError::InvalidDaemonAddress { .. }),
                "{address}: {err}"
            );
        }
    }

    #[test]
    fn test_failed_set_leaves_previous_address() {
        let mut daemon = DaemonCommsConfig::default();
        daemon.set_address("http://127.0.0.1:22023").unwrap();
        assert!(daemon.set_address("ftp://example.org").is_err());
        assert_eq!(daemon.address, "http://127.0.0.1:22023");
    }

    #[test]
    fn test_default_rpc_socket() {
        assert_eq!(WalletConfig::default().omq_rpc.sockname, "wallet.sock");
    }
}
