//! Key material and the network-scoped keyring manager.

use std::fmt;

use zeroize::Zeroizing;

use crate::error::{Result, WalletCoreError};
use crate::keychain::{CredentialStore, OsKeychain};
use crate::network::Network;

/// Length of the wallet seed in bytes.
pub const SEED_LENGTH: usize = 32;

const VIEW_KEY_CONTEXT: &str = "oxen-wallet 2024-01 view key";

/// Key material for one wallet on one network.
///
/// Secrets are zeroized on drop and never appear in `Debug` output.
pub struct Keyring {
    network: Network,
    seed: Zeroizing<[u8; SEED_LENGTH]>,
    view_secret: Zeroizing<[u8; 32]>,
    address: String,
}

impl Keyring {
    /// Derive a keyring from a 32-byte seed.
    pub fn from_seed(network: Network, seed: &[u8; SEED_LENGTH]) -> Self {
        let seed = Zeroizing::new(*seed);
        let view_secret = Zeroizing::new(blake3::derive_key(VIEW_KEY_CONTEXT, &seed[..]));
        let digest = blake3::Hasher::new()
            .update(network.as_str().as_bytes())
            .update(&view_secret[..])
            .finalize();
        let address = format!("{}{}", network.address_prefix(), digest.to_hex());
        Self {
            network,
            seed,
            view_secret,
            address,
        }
    }

    /// Generate a keyring from fresh OS randomness.
    pub fn generate(network: Network) -> Result<Self> {
        let mut seed = Zeroizing::new([0u8; SEED_LENGTH]);
        getrandom::getrandom(&mut seed[..])
            .map_err(|e| WalletCoreError::Crypto(format!("Failed to generate seed: {}", e)))?;
        Ok(Self::from_seed(network, &seed))
    }

    pub fn network(&self) -> Network {
        self.network
    }

    /// Public display address for this wallet.
    pub fn address(&self) -> &str {
        &self.address
    }

    pub(crate) fn seed(&self) -> &[u8; SEED_LENGTH] {
        &*self.seed
    }

    #[cfg(test)]
    pub(crate) fn view_secret(&self) -> &[u8; 32] {
        &*self.view_secret
    }
}

impl fmt::Debug for Keyring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Keyring")
            .field("network", &self.network)
            .field("address", &self.address)
            .finish_non_exhaustive()
    }
}

/// Service name under which a network's secrets live in the OS keychain.
pub fn keychain_service(network: Network) -> String {
    format!("oxen-wallet-{}", network)
}

/// Access to key material and stored credentials for a single network.
pub struct KeyringManager {
    network: Network,
    store: Box<dyn CredentialStore>,
}

impl KeyringManager {
    /// Create a manager for `network`, backed by the OS keychain.
    ///
    /// # Errors
    ///
    /// Returns `WalletCoreError::UnknownNetwork` if the identifier is not a
    /// supported network.
    pub fn new(network: &str) -> Result<Self> {
        let network: Network = network.parse()?;
        Ok(Self::with_store(
            network,
            Box::new(OsKeychain::new(keychain_service(network))),
        ))
    }

    /// Create a manager with an explicit credential store.
    pub fn with_store(network: Network, store: Box<dyn CredentialStore>) -> Self {
        Self { network, store }
    }

    pub fn network(&self) -> Network {
        self.network
    }

    /// Generate a new keyring on this manager's network.
    pub fn generate_keyring(&self) -> Result<Keyring> {
        Keyring::generate(self.network)
    }

    /// Rebuild a keyring from seed bytes.
    pub fn keyring_from_seed(&self, seed: &[u8]) -> Result<Keyring> {
        let seed: &[u8; SEED_LENGTH] = seed.try_into().map_err(|_| {
            WalletCoreError::InvalidInput(format!(
                "seed must be {} bytes (got {})",
                SEED_LENGTH,
                seed.len()
            ))
        })?;
        Ok(Keyring::from_seed(self.network, seed))
    }

    /// Store the password for `wallet_name` in the credential store.
    pub fn remember_password(&self, wallet_name: &str, password: &str) -> Result<()> {
        self.store.set(wallet_name, password)
    }

    /// Look up a stored password for `wallet_name`.
    pub fn recall_password(&self, wallet_name: &str) -> Result<Option<String>> {
        self.store.get(wallet_name)
    }

    /// Remove any stored password for `wallet_name`.
    pub fn forget_password(&self, wallet_name: &str) -> Result<()> {
        self.store.delete(wallet_name)
    }
}

impl fmt::Debug for KeyringManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyringManager")
            .field("network", &self.network)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keychain::MemoryCredentialStore;

    fn memory_manager(network: Network) -> KeyringManager {
        KeyringManager::with_store(network, Box::new(MemoryCredentialStore::new()))
    }

    #[test]
    fn test_new_rejects_unknown_network() {
        let err = KeyringManager::new("moonnet").unwrap_err();
        assert!(matches!(err, WalletCoreError::UnknownNetwork(_)));
    }

    #[test]
    fn test_new_scopes_manager_to_network() {
        let manager = KeyringManager::new("testnet").unwrap();
        assert_eq!(manager.network(), Network::Testnet);
        assert_eq!(keychain_service(Network::Testnet), "oxen-wallet-testnet");
    }

    #[test]
    fn test_same_seed_gives_same_address() {
        let manager = memory_manager(Network::Mainnet);
        let a = manager.keyring_from_seed(&[7u8; 32]).unwrap();
        let b = manager.keyring_from_seed(&[7u8; 32]).unwrap();
        assert_eq!(a.address(), b.address());
        assert_eq!(a.view_secret(), b.view_secret());
        assert!(a.address().starts_with('L'));
    }

    #[test]
    fn test_address_depends_on_network() {
        let main = Keyring::from_seed(Network::Mainnet, &[1u8; 32]);
        let test = Keyring::from_seed(Network::Testnet, &[1u8; 32]);
        assert_ne!(main.address(), test.address());
        assert!(test.address().starts_with('T'));
    }

    #[test]
    fn test_generated_keyrings_differ() {
        let manager = memory_manager(Network::Devnet);
        let a = manager.generate_keyring().unwrap();
        let b = manager.generate_keyring().unwrap();
        assert_ne!(a.address(), b.address());
        assert_eq!(a.network(), Network::Devnet);
    }

    #[test]
    fn test_seed_length_is_checked() {
        let manager = memory_manager(Network::Mainnet);
        let err = manager.keyring_from_seed(&[0u8; 16]).unwrap_err();
        assert!(err.to_string().contains("32 bytes"));
    }

    #[test]
    fn test_debug_hides_secrets() {
        let keyring = Keyring::from_seed(Network::Mainnet, &[9u8; 32]);
        let debug = format!("{:?}", keyring);
        assert!(debug.contains("address"));
        assert!(!debug.contains("seed"));
        assert!(!debug.contains("view_secret"));
    }

    #[test]
    fn test_password_round_trip_through_store() {
        let manager = memory_manager(Network::Testnet);
        assert_eq!(manager.recall_password("main").unwrap(), None);
        manager.remember_password("main", "wallet-password").unwrap();
        assert_eq!(
            manager.recall_password("main").unwrap().as_deref(),
            Some("wallet-password")
        );
        manager.forget_password("main").unwrap();
        assert_eq!(manager.recall_password("main").unwrap(), None);
    }

    #[test]
    fn test_from_seed_leaves_caller_buffer_intact() {
        let seed = Zeroizing::new([5u8; SEED_LENGTH]);
        let keyring = Keyring::from_seed(Network::Testnet, &seed);
        drop(keyring);
        assert_eq!(*seed, [5u8; SEED_LENGTH]);
        assert_eq!(
            Keyring::from_seed(Network::Testnet, &seed).address(),
            memory_manager(Network::Testnet)
                .keyring_from_seed(&seed[..])
                .unwrap()
                .address()
        );
    }
}
