use std::fs;

use oxen_wallet_core::{
    KeyringManager, MemoryCredentialStore, Network, Wallet, WalletConfig, WalletCoreError,
};
use tempfile::tempdir;

const PASSWORD: &str = "test-password-secure-123";

fn manager(network: Network) -> KeyringManager {
    KeyringManager::with_store(network, Box::new(MemoryCredentialStore::new()))
}

fn config() -> WalletConfig {
    WalletConfig::with_daemon_address("http://127.0.0.1:38157").expect("valid daemon address")
}

#[test]
fn test_create_then_open_restores_same_address() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("main.wallet");
    let manager = manager(Network::Testnet);

    let keyring = manager.generate_keyring().expect("generate keyring");
    let created = Wallet::create(&path, PASSWORD, keyring, &config()).expect("create wallet");
    let address = created.address().to_string();
    created.close();

    let opened = Wallet::open(&path, PASSWORD, &manager, &config()).expect("open wallet");
    assert_eq!(opened.address(), address);
    assert_eq!(opened.network(), Network::Testnet);
    assert_eq!(opened.daemon_address(), "http://127.0.0.1:38157");
    assert_eq!(opened.path(), path.as_path());
    assert!(opened.is_running());
}

#[test]
fn test_wallet_file_is_encrypted_on_disk() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("main.wallet");
    let manager = manager(Network::Testnet);
    let keyring = manager.keyring_from_seed(&[42u8; 32]).expect("keyring");

    Wallet::create(&path, PASSWORD, keyring, &config()).expect("create wallet");

    let on_disk = fs::read(&path).expect("read wallet file");
    let text = String::from_utf8_lossy(&on_disk);
    assert!(text.starts_with("age-encryption.org/v1"));
    assert!(!text.contains("testnet"));
    assert!(!text.contains("seed"));
}

#[test]
fn test_wrong_password_fails() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("main.wallet");
    let manager = manager(Network::Testnet);
    let keyring = manager.generate_keyring().expect("keyring");
    Wallet::create(&path, PASSWORD, keyring, &config()).expect("create wallet");

    let err = Wallet::open(&path, "wrong-password-456", &manager, &config()).unwrap_err();
    assert!(matches!(err, WalletCoreError::IncorrectPassword));
}

#[test]
fn test_missing_wallet_fails() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("absent.wallet");

    let err = Wallet::open(&path, PASSWORD, &manager(Network::Testnet), &config()).unwrap_err();
    assert!(matches!(err, WalletCoreError::WalletNotFound(ref p) if p == &path));
}

#[test]
fn test_wallet_from_other_network_is_rejected() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("main.wallet");
    let mainnet = manager(Network::Mainnet);
    let keyring = mainnet.generate_keyring().expect("keyring");
    Wallet::create(&path, PASSWORD, keyring, &config()).expect("create wallet");

    let err = Wallet::open(&path, PASSWORD, &manager(Network::Testnet), &config()).unwrap_err();
    assert!(matches!(
        err,
        WalletCoreError::NetworkMismatch {
            expected: Network::Testnet,
            found: Network::Mainnet,
        }
    ));
}

#[test]
fn test_create_refuses_existing_wallet() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("main.wallet");
    let manager = manager(Network::Testnet);
    Wallet::create(&path, PASSWORD, manager.generate_keyring().unwrap(), &config())
        .expect("first create");

    let err = Wallet::create(&path, PASSWORD, manager.generate_keyring().unwrap(), &config())
        .unwrap_err();
    assert!(matches!(err, WalletCoreError::WalletExists(_)));
}
