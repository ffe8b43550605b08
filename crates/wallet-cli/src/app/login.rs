//! Wallet login with password sources and retry.
//!
//! `SessionContext::login` makes exactly one attempt; the retry policy lives
//! here. Sources are tried in order: a password stored in the keyring
//! manager's credential store (when the keychain is enabled), the
//! `OXEN_WALLET_PASSWORD` environment variable, then an interactive prompt.

use std::io::IsTerminal;
use std::path::Path;

use crate::constants::{option_keys, MAX_PASSWORD_ATTEMPTS};
use crate::errors::{CliError, SessionError};
use crate::helpers::{env_password, prompt_password};

use super::context::{Credentials, SessionContext};
use super::resolver::wallet_path;

/// Result of a single login attempt that did not hit a hard error.
enum Attempt {
    Success,
    IncorrectPassword,
}

/// Open the wallet called `name`, retrying on a wrong password.
///
/// On success the session is authenticated and, when `remember` is set or
/// the keychain is enabled, the password is stored for next time.
pub fn open_wallet_with_retry(
    ctx: &mut SessionContext,
    name: &str,
    no_input: bool,
    remember: bool,
) -> anyhow::Result<()> {
    let path = wallet_path(ctx, name)?;
    if !path.exists() {
        return Err(CliError::not_found(
            format!("No wallet named '{}' at {}", name, path.display()),
            format!("Hint: Run `oxen-wallet create {}` first.", name),
        )
        .into());
    }
    let interactive = std::io::stdin().is_terminal() && !no_input;
    let keychain_enabled = ctx
        .options()
        .map(|o| o.flag(option_keys::KEYCHAIN))
        .unwrap_or(false);

    if keychain_enabled && try_stored_password(ctx, name, &path)? {
        return Ok(());
    }

    if let Some(password) = env_password() {
        return match attempt(ctx, &path, &password)? {
            Attempt::Success => {
                store_password(ctx, name, &password, remember || keychain_enabled);
                Ok(())
            }
            Attempt::IncorrectPassword => Err(CliError::auth_failed_with_hint(
                "Incorrect wallet password.",
                "Hint: Check the value of OXEN_WALLET_PASSWORD.",
            )
            .into()),
        };
    }

    let max_attempts = if interactive { MAX_PASSWORD_ATTEMPTS } else { 1 };
    let mut attempts: u32 = 0;
    loop {
        attempts += 1;
        let password = prompt_password(interactive)?;
        match attempt(ctx, &path, &password)? {
            Attempt::Success => {
                store_password(ctx, name, &password, remember || keychain_enabled);
                return Ok(());
            }
            Attempt::IncorrectPassword => {
                let remaining = max_attempts.saturating_sub(attempts);
                if remaining == 0 {
                    return Err(CliError::auth_failed_with_hint(
                        "Too many failed password attempts.",
                        "Hint: Wallet passwords cannot be recovered; restore from your seed if it is lost.",
                    )
                    .into());
                }
                eprintln!(
                    "Incorrect password. {} attempt{} remaining.",
                    remaining,
                    if remaining == 1 { "" } else { "s" }
                );
            }
        }
    }
}

/// Try a password remembered by the keyring manager.
///
/// A stale stored password is removed so the next run prompts instead.
fn try_stored_password(ctx: &mut SessionContext, name: &str, path: &Path) -> anyhow::Result<bool> {
    let stored = match ctx.keyring_manager().map(|m| m.recall_password(name)) {
        Some(Ok(stored)) => stored,
        Some(Err(err)) => {
            tracing::warn!(error = %err, "could not read stored password");
            None
        }
        None => None,
    };
    let Some(password) = stored else {
        return Ok(false);
    };

    match attempt(ctx, path, &password)? {
        Attempt::Success => {
            tracing::debug!(wallet = name, "logged in with stored password");
            Ok(true)
        }
        Attempt::IncorrectPassword => {
            tracing::warn!(wallet = name, "stored password rejected; forgetting it");
            if let Some(manager) = ctx.keyring_manager() {
                if let Err(err) = manager.forget_password(name) {
                    tracing::warn!(wallet = name, error = %err, "could not remove stored password");
                }
            }
            Ok(false)
        }
    }
}

fn attempt(ctx: &mut SessionContext, path: &Path, password: &str) -> Result<Attempt, SessionError> {
    match ctx.login(&Credentials::new(path, password)) {
        Ok(_) => Ok(Attempt::Success),
        Err(err) if err.is_incorrect_password() => Ok(Attempt::IncorrectPassword),
        Err(err) => {
            tracing::debug!(recoverable = err.is_recoverable(), error = %err, "login failed");
            Err(err)
        }
    }
}

fn store_password(ctx: &SessionContext, name: &str, password: &str, enabled: bool) {
    if !enabled {
        return;
    }
    if let Some(manager) = ctx.keyring_manager() {
        if let Err(err) = manager.remember_password(name, password) {
            eprintln!("Warning: {}", err);
        }
    }
}

#[cfg(test)]
mod tests {
    use oxen_wallet_core::{
        CredentialStore, KeyringManager, MemoryCredentialStore, Network, Wallet, WalletConfig,
        WalletCoreError,
    };

    use super::*;
    use crate::options::SessionOptions;

    const PASSWORD: &str = "login-password-1";

    /// Store whose deletes always fail, like a locked keychain.
    struct UndeletableStore(MemoryCredentialStore);

    impl CredentialStore for UndeletableStore {
        fn get(&self, account: &str) -> oxen_wallet_core::Result<Option<String>> {
            self.0.get(account)
        }

        fn set(&self, account: &str, secret: &str) -> oxen_wallet_core::Result<()> {
            self.0.set(account, secret)
        }

        fn delete(&self, _account: &str) -> oxen_wallet_core::Result<()> {
            Err(WalletCoreError::Keychain("keychain is locked".to_string()))
        }
    }

    fn context_with_wallet(dir: &Path, keychain: bool) -> SessionContext {
        context_with_store(dir, keychain, Box::new(MemoryCredentialStore::new()))
    }

    fn context_with_store(
        dir: &Path,
        keychain: bool,
        store: Box<dyn CredentialStore>,
    ) -> SessionContext {
        let manager = KeyringManager::with_store(Network::Testnet, store);
        Wallet::create(
            &dir.join("main.wallet"),
            PASSWORD,
            manager.generate_keyring().unwrap(),
            &WalletConfig::default(),
        )
        .unwrap()
        .close();

        let mut ctx = SessionContext::new();
        ctx.configure_with_keyring(
            SessionOptions::new("testnet", "http://127.0.0.1:38157")
                .with_extra("datadir", dir.to_string_lossy())
                .with_extra("keychain", keychain.to_string()),
            manager,
        )
        .unwrap();
        ctx
    }

    #[test]
    fn test_stored_password_logs_in() {
        let dir = tempfile::tempdir().unwrap();
        let mut ctx = context_with_wallet(dir.path(), true);
        ctx.keyring_manager()
            .unwrap()
            .remember_password("main", PASSWORD)
            .unwrap();

        let path = dir.path().join("main.wallet");
        assert!(try_stored_password(&mut ctx, "main", &path).unwrap());
        assert!(ctx.is_logged_in());
    }

    #[test]
    fn test_stale_stored_password_is_forgotten() {
        let dir = tempfile::tempdir().unwrap();
        let mut ctx = context_with_wallet(dir.path(), true);
        ctx.keyring_manager()
            .unwrap()
            .remember_password("main", "old-password-9")
            .unwrap();

        let path = dir.path().join("main.wallet");
        assert!(!try_stored_password(&mut ctx, "main", &path).unwrap());
        assert!(!ctx.is_logged_in());
        assert_eq!(
            ctx.keyring_manager().unwrap().recall_password("main").unwrap(),
            None
        );
    }

    #[test]
    fn test_missing_wallet_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let mut ctx = context_with_wallet(dir.path(), false);

        let err = open_wallet_with_retry(&mut ctx, "other", true, false).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::NotFound { .. })
        ));
        assert!(!ctx.is_logged_in());
    }

    #[test]
    fn test_store_password_only_when_enabled() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = context_with_wallet(dir.path(), false);
        let manager = ctx.keyring_manager().unwrap();

        store_password(&ctx, "main", PASSWORD, false);
        assert_eq!(manager.recall_password("main").unwrap(), None);

        store_password(&ctx, "main", PASSWORD, true);
        assert_eq!(
            manager.recall_password("main").unwrap().as_deref(),
            Some(PASSWORD)
        );
    }

    #[test]
    fn test_stale_password_that_cannot_be_removed_falls_through() {
        let dir = tempfile::tempdir().unwrap();
        let mut ctx = context_with_store(
            dir.path(),
            true,
            Box::new(UndeletableStore(MemoryCredentialStore::new())),
        );
        ctx.keyring_manager()
            .unwrap()
            .remember_password("main", "old-password-9")
            .unwrap();

        let path = dir.path().join("main.wallet");
        assert!(!try_stored_password(&mut ctx, "main", &path).unwrap());
        assert!(!ctx.is_logged_in());
        assert_eq!(ctx.state().as_str(), "configured");
    }
}
