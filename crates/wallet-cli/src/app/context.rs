//! Session context for the wallet CLI.
//!
//! Holds the invocation options, the lifecycle flags and the wallet-engine
//! handles for one process. `main` builds a single `SessionContext`,
//! configures it once options are resolved, and hands it to command handlers
//! by `&mut` reference.

use std::collections::HashMap;
use std::path::PathBuf;

use oxen_wallet_core::{KeyringManager, Network, Wallet, WalletConfig, WalletCoreError};
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;

use crate::errors::SessionError;
use crate::options::SessionOptions;

/// Lifecycle phase of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    Uninitialized,
    Configured,
    Authenticated,
}

impl SessionState {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionState::Uninitialized => "uninitialized",
            SessionState::Configured => "configured",
            SessionState::Authenticated => "authenticated",
        }
    }
}

/// What `login` needs to open a wallet.
pub struct Credentials {
    pub wallet_path: PathBuf,
    pub password: SecretString,
}

impl Credentials {
    pub fn new(wallet_path: impl Into<PathBuf>, password: impl Into<String>) -> Self {
        Self {
            wallet_path: wallet_path.into(),
            password: SecretString::from(password.into()),
        }
    }
}

/// Process-wide session state and wallet-engine handles.
///
/// `wallet_core_config` and `keyring_manager` are either both set or both
/// unset; `wallet` is set only while `logged_in` is true.
#[derive(Default)]
pub struct SessionContext {
    options: Option<SessionOptions>,
    configured: bool,
    logged_in: bool,
    wallet_core_config: Option<WalletConfig>,
    keyring_manager: Option<KeyringManager>,
    wallet: Option<Wallet>,
}

impl SessionContext {
    /// Create an unconfigured context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the session from resolved options.
    ///
    /// Both engine handles are built before any state changes, so a failure
    /// leaves the context exactly as it was. Re-configuring an already
    /// configured context is allowed: an open wallet is closed and the old
    /// handles are released before the new ones are installed.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::EngineInit` if the engine rejects the network
    /// identifier or daemon address.
    pub fn configure(&mut self, options: SessionOptions) -> Result<(), SessionError> {
        let keyring_manager =
            KeyringManager::new(&options.network).map_err(SessionError::EngineInit)?;
        self.configure_with_keyring(options, keyring_manager)
    }

    /// Configure with an explicit keyring manager instead of the OS keychain
    /// backed one.
    ///
    /// The manager must be scoped to the network named in `options`.
    pub fn configure_with_keyring(
        &mut self,
        options: SessionOptions,
        keyring_manager: KeyringManager,
    ) -> Result<(), SessionError> {
        let network: Network = options.network.parse().map_err(SessionError::EngineInit)?;
        if network != keyring_manager.network() {
            return Err(SessionError::EngineInit(WalletCoreError::InvalidInput(
                format!(
                    "keyring manager is scoped to {}, options select {}",
                    keyring_manager.network(),
                    network
                ),
            )));
        }
        let config = build_wallet_config(&options)?;
        self.install(options, config, keyring_manager);
        Ok(())
    }

    /// Configure from a raw options mapping.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::MissingOption` if `network` or `oxend_url` is
    /// absent, plus everything `configure` can return.
    pub fn configure_from_map(&mut self, map: HashMap<String, String>) -> Result<(), SessionError> {
        self.configure(SessionOptions::from_map(map)?)
    }

    fn install(
        &mut self,
        options: SessionOptions,
        config: WalletConfig,
        keyring_manager: KeyringManager,
    ) {
        if self.configured {
            tracing::warn!(
                previous_network = self.options.as_ref().map(|o| o.network.as_str()),
                network = %options.network,
                "re-configuring session; releasing previous engine handles"
            );
            self.logout();
            self.wallet_core_config = None;
            self.keyring_manager = None;
        }

        tracing::info!(
            network = %keyring_manager.network(),
            daemon = %config.daemon.address,
            extra_options = options.extra.len(),
            "session configured"
        );
        self.wallet_core_config = Some(config);
        self.keyring_manager = Some(keyring_manager);
        self.options = Some(options);
        self.configured = true;
    }

    /// Open a wallet and mark the session authenticated.
    ///
    /// A wallet that is already open is closed only after the new one opens
    /// successfully; on failure the session is left untouched.
    ///
    /// # Errors
    ///
    /// - `SessionError::NotConfigured` if `configure` has not succeeded
    /// - `SessionError::Authentication` if the engine refuses the credentials
    pub fn login(&mut self, credentials: &Credentials) -> Result<&Wallet, SessionError> {
        let (config, keyring_manager) = self.engine_handles("log in")?;
        let wallet = Wallet::open(
            &credentials.wallet_path,
            credentials.password.expose_secret(),
            keyring_manager,
            config,
        )
        .map_err(|err| {
            tracing::debug!(error = %err, "login rejected");
            SessionError::Authentication(err)
        })?;
        Ok(self.attach(wallet))
    }

    /// Adopt a wallet session opened elsewhere (e.g. freshly created).
    ///
    /// # Errors
    ///
    /// - `SessionError::NotConfigured` before `configure`
    /// - `SessionError::Authentication` if the wallet belongs to another
    ///   network or was started against a different daemon than the session
    ///
    /// A rejected wallet is closed.
    pub fn attach_wallet(&mut self, wallet: Wallet) -> Result<&Wallet, SessionError> {
        let (config, keyring_manager) = self.engine_handles("attach a wallet")?;
        if wallet.network() != keyring_manager.network() {
            return Err(SessionError::Authentication(
                WalletCoreError::NetworkMismatch {
                    expected: keyring_manager.network(),
                    found: wallet.network(),
                },
            ));
        }
        if wallet.daemon_address() != config.daemon.address {
            return Err(SessionError::Authentication(WalletCoreError::InvalidInput(
                format!(
                    "wallet uses daemon {}, session uses {}",
                    wallet.daemon_address(),
                    config.daemon.address
                ),
            )));
        }
        Ok(self.attach(wallet))
    }

    fn attach(&mut self, wallet: Wallet) -> &Wallet {
        if let Some(previous) = self.wallet.take() {
            previous.close();
        }
        tracing::info!(address = %wallet.address(), "logged in");
        self.logged_in = true;
        self.wallet.insert(wallet)
    }

    /// Close the open wallet, if any. Safe to call repeatedly.
    pub fn logout(&mut self) {
        if let Some(wallet) = self.wallet.take() {
            tracing::info!(address = %wallet.address(), "logged out");
            wallet.close();
        }
        self.logged_in = false;
    }

    pub fn state(&self) -> SessionState {
        match (self.configured, self.logged_in) {
            (false, _) => SessionState::Uninitialized,
            (true, false) => SessionState::Configured,
            (true, true) => SessionState::Authenticated,
        }
    }

    pub fn options(&self) -> Option<&SessionOptions> {
        self.options.as_ref()
    }

    /// Look up a single option; `None` before `configure`.
    pub fn option(&self, key: &str) -> Option<&str> {
        self.options.as_ref().and_then(|o| o.get(key))
    }

    pub fn is_configured(&self) -> bool {
        self.configured
    }

    pub fn is_logged_in(&self) -> bool {
        self.logged_in
    }

    pub fn wallet(&self) -> Option<&Wallet> {
        self.wallet.as_ref()
    }

    pub fn wallet_core_config(&self) -> Option<&WalletConfig> {
        self.wallet_core_config.as_ref()
    }

    pub fn keyring_manager(&self) -> Option<&KeyringManager> {
        self.keyring_manager.as_ref()
    }

    /// Both engine handles, or `NotConfigured` naming the attempted action.
    pub fn engine_handles(
        &self,
        action: &'static str,
    ) -> Result<(&WalletConfig, &KeyringManager), SessionError> {
        match (&self.wallet_core_config, &self.keyring_manager) {
            (Some(config), Some(manager)) if self.configured => Ok((config, manager)),
            _ => Err(SessionError::NotConfigured(action)),
        }
    }
}

impl Drop for SessionContext {
    fn drop(&mut self) {
        self.logout();
    }
}

fn build_wallet_config(options: &SessionOptions) -> Result<WalletConfig, SessionError> {
    let mut config = WalletConfig::default();
    config
        .daemon
        .set_address(&options.oxend_url)
        .map_err(SessionError::EngineInit)?;
    Ok(config)
}
