//! CLI error types for structured error handling.
//!
//! `SessionError` covers failures of the session context lifecycle;
//! `CliError` covers everything the command layer reports itself. Both map
//! to specific exit codes.

use std::fmt;

use oxen_wallet_core::WalletCoreError;
use thiserror::Error;

use crate::constants::exit_codes;

/// Failures surfaced by `SessionContext` operations.
#[derive(Debug, Error)]
pub enum SessionError {
    /// A required option key was absent when configuring.
    #[error("Missing required option '{0}'")]
    MissingOption(&'static str),

    /// The wallet engine rejected the network identifier or daemon address.
    #[error("Wallet engine rejected the configuration: {0}")]
    EngineInit(#[source] WalletCoreError),

    /// An operation that needs a configured session ran before `configure`.
    #[error("Session is not configured; cannot {0}")]
    NotConfigured(&'static str),

    /// The wallet could not be opened with the supplied credentials.
    #[error("Authentication failed: {0}")]
    Authentication(#[source] WalletCoreError),
}

impl SessionError {
    /// Whether the caller may retry (e.g. re-prompt for a password).
    pub fn is_recoverable(&self) -> bool {
        matches!(self, SessionError::Authentication(_))
    }

    /// Whether this is a wrong-password failure, as opposed to a missing or
    /// mismatched wallet.
    pub fn is_incorrect_password(&self) -> bool {
        matches!(
            self,
            SessionError::Authentication(WalletCoreError::IncorrectPassword)
        )
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            SessionError::MissingOption(_) => exit_codes::INVALID_INPUT,
            SessionError::EngineInit(_) => exit_codes::ENGINE_INIT_FAILED,
            SessionError::NotConfigured(_) => exit_codes::GENERAL,
            SessionError::Authentication(WalletCoreError::WalletNotFound(_)) => {
                exit_codes::NOT_FOUND
            }
            SessionError::Authentication(_) => exit_codes::AUTH_FAILED,
        }
    }

    /// A short suggestion for the user, if one applies.
    pub fn hint(&self) -> Option<String> {
        match self {
            SessionError::MissingOption(key) => Some(format!(
                "Hint: Pass --{} or set it under [wallet] in the config file.",
                key.replace('_', "-")
            )),
            SessionError::EngineInit(WalletCoreError::UnknownNetwork(_)) => {
                Some("Hint: Valid networks are mainnet, testnet, devnet and fakechain.".to_string())
            }
            SessionError::EngineInit(WalletCoreError::InvalidDaemonAddress { .. }) => Some(
                "Hint: Use a full URL such as http://127.0.0.1:22023 for --oxend-url.".to_string(),
            ),
            SessionError::Authentication(WalletCoreError::WalletNotFound(_)) => {
                Some("Hint: Run `oxen-wallet create <NAME>` to create a wallet.".to_string())
            }
            SessionError::Authentication(WalletCoreError::NetworkMismatch { found, .. }) => {
                Some(format!("Hint: Re-run with --network {}.", found))
            }
            _ => None,
        }
    }
}

/// CLI-specific errors with associated exit codes.
#[derive(Debug)]
pub enum CliError {
    /// Resource not found (config, wallet, etc.)
    NotFound { message: String, hint: String },

    /// Authentication failed (wrong password, too many attempts)
    AuthFailed {
        message: String,
        hint: Option<String>,
    },

    /// Invalid user input
    InvalidInput(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::NotFound { message, .. } => write!(f, "{}", message),
            CliError::AuthFailed { message, .. } => write!(f, "{}", message),
            CliError::InvalidInput(message) => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for CliError {}

impl CliError {
    /// Create a NotFound error with message and hint.
    pub fn not_found(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::NotFound {
            message: message.into(),
            hint: hint.into(),
        }
    }

    /// Create an AuthFailed error with message and hint.
    pub fn auth_failed_with_hint(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::AuthFailed {
            message: message.into(),
            hint: Some(hint.into()),
        }
    }

    /// Create an InvalidInput error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        CliError::InvalidInput(message.into())
    }

    pub fn hint(&self) -> Option<&str> {
        match self {
            CliError::NotFound { hint, .. } => Some(hint),
            CliError::AuthFailed { hint, .. } => hint.as_deref(),
            CliError::InvalidInput(_) => None,
        }
    }

    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::NotFound { .. } => exit_codes::NOT_FOUND,
            CliError::AuthFailed { .. } => exit_codes::AUTH_FAILED,
            CliError::InvalidInput(_) => exit_codes::INVALID_INPUT,
        }
    }
}

/// Exit code and hint for an error bubbling out of a command.
pub fn classify(err: &anyhow::Error) -> (i32, Option<String>) {
    if let Some(session) = err.downcast_ref::<SessionError>() {
        return (session.exit_code(), session.hint());
    }
    if let Some(cli) = err.downcast_ref::<CliError>() {
        return (cli.exit_code(), cli.hint().map(str::to_string));
    }
    (exit_codes::GENERAL, None)
}
