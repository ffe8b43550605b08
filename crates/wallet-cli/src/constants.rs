//! Constants used throughout the CLI.

/// Exit codes for the CLI.
///
/// These follow common Unix conventions:
/// - 0: Success
/// - 1: General error (used by anyhow for unhandled errors)
/// - 2: Misuse of shell command (reserved by shells)
/// - 3+: Application-specific errors
pub mod exit_codes {
    /// Unexpected failure.
    pub const GENERAL: i32 = 1;

    /// Resource not found (wallet file, config file).
    pub const NOT_FOUND: i32 = 3;

    /// Invalid user input, arguments or missing required options.
    pub const INVALID_INPUT: i32 = 4;

    /// Authentication failed (wrong password, too many attempts).
    pub const AUTH_FAILED: i32 = 5;

    /// The wallet engine rejected the configured network or daemon address.
    pub const ENGINE_INIT_FAILED: i32 = 6;
}

/// Option keys every session needs before it can be configured.
pub mod option_keys {
    pub const NETWORK: &str = "network";
    pub const OXEND_URL: &str = "oxend_url";
    pub const DATADIR: &str = "datadir";
    pub const OUTPUT: &str = "output";
    pub const KEYCHAIN: &str = "keychain";
}

/// Environment variable consulted for the wallet password.
pub const PASSWORD_ENV: &str = "OXEN_WALLET_PASSWORD";

/// Password attempts allowed when prompting interactively.
pub const MAX_PASSWORD_ATTEMPTS: u32 = 3;

/// File extension for wallet files in the data directory.
pub const WALLET_EXTENSION: &str = "wallet";
