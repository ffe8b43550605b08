//! Application-level pieces of the wallet CLI.
//!
//! This module provides:
//! - The session context and its lifecycle
//! - Resolution of config files, options and wallet paths
//! - Wallet login with password sources and retry

mod context;
mod login;
mod resolver;

// Re-export public API
pub use context::SessionContext;
pub use login::open_wallet_with_retry;
pub use resolver::{load_file_config, resolve_options, wallet_path};
