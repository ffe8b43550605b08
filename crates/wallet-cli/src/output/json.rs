//! JSON output formatting for session and wallet state.

use oxen_wallet_core::Wallet;

use crate::app::SessionContext;
use crate::options::SessionOptions;

/// Convert an open wallet to JSON for output.
pub fn wallet_json(wallet: &Wallet) -> serde_json::Value {
    serde_json::json!({
        "address": wallet.address(),
        "network": wallet.network(),
        "path": wallet.path(),
        "daemon_address": wallet.daemon_address(),
        "created_at": wallet.created_at(),
        "opened_at": wallet.opened_at(),
    })
}

/// Convert the session state to JSON for output.
pub fn status_json(ctx: &SessionContext) -> serde_json::Value {
    serde_json::json!({
        "state": ctx.state(),
        "configured": ctx.is_configured(),
        "logged_in": ctx.is_logged_in(),
        "network": ctx.keyring_manager().map(|m| m.network()),
        "daemon_address": ctx.wallet_core_config().map(|c| c.daemon.address.as_str()),
        "wallet": ctx.wallet().map(wallet_json),
    })
}

/// Convert resolved options to a flat JSON object.
pub fn options_json(options: &SessionOptions) -> serde_json::Value {
    serde_json::json!(options.to_map())
}
