//! Text output formatting for session and wallet state.

use oxen_wallet_core::Wallet;

use crate::app::SessionContext;
use crate::options::SessionOptions;
use crate::ui::{kv, UiContext};

pub fn print_wallet(ui: &UiContext, wallet: &Wallet) {
    println!("{}", kv(ui, "Address", wallet.address()));
    println!("{}", kv(ui, "Network", wallet.network().as_str()));
    println!("{}", kv(ui, "Daemon", wallet.daemon_address()));
    println!("{}", kv(ui, "Path", &wallet.path().display().to_string()));
}

pub fn print_status(ui: &UiContext, ctx: &SessionContext) {
    println!("{}", kv(ui, "State", ctx.state().as_str()));
    if let Some(manager) = ctx.keyring_manager() {
        println!("{}", kv(ui, "Network", manager.network().as_str()));
    }
    if let Some(config) = ctx.wallet_core_config() {
        println!("{}", kv(ui, "Daemon", &config.daemon.address));
    }
    println!(
        "{}",
        kv(ui, "Logged In", if ctx.is_logged_in() { "yes" } else { "no" })
    );
    if let Some(wallet) = ctx.wallet() {
        println!("{}", kv(ui, "Address", wallet.address()));
    }
}

pub fn print_options(ui: &UiContext, options: &SessionOptions) {
    for (key, value) in options.to_map() {
        println!("{}", kv(ui, &key, &value));
    }
}
