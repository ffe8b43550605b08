use std::io::IsTerminal;

use oxen_wallet_core::{Wallet, WalletCoreError};

use crate::app::{wallet_path, SessionContext};
use crate::cli::{Cli, WalletArgs};
use crate::constants::option_keys;
use crate::errors::CliError;
use crate::helpers::prompt_new_password;
use crate::output::{print_wallet, wallet_json};
use crate::ui::UiContext;

use super::print_json;

pub fn handle_create(
    ctx: &mut SessionContext,
    ui: &UiContext,
    cli: &Cli,
    args: &WalletArgs,
) -> anyhow::Result<()> {
    let path = wallet_path(ctx, &args.name)?;
    if path.exists() {
        return Err(CliError::invalid_input(format!(
            "Wallet '{}' already exists at {}",
            args.name,
            path.display()
        ))
        .into());
    }

    let interactive = std::io::stdin().is_terminal() && !args.no_input;
    let password = prompt_new_password(interactive)?;

    let (config, manager) = ctx.engine_handles("create a wallet")?;
    let keyring = manager.generate_keyring()?;
    let wallet = Wallet::create(&path, &password, keyring, config).map_err(|err| match err {
        WalletCoreError::InvalidInput(message) => anyhow::Error::from(CliError::invalid_input(message)),
        other => anyhow::Error::from(other),
    })?;

    let keychain_enabled = ctx
        .options()
        .map(|o| o.flag(option_keys::KEYCHAIN))
        .unwrap_or(false);
    if args.remember || keychain_enabled {
        if let Err(err) = manager.remember_password(&args.name, &password) {
            eprintln!("Warning: {}", err);
        }
    }

    let wallet = ctx.attach_wallet(wallet)?;
    if ui.mode.is_json() {
        return print_json(&wallet_json(wallet));
    }
    if !cli.quiet {
        println!("Created wallet '{}'", args.name);
    }
    print_wallet(ui, wallet);
    Ok(())
}
