use crate::app::{open_wallet_with_retry, SessionContext};
use crate::cli::WalletArgs;
use crate::output::{print_wallet, wallet_json};
use crate::ui::UiContext;

use super::print_json;

pub fn handle_open(
    ctx: &mut SessionContext,
    ui: &UiContext,
    args: &WalletArgs,
) -> anyhow::Result<()> {
    open_wallet_with_retry(ctx, &args.name, args.no_input, args.remember)?;
    let wallet = ctx
        .wallet()
        .ok_or_else(|| anyhow::anyhow!("Login reported success but no wallet is open"))?;

    if ui.mode.is_json() {
        return print_json(&wallet_json(wallet));
    }
    print_wallet(ui, wallet);
    Ok(())
}
