use crate::app::SessionContext;
use crate::cli::Cli;
use crate::ui::UiContext;

use super::print_json;

pub fn handle_forget(
    ctx: &SessionContext,
    ui: &UiContext,
    cli: &Cli,
    name: &str,
) -> anyhow::Result<()> {
    let (_, manager) = ctx.engine_handles("forget a password")?;
    manager.forget_password(name)?;

    if ui.mode.is_json() {
        return print_json(&serde_json::json!({
            "wallet": name,
            "network": manager.network().as_str(),
            "forgotten": true,
        }));
    }
    if !cli.quiet {
        println!("Removed stored password for '{}' on {}", name, manager.network());
    }
    Ok(())
}
