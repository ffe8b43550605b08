use crate::app::SessionContext;
use crate::output::{options_json, print_options};
use crate::ui::UiContext;

use super::print_json;

pub fn handle_options(ctx: &SessionContext, ui: &UiContext) -> anyhow::Result<()> {
    let options = ctx
        .options()
        .ok_or_else(|| anyhow::anyhow!("Session is not configured"))?;
    if ui.mode.is_json() {
        return print_json(&options_json(options));
    }
    print_options(ui, options);
    Ok(())
}
