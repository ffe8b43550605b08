use crate::app::SessionContext;
use crate::output::{print_status, status_json};
use crate::ui::UiContext;

use super::print_json;

pub fn handle_status(ctx: &SessionContext, ui: &UiContext) -> anyhow::Result<()> {
    if ui.mode.is_json() {
        return print_json(&status_json(ctx));
    }
    print_status(ui, ctx);
    Ok(())
}
