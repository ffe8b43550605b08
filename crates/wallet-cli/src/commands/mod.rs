//! Command handlers.
//!
//! Every handler receives the configured `SessionContext` by `&mut`
//! reference; none of them reach for global state.

mod create;
mod forget;
mod open;
mod options;
mod status;

pub use create::handle_create;
pub use forget::handle_forget;
pub use open::handle_open;
pub use options::handle_options;
pub use status::handle_status;

/// Print a JSON value to stdout.
fn print_json(value: &serde_json::Value) -> anyhow::Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(value)
            .map_err(|e| anyhow::anyhow!("Failed to serialize output: {}", e))?
    );
    Ok(())
}
