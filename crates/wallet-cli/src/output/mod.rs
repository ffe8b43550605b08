//! Output formatting helpers for the CLI.
//!
//! Commands build their results here in either JSON or text form.

mod json;
mod text;

// Re-export public API
pub use json::{options_json, status_json, wallet_json};
pub use text::{print_options, print_status, print_wallet};
