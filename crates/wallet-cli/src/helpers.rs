//! Interactive input helpers.

use dialoguer::Password;

use crate::constants::PASSWORD_ENV;

/// Password from `OXEN_WALLET_PASSWORD`, if set and non-blank.
pub fn env_password() -> Option<String> {
    std::env::var(PASSWORD_ENV)
        .ok()
        .filter(|value| !value.trim().is_empty())
}

/// Prompt for an existing wallet's password.
pub fn prompt_password(interactive: bool) -> anyhow::Result<String> {
    if !interactive {
        return Err(anyhow::anyhow!(
            "No password provided and no TTY available. Set {}.",
            PASSWORD_ENV
        ));
    }
    Password::new()
        .with_prompt("Wallet password")
        .interact()
        .map_err(|e| anyhow::anyhow!("Failed to read password: {}", e))
}

/// Prompt for a new wallet password with confirmation, or read it from the env.
pub fn prompt_new_password(interactive: bool) -> anyhow::Result<String> {
    if let Some(value) = env_password() {
        return Ok(value);
    }
    if !interactive {
        return Err(anyhow::anyhow!(
            "No password provided and no TTY available. Set {}.",
            PASSWORD_ENV
        ));
    }
    Password::new()
        .with_prompt("New wallet password")
        .with_confirmation("Confirm password", "Passwords do not match")
        .interact()
        .map_err(|e| anyhow::anyhow!("Failed to read password: {}", e))
}
