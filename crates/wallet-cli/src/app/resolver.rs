//! Resolution of config files, session options and wallet paths.

use std::collections::HashMap;
use std::path::PathBuf;

use oxen_wallet_core::Network;

use crate::cli::Cli;
use crate::config::{default_config_path, default_datadir, read_config, WalletCliConfig};
use crate::constants::{option_keys, WALLET_EXTENSION};
use crate::errors::CliError;

use super::context::SessionContext;

/// Resolve the config file path from `--config` / `OXEN_WALLET_CONFIG` or XDG.
pub fn resolve_config_path(cli: &Cli) -> anyhow::Result<PathBuf> {
    match cli.config.as_ref() {
        Some(path) => Ok(path.clone()),
        None => default_config_path(),
    }
}

/// Load the config file if there is one.
///
/// A missing default config is fine; a missing file named explicitly is not.
pub fn load_file_config(cli: &Cli) -> anyhow::Result<WalletCliConfig> {
    let path = resolve_config_path(cli)?;
    if path.exists() {
        tracing::debug!(path = %path.display(), "loading config file");
        return read_config(&path);
    }
    if cli.config.is_some() {
        return Err(CliError::not_found(
            format!("Config file not found: {}", path.display()),
            "Hint: Check --config / OXEN_WALLET_CONFIG, or omit it to use defaults.",
        )
        .into());
    }
    Ok(WalletCliConfig::default())
}

/// Merge config file values and CLI flags into the raw options mapping.
///
/// Precedence, lowest first: config file, `--option KEY=VALUE`, named flags.
/// `oxend_url` falls back to the selected network's default daemon;
/// `network` has no fallback.
pub fn resolve_options(
    cli: &Cli,
    file: &WalletCliConfig,
) -> anyhow::Result<HashMap<String, String>> {
    let mut options: HashMap<String, String> = file.options.clone().into_iter().collect();

    let mut set = |key: &str, value: Option<String>| {
        if let Some(value) = value {
            options.insert(key.to_string(), value);
        }
    };
    set(option_keys::NETWORK, file.wallet.network.clone());
    set(option_keys::OXEND_URL, file.wallet.oxend_url.clone());
    set(option_keys::DATADIR, file.wallet.datadir.clone());
    set(option_keys::OUTPUT, file.ui.output.clone());
    set(option_keys::KEYCHAIN, Some(file.keychain.enabled.to_string()));

    for raw in &cli.options {
        let (key, value) = parse_option(raw)?;
        options.insert(key, value);
    }

    if let Some(network) = cli.network.clone() {
        options.insert(option_keys::NETWORK.to_string(), network);
    }
    if let Some(url) = cli.oxend_url.clone() {
        options.insert(option_keys::OXEND_URL.to_string(), url);
    }
    if let Some(datadir) = cli.datadir.as_ref() {
        options.insert(
            option_keys::DATADIR.to_string(),
            datadir.to_string_lossy().to_string(),
        );
    }
    if let Some(output) = cli.output {
        options.insert(option_keys::OUTPUT.to_string(), output.as_str().to_string());
    }

    if !options.contains_key(option_keys::OXEND_URL) {
        let default_url = options
            .get(option_keys::NETWORK)
            .and_then(|n| n.parse::<Network>().ok())
            .map(|n| n.default_daemon_url().to_string());
        if let Some(url) = default_url {
            options.insert(option_keys::OXEND_URL.to_string(), url);
        }
    }

    Ok(options)
}

fn parse_option(raw: &str) -> Result<(String, String), CliError> {
    let (key, value) = raw.split_once('=').ok_or_else(|| {
        CliError::invalid_input(format!(
            "Invalid option '{}': expected KEY=VALUE",
            raw
        ))
    })?;
    let key = key.trim();
    if key.is_empty() {
        return Err(CliError::invalid_input(format!(
            "Invalid option '{}': key is empty",
            raw
        )));
    }
    Ok((key.to_string(), value.trim().to_string()))
}

/// Path of the wallet file called `name` in the session's data directory.
pub fn wallet_path(ctx: &SessionContext, name: &str) -> anyhow::Result<PathBuf> {
    validate_wallet_name(name)?;
    let datadir = match ctx.option(option_keys::DATADIR) {
        Some(dir) => PathBuf::from(dir),
        None => default_datadir()?,
    };
    Ok(datadir.join(format!("{}.{}", name, WALLET_EXTENSION)))
}

fn validate_wallet_name(name: &str) -> Result<(), CliError> {
    let valid = !name.is_empty()
        && !name.starts_with('.')
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));
    if valid {
        Ok(())
    } else {
        Err(CliError::invalid_input(format!(
            "Invalid wallet name '{}': use letters, digits, '-', '_' or '.'",
            name
        )))
    }
}
