use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Contents of `config.toml`.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct WalletCliConfig {
    #[serde(default)]
    pub wallet: WalletSection,
    #[serde(default)]
    pub keychain: KeychainSection,
    #[serde(default)]
    pub ui: UiSection,
    /// Free-form options passed through to the session unchanged.
    #[serde(default)]
    pub options: BTreeMap<String, String>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct WalletSection {
    pub network: Option<String>,
    pub oxend_url: Option<String>,
    pub datadir: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct KeychainSection {
    pub enabled: bool,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct UiSection {
    pub output: Option<String>,
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_config_dir()?.join("config.toml"))
}

pub fn default_datadir() -> anyhow::Result<PathBuf> {
    Ok(xdg_data_dir()?.join("wallets"))
}

pub fn read_config(path: &Path) -> anyhow::Result<WalletCliConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
    toml::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
}

pub fn xdg_config_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_CONFIG_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("oxen-wallet"));
        }
    }
    Ok(home_dir()?.join(".config").join("oxen-wallet"))
}

pub fn xdg_data_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_DATA_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("oxen-wallet"));
        }
    }
    Ok(home_dir()?.join(".local").join("share").join("oxen-wallet"))
}

fn home_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .map_err(|_| anyhow::anyhow!("HOME is not set; cannot resolve default paths"))?;
    Ok(PathBuf::from(home))
}
