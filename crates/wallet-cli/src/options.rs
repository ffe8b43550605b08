//! Typed invocation options.
//!
//! `network` and `oxend_url` are promoted to named fields; every other key
//! from the options mapping is carried unchanged in `extra`.

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

use crate::constants::option_keys;
use crate::errors::SessionError;

/// Options a session is configured with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionOptions {
    pub network: String,
    pub oxend_url: String,
    #[serde(flatten)]
    pub extra: BTreeMap<String, String>,
}

impl SessionOptions {
    pub fn new(network: impl Into<String>, oxend_url: impl Into<String>) -> Self {
        Self {
            network: network.into(),
            oxend_url: oxend_url.into(),
            extra: BTreeMap::new(),
        }
    }

    /// Add a pass-through option.
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// Build options from a raw mapping.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::MissingOption` naming the first required key
    /// (`network`, then `oxend_url`) that is absent.
    pub fn from_map(mut map: HashMap<String, String>) -> Result<Self, SessionError> {
        let network = map
            .remove(option_keys::NETWORK)
            .ok_or(SessionError::MissingOption(option_keys::NETWORK))?;
        let oxend_url = map
            .remove(option_keys::OXEND_URL)
            .ok_or(SessionError::MissingOption(option_keys::OXEND_URL))?;
        Ok(map
            .into_iter()
            .fold(Self::new(network, oxend_url), |options, (key, value)| {
                options.with_extra(key, value)
            }))
    }

    /// Look up any option by key, named or extra.
    pub fn get(&self, key: &str) -> Option<&str> {
        match key {
            option_keys::NETWORK => Some(self.network.as_str()),
            option_keys::OXEND_URL => Some(self.oxend_url.as_str()),
            _ => self.extra.get(key).map(String::as_str),
        }
    }

    /// Interpret an extra option as a boolean flag.
    ///
    /// Accepts `true/false`, `yes/no`, `on/off` and `1/0`; anything else,
    /// or absence, is `false`.
    pub fn flag(&self, key: &str) -> bool {
        matches!(
            self.get(key).map(|v| v.trim().to_ascii_lowercase()).as_deref(),
            Some("true" | "yes" | "on" | "1")
        )
    }

    /// Flatten back into a single mapping.
    pub fn to_map(&self) -> BTreeMap<String, String> {
        let mut map = self.extra.clone();
        map.insert(option_keys::NETWORK.to_string(), self.network.clone());
        map.insert(option_keys::OXEND_URL.to_string(), self.oxend_url.clone());
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_from_map_splits_known_and_extra_keys() {
        let options = SessionOptions::from_map(map(&[
            ("network", "testnet"),
            ("oxend_url", "http://127.0.0.1:38157"),
            ("output", "json"),
            ("datadir", "/tmp/wallets"),
        ]))
        .unwrap();

        assert_eq!(options.network, "testnet");
        assert_eq!(options.oxend_url, "http://127.0.0.1:38157");
        assert_eq!(options.extra.len(), 2);
        assert_eq!(options.get("output"), Some("json"));
        assert_eq!(options.get("datadir"), Some("/tmp/wallets"));
        assert_eq!(options.get("network"), Some("testnet"));
        assert_eq!(options.get("missing"), None);
    }

    #[test]
    fn test_from_map_requires_network() {
        let err = SessionOptions::from_map(map(&[("oxend_url", "http://x")])).unwrap_err();
        assert!(matches!(err, SessionError::MissingOption("network")));
    }

    #[test]
    fn test_from_map_requires_oxend_url() {
        let err = SessionOptions::from_map(map(&[("network", "mainnet")])).unwrap_err();
        assert!(matches!(err, SessionError::MissingOption("oxend_url")));
    }

    #[test]
    fn test_flag_parsing() {
        let options = SessionOptions::new("mainnet", "http://x")
            .with_extra("keychain", "Yes")
            .with_extra("verbose", "nope");
        assert!(options.flag("keychain"));
        assert!(!options.flag("verbose"));
        assert!(!options.flag("absent"));
    }

    #[test]
    fn test_to_map_includes_every_key() {
        let options = SessionOptions::new("devnet", "http://127.0.0.1:38857").with_extra("a", "b");
        let flat = options.to_map();
        assert_eq!(flat.get("network").map(String::as_str), Some("devnet"));
        assert_eq!(
            flat.get("oxend_url").map(String::as_str),
            Some("http://127.0.0.1:38857")
        );
        assert_eq!(flat.get("a").map(String::as_str), Some("b"));
    }

    #[test]
    fn test_serializes_flat() {
        let options = SessionOptions::new("testnet", "http://x").with_extra("output", "json");
        let json = serde_json::to_value(&options).unwrap();
        assert_eq!(json["network"], "testnet");
        assert_eq!(json["output"], "json");
    }
}
