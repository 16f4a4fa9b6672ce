//! Allowlist configuration settings and environment variable handling

use alloy::primitives::Address;
use std::env;
use std::str::FromStr;
use crate::errors::{AllowlistError, AllowlistResult};

// Configuration defaults
pub const DEFAULT_NETWORK: &str = "goerli";
pub const DEFAULT_ALLOWLIST_FILE: &str = "allowlist.json";
pub const OUTPUT_DIR: &str = "output";

#[derive(Debug, Clone)]
pub struct Config {
    pub network: String,
    pub allowlist_file: String,
    pub allowlist_enabled: bool,
    // Falls back to the network's Deployer when unset
    pub allowlist_owner: Option<Address>,
    pub verify_caller: Option<Address>,
    // Optional JSON address book replacing the built-in tables
    pub address_book_file: Option<String>,
    pub plan_vault_deployment: bool,
    // Write the log file as JSON lines instead of compact text
    pub log_json: bool,
}

/// Absent keys fall back to `default`; present but unparseable values are errors.
fn parse_flag(key: &str, raw: Option<String>, default: bool) -> AllowlistResult<bool> {
    let Some(raw) = raw else {
        return Ok(default);
    };
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(AllowlistError::InvalidSetting {
            key: key.to_string(),
            value: raw,
        }),
    }
}

fn parse_address(key: &str, raw: Option<String>) -> AllowlistResult<Option<Address>> {
    match raw {
        None => Ok(None),
        Some(raw) if raw.trim().is_empty() => Ok(None),
        Some(raw) => Address::from_str(raw.trim())
            .map(Some)
            .map_err(|_| AllowlistError::InvalidAddress {
                context: key.to_string(),
                value: raw,
            }),
    }
}

impl Config {
    pub fn load() -> AllowlistResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> AllowlistResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            network: lookup("NETWORK")
                .unwrap_or_else(|| DEFAULT_NETWORK.to_string()),
            allowlist_file: lookup("ALLOWLIST_FILE")
                .unwrap_or_else(|| DEFAULT_ALLOWLIST_FILE.to_string()),
            allowlist_enabled: parse_flag("ALLOWLIST_ENABLED", lookup("ALLOWLIST_ENABLED"), true)?,
            allowlist_owner: parse_address("ALLOWLIST_OWNER", lookup("ALLOWLIST_OWNER"))?,
            verify_caller: parse_address("VERIFY_CALLER", lookup("VERIFY_CALLER"))?,
            address_book_file: lookup("ADDRESS_BOOK_FILE"),
            plan_vault_deployment: parse_flag(
                "PLAN_VAULT_DEPLOYMENT",
                lookup("PLAN_VAULT_DEPLOYMENT"),
                false,
            )?,
            log_json: parse_flag("LOG_JSON", lookup("LOG_JSON"), false)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::address;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> AllowlistResult<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn absent_variables_use_defaults() {
        let config = load(&[]).unwrap();
        assert_eq!(config.network, DEFAULT_NETWORK);
        assert_eq!(config.allowlist_file, DEFAULT_ALLOWLIST_FILE);
        assert!(config.allowlist_enabled);
        assert!(!config.plan_vault_deployment);
        assert!(config.allowlist_owner.is_none());
        assert!(config.verify_caller.is_none());
    }

    #[test]
    fn truncated_owner_address_is_rejected() {
        // 39 hex digits
        let err = load(&[("ALLOWLIST_OWNER", "0xe66ffFd2D3aDE2697B3Cbeb69877a1fFE8A1f27")]).unwrap_err();
        match err {
            AllowlistError::InvalidAddress { context, .. } => assert_eq!(context, "ALLOWLIST_OWNER"),
            other => panic!("expected InvalidAddress, got {:?}", other),
        }
    }

    #[test]
    fn malformed_verify_caller_is_rejected() {
        assert!(matches!(
            load(&[("VERIFY_CALLER", "alice")]),
            Err(AllowlistError::InvalidAddress { .. })
        ));
    }

    #[test]
    fn valid_owner_is_parsed() {
        let config = load(&[("ALLOWLIST_OWNER", " 0xe66ffFd2D3aDE2697B3Cbeb69877a1fFE8A1f275 ")]).unwrap();
        assert_eq!(
            config.allowlist_owner,
            Some(address!("e66ffFd2D3aDE2697B3Cbeb69877a1fFE8A1f275"))
        );
    }

    #[test]
    fn flags_accept_common_spellings() {
        for (raw, expected) in [("False", false), ("0", false), ("TRUE", true), ("yes", true), ("off", false)] {
            let config = load(&[("ALLOWLIST_ENABLED", raw)]).unwrap();
            assert_eq!(config.allowlist_enabled, expected, "ALLOWLIST_ENABLED={}", raw);
        }
    }

    #[test]
    fn unrecognised_flag_is_rejected() {
        match load(&[("PLAN_VAULT_DEPLOYMENT", "sure")]) {
            Err(AllowlistError::InvalidSetting { key, value }) => {
                assert_eq!(key, "PLAN_VAULT_DEPLOYMENT");
                assert_eq!(value, "sure");
            }
            other => panic!("expected InvalidSetting, got {:?}", other),
        }
    }
}
