//! Allowlist input files

use alloy::primitives::Address;
use anyhow::{Context, Result};
use std::path::Path;
use std::str::FromStr;
use tracing::info;
use crate::errors::{AllowlistError, AllowlistResult};

/// Parse a JSON array of hex addresses.
pub fn parse_allowlist(json: &str) -> AllowlistResult<Vec<Address>> {
    let raw: Vec<String> = serde_json::from_str(json).map_err(|e| AllowlistError::DataParsing {
        context: "allowlist file".to_string(),
        source: e,
    })?;

    raw.iter()
        .enumerate()
        .map(|(i, value)| {
            Address::from_str(value.trim()).map_err(|_| AllowlistError::InvalidAddress {
                context: format!("allowlist entry {}", i),
                value: value.clone(),
            })
        })
        .collect()
}

pub async fn load_allowlist(path: impl AsRef<Path>) -> Result<Vec<Address>> {
    let path = path.as_ref();
    let json = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read allowlist file {}", path.display()))?;
    let members = parse_allowlist(&json)?;
    info!(file = %path.display(), members = members.len(), "Loaded allowlist");
    Ok(members)
}
