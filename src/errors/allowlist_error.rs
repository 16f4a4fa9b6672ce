//! Custom error types for the allowlist

use alloy::primitives::Address;
use thiserror::Error;
use crate::types::Contract;

#[derive(Error, Debug)]
pub enum AllowlistError {
    #[error("MerkleAllowList: Caller is not on allowlist. ({caller})")]
    NotAllowed {
        caller: Address,
    },

    #[error("Unauthorized: {caller} is not the allowlist owner ({owner})")]
    Unauthorized {
        caller: Address,
        owner: Address,
    },

    #[error("Cannot build a Merkle tree from an empty allowlist")]
    EmptyTree,

    #[error("Identity {identity} is not a leaf of this tree")]
    UnknownIdentity {
        identity: Address,
    },

    #[error("Unknown network: {network}")]
    UnknownNetwork {
        network: String,
    },

    #[error("Missing address for {contract} on {network}")]
    MissingAddress {
        network: String,
        contract: Contract,
    },

    #[error("Invalid address {value:?} in {context}")]
    InvalidAddress {
        context: String,
        value: String,
    },

    #[error("Invalid value {value:?} for setting {key}")]
    InvalidSetting {
        key: String,
        value: String,
    },

    #[error("Data parsing error: {context}")]
    DataParsing {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}

pub type AllowlistResult<T> = Result<T, AllowlistError>;

impl AllowlistError {
    /// Short stable label used when counting failures in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            AllowlistError::NotAllowed { .. } => "not_allowed",
            AllowlistError::Unauthorized { .. } => "unauthorized",
            AllowlistError::EmptyTree => "empty_tree",
            AllowlistError::UnknownIdentity { .. } => "unknown_identity",
            AllowlistError::UnknownNetwork { .. } => "unknown_network",
            AllowlistError::MissingAddress { .. } => "missing_address",
            AllowlistError::InvalidAddress { .. } => "invalid_address",
            AllowlistError::InvalidSetting { .. } => "invalid_setting",
            AllowlistError::DataParsing { .. } => "parse_error",
        }
    }
}
