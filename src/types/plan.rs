//! Deployment plan types

use alloy::{
    dyn_abi::DynSolValue,
    primitives::{Address, Bytes},
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;
use super::Contract;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VaultMetadata {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
}

impl Default for VaultMetadata {
    fn default() -> Self {
        Self {
            name: "OrangeDeltaVault".to_string(),
            symbol: "OrangeDeltaVault".to_string(),
            decimals: 6,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum ConstructorArg {
    String(String),
    Address(Address),
}

impl ConstructorArg {
    pub fn to_sol_value(&self) -> DynSolValue {
        match self {
            ConstructorArg::String(s) => DynSolValue::String(s.clone()),
            ConstructorArg::Address(a) => DynSolValue::Address(*a),
        }
    }
}

/// Everything needed to deploy a contract, resolved against one network.
#[derive(Debug, Clone, Serialize)]
pub struct DeploymentPlan {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub network: String,
    pub contract: Contract,
    pub metadata: VaultMetadata,
    pub libraries: BTreeMap<Contract, Address>,
    pub constructor_args: Vec<ConstructorArg>,
}

impl DeploymentPlan {
    /// ABI-encoded constructor parameters, ready to append to init code.
    pub fn encoded_constructor_args(&self) -> Bytes {
        let values = self
            .constructor_args
            .iter()
            .map(ConstructorArg::to_sol_value)
            .collect();
        Bytes::from(DynSolValue::Tuple(values).abi_encode_params())
    }
}
