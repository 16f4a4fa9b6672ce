//! Constructor wiring for the Orange vault

use std::collections::BTreeMap;
use tracing::info;
use crate::{
    errors::AllowlistResult,
    types::{ConstructorArg, Contract, DeploymentPlan, NetworkAddresses, VaultMetadata},
};

// Constructor parameters after name and symbol, in declaration order
pub const VAULT_CONSTRUCTOR_CONTRACTS: &[Contract] = &[
    Contract::UniswapPool,
    Contract::Weth,
    Contract::Usdc,
    Contract::UniswapRouter,
    Contract::AavePool,
    Contract::VDebtWeth,
    Contract::AUsdc,
    Contract::OrangeDeltaParameters,
];

pub const VAULT_LIBRARIES: &[Contract] = &[Contract::SafeAavePool];

pub fn plan_orange_alpha_vault(
    addresses: &NetworkAddresses,
    metadata: VaultMetadata,
) -> AllowlistResult<DeploymentPlan> {
    let mut libraries = BTreeMap::new();
    for lib in VAULT_LIBRARIES {
        libraries.insert(*lib, addresses.get(*lib)?);
    }

    let mut constructor_args = vec![
        ConstructorArg::String(metadata.name.clone()),
        ConstructorArg::String(metadata.symbol.clone()),
    ];
    for contract in VAULT_CONSTRUCTOR_CONTRACTS {
        constructor_args.push(ConstructorArg::Address(addresses.get(*contract)?));
    }

    let plan = DeploymentPlan {
        id: uuid::Uuid::new_v4().to_string(),
        timestamp: chrono::Utc::now(),
        network: addresses.network.clone(),
        contract: Contract::OrangeAlphaVault,
        metadata,
        libraries,
        constructor_args,
    };

    info!(
        plan_id = %plan.id,
        network = %plan.network,
        args = plan.constructor_args.len(),
        "Planned OrangeAlphaVault deployment"
    );

    Ok(plan)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::{Address, U256};
    use crate::{errors::AllowlistError, types::AddressBook};

    fn complete_network() -> NetworkAddresses {
        let deployed: Vec<(Contract, Address)> = VAULT_CONSTRUCTOR_CONTRACTS
            .iter()
            .chain(VAULT_LIBRARIES)
            .enumerate()
            .map(|(i, c)| (*c, Address::from([i as u8 + 1; 20])))
            .collect();
        NetworkAddresses::new("local", &deployed, &[])
    }

    #[test]
    fn constructor_args_follow_declaration_order() {
        let plan = plan_orange_alpha_vault(&complete_network(), VaultMetadata::default()).unwrap();

        assert_eq!(plan.constructor_args.len(), 2 + VAULT_CONSTRUCTOR_CONTRACTS.len());
        assert_eq!(plan.constructor_args[0], ConstructorArg::String("OrangeDeltaVault".into()));
        assert_eq!(plan.constructor_args[2], ConstructorArg::Address(Address::from([1u8; 20])));
        assert_eq!(plan.constructor_args[9], ConstructorArg::Address(Address::from([8u8; 20])));
        assert_eq!(plan.libraries[&Contract::SafeAavePool], Address::from([9u8; 20]));
        assert_eq!(plan.metadata.decimals, 6);
    }

    #[test]
    fn encoded_args_start_with_string_offsets() {
        let plan = plan_orange_alpha_vault(&complete_network(), VaultMetadata::default()).unwrap();
        let encoded = plan.encoded_constructor_args();

        // ten head words, then two length-prefixed single-word strings
        assert_eq!(encoded.len(), 32 * (10 + 2 + 2));
        assert_eq!(U256::from_be_slice(&encoded[..32]), U256::from(32 * 10));
    }

    #[test]
    fn missing_parameters_contract_fails_fast() {
        let book = AddressBook::builtin();
        let err = plan_orange_alpha_vault(book.network("goerli").unwrap(), VaultMetadata::default())
            .unwrap_err();
        assert!(matches!(err, AllowlistError::MissingAddress { .. }));
    }

    #[test]
    fn pending_library_fails_fast() {
        let book = AddressBook::builtin();
        let err = plan_orange_alpha_vault(book.network("arb").unwrap(), VaultMetadata::default())
            .unwrap_err();
        assert!(matches!(
            err,
            AllowlistError::MissingAddress { contract: Contract::SafeAavePool, .. }
        ));
    }
}
