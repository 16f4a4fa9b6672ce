//! Deployed contract addresses keyed by network

use alloy::primitives::{Address, address};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::str::FromStr;
use crate::errors::{AllowlistError, AllowlistResult};

/// Contracts the deployment scripts know about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Contract {
    Deployer,
    UniswapFactory,
    LiquidityAmountsMock,
    Weth,
    Usdc,
    AavePool,
    VDebtWeth,
    AUsdc,
    UniswapPool,
    UniswapRouter,
    UniswapV3PoolAccessorMock,
    UniswapV3Twap,
    GelatoOps,
    SafeAavePool,
    OrangeAlphaParameters,
    OrangeAlphaVault,
    OrangeAlphaPeriphery,
    OrangeAlphaResolver,
    OrangeDeltaParameters,
}

impl Contract {
    pub fn as_str(&self) -> &'static str {
        match self {
            Contract::Deployer => "Deployer",
            Contract::UniswapFactory => "UniswapFactory",
            Contract::LiquidityAmountsMock => "LiquidityAmountsMock",
            Contract::Weth => "Weth",
            Contract::Usdc => "Usdc",
            Contract::AavePool => "AavePool",
            Contract::VDebtWeth => "VDebtWeth",
            Contract::AUsdc => "AUsdc",
            Contract::UniswapPool => "UniswapPool",
            Contract::UniswapRouter => "UniswapRouter",
            Contract::UniswapV3PoolAccessorMock => "UniswapV3PoolAccessorMock",
            Contract::UniswapV3Twap => "UniswapV3Twap",
            Contract::GelatoOps => "GelatoOps",
            Contract::SafeAavePool => "SafeAavePool",
            Contract::OrangeAlphaParameters => "OrangeAlphaParameters",
            Contract::OrangeAlphaVault => "OrangeAlphaVault",
            Contract::OrangeAlphaPeriphery => "OrangeAlphaPeriphery",
            Contract::OrangeAlphaResolver => "OrangeAlphaResolver",
            Contract::OrangeDeltaParameters => "OrangeDeltaParameters",
        }
    }
}

impl fmt::Display for Contract {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Goerli testnet deployments
pub const GOERLI_ADDRESSES: &[(Contract, Address)] = &[
    (Contract::Deployer, address!("e66ffFd2D3aDE2697B3Cbeb69877a1fFE8A1f275")),
    (Contract::UniswapFactory, address!("1F98431c8aD98523631AE4a59f267346ea31F984")),
    (Contract::LiquidityAmountsMock, address!("884B0F4c8c23D4d8Fd095B24879aaE6461b32475")),
    (Contract::Weth, address!("246ce443416fd4cc9C057C99cA0918F4d3d525d4")),
    (Contract::Usdc, address!("c24e97F0B049C6D1EC2Ddb21f2f55C128f74412c")),
    (Contract::AavePool, address!("0a4eDC8A76776468311F3f58a6B6cf4c3DC6e287")),
    (Contract::VDebtWeth, address!("0d63c72e6F356f42D1940352F6eDD4f983E54CaD")),
    (Contract::AUsdc, address!("71c5271dCda234A1acA574f490C87e087A108E71")),
    (Contract::UniswapPool, address!("C31E54c7a869B9FcBEcc14363CF510d1c41fa443")), // 0.05%
    (Contract::UniswapV3PoolAccessorMock, address!("F195B1Df7c20a4F266366dE4Fc3e95cD40d717bF")),
    (Contract::OrangeAlphaVault, address!("863EE7dBc5F96e1c91aB94914194c21cD7A2eEd6")),
];

// Arbitrum One deployments
pub const ARB_ADDRESSES: &[(Contract, Address)] = &[
    (Contract::Deployer, address!("e66ffFd2D3aDE2697B3Cbeb69877a1fFE8A1f275")),
    (Contract::Weth, address!("82aF49447D8a07e3bd95BD0d56f35241523fBab1")),
    (Contract::Usdc, address!("FF970A61A04b1cA14834A43f5dE4533eBDDB5CC8")),
    (Contract::AavePool, address!("794a61358D6845594F94dc1DB02A252b5b4814aD")),
    (Contract::VDebtWeth, address!("0c84331e39d6658Cd6e6b9ba04736cC4c4734351")),
    (Contract::AUsdc, address!("625E7708f30cA75bfd92586e17077590C60eb4cD")),
    (Contract::UniswapPool, address!("C31E54c7a869B9FcBEcc14363CF510d1c41fa443")), // 0.05%
    (Contract::UniswapRouter, address!("E592427A0AEce92De3Edee1F18E0157C05861564")),
];

// Declared on Arbitrum but not deployed yet
pub const ARB_PENDING: &[Contract] = &[
    Contract::GelatoOps,
    Contract::SafeAavePool,
    Contract::UniswapV3Twap,
    Contract::OrangeAlphaParameters,
    Contract::OrangeAlphaVault,
    Contract::OrangeAlphaPeriphery,
    Contract::OrangeAlphaResolver,
];

/// Address table for a single network. `None` marks a declared but unset entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkAddresses {
    pub network: String,
    pub entries: BTreeMap<Contract, Option<Address>>,
}

impl NetworkAddresses {
    pub fn new(network: &str, deployed: &[(Contract, Address)], pending: &[Contract]) -> Self {
        let mut entries: BTreeMap<Contract, Option<Address>> =
            pending.iter().map(|c| (*c, None)).collect();
        for (contract, addr) in deployed {
            entries.insert(*contract, Some(*addr));
        }
        Self {
            network: network.to_string(),
            entries,
        }
    }

    /// Resolve a contract address, failing on absent or unset entries.
    pub fn get(&self, contract: Contract) -> AllowlistResult<Address> {
        self.entries
            .get(&contract)
            .copied()
            .flatten()
            .ok_or_else(|| AllowlistError::MissingAddress {
                network: self.network.clone(),
                contract,
            })
    }

    pub fn deployed(&self) -> impl Iterator<Item = (Contract, Address)> + '_ {
        self.entries
            .iter()
            .filter_map(|(c, a)| a.map(|addr| (*c, addr)))
    }
}

/// Address tables for every known network.
#[derive(Debug, Clone, Default)]
pub struct AddressBook {
    networks: HashMap<String, NetworkAddresses>,
}

impl AddressBook {
    pub fn builtin() -> Self {
        let mut book = Self::default();
        book.insert(NetworkAddresses::new("goerli", GOERLI_ADDRESSES, &[]));
        book.insert(NetworkAddresses::new("arb", ARB_ADDRESSES, ARB_PENDING));
        book
    }

    /// Parse `{ "<network>": { "<Contract>": "0x..." | "" } }`.
    pub fn from_json(json: &str) -> AllowlistResult<Self> {
        let raw: HashMap<String, BTreeMap<Contract, String>> = serde_json::from_str(json)
            .map_err(|e| AllowlistError::DataParsing {
                context: "address book".to_string(),
                source: e,
            })?;

        let mut book = Self::default();
        for (network, contracts) in raw {
            let mut entries = BTreeMap::new();
            for (contract, value) in contracts {
                let value = value.trim();
                let addr = if value.is_empty() {
                    None
                } else {
                    Some(Address::from_str(value).map_err(|_| AllowlistError::InvalidAddress {
                        context: format!("{}.{}", network, contract),
                        value: value.to_string(),
                    })?)
                };
                entries.insert(contract, addr);
            }
            book.insert(NetworkAddresses { network, entries });
        }
        Ok(book)
    }

    pub fn insert(&mut self, addresses: NetworkAddresses) {
        self.networks.insert(addresses.network.clone(), addresses);
    }

    pub fn network(&self, name: &str) -> AllowlistResult<&NetworkAddresses> {
        self.networks
            .get(name)
            .ok_or_else(|| AllowlistError::UnknownNetwork {
                network: name.to_string(),
            })
    }

    pub fn networks(&self) -> impl Iterator<Item = &str> {
        self.networks.keys().map(String::as_str)
    }
}
