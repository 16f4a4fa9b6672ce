//! Orange allowlist - Merkle allowlist registry and deployment tooling
//!
//! Builds sorted-pair Merkle trees over allowlisted accounts, verifies
//! membership proofs against a committed root, and resolves the deployed
//! contract addresses the Orange vault is wired to on each network.

pub mod config;
pub mod types;
pub mod errors;
pub mod allowlist;
pub mod deployment;
pub mod storage;
pub mod utils;

// Re-export commonly used items
pub use config::{Config, CONFIG};
pub use errors::{AllowlistError, AllowlistResult};
pub use allowlist::{AllowlistRegistry, AllowlistTree};
pub use types::*;
