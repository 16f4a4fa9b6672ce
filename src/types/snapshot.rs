//! Allowlist snapshot types

use alloy::primitives::{Address, B256};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Proof bundle handed to a single allowlisted member.
#[derive(Debug, Clone, Serialize)]
pub struct MemberProof {
    pub address: Address,
    pub leaf: B256,
    pub proof: Vec<B256>,
}

/// Root and proofs published after a tree is built.
#[derive(Debug, Clone, Serialize)]
pub struct AllowlistSnapshot {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub network: String,
    pub root: B256,
    pub enabled: bool,
    // repeated input entries left out of the tree
    pub duplicates_dropped: usize,
    pub members: Vec<MemberProof>,
}
