//! Off-chain Merkle tree builder for allowlist roots and proofs
//!
//! Leaves are sorted and pairs are hashed in sorted order, so the proofs it
//! produces verify against [`process_proof`](super::process_proof) without any
//! left/right position bits. An unpaired node at the end of a level is promoted
//! to the next level unhashed.

use alloy::primitives::{Address, B256};
use std::collections::BTreeSet;
use tracing::{debug, warn};
use crate::{
    allowlist::hashing::{hash_pair, leaf_hash},
    errors::{AllowlistError, AllowlistResult},
    types::MemberProof,
};

#[derive(Debug, Clone)]
pub struct AllowlistTree {
    members: Vec<Address>,
    duplicates: usize,
    // layers[0] holds the sorted leaves, the last layer holds the root
    layers: Vec<Vec<B256>>,
}

impl AllowlistTree {
    pub fn from_identities<I>(identities: I) -> AllowlistResult<Self>
    where
        I: IntoIterator<Item = Address>,
    {
        let identities: Vec<Address> = identities.into_iter().collect();
        let submitted = identities.len();
        let members: Vec<Address> = identities
            .into_iter()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        let duplicates = submitted - members.len();

        if members.is_empty() {
            return Err(AllowlistError::EmptyTree);
        }

        // builders that hash repeated leaves separately produce a different root
        if duplicates > 0 {
            warn!(
                duplicates,
                members = members.len(),
                "Dropped duplicate allowlist entries; root will not match a tree built with them"
            );
        }

        let mut leaves: Vec<B256> = members.iter().map(|m| leaf_hash(*m)).collect();
        leaves.sort();

        let mut layers = vec![leaves];
        while let Some(level) = layers.last().filter(|l| l.len() > 1) {
            let next = level
                .chunks(2)
                .map(|pair| match pair {
                    [left, right] => hash_pair(*left, *right),
                    [single] => *single,
                    _ => unreachable!("chunks(2) yields one or two nodes"),
                })
                .collect();
            layers.push(next);
        }

        debug!(
            members = members.len(),
            depth = layers.len() - 1,
            "Built allowlist tree"
        );

        Ok(Self { members, duplicates, layers })
    }

    pub fn root(&self) -> B256 {
        // from_identities guarantees a non-empty top layer
        self.layers[self.layers.len() - 1][0]
    }

    pub fn depth(&self) -> usize {
        self.layers.len() - 1
    }

    pub fn leaves(&self) -> &[B256] {
        &self.layers[0]
    }

    pub fn members(&self) -> &[Address] {
        &self.members
    }

    /// Entries dropped from the input because they repeated a member.
    pub fn duplicates(&self) -> usize {
        self.duplicates
    }

    pub fn contains(&self, identity: Address) -> bool {
        self.members.binary_search(&identity).is_ok()
    }

    /// Sibling path from the identity's leaf up to the root.
    pub fn proof(&self, identity: Address) -> AllowlistResult<Vec<B256>> {
        let leaf = leaf_hash(identity);
        let mut index = self.layers[0]
            .binary_search(&leaf)
            .map_err(|_| AllowlistError::UnknownIdentity { identity })?;

        let mut proof = Vec::with_capacity(self.depth());
        for level in &self.layers[..self.layers.len() - 1] {
            let sibling = if index % 2 == 1 { index - 1 } else { index + 1 };
            if let Some(node) = level.get(sibling) {
                proof.push(*node);
            }
            index /= 2;
        }
        Ok(proof)
    }

    pub fn member_proofs(&self) -> AllowlistResult<Vec<MemberProof>> {
        self.members
            .iter()
            .map(|address| {
                Ok(MemberProof {
                    address: *address,
                    leaf: leaf_hash(*address),
                    proof: self.proof(*address)?,
                })
            })
            .collect()
    }
}
