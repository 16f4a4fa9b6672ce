//! Sorted-pair keccak256 hashing shared by the tree builder and the registry

use alloy::primitives::{Address, B256, keccak256};

/// Leaf for an identity, equal to `solidityKeccak256(["address"], [identity])`.
pub fn leaf_hash(identity: Address) -> B256 {
    keccak256(identity.as_slice())
}

/// Hash two nodes after ordering them, so the result ignores left/right position.
pub fn hash_pair(a: B256, b: B256) -> B256 {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    let mut buf = [0u8; 64];
    buf[..32].copy_from_slice(lo.as_slice());
    buf[32..].copy_from_slice(hi.as_slice());
    keccak256(buf)
}

/// Recompute the root implied by `leaf` and its sibling path.
pub fn process_proof(leaf: B256, proof: &[B256]) -> B256 {
    proof.iter().fold(leaf, |node, sibling| hash_pair(node, *sibling))
}
