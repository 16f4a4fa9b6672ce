//! Allowlist registry gating protected actions behind a Merkle root

use alloy::primitives::{Address, B256};
use tracing::{debug, info, warn};
use crate::{
    allowlist::hashing::{leaf_hash, process_proof},
    errors::{AllowlistError, AllowlistResult},
};

/// Holds the active root and the enabled flag. Only `owner` may change either.
#[derive(Debug, Clone)]
pub struct AllowlistRegistry {
    owner: Address,
    root: B256,
    enabled: bool,
}

impl AllowlistRegistry {
    pub fn new(owner: Address, enabled: bool) -> Self {
        Self {
            owner,
            root: B256::ZERO,
            enabled,
        }
    }

    pub fn owner(&self) -> Address {
        self.owner
    }

    pub fn root(&self) -> B256 {
        self.root
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn only_owner(&self, caller: Address) -> AllowlistResult<()> {
        if caller != self.owner {
            warn!(%caller, owner = %self.owner, "Rejected admin call from non-owner");
            return Err(AllowlistError::Unauthorized {
                caller,
                owner: self.owner,
            });
        }
        Ok(())
    }

    /// Replace the active root. The tree behind it is not validated.
    pub fn set_root(&mut self, caller: Address, root: B256) -> AllowlistResult<()> {
        self.only_owner(caller)?;
        self.root = root;
        info!(%root, "Allowlist root updated");
        Ok(())
    }

    pub fn set_enabled(&mut self, caller: Address, enabled: bool) -> AllowlistResult<()> {
        self.only_owner(caller)?;
        self.enabled = enabled;
        info!(enabled, "Allowlist gating toggled");
        Ok(())
    }

    pub fn verify(&self, caller: Address, proof: &[B256]) -> AllowlistResult<()> {
        if !self.enabled {
            return Ok(());
        }

        if process_proof(leaf_hash(caller), proof) == self.root {
            Ok(())
        } else {
            debug!(%caller, proof_len = proof.len(), "Allowlist proof rejected");
            Err(AllowlistError::NotAllowed { caller })
        }
    }

    /// Run `action` only when `caller` passes the allowlist check.
    pub fn exec<T, F>(&self, caller: Address, proof: &[B256], action: F) -> AllowlistResult<T>
    where
        F: FnOnce() -> T,
    {
        self.verify(caller, proof)?;
        Ok(action())
    }
}
