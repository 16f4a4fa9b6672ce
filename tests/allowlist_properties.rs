use alloy::primitives::{Address, B256};
use orange_allowlist::{
    allowlist::{leaf_hash, process_proof},
    AllowlistError, AllowlistRegistry, AllowlistTree,
};
use proptest::prelude::*;
use std::collections::BTreeSet;

const OWNER: Address = Address::new([0xee; 20]);

fn identity_set() -> impl Strategy<Value = BTreeSet<[u8; 20]>> {
    prop::collection::btree_set(any::<[u8; 20]>(), 1..40)
}

fn registry_for(tree: &AllowlistTree) -> AllowlistRegistry {
    let mut registry = AllowlistRegistry::new(OWNER, true);
    registry.set_root(OWNER, tree.root()).unwrap();
    registry
}

proptest! {
    #[test]
    fn every_member_verifies(ids in identity_set()) {
        let members: Vec<Address> = ids.iter().map(|b| Address::from(*b)).collect();
        let tree = AllowlistTree::from_identities(members.clone()).unwrap();
        let registry = registry_for(&tree);

        for member in members {
            let proof = tree.proof(member).unwrap();
            prop_assert!(proof.len() <= tree.depth());
            prop_assert!(registry.verify(member, &proof).is_ok());
        }
    }

    #[test]
    fn outsiders_are_rejected(ids in identity_set(), outsider in any::<[u8; 20]>()) {
        prop_assume!(!ids.contains(&outsider));
        let outsider = Address::from(outsider);

        let members: Vec<Address> = ids.iter().map(|b| Address::from(*b)).collect();
        let tree = AllowlistTree::from_identities(members.clone()).unwrap();
        let registry = registry_for(&tree);

        for member in members {
            let borrowed = tree.proof(member).unwrap();
            let rejected = matches!(
                registry.verify(outsider, &borrowed),
                Err(AllowlistError::NotAllowed { .. })
            );
            prop_assert!(rejected);
        }
    }

    #[test]
    fn proofs_do_not_transfer_between_members(ids in prop::collection::btree_set(any::<[u8; 20]>(), 2..20)) {
        let members: Vec<Address> = ids.iter().map(|b| Address::from(*b)).collect();
        let tree = AllowlistTree::from_identities(members.clone()).unwrap();
        let registry = registry_for(&tree);

        let (a, b) = (members[0], members[1]);
        let proof_b = tree.proof(b).unwrap();
        prop_assert!(registry.verify(a, &proof_b).is_err());
    }

    #[test]
    fn disabled_registry_ignores_proofs(
        ids in identity_set(),
        caller in any::<[u8; 20]>(),
        garbage in prop::collection::vec(any::<[u8; 32]>(), 0..8),
    ) {
        let members: Vec<Address> = ids.iter().map(|b| Address::from(*b)).collect();
        let tree = AllowlistTree::from_identities(members).unwrap();
        let mut registry = registry_for(&tree);
        registry.set_enabled(OWNER, false).unwrap();

        let garbage: Vec<B256> = garbage.into_iter().map(B256::from).collect();
        prop_assert!(registry.verify(Address::from(caller), &garbage).is_ok());
    }

    #[test]
    fn proof_order_matches_tree_levels(ids in identity_set()) {
        let members: Vec<Address> = ids.iter().map(|b| Address::from(*b)).collect();
        let tree = AllowlistTree::from_identities(members.clone()).unwrap();

        for member in members {
            let proof = tree.proof(member).unwrap();
            prop_assert_eq!(process_proof(leaf_hash(member), &proof), tree.root());
        }
    }
}

#[test]
fn two_member_scenario() {
    let alice = Address::repeat_byte(0x01);
    let bob = Address::repeat_byte(0x02);
    let carol = Address::repeat_byte(0x03);

    let tree = AllowlistTree::from_identities([alice, bob]).unwrap();
    let proof_alice = tree.proof(alice).unwrap();
    let proof_bob = tree.proof(bob).unwrap();
    let mut registry = registry_for(&tree);

    assert!(registry.exec(alice, &proof_alice, || ()).is_ok());
    assert!(registry.exec(bob, &proof_bob, || ()).is_ok());
    assert!(registry.exec(alice, &proof_bob, || ()).is_err());
    assert!(registry.exec(carol, &proof_alice, || ()).is_err());

    registry.set_enabled(OWNER, false).unwrap();
    assert!(registry.exec(alice, &proof_bob, || ()).is_ok());
}
