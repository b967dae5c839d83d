use ark_vault::prelude::*;
use proptest::prelude::*;

fn id() -> impl Strategy<Value = String> {
    "[a-z0-9._-]{0,24}"
}

proptest! {
    #[test]
    fn roundtrip_arbitrary_votes(
        secret in proptest::collection::vec(any::<u8>(), 0..64),
        collective in id(),
        member in id(),
        vote in proptest::collection::vec(any::<u8>(), 0..512),
        aad in proptest::collection::vec(any::<u8>(), 0..32),
    ) {
        let master = MasterSecret::new(secret);
        let key = derive_key(&master, &collective, &member);

        let sealed = encrypt(&key, &vote, &aad).unwrap();
        prop_assert_eq!(sealed.ciphertext().len(), vote.len() + TAG_LEN);

        let reopened = decrypt(&derive_key(&master, &collective, &member), sealed.nonce(), sealed.ciphertext(), &aad).unwrap();
        prop_assert_eq!(vote, reopened);
    }

    #[test]
    fn derivation_is_deterministic(
        secret in proptest::collection::vec(any::<u8>(), 0..64),
        collective in id(),
        member in id(),
    ) {
        let master = MasterSecret::new(secret);
        prop_assert_eq!(derive_key(&master, &collective, &member), derive_key(&master, &collective, &member));
    }

    #[test]
    fn any_bit_flip_is_detected(
        vote in proptest::collection::vec(any::<u8>(), 0..128),
        flip in any::<prop::sample::Index>(),
        bit in 0u8..8,
    ) {
        let key = derive_key(&MasterSecret::new(b"property".to_vec()), "dao", "member");
        let (mut ciphertext, nonce) = encrypt(&key, &vote, &[]).unwrap().into_parts();

        let index = flip.index(ciphertext.len());
        ciphertext[index] ^= 1 << bit;

        let rejected = matches!(
            decrypt(&key, &nonce, &ciphertext, &[]),
            Err(VaultError::Authentication { .. })
        );
        prop_assert!(rejected, "flipping bit {} of byte {} went unnoticed", bit, index);
    }

    #[test]
    fn distinct_members_get_distinct_keys(a in id(), b in id()) {
        prop_assume!(a != b);
        let master = MasterSecret::new(b"property".to_vec());
        prop_assert_ne!(derive_key(&master, "dao", &a), derive_key(&master, "dao", &b));
    }
}
