pub mod fixtures;

use ark_vault::prelude::*;
use ark_vault::{derivation_info, derive_key_material, encrypt_with_nonce};
use fixtures::{ALICE, BOB, COLLECTIVE, alice_key, fixed_nonce, master};
use hex_literal::hex;

const ALICE_KEY: [u8; 32] =
    hex!("49c528229ae5a7f4596bfd2818471b07bc3e3dff666de5227e5a032f1c11a3bc");
const BOB_KEY: [u8; 32] = hex!("1cef7cbbe94957ce9989c9a14c1b7756f446f3ef91f74786000c9d4b9a9f185e");
const ALICE_OKM_TAIL: [u8; 32] =
    hex!("9feea3497e4a0850c92ccaf31c332e8671222fa5fa5adbdd08aa66d06a06075c");

#[test]
fn derives_reference_keys() {
    assert_eq!(alice_key().as_bytes(), &ALICE_KEY);
    assert_eq!(derive_key(&master(), COLLECTIVE, BOB).as_bytes(), &BOB_KEY);
}

#[test]
fn derives_reference_key_for_empty_collective() {
    let key = derive_key(&master(), "", "bob");
    assert_eq!(
        key.as_bytes(),
        &hex!("71d0bb524980a4219b07f0891aeff6c1579084f66104ef6b49319be03e5c966c")
    );
}

#[test]
fn expands_reference_material_over_two_blocks() {
    let mut okm = [0u8; 64];
    derive_key_material(&master(), COLLECTIVE, ALICE, &mut okm).expect("expand failed");

    assert_eq!(okm[..32], ALICE_KEY);
    assert_eq!(okm[32..], ALICE_OKM_TAIL);
}

#[test]
fn info_string_is_stable() {
    assert_eq!(derivation_info(COLLECTIVE, ALICE), b"user:dao.testnet:alice.testnet".to_vec());
}

#[test]
fn seals_reference_vote() {
    let sealed =
        encrypt_with_nonce(&alice_key(), &fixed_nonce(), "yes", &[]).expect("seal failed");

    assert_eq!(sealed.ciphertext(), hex!("197e8ee51bff14e22b91168d8175a742131106"));
    assert_eq!(sealed.nonce(), &fixed_nonce());
}

#[test]
fn seals_reference_vote_with_associated_data() {
    let sealed = encrypt_with_nonce(&alice_key(), &fixed_nonce(), "yes", b"proposal:42")
        .expect("seal failed");

    assert_eq!(sealed.ciphertext(), hex!("197e8e3ce29af2ee9fd6fc3cdcea1a1791147f"));
    let vote = open(&alice_key(), &sealed, b"proposal:42").expect("open failed");
    assert_eq!(vote, b"yes");
}

#[test]
fn seals_reference_empty_plaintext() {
    let sealed = encrypt_with_nonce(&alice_key(), &fixed_nonce(), b"", &[]).expect("seal failed");

    assert_eq!(sealed.ciphertext(), hex!("628a7b1f4bc1bf2b6a6decc7e7eb0acf"));
    assert!(open(&alice_key(), &sealed, &[]).expect("open failed").is_empty());
}

#[test]
fn opens_reference_vote_from_hex() {
    let nonce = Nonce::from_hex("000102030405060708090a0b").expect("nonce");
    let ciphertext = hex!("197e8ee51bff14e22b91168d8175a742131106");

    let vote = decrypt(&alice_key(), &nonce, &ciphertext, &[]).expect("decrypt failed");
    assert_eq!(vote, b"yes");
}
