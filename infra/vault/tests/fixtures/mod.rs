use ark_vault::prelude::*;
use hex_literal::hex;

pub const MASTER: [u8; 32] =
    hex!("0123456789abcdef0123456789abcdef0123456789abcdef0123456789abcdef");
pub const NONCE: [u8; NONCE_LEN] = hex!("000102030405060708090a0b");

pub const COLLECTIVE: &str = "dao.testnet";
pub const ALICE: &str = "alice.testnet";
pub const BOB: &str = "bob.testnet";

/// The 32-byte reference master secret.
#[must_use]
pub fn master() -> MasterSecret {
    MasterSecret::new(MASTER.to_vec())
}

#[must_use]
pub fn alice_key() -> DerivedKey {
    derive_key(&master(), COLLECTIVE, ALICE)
}

#[must_use]
pub const fn fixed_nonce() -> Nonce {
    Nonce::from_bytes(NONCE)
}
