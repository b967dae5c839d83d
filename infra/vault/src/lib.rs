//! Per-member key derivation and authenticated sealing of short values.
//!
//! A shared [`MasterSecret`] and an identity pair `(collective_id, member_id)` determine a
//! 32-byte [`DerivedKey`] through HKDF-SHA256. That key seals a value with AES-256-GCM, so the
//! ciphertext can be published on an untrusted ledger and opened later by anyone holding the
//! master secret.
//!
//! ## Ciphertext Format
//!
//! ```text
//! [CIPHERTEXT(N)][TAG(16)]      nonce (12 bytes) stored alongside
//! ```
//!
//! ## Nonce Policy
//!
//! [`encrypt`] draws a **random 96-bit nonce** from the OS CSPRNG for every call. This is the
//! usual choice for `AES-GCM`, but it is probabilistic: keys are per member, and a member is
//! expected to seal only a handful of values. [`encrypt_with_nonce`] exists for known-answer
//! testing and for callers that track nonces themselves.
//!
//! ## Memory Hygiene
//!
//! [`MasterSecret`] and [`DerivedKey`] are wiped on drop and print as `[REDACTED]`. Decryption
//! scratch space is wiped when authentication fails. Log events carry lengths only.
//!
//! ## Examples
//!
//! ```rust
//! use ark_vault::prelude::*;
//!
//! # fn main() -> Result<(), VaultError> {
//! let master = MasterSecret::from_hex(
//!     "0123456789abcdef0123456789abcdef0123456789abcdef0123456789abcdef",
//! )?;
//! let key = derive_key(&master, "dao.testnet", "alice.testnet");
//!
//! let (ciphertext, nonce) = encrypt(&key, "yes", &[])?.into_parts();
//! assert_eq!(ciphertext.len(), 3 + TAG_LEN);
//!
//! // An independent party re-derives the same key and opens the vote.
//! let verifier_key = derive_key(&master, "dao.testnet", "alice.testnet");
//! let vote = decrypt(&verifier_key, &nonce, &ciphertext, &[])?;
//! assert_eq!(vote, b"yes");
//! # Ok(())
//! # }
//! ```

mod cipher;
mod error;
mod kdf;
mod secret;
mod types;

pub use cipher::{decrypt, encrypt, encrypt_with_nonce, open};
pub use error::{VaultError, VaultErrorExt};
pub use kdf::{
    INFO_DELIMITER, INFO_LABEL, MAX_MATERIAL_LEN, derivation_info, derive_key, derive_key_material,
};
pub use secret::{DerivedKey, MasterSecret};
pub use types::{KEY_LEN, NONCE_LEN, Nonce, Sealed, TAG_LEN};

pub mod prelude {
    pub use crate::cipher::{decrypt, encrypt, open};
    pub use crate::error::{VaultError, VaultErrorExt};
    pub use crate::kdf::derive_key;
    pub use crate::secret::{DerivedKey, MasterSecret};
    pub use crate::types::{NONCE_LEN, Nonce, Sealed, TAG_LEN};
}
