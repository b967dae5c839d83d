//! # Key Deriver
//!
//! HKDF-SHA256 over the master secret, with the identity pair as the `info` input:
//!
//! ```text
//! PRK  = HMAC-SHA256(salt = [0u8; 32], ikm = master_secret)
//! info = "user:" || collective_id || ":" || member_id
//! key  = HKDF-Expand(PRK, info, 32)
//! ```
//!
//! The info layout is an interoperability contract: any independent implementation fed the
//! same inputs must arrive at the same key bytes.

use crate::error::{VaultError, VaultErrorExt};
use crate::secret::{DerivedKey, MasterSecret};
use crate::types::KEY_LEN;
use hkdf::Hkdf;
use sha2::Sha256;
use zeroize::Zeroize;

/// Prefix of every derivation `info` string.
pub const INFO_LABEL: &str = "user:";

/// Separator between collective and member ids.
pub const INFO_DELIMITER: &str = ":";

/// HKDF extract salt. Fixed to the SHA-256 output length of zeroes.
const SALT: [u8; 32] = [0u8; 32];

/// Largest output HKDF-SHA256 can expand to (255 blocks).
pub const MAX_MATERIAL_LEN: usize = 255 * 32;

/// Builds the HKDF `info` bytes for an identity pair.
///
/// No length prefixes are added, so ids containing `:` may collide
/// (`("a:b", "c")` and `("a", "b:c")` produce the same info).
#[must_use]
pub fn derivation_info(collective_id: &str, member_id: &str) -> Vec<u8> {
    let mut info = Vec::with_capacity(
        INFO_LABEL.len() + collective_id.len() + INFO_DELIMITER.len() + member_id.len(),
    );
    info.extend_from_slice(INFO_LABEL.as_bytes());
    info.extend_from_slice(collective_id.as_bytes());
    info.extend_from_slice(INFO_DELIMITER.as_bytes());
    info.extend_from_slice(member_id.as_bytes());
    info
}

fn extract(master: &MasterSecret) -> Hkdf<Sha256> {
    let (_, hk) = Hkdf::<Sha256>::extract(Some(&SALT[..]), master.as_bytes());
    hk
}

/// Derives the 32-byte key of one member of one collective.
///
/// Total and deterministic: empty secrets and empty ids are valid inputs.
///
/// # Example
/// ```rust
/// use ark_vault::prelude::*;
///
/// let master = MasterSecret::new(b"shared-secret".to_vec());
/// let alice = derive_key(&master, "dao.testnet", "alice.testnet");
/// let again = derive_key(&master, "dao.testnet", "alice.testnet");
///
/// assert_eq!(alice, again);
/// assert_ne!(alice, derive_key(&master, "dao.testnet", "bob.testnet"));
/// ```
#[must_use]
pub fn derive_key(master: &MasterSecret, collective_id: &str, member_id: &str) -> DerivedKey {
    let hk = extract(master);
    let info = derivation_info(collective_id, member_id);

    let mut okm = [0u8; KEY_LEN];
    // A single SHA-256 block is always within HKDF's output limit.
    let Ok(()) = hk.expand(&info, &mut okm) else {
        unreachable!("HKDF-SHA256 cannot reject a {KEY_LEN}-byte output");
    };

    let key = DerivedKey::from_bytes(okm);
    okm.zeroize();
    key
}

/// Fills `out` with HKDF output for the identity pair.
///
/// The first [`KEY_LEN`] bytes always equal [`derive_key`]; longer buffers continue the
/// expand chain with the same `info`.
///
/// # Errors
/// Returns [`VaultError::InvalidInput`] if `out` is longer than [`MAX_MATERIAL_LEN`].
pub fn derive_key_material(
    master: &MasterSecret,
    collective_id: &str,
    member_id: &str,
    out: &mut [u8],
) -> Result<(), VaultError> {
    if out.len() > MAX_MATERIAL_LEN {
        return Err(VaultError::invalid_input(format!(
            "requested {} bytes, HKDF-SHA256 yields at most {MAX_MATERIAL_LEN}",
            out.len()
        )))
        .context("Key derivation");
    }

    let info = derivation_info(collective_id, member_id);
    extract(master).expand(&info, out).map_err(|_| VaultError::Internal {
        message: "HKDF expansion rejected a checked length".into(),
        context: Some("Key derivation".into()),
    })
}
