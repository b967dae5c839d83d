use aead::inout::InOutBuf;
use aead::{AeadInOut, KeyInit, Nonce as AeadNonce, Tag};
use aes_gcm::Aes256Gcm;
use tracing::trace;
use zeroize::Zeroize;

use crate::error::{VaultError, VaultErrorExt};
use crate::secret::DerivedKey;
use crate::types::{Nonce, Sealed, TAG_LEN};

#[inline]
fn cipher_for(key: &DerivedKey) -> Aes256Gcm {
    let Ok(cipher) = Aes256Gcm::new_from_slice(key.as_bytes()) else {
        unreachable!("DerivedKey always holds an AES-256 key");
    };
    cipher
}

/// Encrypts `plaintext` under a fresh random nonce.
///
/// `aad` is authenticated but not encrypted; pass `&[]` when there is none. The same bytes
/// must be supplied again to [`decrypt`].
///
/// # Errors
/// * [`VaultError::Entropy`] If the system RNG cannot produce a nonce.
/// * [`VaultError::Encryption`] If the plaintext exceeds the AES-GCM length limit.
///
/// # Example
/// ```rust
/// use ark_vault::prelude::*;
///
/// # fn main() -> Result<(), VaultError> {
/// let master = MasterSecret::new(b"shared-secret".to_vec());
/// let key = derive_key(&master, "dao.testnet", "alice.testnet");
///
/// let sealed = encrypt(&key, b"yes", b"proposal:42")?;
/// let vote = decrypt(&key, sealed.nonce(), sealed.ciphertext(), b"proposal:42")?;
/// assert_eq!(vote, b"yes");
/// # Ok(())
/// # }
/// ```
pub fn encrypt(
    key: &DerivedKey,
    plaintext: impl AsRef<[u8]>,
    aad: &[u8],
) -> Result<Sealed, VaultError> {
    let nonce = Nonce::generate()?;
    encrypt_with_nonce(key, &nonce, plaintext, aad)
}

/// Encrypts `plaintext` under a caller-chosen nonce.
///
/// Reusing a nonce with the same key for two different plaintexts breaks both
/// confidentiality and authenticity. Prefer [`encrypt`] unless nonces are tracked elsewhere.
///
/// # Errors
/// Returns [`VaultError::Encryption`] if the plaintext exceeds the AES-GCM length limit.
pub fn encrypt_with_nonce(
    key: &DerivedKey,
    nonce: &Nonce,
    plaintext: impl AsRef<[u8]>,
    aad: &[u8],
) -> Result<Sealed, VaultError> {
    let plaintext = plaintext.as_ref();
    let cipher = cipher_for(key);

    let mut buf = Vec::with_capacity(plaintext.len() + TAG_LEN);
    buf.extend_from_slice(plaintext);

    let aead_nonce = AeadNonce::<Aes256Gcm>::from(*nonce.as_bytes());
    let tag = match cipher.encrypt_inout_detached(&aead_nonce, aad, InOutBuf::from(&mut buf[..])) {
        Ok(tag) => tag,
        Err(_) => {
            buf.zeroize();
            return Err(VaultError::Encryption {
                message: "AEAD refused the plaintext".into(),
                context: None,
            })
            .context(format!("{} byte plaintext", plaintext.len()));
        },
    };

    buf.extend_from_slice(tag.as_slice());
    trace!(plaintext_len = plaintext.len(), aad_len = aad.len(), "sealed");

    Ok(Sealed::new(*nonce, buf))
}

/// Decrypts a ciphertext produced by [`encrypt`] or [`encrypt_with_nonce`].
///
/// Fails closed: either the whole plaintext is returned or nothing is.
///
/// # Errors
/// * [`VaultError::InvalidInput`] If `ciphertext` is shorter than the 16-byte tag.
/// * [`VaultError::Authentication`] If the key, nonce, associated data or ciphertext do not
///   match what was sealed. The cause is not reported.
pub fn decrypt(
    key: &DerivedKey,
    nonce: &Nonce,
    ciphertext: &[u8],
    aad: &[u8],
) -> Result<Vec<u8>, VaultError> {
    if ciphertext.len() < TAG_LEN {
        return Err(VaultError::invalid_input(format!(
            "ciphertext is {} bytes, expected at least {TAG_LEN}",
            ciphertext.len()
        )));
    }

    let (body, tag_slice) = ciphertext.split_at(ciphertext.len() - TAG_LEN);
    let tag: Tag<Aes256Gcm> = tag_slice.try_into().map_err(|_| VaultError::Internal {
        message: "tag split produced a wrong length".into(),
        context: None,
    })?;

    let cipher = cipher_for(key);
    let aead_nonce = AeadNonce::<Aes256Gcm>::from(*nonce.as_bytes());
    let mut buf = body.to_vec();

    if cipher.decrypt_inout_detached(&aead_nonce, aad, InOutBuf::from(&mut buf[..]), &tag).is_err() {
        buf.zeroize();
        trace!(ciphertext_len = ciphertext.len(), aad_len = aad.len(), "authentication failed");
        return Err(VaultError::authentication());
    }

    trace!(plaintext_len = buf.len(), aad_len = aad.len(), "opened");
    Ok(buf)
}

/// Decrypts a [`Sealed`] value, the inverse of [`encrypt`].
///
/// # Errors
/// Same as [`decrypt`].
pub fn open(key: &DerivedKey, sealed: &Sealed, aad: &[u8]) -> Result<Vec<u8>, VaultError> {
    decrypt(key, sealed.nonce(), sealed.ciphertext(), aad)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::NONCE_LEN;

    fn key() -> DerivedKey {
        DerivedKey::from_bytes([0x42; 32])
    }

    #[test]
    fn test_roundtrip_with_aad() {
        let sealed = encrypt(&key(), b"no", b"ctx").unwrap();
        assert_eq!(open(&key(), &sealed, b"ctx").unwrap(), b"no");
    }

    #[test]
    fn test_unseal_fails_with_wrong_context() {
        let sealed = encrypt(&key(), b"data", b"correct-context").unwrap();

        let err = open(&key(), &sealed, b"wrong-context").unwrap_err();
        assert!(matches!(err, VaultError::Authentication { .. }));
    }

    #[test]
    fn test_short_ciphertext_is_invalid_input() {
        let nonce = Nonce::from_bytes([0; NONCE_LEN]);

        let err = decrypt(&key(), &nonce, &[0u8; TAG_LEN - 1], b"").unwrap_err();
        assert_eq!(err.kind(), "invalid_input");

        let err = decrypt(&key(), &nonce, &[], b"").unwrap_err();
        assert_eq!(err.kind(), "invalid_input");
    }

    #[test]
    fn test_tag_only_ciphertext_needs_authentic_tag() {
        let nonce = Nonce::from_bytes([0; NONCE_LEN]);

        let err = decrypt(&key(), &nonce, &[0u8; TAG_LEN], b"").unwrap_err();
        assert_eq!(err.kind(), "authentication");
    }
}
