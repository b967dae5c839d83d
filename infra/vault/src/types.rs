use crate::error::{VaultError, VaultErrorExt};
use getrandom::fill;
use std::fmt;

// --- Format constants ---

/// Derived key length (256-bit, AES-256).
pub const KEY_LEN: usize = 32;

/// AEAD nonce length (96-bit).
pub const NONCE_LEN: usize = 12;

/// AEAD tag length (128-bit), appended to every ciphertext.
pub const TAG_LEN: usize = 16;

// --- Nonce ---

/// A 96-bit AES-GCM nonce.
///
/// A nonce is public and is stored next to its ciphertext. It must never be reused with the
/// same [`DerivedKey`](crate::DerivedKey) for a different plaintext.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Nonce([u8; NONCE_LEN]);

impl Nonce {
    /// Draws a fresh nonce from the operating system CSPRNG.
    ///
    /// # Errors
    /// Returns [`VaultError::Entropy`] if the system RNG is unavailable.
    pub fn generate() -> Result<Self, VaultError> {
        let mut bytes = [0u8; NONCE_LEN];
        fill(&mut bytes)
            .map_err(|e| VaultError::Entropy { message: e.to_string().into(), context: None })
            .context("Nonce generation")?;
        Ok(Self(bytes))
    }

    #[must_use]
    pub const fn from_bytes(bytes: [u8; NONCE_LEN]) -> Self {
        Self(bytes)
    }

    /// Builds a nonce from a slice that must be exactly [`NONCE_LEN`] bytes.
    ///
    /// # Errors
    /// Returns [`VaultError::InvalidInput`] on any other length.
    pub fn try_from_slice(bytes: &[u8]) -> Result<Self, VaultError> {
        let bytes: [u8; NONCE_LEN] = bytes.try_into().map_err(|_| {
            VaultError::invalid_input(format!(
                "nonce must be {NONCE_LEN} bytes, got {}",
                bytes.len()
            ))
        })?;
        Ok(Self(bytes))
    }

    /// Parses a hex-encoded nonce.
    ///
    /// # Errors
    /// Returns [`VaultError::InvalidInput`] for malformed hex or a wrong length.
    pub fn from_hex(encoded: &str) -> Result<Self, VaultError> {
        let bytes = hex::decode(encoded.trim())
            .map_err(|e| VaultError::invalid_input(format!("malformed hex: {e}")))
            .context("Nonce")?;
        Self::try_from_slice(&bytes)
    }

    #[must_use]
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; NONCE_LEN] {
        &self.0
    }
}

impl AsRef<[u8]> for Nonce {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; NONCE_LEN]> for Nonce {
    fn from(bytes: [u8; NONCE_LEN]) -> Self {
        Self(bytes)
    }
}

impl fmt::Debug for Nonce {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Nonce").field(&self.to_hex()).finish()
    }
}

// --- Sealed ---

/// The output of one encryption: a nonce and the ciphertext it produced.
///
/// The ciphertext has a fixed layout:
///
/// ```text
/// [CIPHERTEXT(N)][TAG(16)]
/// ```
///
/// Both parts are public and are meant to be stored together (e.g. in a ledger payload)
/// and handed back verbatim for decryption.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Sealed {
    nonce: Nonce,
    ciphertext: Vec<u8>,
}

impl Sealed {
    #[must_use]
    pub const fn new(nonce: Nonce, ciphertext: Vec<u8>) -> Self {
        Self { nonce, ciphertext }
    }

    #[must_use]
    pub const fn nonce(&self) -> &Nonce {
        &self.nonce
    }

    /// Ciphertext with the tag appended.
    #[must_use]
    pub fn ciphertext(&self) -> &[u8] {
        &self.ciphertext
    }

    /// Length of the plaintext this ciphertext decrypts to.
    #[must_use]
    pub fn plaintext_len(&self) -> usize {
        self.ciphertext.len().saturating_sub(TAG_LEN)
    }

    /// Splits the ciphertext into `(body, tag)`.
    #[must_use]
    pub fn split(&self) -> (&[u8], &[u8]) {
        self.ciphertext.split_at(self.plaintext_len())
    }

    /// Returns `(ciphertext, nonce)`, the shape callers store.
    #[must_use]
    pub fn into_parts(self) -> (Vec<u8>, Nonce) {
        (self.ciphertext, self.nonce)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nonce_sequence() {
        let n1 = Nonce::generate().unwrap();
        let n2 = Nonce::generate().unwrap();

        assert_ne!(n1, n2);
    }

    #[test]
    fn test_nonce_rejects_wrong_length() {
        let err = Nonce::try_from_slice(&[0u8; 11]).unwrap_err();
        assert!(matches!(err, VaultError::InvalidInput { .. }));

        let err = Nonce::from_hex("000102030405060708090a0b0c").unwrap_err();
        assert!(matches!(err, VaultError::InvalidInput { .. }));
    }

    #[test]
    fn test_nonce_hex_roundtrip() {
        let nonce = Nonce::from_hex("000102030405060708090a0b").unwrap();
        assert_eq!(nonce.as_bytes(), &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11]);
        assert_eq!(nonce.to_hex(), "000102030405060708090a0b");
    }

    #[test]
    fn test_nonce_rejects_malformed_hex() {
        let err = Nonce::from_hex("zz0102030405060708090a0b").unwrap_err();
        assert_eq!(err.kind(), "invalid_input");
    }

    #[test]
    fn test_sealed_split() {
        let sealed = Sealed::new(Nonce::from_bytes([0; NONCE_LEN]), vec![7u8; 3 + TAG_LEN]);
        let (body, tag) = sealed.split();

        assert_eq!(sealed.plaintext_len(), 3);
        assert_eq!(body, &[7, 7, 7]);
        assert_eq!(tag.len(), TAG_LEN);
    }
}
