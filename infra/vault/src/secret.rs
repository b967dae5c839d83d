//! # Secret Material
//!
//! Owned containers for the master secret and the per-member keys derived from it.
//! Both wipe their bytes when dropped and never print them.

use crate::error::{VaultError, VaultErrorExt};
use crate::types::KEY_LEN;
use std::fmt;
use subtle::ConstantTimeEq;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Shared master secret held by the parties entitled to decrypt.
///
/// Any length is accepted, including empty: the bytes are HKDF input keying material.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct MasterSecret(Vec<u8>);

impl MasterSecret {
    #[must_use]
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    /// Parses a hex-encoded master secret.
    ///
    /// # Errors
    /// Returns [`VaultError::InvalidInput`] if the input is not valid hex.
    pub fn from_hex(encoded: &str) -> Result<Self, VaultError> {
        hex::decode(encoded.trim())
            .map(Self)
            .map_err(|e| VaultError::invalid_input(format!("malformed hex: {e}")))
            .context("Master secret")
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<u8>> for MasterSecret {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl fmt::Debug for MasterSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MasterSecret([REDACTED; {} bytes])", self.0.len())
    }
}

/// A 256-bit per-member key, the output of [`derive_key`](crate::derive_key).
///
/// Only meaningful together with the AES-256-GCM functions of this crate.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct DerivedKey([u8; KEY_LEN]);

impl DerivedKey {
    #[must_use]
    pub const fn from_bytes(bytes: [u8; KEY_LEN]) -> Self {
        Self(bytes)
    }

    /// Builds a key from a slice that must be exactly [`KEY_LEN`] bytes.
    ///
    /// # Errors
    /// Returns [`VaultError::InvalidInput`] on any other length.
    pub fn try_from_slice(bytes: &[u8]) -> Result<Self, VaultError> {
        let key: [u8; KEY_LEN] = bytes.try_into().map_err(|_| {
            VaultError::invalid_input(format!("key must be {KEY_LEN} bytes, got {}", bytes.len()))
        })?;
        Ok(Self(key))
    }

    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.0
    }
}

impl PartialEq for DerivedKey {
    fn eq(&self, other: &Self) -> bool {
        self.0[..].ct_eq(&other.0[..]).into()
    }
}

impl Eq for DerivedKey {}

impl fmt::Debug for DerivedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("DerivedKey([REDACTED])")
    }
}
