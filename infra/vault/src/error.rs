//! # Vault Errors
//!
//! This module defines the [`VaultError`] enum used by key derivation and sealing.
//!
//! Messages never contain key material, plaintext, or the reason a tag failed to verify.

use std::borrow::Cow;

/// Failures reported by the vault.
#[ark_derive::ark_error]
pub enum VaultError {
    /// Malformed caller input, detected before any cryptographic operation runs.
    ///
    /// Covers bad hex, nonces that are not 12 bytes, keys that are not 32 bytes,
    /// ciphertexts shorter than the tag and over-long key material requests.
    #[error("Invalid input{}: {message}", format_context(.context))]
    InvalidInput { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The AEAD tag did not verify. No plaintext is released.
    ///
    /// Wrong key, wrong nonce, wrong associated data and tampered ciphertext are
    /// indistinguishable.
    #[error("Authentication failed{}", format_context(.context))]
    Authentication { context: Option<Cow<'static, str>> },

    /// The operating system RNG could not produce a nonce.
    #[error("Entropy source unavailable{}: {message}", format_context(.context))]
    Entropy { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The AEAD refused to encrypt the input (plaintext over the AES-GCM limit).
    #[error("Encryption error{}: {message}", format_context(.context))]
    Encryption { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal vault error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl VaultError {
    pub(crate) fn invalid_input(message: impl Into<Cow<'static, str>>) -> Self {
        Self::InvalidInput { message: message.into(), context: None }
    }

    pub(crate) const fn authentication() -> Self {
        Self::Authentication { context: None }
    }
}
