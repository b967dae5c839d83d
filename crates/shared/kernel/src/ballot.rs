//! # Ballot Service
//!
//! Glue between the domain records and the vault: re-derives the member key for every call,
//! seals a vote into an [`EncryptedBallot`] and opens it again.
//!
//! Keys never outlive a single call. Spans record the member and collective ids (public
//! ledger data) and lengths, never votes or key material.

use ark_domain::config::VaultConfig;
use ark_domain::{AccountPair, DecryptedBallot, EncryptedBallot};
use ark_vault::{MasterSecret, Nonce, VaultError, decrypt, derive_key, encrypt};
use std::borrow::Cow;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::{debug, instrument, warn};
use zeroize::Zeroize;

#[ark_derive::ark_error]
pub enum BallotError {
    /// No master secret was configured.
    #[error("Master secret is not configured{}", format_context(.context))]
    MissingSecret { context: Option<Cow<'static, str>> },

    #[error("Vault error{}: {source}", format_context(.context))]
    Vault { source: VaultError, context: Option<Cow<'static, str>> },

    /// The decrypted vote is not valid UTF-8.
    #[error("Malformed vote{}: {message}", format_context(.context))]
    MalformedVote { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal ballot error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

/// Parses the configured hex master secret.
///
/// # Errors
/// * [`BallotError::MissingSecret`] If `vault.master_secret` is unset or blank.
/// * [`BallotError::Vault`] If the value is not valid hex.
pub fn resolve_master_secret(config: &VaultConfig) -> Result<MasterSecret, BallotError> {
    let Some(encoded) = config.master_secret_hex().filter(|s| !s.trim().is_empty()) else {
        return Err(BallotError::MissingSecret {
            context: Some("set ARK__VAULT__MASTER_SECRET or vault.master_secret".into()),
        });
    };
    Ok(MasterSecret::from_hex(encoded)?)
}

/// Current UNIX time in seconds.
///
/// # Errors
/// Returns [`BallotError::Internal`] if the system clock is before 1970.
pub fn unix_now() -> Result<u64, BallotError> {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .map_err(|e| BallotError::Internal { message: e.to_string().into(), context: None })
}

/// Seals `vote` for `account`, producing the record committed to the ledger.
///
/// # Errors
/// Returns [`BallotError::Vault`] if encryption fails (RNG or AEAD failure).
#[instrument(
    skip(master, vote, aad),
    fields(collective = %account.collective_id, member = %account.member_id, vote_len = vote.len())
)]
pub fn seal_ballot(
    master: &MasterSecret,
    account: &AccountPair,
    vote: &str,
    aad: &[u8],
    timestamp: u64,
) -> Result<EncryptedBallot, BallotError> {
    let key = derive_key(master, &account.collective_id, &account.member_id);
    let (encrypted_vote, nonce) = encrypt(&key, vote, aad)?.into_parts();

    debug!(ciphertext_len = encrypted_vote.len(), "Ballot sealed");

    Ok(EncryptedBallot {
        user: account.member_id.clone(),
        encrypted_vote,
        nonce: nonce.as_bytes().to_vec(),
        timestamp,
    })
}

/// Opens a ballot cast by `ballot.user` in `collective_id`.
///
/// # Errors
/// * [`BallotError::Vault`] If the nonce is malformed or authentication fails.
/// * [`BallotError::MalformedVote`] If the plaintext is not UTF-8.
#[instrument(
    skip(master, ballot, aad),
    fields(member = %ballot.user, ciphertext_len = ballot.encrypted_vote.len())
)]
pub fn open_ballot(
    master: &MasterSecret,
    collective_id: &str,
    ballot: &EncryptedBallot,
    aad: &[u8],
) -> Result<DecryptedBallot, BallotError> {
    let nonce = Nonce::try_from_slice(&ballot.nonce).context("Ballot nonce")?;
    let key = derive_key(master, collective_id, &ballot.user);

    let plaintext = decrypt(&key, &nonce, &ballot.encrypted_vote, aad).inspect_err(|e| {
        warn!(kind = e.kind(), "Ballot rejected");
    })?;

    let vote = String::from_utf8(plaintext).map_err(|e| {
        e.into_bytes().zeroize();
        BallotError::MalformedVote { message: "vote is not valid UTF-8".into(), context: None }
    })?;

    debug!("Ballot opened");
    Ok(DecryptedBallot { user: ballot.user.clone(), vote })
}
