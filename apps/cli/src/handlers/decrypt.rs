use anyhow::Context;
use ark_kernel::prelude::*;
use tracing::info;

/// Opens a sealed vote given as hex and prints the result.
///
/// # Errors
/// Fails on malformed hex, a missing master secret, or when the ciphertext does not
/// authenticate for this member.
pub fn open_vote(
    config: &ArkConfig,
    account: &AccountPair,
    ciphertext: &str,
    nonce: &str,
    aad: Option<&str>,
) -> anyhow::Result<()> {
    let encrypted_vote = hex::decode(ciphertext.trim()).context("Ciphertext is not valid hex")?;
    let nonce = hex::decode(nonce.trim()).context("Nonce is not valid hex")?;
    let master = resolve_master_secret(&config.vault)?;

    let ballot =
        EncryptedBallot { user: account.member_id.clone(), encrypted_vote, nonce, timestamp: 0 };
    let opened = open_ballot(
        &master,
        &account.collective_id,
        &ballot,
        aad.unwrap_or_default().as_bytes(),
    )?;
    info!(member = %opened.user, "Vote opened");

    super::emit(&opened)
}
