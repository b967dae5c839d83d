use ark_kernel::prelude::*;
use tracing::info;

/// Seals `vote` for the given member and prints the ballot record.
///
/// # Errors
/// Fails when no master secret is configured or sealing fails.
pub fn seal_vote(
    config: &ArkConfig,
    account: &AccountPair,
    vote: &str,
    timestamp: Option<u64>,
    aad: Option<&str>,
) -> anyhow::Result<()> {
    let master = resolve_master_secret(&config.vault)?;
    let timestamp = match timestamp {
        Some(ts) => ts,
        None => unix_now()?,
    };

    let ballot = seal_ballot(&master, account, vote, aad.unwrap_or_default().as_bytes(), timestamp)?;
    info!(member = %account.member_id, timestamp, "Vote sealed");

    super::emit(&ballot)
}
