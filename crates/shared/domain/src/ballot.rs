//! Ballot records as they travel to and from the ledger.
//!
//! Field names follow the ledger payload format, so these types serialize directly into
//! the JSON a contract call expects.

use serde::{Deserialize, Serialize};

/// A sealed vote, ready to be committed publicly.
///
/// Byte fields are hex strings on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncryptedBallot {
    /// Member account that cast the vote.
    pub user: String,
    /// AES-256-GCM ciphertext with the 16-byte tag appended.
    #[serde(with = "hex")]
    pub encrypted_vote: Vec<u8>,
    /// 12-byte nonce used for `encrypted_vote`.
    #[serde(with = "hex")]
    pub nonce: Vec<u8>,
    /// UNIX time in seconds at which the ballot was sealed.
    pub timestamp: u64,
}

/// A vote recovered from an [`EncryptedBallot`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecryptedBallot {
    pub user: String,
    pub vote: String,
}
