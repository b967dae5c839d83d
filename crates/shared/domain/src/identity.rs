use serde::{Deserialize, Serialize};
use std::fmt;

/// The identity a derived key is bound to: a member inside a collective.
///
/// Both ids are free-form UTF-8 (typically ledger account names such as `dao.testnet`).
/// Empty ids are valid.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccountPair {
    pub collective_id: String,
    pub member_id: String,
}

impl AccountPair {
    #[must_use]
    pub fn new(collective_id: impl Into<String>, member_id: impl Into<String>) -> Self {
        Self { collective_id: collective_id.into(), member_id: member_id.into() }
    }
}

impl fmt::Display for AccountPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.member_id, self.collective_id)
    }
}
