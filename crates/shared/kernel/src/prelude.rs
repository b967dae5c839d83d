pub use crate::ballot::{
    BallotError, BallotErrorExt, open_ballot, resolve_master_secret, seal_ballot, unix_now,
};
pub use crate::config::{ConfigError, ConfigErrorExt, load_config};
pub use ark_domain::config::ArkConfig;
pub use ark_domain::{AccountPair, DecryptedBallot, EncryptedBallot};
pub use ark_vault::MasterSecret;
