//! # Domain Models
//!
//! This crate contains pure domain types with minimal dependencies (`serde`, `hex`).
//! Keep it lean: no I/O, no cryptography, no heavy logic. Just data and simple helpers.

pub mod ballot;
pub mod config;
pub mod identity;

pub use ballot::{DecryptedBallot, EncryptedBallot};
pub use identity::AccountPair;
