//! Kernel services shared by the applications.
//! Keep this crate lightweight: layered config loading plus the ballot service that connects
//! the domain records to the vault.
//!
//! ## Sealing a ballot
//! ```rust
//! use ark_kernel::prelude::*;
//!
//! let master = MasterSecret::new(b"shared-secret".to_vec());
//! let account = AccountPair::new("dao.testnet", "alice.testnet");
//!
//! let ballot = seal_ballot(&master, &account, "yes", &[], 1_700_000_000).unwrap();
//! let opened = open_ballot(&master, "dao.testnet", &ballot, &[]).unwrap();
//! assert_eq!(opened.vote, "yes");
//! ```
//!
//! ## Config loading
//! ```rust,no_run
//! use ark_kernel::config::load_config;
//! use ark_kernel::domain::config::ArkConfig;
//!
//! let cfg: ArkConfig = load_config(Some(std::path::Path::new("ark.toml"))).unwrap();
//! ```

pub mod ballot;
pub mod config;
pub mod prelude;

pub use ark_domain as domain;
pub use ark_vault as vault;
