//! # CLI Argument Definitions
//!
//! Command-line structure of the `ark` binary, built with the `clap` derive API.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// The main CLI structure parsing command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "ark")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Seal and open per-member ballots with keys derived from a shared master secret")]
pub struct Cli {
    /// Configuration file (TOML, JSON or YAML). `ARK__*` environment variables override it.
    #[arg(long, short, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Minimum log level written to stderr (trace, debug, info, warn, error, off)
    #[arg(long, global = true, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Write log events to stderr as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Seal a vote and print the ballot record as JSON
    Encrypt {
        #[command(flatten)]
        account: AccountArgs,
        /// Vote to seal (any text)
        #[arg(long)]
        vote: String,
        /// UNIX timestamp in seconds (defaults to now)
        #[arg(long)]
        timestamp: Option<u64>,
        /// Associated data bound to the ciphertext, e.g. a proposal id
        #[arg(long)]
        aad: Option<String>,
    },
    /// Open a sealed vote and print it as JSON
    Decrypt {
        #[command(flatten)]
        account: AccountArgs,
        /// Hex-encoded ciphertext with the tag appended
        #[arg(long, value_name = "HEX")]
        ciphertext: String,
        /// Hex-encoded 12-byte nonce
        #[arg(long, value_name = "HEX")]
        nonce: String,
        /// Associated data given when the vote was sealed
        #[arg(long)]
        aad: Option<String>,
    },
}

/// Identity pair the key is derived for.
#[derive(Debug, Args)]
pub struct AccountArgs {
    /// Collective (DAO) account id
    #[arg(long)]
    pub collective: String,
    /// Member account id
    #[arg(long)]
    pub member: String,
}
