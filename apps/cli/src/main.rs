#![allow(clippy::print_stdout)]

pub mod handlers;
pub mod models;
pub mod services;

use crate::handlers::{decrypt, encrypt};
use crate::models::args::{Cli, Commands};
use crate::services::logging::init_logging;

use anyhow::Result;
use ark_kernel::prelude::*;
use clap::Parser;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config: ArkConfig = load_config(cli.config.as_deref())?;
    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }
    if cli.json_logs {
        config.logging.json = true;
    }

    let _logger = init_logging(&config.logging)?;

    match cli.command {
        Commands::Encrypt { account, vote, timestamp, aad } => {
            let account = AccountPair::new(account.collective, account.member);
            encrypt::seal_vote(&config, &account, &vote, timestamp, aad.as_deref())?;
        },
        Commands::Decrypt { account, ciphertext, nonce, aad } => {
            let account = AccountPair::new(account.collective, account.member);
            decrypt::open_vote(&config, &account, &ciphertext, &nonce, aad.as_deref())?;
        },
    }

    Ok(())
}
