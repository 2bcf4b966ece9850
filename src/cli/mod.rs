// src/cli/mod.rs
use std::path::PathBuf;

use clap::Parser;

pub mod commands;
pub mod handlers;
pub mod menu;

pub use commands::CliCommand;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Use JSON output (for scripting)
    #[arg(long)]
    pub json: bool,

    /// Path to the common password list
    #[arg(long, env = "COMMON_PASSWORDS_FILE")]
    pub common_passwords: Option<PathBuf>,

    /// Path to the diceware wordlist
    #[arg(long, env = "DICEWARE_WORDLIST_FILE")]
    pub diceware_wordlist: Option<PathBuf>,

    /// Command to execute; without one the interactive menu runs
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}
