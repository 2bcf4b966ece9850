use std::path::Path;

use anyhow::Context;
use clap::Parser;

mod charset;
mod cli;
mod core;
mod diceware;
mod generators;
mod models;
mod sentence;
mod strength;
mod utils;

use crate::charset::{CharSet, ALL_SETS};
use crate::cli::{Args, CliCommand};
use crate::core::config::Config;
use crate::diceware::Wordlist;
use crate::strength::CommonPasswordList;

fn main() -> anyhow::Result<()> {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    let args = Args::parse();

    let mut config = Config::load();
    if let Some(path) = &args.common_passwords {
        config.common_passwords_file = path.clone();
    }
    if let Some(path) = &args.diceware_wordlist {
        config.diceware_wordlist_file = path.clone();
    }

    env_logger::Builder::new()
        .filter_level(config.log_level)
        .format_timestamp_secs()
        .parse_default_env()
        .init();

    log::info!("🔐 Starting Passcraft - password generation and strength toolkit");
    log::debug!("Config: {:?}", config);

    match args.command {
        Some(CliCommand::Generate {
            length,
            lowercase,
            uppercase,
            digits,
            punctuation,
        }) => {
            let sets = selected_sets(lowercase, uppercase, digits, punctuation);
            let length =
                length.unwrap_or_else(|| config.default_password_length.to_string());
            cli::handlers::handle_generate(
                &length,
                &sets,
                config.passwords_per_batch,
                args.json,
            )
        }
        Some(CliCommand::Strength { password }) => {
            let common = load_common_passwords(&config)?;
            cli::handlers::handle_strength(&password, &common, args.json)
        }
        Some(CliCommand::Diceware { rolls }) => {
            let wordlist = load_diceware_wordlist(&config)?;
            cli::handlers::handle_diceware(rolls, &wordlist, args.json)
        }
        Some(CliCommand::Sentence { sentence }) => {
            cli::handlers::handle_sentence(&sentence, args.json)
        }
        None => {
            // Interactive menu: both reference files load up front, and
            // an incomplete diceware table aborts startup.
            let common = load_common_passwords(&config)?;
            let wordlist = load_diceware_wordlist(&config)?;
            cli::menu::run_cli_menu(&config, &common, &wordlist)
        }
    }
}

// CLI flags mirror the original's checkboxes: with none given, all
// four classes are enabled.
fn selected_sets(lowercase: bool, uppercase: bool, digits: bool, punctuation: bool) -> Vec<CharSet> {
    let flags = [lowercase, uppercase, digits, punctuation];
    if flags.iter().any(|enabled| *enabled) {
        ALL_SETS
            .into_iter()
            .zip(flags)
            .filter(|(_, enabled)| *enabled)
            .map(|(set, _)| set)
            .collect()
    } else {
        ALL_SETS.to_vec()
    }
}

fn load_common_passwords(config: &Config) -> anyhow::Result<CommonPasswordList> {
    CommonPasswordList::load(&config.common_passwords_file).with_context(|| {
        format!(
            "Failed to load common password list from {}",
            config.common_passwords_file.display()
        )
    })
}

fn load_diceware_wordlist(config: &Config) -> anyhow::Result<Wordlist> {
    Wordlist::load(&config.diceware_wordlist_file).with_context(|| {
        format!(
            "Failed to load diceware wordlist from {}",
            config.diceware_wordlist_file.display()
        )
    })
}
