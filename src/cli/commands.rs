// src/cli/commands.rs
use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Generate randomized passwords
    Generate {
        /// Number of characters (4 to 100)
        #[arg(long, short)]
        length: Option<String>,

        /// Include lowercase letters
        #[arg(long)]
        lowercase: bool,

        /// Include uppercase letters
        #[arg(long)]
        uppercase: bool,

        /// Include digits
        #[arg(long)]
        digits: bool,

        /// Include punctuation
        #[arg(long)]
        punctuation: bool,
    },

    /// Check the strength of a password
    Strength {
        /// Password to check
        password: String,
    },

    /// Roll virtual dice against the diceware wordlist
    Diceware {
        /// Number of rolls (at most 35 per session)
        #[arg(long, default_value_t = 1)]
        rolls: usize,
    },

    /// Derive a password from a sentence
    Sentence {
        /// The sentence to derive from
        sentence: String,
    },
}
