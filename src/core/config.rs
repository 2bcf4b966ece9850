// src/core/config.rs
use std::env;
use std::path::PathBuf;

use log::LevelFilter;

// Configuration for the password toolkit
#[derive(Debug, Clone)]
pub struct Config {
    // Reference data
    pub common_passwords_file: PathBuf,
    pub diceware_wordlist_file: PathBuf,

    // Password Generation
    pub passwords_per_batch: usize,
    pub default_password_length: usize,

    // Logging
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // Reference data
            common_passwords_file: PathBuf::from("./assets/common-passwords.txt"),
            diceware_wordlist_file: PathBuf::from("./assets/diceware-wordlist.txt"),

            // Password Generation
            passwords_per_batch: 4,
            default_password_length: 16,

            // Logging
            log_level: LevelFilter::Info,
        }
    }
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> Self {
        let mut config = Config::default();

        // Reference data
        if let Ok(path) = env::var("COMMON_PASSWORDS_FILE") {
            config.common_passwords_file = PathBuf::from(path);
        } else if !config.common_passwords_file.exists() {
            if let Some(fallback) = data_dir_file("common-passwords.txt") {
                config.common_passwords_file = fallback;
            }
        }

        if let Ok(path) = env::var("DICEWARE_WORDLIST_FILE") {
            config.diceware_wordlist_file = PathBuf::from(path);
        } else if !config.diceware_wordlist_file.exists() {
            if let Some(fallback) = data_dir_file("diceware-wordlist.txt") {
                config.diceware_wordlist_file = fallback;
            }
        }

        // Password Generation
        if let Ok(val) = env::var("PASSWORDS_PER_BATCH") {
            if let Ok(count) = val.parse() {
                config.passwords_per_batch = count;
            }
        }

        if let Ok(val) = env::var("DEFAULT_PASSWORD_LENGTH") {
            if let Ok(length) = val.parse() {
                config.default_password_length = length;
            }
        }

        // Logging
        if let Ok(level) = env::var("LOG_LEVEL") {
            match level.to_lowercase().as_str() {
                "error" => config.log_level = LevelFilter::Error,
                "warn" => config.log_level = LevelFilter::Warn,
                "info" => config.log_level = LevelFilter::Info,
                "debug" => config.log_level = LevelFilter::Debug,
                "trace" => config.log_level = LevelFilter::Trace,
                _ => {}
            }
        }

        config
    }
}

// Platform data-dir fallback for a reference file, used only when it
// exists there.
fn data_dir_file(name: &str) -> Option<PathBuf> {
    let path = crate::utils::get_app_data_dir()?.join(name);
    path.exists().then_some(path)
}
