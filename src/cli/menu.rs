// src/cli/menu.rs
use anyhow::Result;
use console::style;
use inquire::{Confirm, MultiSelect, Select, Text};

use crate::charset::ALL_SETS;
use crate::core::config::Config;
use crate::diceware::{DicewareError, DicewareSession, Wordlist, MAX_ROLLS};
use crate::generators::{validate, PasswordGenerator};
use crate::sentence;
use crate::strength::{evaluate, CommonPasswordList, Evaluation};

const GENERATE: &str = "Generate passwords";
const STRENGTH: &str = "Check password strength";
const DICEWARE: &str = "Roll diceware";
const SENTENCE: &str = "Derive from a sentence";
const EXIT: &str = "Exit";

pub fn run_cli_menu(
    config: &Config,
    common: &CommonPasswordList,
    wordlist: &Wordlist,
) -> Result<()> {
    println!("🔐 Welcome to");
    println!("╔══════════════════════════════════════╗");
    println!("║            🔐 PASSCRAFT              ║");
    println!("╚══════════════════════════════════════╝");

    let mut dice_session = DicewareSession::new();

    loop {
        let choice = Select::new(
            "What would you like to do?",
            vec![GENERATE, STRENGTH, DICEWARE, SENTENCE, EXIT],
        )
        .prompt()?;

        match choice {
            GENERATE => generate_menu(config)?,
            STRENGTH => strength_menu(common)?,
            DICEWARE => diceware_menu(wordlist, &mut dice_session)?,
            SENTENCE => sentence_menu()?,
            _ => {
                println!("👋 Goodbye!");
                return Ok(());
            }
        }
    }
}

fn generate_menu(config: &Config) -> Result<()> {
    let length_input = Text::new("Number of characters (4 to 100):")
        .with_default(&config.default_password_length.to_string())
        .prompt()?;

    // All four classes start selected, matching the original's checkboxes.
    let sets = MultiSelect::new("Character sets:", ALL_SETS.to_vec())
        .with_default(&[0, 1, 2, 3])
        .prompt()?;

    match validate(&length_input, &sets) {
        Ok(request) => {
            let generator = PasswordGenerator::new();
            let mut rng = rand::thread_rng();
            println!("Length: {}", request.normalized_length);
            for password in generator.generate_batch(&request, config.passwords_per_batch, &mut rng)
            {
                println!("  {}", style(password).green());
            }
        }
        Err(e) => println!("❌ {}", e),
    }
    Ok(())
}

fn strength_menu(common: &CommonPasswordList) -> Result<()> {
    let password = Text::new("Password to check:").prompt()?;

    match evaluate(&password, common) {
        Evaluation::EmptyInput => println!("{}", crate::strength::EMPTY_INPUT_PROMPT),
        Evaluation::Report(report) => {
            for message in report.messages() {
                println!("  {}", message);
            }
        }
    }
    Ok(())
}

fn diceware_menu(wordlist: &Wordlist, session: &mut DicewareSession) -> Result<()> {
    loop {
        let choice = Select::new(
            &format!("Diceware ({}/{} rolls):", session.len(), MAX_ROLLS),
            vec!["Roll dice", "Clear", "Back"],
        )
        .prompt()?;

        match choice {
            "Roll dice" => match session.roll(wordlist, &mut rand::thread_rng()) {
                Ok(roll) => println!("  🎲 {}  {}", roll.numeral, style(&roll.word).cyan()),
                Err(DicewareError::RollLimitReached) => {
                    let clear = Confirm::new(
                        "You have reached the maximum limit of 35 dice rolls. Do you want to clear the screen?",
                    )
                    .with_default(true)
                    .prompt()?;
                    if clear {
                        session.clear();
                    }
                }
                Err(e) => return Err(e.into()),
            },
            "Clear" => session.clear(),
            _ => return Ok(()),
        }
    }
}

fn sentence_menu() -> Result<()> {
    let input = Text::new("Input a sentence:").prompt()?;

    for (c, significant) in input.chars().zip(sentence::derive_highlights(&input)) {
        if significant {
            print!("{}", style(c).red().bold());
        } else {
            print!("{}", c);
        }
    }
    println!();
    println!("Derived password: {}", sentence::extract(&input));
    Ok(())
}
