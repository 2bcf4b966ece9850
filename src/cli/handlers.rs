// src/cli/handlers.rs
use anyhow::Result;
use console::style;

use crate::charset::CharSet;
use crate::diceware::{DicewareError, DicewareSession, Wordlist};
use crate::generators::{validate, PasswordGenerator};
use crate::models::{
    DicewareResponse, GenerationResponse, SentenceResponse, StrengthResponse,
};
use crate::sentence;
use crate::strength::{evaluate, CommonPasswordList, Evaluation};

// Handlers for CLI commands

pub fn handle_generate(
    length_input: &str,
    sets: &[CharSet],
    count: usize,
    json: bool,
) -> Result<()> {
    let response = match validate(length_input, sets) {
        Ok(request) => {
            let generator = PasswordGenerator::new();
            let mut rng = rand::thread_rng();
            let passwords = generator.generate_batch(&request, count, &mut rng);
            GenerationResponse {
                success: true,
                normalized_length: Some(request.normalized_length),
                passwords,
                error: None,
            }
        }
        Err(e) => {
            log::debug!("Generation request rejected: {:?}", e);
            GenerationResponse {
                success: false,
                normalized_length: None,
                passwords: Vec::new(),
                error: Some(e.to_string()),
            }
        }
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    match response.error {
        Some(error) => println!("{}", error),
        None => {
            for password in &response.passwords {
                println!("{}", password);
            }
        }
    }
    Ok(())
}

pub fn handle_strength(password: &str, common: &CommonPasswordList, json: bool) -> Result<()> {
    let evaluation = evaluate(password, common);
    let response = StrengthResponse {
        success: true,
        messages: evaluation.messages(),
        empty_input: matches!(evaluation, Evaluation::EmptyInput),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    for message in &response.messages {
        println!("{}", message);
    }
    Ok(())
}

pub fn handle_diceware(rolls: usize, wordlist: &Wordlist, json: bool) -> Result<()> {
    let mut session = DicewareSession::new();
    let mut rng = rand::thread_rng();
    let mut error = None;

    for _ in 0..rolls {
        match session.roll(wordlist, &mut rng) {
            Ok(_) => {}
            Err(e @ DicewareError::RollLimitReached) => {
                error = Some(e.to_string());
                break;
            }
            Err(e) => return Err(e.into()),
        }
    }

    let response = DicewareResponse {
        success: error.is_none(),
        roll_count: session.len(),
        rolls: session.rolls().to_vec(),
        error,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    for roll in &response.rolls {
        println!("{}  {}", roll.numeral, roll.word);
    }
    if let Some(error) = &response.error {
        println!("{}", error);
    }
    Ok(())
}

pub fn handle_sentence(input: &str, json: bool) -> Result<()> {
    let response = SentenceResponse {
        sentence: input.to_string(),
        highlights: sentence::derive_highlights(input),
        derived: sentence::extract(input),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    print_highlighted(&response);
    println!("Derived password: {}", response.derived);
    Ok(())
}

// Render the sentence with significant characters in red, the way the
// original emphasizes them.
fn print_highlighted(response: &SentenceResponse) {
    for (c, significant) in response.sentence.chars().zip(&response.highlights) {
        if *significant {
            print!("{}", style(c).red().bold());
        } else {
            print!("{}", c);
        }
    }
    println!();
}
