// src/diceware/mod.rs
mod wordlist;

pub use wordlist::{Wordlist, DICE_PER_ROLL, WORDLIST_SIZE};

use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Rolls allowed per session before a clear is required.
pub const MAX_ROLLS: usize = 35;

#[derive(Debug, Error)]
pub enum DicewareError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid wordlist entry on line {line}: '{entry}'")]
    InvalidEntry { line: usize, entry: String },

    #[error("Duplicate wordlist entry for numeral {0}")]
    DuplicateEntry(String),

    #[error("Wordlist is incomplete: expected 7776 entries, found {found}")]
    IncompleteWordlist { found: usize },

    #[error("Wordlist has no entry for numeral {0}")]
    MissingEntry(String),

    #[error("You have reached the maximum limit of 35 dice rolls.")]
    RollLimitReached,
}

pub type Result<T> = std::result::Result<T, DicewareError>;

/// One roll of five dice paired with its wordlist word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceRoll {
    pub numeral: String,
    pub word: String,
}

/// Session state for dice rolling: the rolls made so far and the cap.
/// Cleared explicitly by the caller; the engine only refuses.
#[derive(Debug, Default)]
pub struct DicewareSession {
    rolls: Vec<DiceRoll>,
}

impl DicewareSession {
    pub fn new() -> Self {
        Self { rolls: Vec::new() }
    }

    /// Roll five six-sided dice and look up the resulting numeral.
    /// Refused once the session holds `MAX_ROLLS` rolls, until a clear.
    pub fn roll(&mut self, wordlist: &Wordlist, rng: &mut impl Rng) -> Result<DiceRoll> {
        if self.rolls.len() >= MAX_ROLLS {
            return Err(DicewareError::RollLimitReached);
        }

        let numeral: String = (0..DICE_PER_ROLL)
            .map(|_| (b'0' + rng.gen_range(1..=6u8)) as char)
            .collect();
        let word = wordlist.word(&numeral)?.to_string();

        let roll = DiceRoll { numeral, word };
        self.rolls.push(roll.clone());
        Ok(roll)
    }

    pub fn rolls(&self) -> &[DiceRoll] {
        &self.rolls
    }

    pub fn len(&self) -> usize {
        self.rolls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rolls.is_empty()
    }

    /// Reset the roll counter to zero.
    pub fn clear(&mut self) {
        self.rolls.clear();
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use anyhow::Result;

    /// A complete synthetic wordlist: every numeral mapped to `w<numeral>`.
    pub(crate) fn synthetic_wordlist_content() -> String {
        let mut content = String::new();
        for a in 1..=6 {
            for b in 1..=6 {
                for c in 1..=6 {
                    for d in 1..=6 {
                        for e in 1..=6 {
                            content.push_str(&format!(
                                "{a}{b}{c}{d}{e} w{a}{b}{c}{d}{e}\n"
                            ));
                        }
                    }
                }
            }
        }
        content
    }

    fn wordlist() -> Wordlist {
        Wordlist::parse(&synthetic_wordlist_content()).expect("complete wordlist")
    }

    #[test]
    fn roll_produces_valid_pairs() -> Result<()> {
        let wordlist = wordlist();
        let mut session = DicewareSession::new();
        let mut rng = rand::thread_rng();

        let roll = session.roll(&wordlist, &mut rng)?;
        assert_eq!(5, roll.numeral.len());
        assert!(roll.numeral.chars().all(|c| ('1'..='6').contains(&c)));
        assert_eq!(format!("w{}", roll.numeral), roll.word);
        assert_eq!(1, session.len());
        Ok(())
    }

    #[test]
    fn roll_limit_is_enforced() -> Result<()> {
        let wordlist = wordlist();
        let mut session = DicewareSession::new();
        let mut rng = rand::thread_rng();

        for _ in 0..MAX_ROLLS {
            session.roll(&wordlist, &mut rng)?;
        }
        assert_eq!(MAX_ROLLS, session.len());

        // 36th roll is refused, not silently performed
        assert!(matches!(
            session.roll(&wordlist, &mut rng),
            Err(DicewareError::RollLimitReached)
        ));
        assert_eq!(MAX_ROLLS, session.len());

        session.clear();
        assert!(session.is_empty());
        session.roll(&wordlist, &mut rng)?;
        assert_eq!(1, session.len());
        Ok(())
    }
}
