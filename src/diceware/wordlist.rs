// src/diceware/wordlist.rs
use std::collections::HashMap;
use std::path::Path;

use super::{DicewareError, Result};

/// Number of entries in a complete diceware wordlist (6^5).
pub const WORDLIST_SIZE: usize = 7776;

/// Dice rolled per word.
pub const DICE_PER_ROLL: usize = 5;

/// Total mapping from every 5-digit base-6 numeral to a word. The
/// table must be complete; an incomplete file is a configuration
/// error detected at load, never a per-roll failure.
pub struct Wordlist {
    words: HashMap<String, String>,
}

impl Wordlist {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let list = Self::parse(&content)?;
        log::info!("Loaded diceware wordlist from {}", path.display());
        Ok(list)
    }

    /// Parse `numeral word` pairs, one per line, whitespace separated.
    pub fn parse(content: &str) -> Result<Self> {
        let mut words = HashMap::with_capacity(WORDLIST_SIZE);

        for (line_no, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let mut parts = line.split_whitespace();
            let (numeral, word) = match (parts.next(), parts.next()) {
                (Some(numeral), Some(word)) => (numeral, word),
                _ => {
                    return Err(DicewareError::InvalidEntry {
                        line: line_no + 1,
                        entry: line.to_string(),
                    })
                }
            };

            if !is_valid_numeral(numeral) {
                return Err(DicewareError::InvalidEntry {
                    line: line_no + 1,
                    entry: line.to_string(),
                });
            }

            if words
                .insert(numeral.to_string(), word.to_string())
                .is_some()
            {
                return Err(DicewareError::DuplicateEntry(numeral.to_string()));
            }
        }

        if words.len() != WORDLIST_SIZE {
            return Err(DicewareError::IncompleteWordlist { found: words.len() });
        }

        Ok(Self { words })
    }

    /// Look up the word for a numeral. Completeness is checked at
    /// parse, so a miss here indicates a corrupted table.
    pub fn word(&self, numeral: &str) -> Result<&str> {
        self.words
            .get(numeral)
            .map(|word| word.as_str())
            .ok_or_else(|| DicewareError::MissingEntry(numeral.to_string()))
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

fn is_valid_numeral(numeral: &str) -> bool {
    numeral.len() == DICE_PER_ROLL && numeral.chars().all(|c| ('1'..='6').contains(&c))
}

#[cfg(test)]
mod tests {
    use super::super::tests::synthetic_wordlist_content;
    use super::*;
    use anyhow::Result;
    use std::io::Write;

    #[test]
    fn parse_complete_wordlist() -> Result<()> {
        let wordlist = Wordlist::parse(&synthetic_wordlist_content())?;
        assert_eq!(WORDLIST_SIZE, wordlist.len());
        assert_eq!("w11111", wordlist.word("11111")?);
        assert_eq!("w66666", wordlist.word("66666")?);
        Ok(())
    }

    #[test]
    fn parse_rejects_incomplete_wordlist() {
        let result = Wordlist::parse("11111 abacus\n11112 abdomen\n");
        assert!(matches!(
            result,
            Err(DicewareError::IncompleteWordlist { found: 2 })
        ));
    }

    #[test]
    fn parse_rejects_bad_numerals() {
        // digit out of the 1-6 range
        assert!(matches!(
            Wordlist::parse("11117 abacus\n"),
            Err(DicewareError::InvalidEntry { line: 1, .. })
        ));
        // wrong digit count
        assert!(matches!(
            Wordlist::parse("1111 abacus\n"),
            Err(DicewareError::InvalidEntry { line: 1, .. })
        ));
        // missing word
        assert!(matches!(
            Wordlist::parse("11111\n"),
            Err(DicewareError::InvalidEntry { line: 1, .. })
        ));
    }

    #[test]
    fn parse_rejects_duplicates() {
        let mut content = synthetic_wordlist_content();
        content.push_str("11111 again\n");
        assert!(matches!(
            Wordlist::parse(&content),
            Err(DicewareError::DuplicateEntry(n)) if n == "11111"
        ));
    }

    #[test]
    fn load_from_file() -> Result<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        file.write_all(synthetic_wordlist_content().as_bytes())?;
        let wordlist = Wordlist::load(file.path())?;
        assert_eq!(WORDLIST_SIZE, wordlist.len());
        Ok(())
    }
}
