// src/charset.rs
use serde::{Deserialize, Serialize};

const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &str = "0123456789";
// The 32 standard ASCII punctuation characters.
const PUNCTUATION: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// The four selectable character classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CharSet {
    Lowercase,
    Uppercase,
    Digit,
    Punctuation,
}

/// All classes in registry order.
pub const ALL_SETS: [CharSet; 4] = [
    CharSet::Lowercase,
    CharSet::Uppercase,
    CharSet::Digit,
    CharSet::Punctuation,
];

impl CharSet {
    /// The fixed, ordered member characters of this class.
    pub fn members(&self) -> &'static str {
        match self {
            CharSet::Lowercase => LOWERCASE,
            CharSet::Uppercase => UPPERCASE,
            CharSet::Digit => DIGITS,
            CharSet::Punctuation => PUNCTUATION,
        }
    }

    /// Name used in user-facing messages.
    pub fn name(&self) -> &'static str {
        match self {
            CharSet::Lowercase => "lowercase letters",
            CharSet::Uppercase => "uppercase letters",
            CharSet::Digit => "digits",
            CharSet::Punctuation => "punctuation",
        }
    }

    pub fn contains(&self, c: char) -> bool {
        self.members().contains(c)
    }

    /// Classify a character into its class, if it belongs to one.
    /// Classes are disjoint so at most one matches.
    pub fn classify(c: char) -> Option<CharSet> {
        ALL_SETS.into_iter().find(|set| set.contains(c))
    }
}

impl std::fmt::Display for CharSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
